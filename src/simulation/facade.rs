use wasm_bindgen::prelude::*;

use super::{PlayfieldCore, TRANSFORM_STRIDE};

#[wasm_bindgen]
pub struct Playfield {
    core: PlayfieldCore,
}

#[wasm_bindgen]
impl Playfield {
    /// Create an empty playfield for the given viewport size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: PlayfieldCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(js_name = bodyCount)]
    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    /// Override tuning parameters from a JSON object
    #[wasm_bindgen(js_name = loadParams)]
    pub fn load_params(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_params_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Viewport resized
    #[wasm_bindgen(js_name = setBounds)]
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.core.set_bounds(width, height);
    }

    /// Track an element by its current center and bounding-box size.
    /// Returns the body ID.
    #[wasm_bindgen(js_name = addBody)]
    pub fn add_body(&mut self, x: f32, y: f32, width: f32, height: f32) -> u32 {
        self.core.spawn_body(x, y, width, height)
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.pointer_move(x, y);
    }

    /// Returns the grabbed body ID, or `None` when the press missed.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<u32> {
        self.core.pointer_down(x, y)
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) {
        self.core.pointer_up();
    }

    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) {
        self.core.pointer_leave();
    }

    /// Step the simulation forward one frame
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Pointer to the transform transfer buffer (for JS rendering)
    #[wasm_bindgen(js_name = transformsPtr)]
    pub fn transforms_ptr(&self) -> *const f32 {
        self.core.transforms_ptr()
    }

    /// Transfer buffer length in floats
    #[wasm_bindgen(js_name = transformsLen)]
    pub fn transforms_len(&self) -> usize {
        self.core.transforms_len()
    }

    /// Floats per body in the transfer buffer
    #[wasm_bindgen(js_name = transformStride)]
    pub fn transform_stride(&self) -> usize {
        TRANSFORM_STRIDE
    }
}
