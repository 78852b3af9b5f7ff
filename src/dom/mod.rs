//! Thin DOM helpers shared by the effect wiring. Missing elements and
//! unmatched selectors degrade to empty results; the effects treat those as
//! no-ops rather than errors.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use web_sys::{Document, HtmlElement, Window};

mod attach;

pub use attach::{
    attach_cursor, attach_playfield, attach_playfield_with_params, attach_reveal,
    attach_reveal_with_plan, attach_spotlight,
};

pub fn window() -> Window {
    web_sys::window().expect("no global window")
}

pub fn document() -> Document {
    window().document().expect("no document")
}

pub fn viewport_size() -> (f32, f32) {
    let w = window();
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}

/// Does the primary input support precise pointing?
pub fn pointer_is_fine() -> bool {
    window()
        .match_media("(pointer: fine)")
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn get_el(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// All elements matching the selector; an invalid or unmatched selector
/// yields an empty vec.
pub fn select_all(selector: &str) -> Vec<HtmlElement> {
    let mut out = Vec::new();
    let Ok(list) = document().query_selector_all(selector) else {
        return out;
    };
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<HtmlElement>() {
                out.push(el);
            }
        }
    }
    out
}

pub fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    window()
        .request_animation_frame(f.as_ref().unchecked_ref())
        .expect("requestAnimationFrame failed");
}
