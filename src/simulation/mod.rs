//! Playfield - the floating-element physics toy
//!
//! `PlayfieldCore` owns all simulation state and is fully headless: it never
//! touches the DOM, so every rule here is exercised by native tests. The
//! wasm surface is `facade::Playfield`; the rAF driver and event listeners
//! live in `crate::dom`.
//!
//! - Per-frame step phases are in step.rs
//! - Pointer drag/throw commands are in drag.rs
//! - Transform extraction for rendering is in render.rs

use crate::math::Vec2;
use crate::physics::{Body, SimParams};

mod drag;
mod facade;
mod render;
mod step;

pub use facade::Playfield;
pub use render::{RenderSink, TRANSFORM_STRIDE};

/// The simulation state container
pub struct PlayfieldCore {
    params: SimParams,
    bodies: Vec<Body>,

    // Viewport bounds (page pixels)
    bounds: Vec2,

    // Pointer state
    pointer: Option<Vec2>,
    dragged: Option<u32>,

    // State
    frame: u64,
    next_id: u32,

    // Flat transform transfer buffer, refreshed each step
    transforms: Vec<f32>,
}

impl PlayfieldCore {
    /// Create an empty playfield for the given viewport size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            params: SimParams::default(),
            bodies: Vec::new(),
            bounds: Vec2::new(width.max(1.0), height.max(1.0)),
            pointer: None,
            dragged: None,
            frame: 0,
            next_id: 1,
            transforms: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 { self.bounds.x }

    pub fn height(&self) -> f32 { self.bounds.y }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn params(&self) -> &SimParams { &self.params }

    /// Replace tuning parameters from a JSON override object.
    pub fn load_params_json(&mut self, json: &str) -> Result<(), String> {
        self.params = SimParams::from_json(json)?;
        Ok(())
    }

    /// Viewport resized; bodies are pulled back in bounds on the next step.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(1.0), height.max(1.0));
    }

    /// Track a new element. Returns the body id.
    pub fn spawn_body(&mut self, x: f32, y: f32, width: f32, height: f32) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.bodies.push(Body::from_rect(id, x, y, width, height));
        id
    }

    pub fn body(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    fn body_mut(&mut self, id: u32) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Pointer entered or moved over the page (no button involvement).
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        drag::pointer_move(self, x, y);
    }

    /// Pointer pressed; starts a drag when it lands on a body.
    /// Returns the grabbed body id, if any.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<u32> {
        drag::pointer_down(self, x, y)
    }

    /// Pointer released; a dragged body keeps its last clamped delta as
    /// throw velocity.
    pub fn pointer_up(&mut self) {
        drag::pointer_up(self);
    }

    /// Pointer left the page; repulsion stops until it returns.
    pub fn pointer_leave(&mut self) {
        drag::pointer_up(self);
        self.pointer = None;
    }

    pub fn dragged_body(&self) -> Option<u32> {
        self.dragged
    }

    /// Advance the simulation one frame:
    /// repulsion -> pair collision -> integration -> bounds -> render buffer.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Push the current transforms into a render sink (DOM writer, test probe).
    pub fn render_into<S: RenderSink>(&self, sink: &mut S) {
        render::render_into(self, sink);
    }

    /// Transfer buffer pointer for JS-side rendering
    pub fn transforms_ptr(&self) -> *const f32 {
        self.transforms.as_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.transforms.len()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
