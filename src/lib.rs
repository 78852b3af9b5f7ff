//! Motif Engine - page effects for the Motif marketing site, in WASM
//!
//! Four independent effect systems behind one crate:
//! - effects/reveal    - staggered one-shot fade-up on scroll
//! - effects/cursor    - custom cursor dot + trailing outline
//! - effects/spotlight - pointer position as CSS custom properties
//! - simulation        - floating-element physics toy (drag, throw, bounce)
//!
//! All stateful logic is headless and natively tested; the DOM surface lives
//! in dom/ and the wasm facade in simulation/facade.rs.

pub mod dom;
pub mod effects;
pub mod math;
pub mod physics;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export main types
pub use physics::{Body, SimParams};
pub use simulation::{Playfield, PlayfieldCore, RenderSink, TRANSFORM_STRIDE};

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"motif engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
