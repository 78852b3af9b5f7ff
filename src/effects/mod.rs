//! Standalone page effects. Each module is self-contained bookkeeping for one
//! effect; none of them depend on each other or on the physics toy.

pub mod cursor;
pub mod reveal;
pub mod spotlight;
