//! Floating-element physics: bodies, tuning parameters, per-frame forces.

pub mod body;
pub mod collision;
pub mod forces;
pub mod params;

pub use body::Body;
pub use params::SimParams;
