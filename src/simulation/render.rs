use crate::physics::{Body, SimParams};

use super::PlayfieldCore;

/// Floats per body in the transfer buffer: [x, y, rot_x, rot_y, flags]
pub const TRANSFORM_STRIDE: usize = 5;

const FLAG_DRAGGING: f32 = 1.0;

/// Receives one transform per body per frame. The DOM writer is the real
/// implementation; tests plug in a recording sink.
pub trait RenderSink {
    fn apply(&mut self, id: u32, x: f32, y: f32, rot_x: f32, rot_y: f32, dragging: bool);
}

/// Velocity-proportional cosmetic tilt in degrees: horizontal motion rolls
/// the element around Y, vertical motion pitches it around X.
fn tilt(body: &Body, params: &SimParams) -> (f32, f32) {
    let rot_x = (-body.vel.y * params.tilt_scale).clamp(-params.tilt_max, params.tilt_max);
    let rot_y = (body.vel.x * params.tilt_scale).clamp(-params.tilt_max, params.tilt_max);
    (rot_x, rot_y)
}

/// Refresh the flat transfer buffer read from JS (stride [`TRANSFORM_STRIDE`]).
pub(super) fn extract(core: &mut PlayfieldCore) {
    core.transforms.clear();
    core.transforms.reserve(core.bodies.len() * TRANSFORM_STRIDE);
    for body in &core.bodies {
        let (rot_x, rot_y) = tilt(body, &core.params);
        core.transforms.push(body.pos.x);
        core.transforms.push(body.pos.y);
        core.transforms.push(rot_x);
        core.transforms.push(rot_y);
        core.transforms
            .push(if body.dragging { FLAG_DRAGGING } else { 0.0 });
    }
}

pub(super) fn render_into<S: RenderSink>(core: &PlayfieldCore, sink: &mut S) {
    for body in &core.bodies {
        let (rot_x, rot_y) = tilt(body, &core.params);
        sink.apply(body.id, body.pos.x, body.pos.y, rot_x, rot_y, body.dragging);
    }
}
