use crate::math::Vec2;

use super::PlayfieldCore;

/// Press: grab the topmost body under the pointer, kill its velocity.
///
/// Later-spawned bodies paint on top in the DOM, so the scan runs back to
/// front and the last match wins.
pub(super) fn pointer_down(core: &mut PlayfieldCore, x: f32, y: f32) -> Option<u32> {
    let point = Vec2::new(x, y);
    core.pointer = Some(point);

    let hit = core.bodies.iter().rev().find(|b| b.contains(point))?.id;
    if let Some(body) = core.body_mut(hit) {
        body.dragging = true;
        body.vel = Vec2::zero();
    }
    core.dragged = Some(hit);
    Some(hit)
}

/// Move: a dragged body rides the pointer directly, and its velocity is
/// recomputed every move as the clamped pointer delta so releasing throws it
/// with bounded speed.
pub(super) fn pointer_move(core: &mut PlayfieldCore, x: f32, y: f32) {
    let point = Vec2::new(x, y);
    let previous = core.pointer.replace(point);

    let Some(id) = core.dragged else {
        return;
    };
    let max_throw = core.params.max_throw;
    let bounds = core.bounds;
    if let Some(body) = core.body_mut(id) {
        body.vel = match previous {
            Some(prev) => (point - prev).clamp_abs(max_throw),
            None => Vec2::zero(),
        };
        // Keep the in-bounds invariant even mid-drag.
        let max_x = (bounds.x - body.radius).max(body.radius);
        let max_y = (bounds.y - body.radius).max(body.radius);
        body.pos = Vec2::new(
            point.x.clamp(body.radius, max_x),
            point.y.clamp(body.radius, max_y),
        );
    }
}

/// Release: back to free state; the last clamped delta stays as the throw.
pub(super) fn pointer_up(core: &mut PlayfieldCore) {
    if let Some(id) = core.dragged.take() {
        if let Some(body) = core.body_mut(id) {
            body.dragging = false;
        }
    }
}
