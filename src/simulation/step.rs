use crate::physics::{collision, forces};

use super::render;
use super::PlayfieldCore;

/// One frame: repulsion -> collision -> integration -> bounds -> render buffer.
pub(super) fn step(core: &mut PlayfieldCore) {
    apply_repulsion(core);
    resolve_collisions(core);
    integrate(core);
    confine(core);
    render::extract(core);
    core.frame += 1;
}

fn apply_repulsion(core: &mut PlayfieldCore) {
    let Some(pointer) = core.pointer else {
        return;
    };
    for body in core.bodies.iter_mut() {
        if body.dragging {
            continue;
        }
        body.apply_impulse(forces::repulsion(body.pos, pointer, &core.params));
    }
}

/// O(n²) over the handful of tracked elements; a pair overlapping by less
/// than `collide_pad` is left alone, everything closer gets a soft push.
fn resolve_collisions(core: &mut PlayfieldCore) {
    for i in 0..core.bodies.len() {
        for j in (i + 1)..core.bodies.len() {
            let push = collision::separation_impulse(
                &core.bodies[i],
                &core.bodies[j],
                &core.params,
            );
            let Some(push) = push else {
                continue;
            };
            if !core.bodies[i].dragging {
                core.bodies[i].apply_impulse(push);
            }
            if !core.bodies[j].dragging {
                core.bodies[j].apply_impulse(push * -1.0);
            }
        }
    }
}

fn integrate(core: &mut PlayfieldCore) {
    for body in core.bodies.iter_mut() {
        if body.dragging {
            continue;
        }
        body.vel.y += core.params.gravity;
        body.pos += body.vel;
        body.vel = body.vel * core.params.friction;
    }
}

/// Clamp every body to `[radius, bound - radius]` per axis, reflecting
/// velocity with restitution on the crossed axis. Dragged bodies are clamped
/// without reflection so edge drags don't accumulate bounce.
fn confine(core: &mut PlayfieldCore) {
    let restitution = core.params.restitution;
    for body in core.bodies.iter_mut() {
        let min_x = body.radius;
        let max_x = (core.bounds.x - body.radius).max(min_x);
        if body.pos.x < min_x {
            body.pos.x = min_x;
            if !body.dragging {
                body.vel.x = -body.vel.x * restitution;
            }
        } else if body.pos.x > max_x {
            body.pos.x = max_x;
            if !body.dragging {
                body.vel.x = -body.vel.x * restitution;
            }
        }

        let min_y = body.radius;
        let max_y = (core.bounds.y - body.radius).max(min_y);
        if body.pos.y < min_y {
            body.pos.y = min_y;
            if !body.dragging {
                body.vel.y = -body.vel.y * restitution;
            }
        } else if body.pos.y > max_y {
            body.pos.y = max_y;
            if !body.dragging {
                body.vel.y = -body.vel.y * restitution;
            }
        }
    }
}
