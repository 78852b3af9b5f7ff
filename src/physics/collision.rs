use crate::math::Vec2;

use super::body::Body;
use super::params::SimParams;

/// Separating velocity nudge for one overlapping pair, expressed as the
/// impulse on the first body (the second receives the negation).
///
/// Soft positional correction, not a momentum-conserving response: both
/// bodies get an equal overlap-proportional push apart, which is the
/// deployed page behavior. Returns `None` when the pair is clear of
/// `r_a + r_b + collide_pad`.
pub fn separation_impulse(a: &Body, b: &Body, params: &SimParams) -> Option<Vec2> {
    let between = a.pos - b.pos;
    let dist = between.length();
    let min_dist = a.radius + b.radius + params.collide_pad;
    if dist >= min_dist {
        return None;
    }
    let overlap = min_dist - dist;
    Some(between.normalize() * (overlap * params.separation))
}
