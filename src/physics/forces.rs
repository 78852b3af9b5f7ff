use crate::math::Vec2;

use super::params::SimParams;

/// Velocity contribution pushing a body away from the pointer.
///
/// Linear falloff: full strength with the pointer at the body center, zero at
/// `repel_radius` and beyond. A pointer exactly on the center has no usable
/// direction and contributes nothing that frame.
pub fn repulsion(body_pos: Vec2, pointer: Vec2, params: &SimParams) -> Vec2 {
    let away = body_pos - pointer;
    let dist = away.length();
    if dist >= params.repel_radius {
        return Vec2::zero();
    }
    let falloff = 1.0 - dist / params.repel_radius;
    away.normalize() * (falloff * params.repel_strength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_and_beyond_radius() {
        let params = SimParams::default();
        let body = Vec2::new(0.0, 0.0);
        let at_rim = Vec2::new(params.repel_radius, 0.0);
        assert_eq!(repulsion(body, at_rim, &params), Vec2::zero());
        let outside = Vec2::new(params.repel_radius + 1.0, 0.0);
        assert_eq!(repulsion(body, outside, &params), Vec2::zero());
    }

    #[test]
    fn pushes_directly_away_and_grows_with_penetration() {
        let params = SimParams::default();
        let body = Vec2::new(100.0, 100.0);
        let near = repulsion(body, Vec2::new(90.0, 100.0), &params);
        let far = repulsion(body, Vec2::new(20.0, 100.0), &params);
        assert!(near.x > 0.0 && near.y == 0.0);
        assert!(near.x > far.x);
    }

    #[test]
    fn coincident_pointer_contributes_nothing() {
        let params = SimParams::default();
        let p = Vec2::new(50.0, 50.0);
        assert_eq!(repulsion(p, p, &params), Vec2::zero());
    }
}
