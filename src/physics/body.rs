use crate::math::Vec2;

/// One floating page element tracked by the physics toy.
///
/// The DOM element itself is never owned here; the wiring layer keeps a
/// parallel element table indexed by `id` and only reads positions back.
pub struct Body {
    /// Stable handle, assigned at spawn, never reused
    pub id: u32,
    /// Center position (page pixels)
    pub pos: Vec2,
    /// Velocity (pixels per frame)
    pub vel: Vec2,
    /// Half extents from the element bounding box
    pub half_w: f32,
    pub half_h: f32,
    /// Circle radius used for repulsion, collision and bounds tests
    pub radius: f32,
    /// Pointer-driven: integration, repulsion and collision all skip this body
    pub dragging: bool,
}

impl Body {
    /// Create a body centered at (x, y) from an element's bounding box size.
    pub fn from_rect(id: u32, x: f32, y: f32, width: f32, height: f32) -> Self {
        let half_w = (width * 0.5).max(1.0);
        let half_h = (height * 0.5).max(1.0);
        Self {
            id,
            pos: Vec2::new(x, y),
            vel: Vec2::zero(),
            half_w,
            half_h,
            radius: half_w.max(half_h),
            dragging: false,
        }
    }

    /// Circle hit test against a page-space point.
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.pos).length_squared() <= self.radius * self.radius
    }

    /// Nudge velocity for one frame.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.vel += impulse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_comes_from_larger_half_extent() {
        let b = Body::from_rect(1, 0.0, 0.0, 80.0, 120.0);
        assert_eq!(b.radius, 60.0);
        assert_eq!(b.half_w, 40.0);
    }

    #[test]
    fn contains_uses_circle_radius() {
        let b = Body::from_rect(1, 100.0, 100.0, 40.0, 40.0);
        assert!(b.contains(Vec2::new(115.0, 100.0)));
        assert!(!b.contains(Vec2::new(121.0, 100.0)));
    }
}
