/// Custom cursor follower: a dot that snaps to the pointer and an outline
/// that trails it through a fixed-duration animation.
///
/// Only the gating and the last pointer position live here; the trailing
/// motion itself is handed to the browser as a CSS transition on `left` and
/// `top`, retargeted by each new move.
pub struct CursorTrail {
    /// Effect is inert below this viewport width (px)
    pub breakpoint_px: f32,
    /// Outline trail animation duration (ms)
    pub duration_ms: f64,
    last: Option<(f32, f32)>,
}

impl CursorTrail {
    pub fn new(breakpoint_px: f32, duration_ms: f64) -> Self {
        Self {
            breakpoint_px,
            duration_ms,
            last: None,
        }
    }

    /// Touch layouts and narrow viewports keep the native cursor.
    pub fn should_enable(&self, viewport_width: f32, pointer_fine: bool) -> bool {
        pointer_fine && viewport_width > self.breakpoint_px
    }

    /// Record a pointer position; returns it back for the DOM writer.
    pub fn track(&mut self, x: f32, y: f32) -> (f32, f32) {
        self.last = Some((x, y));
        (x, y)
    }

    /// Inline transition for the outline element: the browser animates
    /// `left`/`top` toward each new value over the trail duration, and a new
    /// move retargets the in-flight transition instead of queuing.
    pub fn trail_transition(&self) -> String {
        format!(
            "left {ms}ms ease-out, top {ms}ms ease-out",
            ms = self.duration_ms
        )
    }

    pub fn last_position(&self) -> Option<(f32, f32)> {
        self.last
    }
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new(768.0, 500.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_on_coarse_pointers_and_narrow_viewports() {
        let trail = CursorTrail::default();
        assert!(trail.should_enable(1280.0, true));
        assert!(!trail.should_enable(1280.0, false));
        assert!(!trail.should_enable(480.0, true));
        // Exactly at the breakpoint still counts as narrow
        assert!(!trail.should_enable(768.0, true));
    }

    #[test]
    fn trail_transition_covers_both_axes_with_the_configured_duration() {
        let trail = CursorTrail::new(768.0, 500.0);
        assert_eq!(trail.trail_transition(), "left 500ms ease-out, top 500ms ease-out");
    }

    #[test]
    fn tracks_the_latest_position_only() {
        let mut trail = CursorTrail::default();
        assert_eq!(trail.last_position(), None);
        trail.track(10.0, 20.0);
        trail.track(30.0, 40.0);
        assert_eq!(trail.last_position(), Some((30.0, 40.0)));
    }
}
