//! Spotlight: pointer position relative to a card, exposed to CSS.
//!
//! Raw per-event values, no smoothing; the radial gradient / tilt visuals are
//! entirely the stylesheet's business.

/// Property pair used by the spotlight cards
pub const MOUSE_PROPS: (&str, &str) = ("--mouse-x", "--mouse-y");
/// Short pair used by the tilt cards
pub const SHORT_PROPS: (&str, &str) = ("--x", "--y");

/// Pointer position relative to the card's bounding box, page pixels.
pub fn relative_position(rect_left: f64, rect_top: f64, client_x: f64, client_y: f64) -> (f64, f64) {
    (client_x - rect_left, client_y - rect_top)
}

/// `px` values ready for `setProperty`.
pub fn as_px(pos: (f64, f64)) -> (String, String) {
    (format!("{}px", pos.0), format!("{}px", pos.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_relative_to_the_rect_origin() {
        assert_eq!(relative_position(100.0, 50.0, 130.0, 90.0), (30.0, 40.0));
        // Pointer left of the card yields negative offsets, passed through raw
        assert_eq!(relative_position(100.0, 50.0, 80.0, 50.0), (-20.0, 0.0));
    }

    #[test]
    fn px_formatting() {
        let (x, y) = as_px((12.5, 0.0));
        assert_eq!(x, "12.5px");
        assert_eq!(y, "0px");
    }
}
