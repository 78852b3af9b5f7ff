use motif_engine::{Playfield, TRANSFORM_STRIDE};

#[test]
fn smoke_throw_and_settle() {
    let mut field = Playfield::new(1280.0, 720.0);
    field.add_body(300.0, 300.0, 80.0, 80.0);
    field.add_body(700.0, 400.0, 120.0, 60.0);
    assert_eq!(field.body_count(), 2);

    // Grab the first body and throw it at the left wall.
    assert!(field.pointer_down(300.0, 300.0).is_some());
    field.pointer_move(220.0, 300.0);
    field.pointer_up();
    field.pointer_leave();

    for _ in 0..300 {
        field.step();
    }

    assert_eq!(field.frame(), 300);
    assert_eq!(field.transforms_len(), 2 * TRANSFORM_STRIDE);

    // Friction has bled the throw off; both bodies are nearly at rest and
    // inside the viewport.
    let buf =
        unsafe { std::slice::from_raw_parts(field.transforms_ptr(), field.transforms_len()) };
    for chunk in buf.chunks(TRANSFORM_STRIDE) {
        let (x, y) = (chunk[0], chunk[1]);
        assert!(x > 0.0 && x < 1280.0);
        assert!(y > 0.0 && y < 720.0);
        // Tilt decays with velocity
        assert!(chunk[2].abs() < 1.0 && chunk[3].abs() < 1.0);
    }
}

#[test]
fn smoke_params_override() {
    let mut field = Playfield::new(800.0, 600.0);
    // The JsValue error path needs a JS host; the core covers the failure
    // cases natively in its own tests.
    assert!(field.load_params(r#"{"gravity": 0.5}"#.to_string()).is_ok());
}
