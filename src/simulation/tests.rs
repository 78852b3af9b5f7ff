use super::*;
use crate::math::Vec2;

fn field_1000x800() -> PlayfieldCore {
    PlayfieldCore::new(1000.0, 800.0)
}

#[test]
fn edge_bounce_clamps_and_reflects_with_restitution() {
    // Radius-20 body at (10, 400) moving left at 5 px/frame. With friction
    // disabled and no pointer, one step must clamp to x=20 and flip the
    // velocity scaled by restitution 0.8.
    let mut field = field_1000x800();
    field.params.friction = 1.0;
    let id = field.spawn_body(10.0, 400.0, 40.0, 40.0);
    field.body_mut(id).unwrap().vel.x = -5.0;

    field.step();

    let body = field.body(id).unwrap();
    assert_eq!(body.pos.x, 20.0);
    assert!((body.vel.x - 4.0).abs() < 1e-5);
    assert_eq!(body.pos.y, 400.0);
}

#[test]
fn bodies_stay_in_bounds_over_many_frames() {
    let mut field = field_1000x800();
    let ids: Vec<u32> = (0..4)
        .map(|i| field.spawn_body(100.0 + 200.0 * i as f32, 400.0, 60.0, 60.0))
        .collect();
    // Hard launches in different directions
    field.body_mut(ids[0]).unwrap().vel = Vec2::new(-40.0, 25.0);
    field.body_mut(ids[1]).unwrap().vel = Vec2::new(33.0, -48.0);
    field.body_mut(ids[2]).unwrap().vel = Vec2::new(50.0, 50.0);
    field.pointer_move(500.0, 400.0);

    for _ in 0..500 {
        field.step();
        for &id in &ids {
            let body = field.body(id).unwrap();
            assert!(body.pos.x >= body.radius && body.pos.x <= 1000.0 - body.radius);
            assert!(body.pos.y >= body.radius && body.pos.y <= 800.0 - body.radius);
        }
    }
}

#[test]
fn pointer_beyond_repel_radius_leaves_velocity_alone() {
    let mut field = field_1000x800();
    field.params.friction = 1.0;
    let id = field.spawn_body(100.0, 100.0, 40.0, 40.0);
    // Default repel radius is 150; park the pointer well outside it.
    field.pointer_move(100.0 + 300.0, 100.0);

    field.step();

    assert_eq!(field.body(id).unwrap().vel, Vec2::zero());
}

#[test]
fn separated_bodies_receive_no_collision_impulse() {
    let mut field = field_1000x800();
    field.params.friction = 1.0;
    // Radii 20 + 20 + pad 10 = 50 minimum; centers 60 apart are clear.
    let a = field.spawn_body(200.0, 400.0, 40.0, 40.0);
    let b = field.spawn_body(260.0, 400.0, 40.0, 40.0);

    field.step();

    assert_eq!(field.body(a).unwrap().vel, Vec2::zero());
    assert_eq!(field.body(b).unwrap().vel, Vec2::zero());
}

#[test]
fn overlapping_bodies_are_pushed_apart() {
    let mut field = field_1000x800();
    let a = field.spawn_body(400.0, 400.0, 40.0, 40.0);
    let b = field.spawn_body(430.0, 400.0, 40.0, 40.0);

    field.step();

    // Soft push: left body gains leftward velocity, right body rightward.
    assert!(field.body(a).unwrap().vel.x < 0.0);
    assert!(field.body(b).unwrap().vel.x > 0.0);
}

#[test]
fn drag_release_throws_with_clamped_pointer_delta() {
    let mut field = field_1000x800();
    let id = field.spawn_body(500.0, 400.0, 40.0, 40.0);

    assert_eq!(field.pointer_down(500.0, 400.0), Some(id));
    assert!(field.body(id).unwrap().dragging);
    assert_eq!(field.body(id).unwrap().vel, Vec2::zero());

    // A violent 400x30 px move in one event: x clamps to max_throw=50.
    field.pointer_move(900.0, 430.0);
    let body = field.body(id).unwrap();
    assert_eq!(body.vel, Vec2::new(50.0, 30.0));
    assert_eq!(body.pos, Vec2::new(900.0, 430.0));

    field.pointer_up();
    let body = field.body(id).unwrap();
    assert!(!body.dragging);
    assert_eq!(body.vel, Vec2::new(50.0, 30.0));
}

#[test]
fn dragged_body_ignores_repulsion_and_integration() {
    let mut field = field_1000x800();
    let id = field.spawn_body(500.0, 400.0, 40.0, 40.0);
    field.pointer_down(500.0, 400.0);
    field.pointer_move(510.0, 400.0);
    let vel_before = field.body(id).unwrap().vel;
    let pos_before = field.body(id).unwrap().pos;

    // Pointer is sitting right next to the body; a free body would be repelled.
    field.step();

    let body = field.body(id).unwrap();
    assert_eq!(body.vel, vel_before);
    assert_eq!(body.pos, pos_before);
}

#[test]
fn press_on_empty_space_grabs_nothing() {
    let mut field = field_1000x800();
    field.spawn_body(500.0, 400.0, 40.0, 40.0);

    assert_eq!(field.pointer_down(50.0, 50.0), None);
    assert_eq!(field.dragged_body(), None);
}

#[test]
fn topmost_body_wins_overlapping_hit_test() {
    let mut field = field_1000x800();
    let _bottom = field.spawn_body(500.0, 400.0, 40.0, 40.0);
    let top = field.spawn_body(505.0, 400.0, 40.0, 40.0);

    assert_eq!(field.pointer_down(505.0, 400.0), Some(top));
}

#[test]
fn drag_along_edge_does_not_accumulate_bounce() {
    let mut field = field_1000x800();
    let id = field.spawn_body(500.0, 400.0, 40.0, 40.0);
    field.pointer_down(500.0, 400.0);

    // Drag past the left edge: position clamps, velocity is the raw delta,
    // never reflected while dragging.
    field.pointer_move(-100.0, 400.0);
    field.step();

    let body = field.body(id).unwrap();
    assert_eq!(body.pos.x, body.radius);
    assert!(body.vel.x < 0.0);
}

#[test]
fn transform_buffer_carries_position_tilt_and_drag_flag() {
    let mut field = field_1000x800();
    let id = field.spawn_body(500.0, 400.0, 40.0, 40.0);
    field.body_mut(id).unwrap().vel = Vec2::new(3.0, 0.0);
    field.params.friction = 1.0;

    field.step();

    assert_eq!(field.transforms_len(), TRANSFORM_STRIDE);
    let buf = unsafe { std::slice::from_raw_parts(field.transforms_ptr(), TRANSFORM_STRIDE) };
    assert_eq!(buf[0], 503.0); // x after one integration
    assert_eq!(buf[1], 400.0);
    assert_eq!(buf[2], 0.0); // no vertical motion, no pitch
    assert!((buf[3] - 6.0).abs() < 1e-5); // vx 3 * tilt_scale 2
    assert_eq!(buf[4], 0.0); // not dragging
}

#[test]
fn render_sink_sees_every_body_once() {
    struct Recorder(Vec<u32>);
    impl RenderSink for Recorder {
        fn apply(&mut self, id: u32, _x: f32, _y: f32, _rx: f32, _ry: f32, _drag: bool) {
            self.0.push(id);
        }
    }

    let mut field = field_1000x800();
    let a = field.spawn_body(200.0, 200.0, 40.0, 40.0);
    let b = field.spawn_body(600.0, 600.0, 40.0, 40.0);
    field.step();

    let mut sink = Recorder(Vec::new());
    field.render_into(&mut sink);
    assert_eq!(sink.0, vec![a, b]);
}

#[test]
fn params_json_round_trips_through_the_core() {
    let mut field = field_1000x800();
    assert!(field.load_params_json(r#"{"restitution": 0.5}"#).is_ok());
    assert_eq!(field.params().restitution, 0.5);
    assert!(field.load_params_json("not json").is_err());
}
