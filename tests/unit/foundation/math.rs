use super::*;

#[test]
fn quarter_turn_cw_maps_screen_axes() {
    // y grows downward: right -> down -> left -> up.
    assert_eq!(quarter_turn_cw(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0));
    assert_eq!(quarter_turn_cw(Vec2::new(0.0, 1.0)), Vec2::new(-1.0, 0.0));
}

#[test]
fn four_quarter_turns_close_the_loop() {
    let v = Vec2::new(12.5, -7.0);
    assert_eq!(rotate_quarter_turns(v, 4), v);
    assert_eq!(rotate_quarter_turns(v, 0), v);
    assert_eq!(rotate_quarter_turns(v, -1), rotate_quarter_turns(v, 3));
}

#[test]
fn anti_diagonal_reflection_is_an_involution() {
    let v = Vec2::new(20.0, 5.0);
    assert_eq!(reflect_anti_diagonal(v), Vec2::new(-5.0, -20.0));
    assert_eq!(reflect_anti_diagonal(reflect_anti_diagonal(v)), v);
}
