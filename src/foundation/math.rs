use crate::foundation::core::Vec2;

/// Rotate `v` by one quarter turn clockwise in scene coordinates (y grows downward).
pub(crate) fn quarter_turn_cw(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Rotate `v` by `turns` quarter turns clockwise. Negative values rotate counterclockwise.
pub(crate) fn rotate_quarter_turns(v: Vec2, turns: i32) -> Vec2 {
    let mut out = v;
    for _ in 0..turns.rem_euclid(4) {
        out = quarter_turn_cw(out);
    }
    out
}

/// Reflect `v` across the anti-diagonal (`y = -x`).
pub(crate) fn reflect_anti_diagonal(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, -v.x)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
