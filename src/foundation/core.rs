pub use kurbo::{Point, Rect, Vec2};

/// Side length of the square pictograph scene, in scene units.
pub const SCENE_SIZE: f64 = 950.0;

/// Normalize an angle in degrees to `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs.
    if d >= 360.0 { 0.0 } else { d }
}

/// Build a [`Vec2`] from a stored `[dx, dy]` pair.
pub fn vec_from_pair(pair: [f64; 2]) -> Vec2 {
    Vec2::new(pair[0], pair[1])
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
