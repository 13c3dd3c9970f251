use geo_types::Point;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two points given as
/// `(x = longitude, y = latitude)` in degrees.
pub fn great_circle_distance(from: Point, to: Point) -> f64 {
    let (from_lat, from_lon) = (from.y().to_radians(), from.x().to_radians());
    let (to_lat, to_lon) = (to.y().to_radians(), to.x().to_radians());

    let cos_angle = from_lat.sin() * to_lat.sin()
        + from_lat.cos() * to_lat.cos() * (from_lon - to_lon).abs().cos();

    // Rounding can push identical points just past 1.0
    EARTH_RADIUS * cos_angle.clamp(-1.0, 1.0).acos()
}
