use nalgebra::Vector2;

/// A location on the drawing plane.
pub type Point = Vector2<f64>;

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2 - p1).norm()
}

/// Length of the chord spanning `angle_in_degrees` of a circle with the given radius.
///
/// The result is rounded to six decimal places so that chords of "nice" angles come out as
/// "nice" numbers (a 60 degree chord of a radius 5 circle is exactly 5.0, not 4.999999999999999).
pub fn chord_length(radius: f64, angle_in_degrees: f64) -> f64 {
    let angle_in_radians = angle_in_degrees.to_radians();
    let length = 2.0 * radius * (angle_in_radians / 2.0).sin();

    (length * 1e6).round() / 1e6
}

/// Wraps a heading into `[0, 360)`.
pub fn normalize_heading(degrees: f64) -> f64 {
    let heading = degrees.rem_euclid(360.0);

    // rem_euclid rounds tiny negative values up to exactly 360.
    if heading >= 360.0 {
        0.0
    } else {
        heading
    }
}

/// The rotation that takes `from` to `to` the short way round, in `(-180, 180]`.
pub fn shortest_turn(from: f64, to: f64) -> f64 {
    let turn = to - from;

    if turn > 180.0 {
        turn - 360.0
    } else if turn <= -180.0 {
        turn + 360.0
    } else {
        turn
    }
}
