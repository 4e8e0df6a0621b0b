//! Math utility functions.

use euclid::{default::Vector2D, Angle};

use crate::Component;

/// A position on the hue/saturation plane of the color wheel.
pub type Vector = Vector2D<Component>;

/// Threshold below which a difference is treated as zero.
pub const EPSILON: Component = 1.0e-4;

/// Returns true if the value is within [`EPSILON`] of zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < EPSILON
}

/// Wrap a hue in degrees into [0..360).
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// The shortest distance between two hues around the circle.
pub fn hue_distance(a: Component, b: Component) -> Component {
    let diff = (a - b).abs();
    diff.min(360.0 - diff)
}

/// Round to the nearest integer, ties to even, and saturate into a channel.
pub fn to_channel(value: Component) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Round a fraction in [0..1] to the nearest integer percentage.
pub fn to_percent(fraction: Component) -> u8 {
    (fraction * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

/// Place a hue (degrees) and saturation (radius) on the wheel plane.
pub fn polar_to_cartesian(hue: Component, saturation: Component) -> Vector {
    Vector::from_angle_and_length(Angle::degrees(hue), saturation)
}

/// Return the angle of the vector in degrees, in (-180..180].
pub fn angle_of(v: Vector) -> Component {
    v.y.atan2(v.x).to_degrees()
}
