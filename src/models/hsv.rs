//! Model a color with the HSV notation.

use crate::color::Component;

safehue_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    pub struct Hsv {
        /// The hue in degrees, in [0..360).
        hue: Component,
        /// The saturation, in [0..1].
        saturation: Component,
        /// The value (brightness), in [0..1].
        value: Component,
    }
}
