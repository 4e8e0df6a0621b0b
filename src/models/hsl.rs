//! Model a color with the HSL notation.

use crate::color::Component;

safehue_macros::gen_model! {
    /// A color specified with the HSL (hue, saturation, lightness) notation.
    pub struct Hsl {
        /// The hue in degrees, in [0..360).
        hue: Component,
        /// The saturation, in [0..1].
        saturation: Component,
        /// The lightness, in [0..1].
        lightness: Component,
    }
}
