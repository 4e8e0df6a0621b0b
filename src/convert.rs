//! Conversions between [`Color`] and the HSV, HSL and CMYK notations.
//!
//! The conversions are deliberately not symmetric. Going from RGB to HSV or
//! HSL works in double precision and treats differences under
//! [`EPSILON`](crate::math::EPSILON) as zero, while going from HSV to RGB
//! rounds every intermediate channel to a whole number before picking the
//! channel order. Palette matching relies on these exact results, so they
//! must not be unified.
//!
//! ```rust
//! use safehue::{Color, Hsv};
//! let red = Hsv::new(0.0, 1.0, 1.0).to_color();
//! assert_eq!(red, Color::new(255, 0, 0));
//! assert_eq!(red.to_hsv(), Hsv::new(0.0, 1.0, 1.0));
//! ```

use crate::{
    color::Color,
    models::{Cmyk, Hsl, Hsv},
};

impl Color {
    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        util::rgb_to_hsv(&self.to_unit_components()).into()
    }

    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_unit_components()).into()
    }

    /// Convert this color to whole percentages of CMYK ink. Pure black is
    /// always `(0, 0, 0, 100)`.
    pub fn to_cmyk(&self) -> Cmyk {
        util::rgb_to_cmyk(&self.to_unit_components())
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to RGB. Each channel is
    /// rounded to the nearest whole number.
    pub fn to_color(&self) -> Color {
        util::hsv_to_rgb(&self.to_components())
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB.
    pub fn to_color(&self) -> Color {
        util::hsl_to_rgb(&self.to_components())
    }
}

impl Cmyk {
    /// Convert this color from CMYK ink percentages to RGB.
    pub fn to_color(&self) -> Color {
        util::cmyk_to_rgb(self)
    }
}

mod util {
    use crate::{
        color::{Color, Component, Components},
        math::{almost_zero, normalize_hue, to_channel, to_percent, EPSILON},
        models::Cmyk,
    };

    /// Select the sector formula for the channel holding the maximum. Ties
    /// are resolved in red, green, blue order. Returns the hue scaled to
    /// sixths of the circle, in [0..6).
    fn hue_sixths(from: &Components, max: Component, delta: Component) -> Component {
        let Components(red, green, blue) = *from;

        if (max - red).abs() < EPSILON {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if (max - green).abs() < EPSILON {
            (blue - red) / delta + 2.0
        } else if (max - blue).abs() < EPSILON {
            (red - green) / delta + 4.0
        } else {
            0.0
        }
    }

    fn min_max(from: &Components) -> (Component, Component) {
        let Components(red, green, blue) = *from;
        (red.min(green).min(blue), red.max(green).max(blue))
    }

    /// Convert from RGB notation to HSV notation.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let (min, max) = min_max(from);
        let delta = max - min;

        let hue = if delta < EPSILON {
            0.0
        } else {
            let Components(red, green, blue) = *from;
            if (max - red).abs() < EPSILON {
                (60.0 * ((green - blue) / delta) + 360.0) % 360.0
            } else if (max - green).abs() < EPSILON {
                (60.0 * ((blue - red) / delta) + 120.0) % 360.0
            } else if (max - blue).abs() < EPSILON {
                (60.0 * ((red - green) / delta) + 240.0) % 360.0
            } else {
                0.0
            }
        };

        let saturation = if max < EPSILON { 0.0 } else { delta / max };

        Components(hue, saturation, max)
    }

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb(from: &Components) -> Color {
        let hue = normalize_hue(from.0);
        let saturation = from.1.clamp(0.0, 1.0);
        let value = from.2.clamp(0.0, 1.0) * 255.0;

        let sector = (hue / 60.0).floor();
        let f = hue / 60.0 - sector;

        let v = to_channel(value);
        let p = to_channel(value * (1.0 - saturation));
        let q = to_channel(value * (1.0 - f * saturation));
        let t = to_channel(value * (1.0 - (1.0 - f) * saturation));

        match sector as u8 % 6 {
            0 => Color::new(v, t, p),
            1 => Color::new(q, v, p),
            2 => Color::new(p, v, t),
            3 => Color::new(p, q, v),
            4 => Color::new(t, p, v),
            _ => Color::new(v, p, q),
        }
    }

    /// Convert from RGB notation to HSL notation.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (min, max) = min_max(from);
        let lightness = (max + min) / 2.0;

        if almost_zero(max - min) {
            return Components(0.0, 0.0, lightness);
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = hue_sixths(from, max, delta) / 6.0 * 360.0;

        Components(hue, saturation, lightness)
    }

    /// Channel value for one third of the hue circle.
    fn hue_to_channel(p: Component, q: Component, t: Component) -> Component {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    /// Convert from HSL notation to RGB notation.
    pub fn hsl_to_rgb(from: &Components) -> Color {
        let hue = normalize_hue(from.0) / 360.0;
        let saturation = from.1.clamp(0.0, 1.0);
        let lightness = from.2.clamp(0.0, 1.0);

        let Components(red, green, blue) = if saturation < EPSILON {
            Components(lightness, lightness, lightness)
        } else {
            let q = if lightness < 0.5 {
                lightness * (1.0 + saturation)
            } else {
                lightness + saturation - lightness * saturation
            };
            let p = 2.0 * lightness - q;

            Components(
                hue_to_channel(p, q, hue + 1.0 / 3.0),
                hue_to_channel(p, q, hue),
                hue_to_channel(p, q, hue - 1.0 / 3.0),
            )
        };

        Color::new(
            to_channel(red * 255.0),
            to_channel(green * 255.0),
            to_channel(blue * 255.0),
        )
    }

    /// Convert from RGB notation to CMYK notation.
    pub fn rgb_to_cmyk(from: &Components) -> Cmyk {
        let Components(red, green, blue) = *from;
        let key = 1.0 - red.max(green).max(blue);

        if almost_zero(1.0 - key) {
            return Cmyk::BLACK;
        }

        let ink = |channel: Component| (1.0 - channel - key) / (1.0 - key);

        Cmyk::new(
            to_percent(ink(red)),
            to_percent(ink(green)),
            to_percent(ink(blue)),
            to_percent(key),
        )
    }

    /// Convert from CMYK notation to RGB notation.
    pub fn cmyk_to_rgb(from: &Cmyk) -> Color {
        // Single precision: which colors survive the round trip depends on
        // exactly how these products round.
        let fraction = |percent: u8| percent as f32 / 100.0;
        let key = fraction(from.key);
        let channel = |ink: u8| {
            let value = 255.0 * (1.0 - fraction(ink)) * (1.0 - key);
            to_channel(value.round_ties_even() as Component)
        };

        Color::new(
            channel(from.cyan),
            channel(from.magenta),
            channel(from.yellow),
        )
    }
}
