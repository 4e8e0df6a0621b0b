//! Device-safe gamuts: classification and snapping of colors into the
//! web-safe and print-safe subsets of RGB.

use bitflags::bitflags;

use crate::Color;

/// Distance between two adjacent levels of the 6x6x6 web palette.
const WEB_STEP: u8 = 51;

/// How far (per channel) to look for a print-safe neighbor when a single
/// CMYK round trip does not settle.
const PRINT_SEARCH_RADIUS: i16 = 4;

bitflags! {
    /// The device-safe gamuts a [`Color`] belongs to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Safety : u8 {
        /// Every channel is a multiple of 51.
        const WEB = 1 << 0;
        /// The color survives a CMYK round trip unchanged.
        const PRINT = 1 << 1;
    }
}

/// The gamut emitted colors are constrained to. The modes are mutually
/// exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SafetyMode {
    /// Any color may be emitted.
    #[default]
    Unconstrained,
    /// Only web-safe colors may be emitted.
    WebSafe,
    /// Only print-safe colors may be emitted.
    PrintSafe,
}

impl SafetyMode {
    /// Returns true if the color may be emitted under this mode.
    pub fn admits(&self, color: Color) -> bool {
        match self {
            SafetyMode::Unconstrained => true,
            SafetyMode::WebSafe => color.is_web_safe(),
            SafetyMode::PrintSafe => color.is_print_safe(),
        }
    }

    /// Snap a color into the gamut of this mode.
    pub fn snap(&self, color: Color) -> Color {
        match self {
            SafetyMode::Unconstrained => color,
            SafetyMode::WebSafe => color.to_web_safe(),
            SafetyMode::PrintSafe => color.to_print_safe(),
        }
    }

    /// Returns true if the mode constrains emitted colors.
    pub fn is_constrained(&self) -> bool {
        !matches!(self, SafetyMode::Unconstrained)
    }
}

fn snap_to_web_step(channel: u8) -> u8 {
    ((channel as f64 / WEB_STEP as f64).round() as u8) * WEB_STEP
}

impl Color {
    /// Returns true if every channel is a multiple of 51.
    pub fn is_web_safe(&self) -> bool {
        self.r % WEB_STEP == 0 && self.g % WEB_STEP == 0 && self.b % WEB_STEP == 0
    }

    /// Round each channel independently to the nearest multiple of 51.
    pub fn to_web_safe(&self) -> Color {
        Color::new(
            snap_to_web_step(self.r),
            snap_to_web_step(self.g),
            snap_to_web_step(self.b),
        )
    }

    /// Returns true if converting the color to CMYK and back yields the same
    /// color.
    pub fn is_print_safe(&self) -> bool {
        self.to_cmyk().to_color() == *self
    }

    /// Force the color through a CMYK round trip.
    ///
    /// Whole-percent quantization means a single round trip does not always
    /// land on a print-safe color. When it does not, the closest print-safe
    /// color around the round-tripped one is returned instead.
    pub fn to_print_safe(&self) -> Color {
        let round_tripped = self.to_cmyk().to_color();
        if round_tripped.is_print_safe() {
            return round_tripped;
        }

        match nearest_print_safe(round_tripped) {
            Some(color) => color,
            None => {
                tracing::debug!(color = %self, "no print-safe neighbor found");
                round_tripped
            }
        }
    }

    /// Snap the color into the gamut of the given mode.
    pub fn to_safe(&self, mode: SafetyMode) -> Color {
        mode.snap(*self)
    }

    /// Classify the color against every device-safe gamut.
    pub fn safety(&self) -> Safety {
        let mut safety = Safety::empty();
        safety.set(Safety::WEB, self.is_web_safe());
        safety.set(Safety::PRINT, self.is_print_safe());
        safety
    }
}

fn offset(channel: u8, delta: i16) -> Option<u8> {
    u8::try_from(channel as i16 + delta).ok()
}

/// Search cube shells of growing radius around `around` and return the
/// print-safe color with the smallest squared RGB distance in the first shell
/// that has one.
fn nearest_print_safe(around: Color) -> Option<Color> {
    (1..=PRINT_SEARCH_RADIUS).find_map(|radius| {
        let mut best: Option<(i16, Color)> = None;

        for dr in -radius..=radius {
            for dg in -radius..=radius {
                for db in -radius..=radius {
                    if dr.abs() != radius && dg.abs() != radius && db.abs() != radius {
                        continue;
                    }

                    let (Some(r), Some(g), Some(b)) = (
                        offset(around.r, dr),
                        offset(around.g, dg),
                        offset(around.b, db),
                    ) else {
                        continue;
                    };

                    let candidate = Color::new(r, g, b);
                    if !candidate.is_print_safe() {
                        continue;
                    }

                    let distance = dr * dr + dg * dg + db * db;
                    if best.map_or(true, |(d, _)| distance < d) {
                        best = Some((distance, candidate));
                    }
                }
            }
        }

        best.map(|(_, color)| color)
    })
}
