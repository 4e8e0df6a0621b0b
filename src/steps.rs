//! Discrete brightness levels for a brightness control constrained to the
//! web-safe gamut.

use crate::{math::hue_distance, models::Hsv, Color, Component, SafetyMode};

/// Number of brightness samples taken between black and the pure color.
const SAMPLES: u32 = 100;

/// Bases with less saturation than this only get gray levels.
const GRAY_BASE_SATURATION: Component = 0.1;

/// Snapped colors with less saturation than this are compatible with any hue.
const GRAY_CANDIDATE_SATURATION: Component = 0.15;

/// Maximum hue drift (degrees) of a snapped color from the base hue.
const HUE_TOLERANCE: Component = 45.0;

/// Build the ordered brightness levels for a pure color with the given hue
/// and saturation. Index 0 is the lightest level.
///
/// Only [`SafetyMode::WebSafe`] quantizes brightness, so every other mode
/// yields an empty table.
pub fn build_step_table(hue: Component, saturation: Component, mode: SafetyMode) -> Vec<Color> {
    if mode != SafetyMode::WebSafe {
        return Vec::new();
    }

    let mut candidates: Vec<Color> = Vec::new();
    for i in 0..=SAMPLES {
        let value = i as Component / SAMPLES as Component;
        let snapped = Hsv::new(hue, saturation, value).to_color().to_web_safe();
        if !candidates.contains(&snapped) {
            candidates.push(snapped);
        }
    }

    if saturation < GRAY_BASE_SATURATION {
        candidates.retain(Color::is_achromatic);
    } else {
        candidates.retain(|candidate| {
            let hsv = candidate.to_hsv();
            hsv.saturation < GRAY_CANDIDATE_SATURATION || hue_distance(hsv.hue, hue) < HUE_TOLERANCE
        });
    }

    // Stable, so levels of equal lightness keep their sampling order.
    candidates.sort_by(|a, b| b.to_hsl().lightness.total_cmp(&a.to_hsl().lightness));
    candidates
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct StepKey {
    hue: Component,
    saturation: Component,
    mode: SafetyMode,
}

/// A cached step table, owned by a single brightness control.
///
/// The table is rebuilt wholesale whenever the base hue, base saturation or
/// mode changes and is never patched in place.
#[derive(Clone, Debug, Default)]
pub struct StepTable {
    key: Option<StepKey>,
    steps: Vec<Color>,
}

impl StepTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure the table matches the given base color and mode. Returns
    /// true if the table was rebuilt.
    pub fn update(&mut self, hue: Component, saturation: Component, mode: SafetyMode) -> bool {
        let key = StepKey {
            hue,
            saturation,
            mode,
        };
        if self.key == Some(key) {
            return false;
        }

        self.steps = build_step_table(hue, saturation, mode);
        self.key = Some(key);
        tracing::trace!(
            hue,
            saturation,
            ?mode,
            len = self.steps.len(),
            "rebuilt step table"
        );
        true
    }

    /// The levels, lightest first.
    pub fn steps(&self) -> &[Color] {
        &self.steps
    }

    /// The number of levels.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if there are no levels, which means brightness is not
    /// quantized.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The distance in brightness between two adjacent levels, if there is
    /// more than one level.
    pub fn step(&self) -> Option<Component> {
        let last = self.last_index().filter(|&last| last > 0)?;
        Some(1.0 / last as Component)
    }

    /// Snap a brightness value in [0..1] onto the nearest level. Values are
    /// only clamped when there are fewer than two levels.
    pub fn quantize(&self, value: Component) -> Component {
        let value = value.clamp(0.0, 1.0);
        match self.last_index() {
            Some(last) if last > 0 => {
                let last = last as Component;
                (value * last).round_ties_even() / last
            }
            _ => value,
        }
    }

    /// The level shown for a brightness value in [0..1].
    pub fn color_at(&self, value: Component) -> Option<Color> {
        let last = self.last_index()?;
        let offset = (1.0 - value.clamp(0.0, 1.0)) * last as Component;
        let index = offset.round_ties_even() as usize;
        self.steps.get(index.min(last)).copied()
    }

    /// The brightness value at which the level with the given index is shown.
    pub fn value_of(&self, index: usize) -> Option<Component> {
        let last = self.last_index()?;
        if index > last {
            return None;
        }
        if last == 0 {
            return Some(1.0);
        }
        Some(1.0 - index as Component / last as Component)
    }

    fn last_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }
}
