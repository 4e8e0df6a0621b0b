//! The state behind a brightness slider.

use crate::{
    models::Hsv, navigate::navigate_linear, steps::StepTable, Color, Component, SafetyMode,
};

/// Brightness moved by a single key press.
const KEY_STEP: Component = 0.01;

/// Brightness moved by a page key press.
const PAGE_STEP: Component = 0.1;

/// Changes smaller than this do not count as a change of value.
const VALUE_TOLERANCE: Component = 1.0e-4;

/// Keys understood by the brightness slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderKey {
    /// One step brighter.
    Up,
    /// One step darker.
    Down,
    /// One page brighter.
    PageUp,
    /// One page darker.
    PageDown,
    /// Full brightness.
    Home,
    /// Black.
    End,
}

/// The state behind a vertical brightness slider for a base (fully bright)
/// color.
#[derive(Clone, Debug)]
pub struct SliderState {
    value: Component,
    base: Color,
    mode: SafetyMode,
    table: StepTable,
    interaction_start: Option<Component>,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            value: 1.0,
            base: Color::new(255, 0, 0),
            mode: SafetyMode::default(),
            table: StepTable::new(),
            interaction_start: None,
        }
    }
}

impl SliderState {
    /// Create a fully bright red slider.
    pub fn new() -> Self {
        Self::default()
    }

    /// The brightness, in [0..1].
    pub fn value(&self) -> Component {
        self.value
    }

    /// The fully bright color the slider darkens.
    pub fn base(&self) -> Color {
        self.base
    }

    /// The gamut selected colors are constrained to.
    pub fn mode(&self) -> SafetyMode {
        self.mode
    }

    /// The discrete levels, only populated in web-safe mode.
    pub fn steps(&self) -> &StepTable {
        &self.table
    }

    /// Set the brightness. The value is clamped to [0..1] and, when levels
    /// are in effect, snapped onto the nearest level. Returns true if the
    /// value changed.
    pub fn set_value(&mut self, value: Component) -> bool {
        let value = self.table.quantize(value);
        if (self.value - value).abs() <= VALUE_TOLERANCE {
            return false;
        }
        self.value = value;
        true
    }

    /// Change the base color. Returns true if it changed.
    pub fn set_base(&mut self, base: Color) -> bool {
        if self.base == base {
            return false;
        }
        self.base = base;
        self.refresh_steps();
        true
    }

    /// Change the gamut. Returns true if it changed.
    pub fn set_mode(&mut self, mode: SafetyMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.refresh_steps();
        true
    }

    fn refresh_steps(&mut self) {
        let hsv = self.base.to_hsv();
        if self.table.update(hsv.hue, hsv.saturation, self.mode) {
            self.set_value(self.value);
        }
    }

    /// Remember the value an interaction (a drag or a run of key presses)
    /// started from.
    pub fn begin_interaction(&mut self) {
        self.interaction_start = Some(self.value);
    }

    /// Handle a key press. A press starts an interaction if none is in
    /// progress. Returns true if the value changed.
    pub fn key(&mut self, key: SliderKey) -> bool {
        if self.interaction_start.is_none() {
            self.begin_interaction();
        }

        let (step, page) = match self.table.step() {
            Some(step) => (step, step),
            None => (KEY_STEP, PAGE_STEP),
        };

        let value = match key {
            SliderKey::Up => self.value + step,
            SliderKey::Down => self.value - step,
            SliderKey::PageUp => self.value + page,
            SliderKey::PageDown => self.value - page,
            SliderKey::Home => 1.0,
            SliderKey::End => 0.0,
        };
        self.set_value(value)
    }

    /// Finish an interaction. In print-safe mode the value is settled onto a
    /// print-safe color, searching in the direction the interaction moved.
    /// Returns true if settling changed the value.
    pub fn end_interaction(&mut self) -> bool {
        let Some(start) = self.interaction_start.take() else {
            return false;
        };
        if self.mode != SafetyMode::PrintSafe {
            return false;
        }

        let hsv = self.base.to_hsv();
        match navigate_linear(hsv.hue, hsv.saturation, self.value, start) {
            Some(settled) => self.set_value(settled.value),
            None => false,
        }
    }

    /// The color at the current brightness.
    pub fn selected_color(&self) -> Color {
        if let Some(color) = self.table.color_at(self.value) {
            return color;
        }

        let hsv = self.base.to_hsv();
        let color = Hsv::new(hsv.hue, hsv.saturation, self.value).to_color();
        if self.mode == SafetyMode::PrintSafe {
            color.to_print_safe()
        } else {
            color
        }
    }
}
