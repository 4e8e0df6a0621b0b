//! A complete picker: a hue/saturation wheel and a brightness slider kept in
//! sync around a single selected color.
//!
//! Every control owns its own state. The picker passes colors between them
//! explicitly instead of letting the controls update each other.

use crate::{
    models::Hsv, navigate::Direction, slider::SliderKey, Color, Component, Safety, SafetyMode,
    SliderState, WheelState,
};

/// The state of a color picker.
#[derive(Clone, Debug)]
pub struct Picker {
    wheel: WheelState,
    slider: SliderState,
    selected: Color,
    mode: SafetyMode,
}

impl Default for Picker {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl Picker {
    /// Create a picker with an initial selection.
    pub fn new(color: Color) -> Self {
        let mut picker = Self {
            wheel: WheelState::new(),
            slider: SliderState::new(),
            selected: color,
            mode: SafetyMode::default(),
        };
        picker.set_color(color);
        picker
    }

    /// The selected color.
    pub fn selected(&self) -> Color {
        self.selected
    }

    /// The device-safe gamuts the selected color belongs to.
    pub fn safety(&self) -> Safety {
        self.selected.safety()
    }

    /// The gamut emitted colors are constrained to.
    pub fn mode(&self) -> SafetyMode {
        self.mode
    }

    /// The hue/saturation wheel.
    pub fn wheel(&self) -> &WheelState {
        &self.wheel
    }

    /// The brightness slider.
    pub fn slider(&self) -> &SliderState {
        &self.slider
    }

    /// Select a color supplied from outside the controls and move every
    /// control to it. In print-safe mode the selection is forced into the
    /// print-safe gamut.
    pub fn set_color(&mut self, color: Color) {
        let mut color = color;
        let mut hsv = color.to_hsv();
        let mut pure = self.mode.snap(pure_color(&hsv));

        if self.mode == SafetyMode::PrintSafe && !color.is_print_safe() {
            color = color.to_print_safe();
            hsv = color.to_hsv();
            pure = pure_color(&hsv).to_print_safe();
        }

        self.selected = color;
        self.slider.set_base(pure);
        self.slider.set_value(hsv.value);
        self.wheel.set_position_color(pure);
        self.wheel.set_final_color(color);
    }

    /// Select a color typed in by the user. The color is snapped into the
    /// active gamut first.
    pub fn enter_color(&mut self, color: Color) {
        self.set_color(self.mode.snap(color));
    }

    /// Change the active gamut and snap the selection into it.
    pub fn set_mode(&mut self, mode: SafetyMode) {
        if self.mode == mode {
            return;
        }
        tracing::debug!(from = ?self.mode, to = ?mode, "changing safety mode");

        self.mode = mode;
        self.wheel.set_mode(mode);
        self.slider.set_mode(mode);
        self.set_color(mode.snap(self.selected));
    }

    /// Move the wheel selector with the keyboard. Returns true if the
    /// selection changed.
    pub fn wheel_key(&mut self, direction: Direction) -> bool {
        match self.wheel.key(direction) {
            Some(color) => {
                self.slider.set_base(color);
                self.refresh_from_controls();
                true
            }
            None => false,
        }
    }

    /// Pick a color on the wheel with a pointer at (`dx`, `dy`) from the
    /// center of a wheel with the given radius.
    pub fn wheel_pick(&mut self, dx: Component, dy: Component, radius: Component) {
        let color = self.wheel.pick(dx, dy, radius);
        self.slider.set_base(color);
        self.refresh_from_controls();
    }

    /// Press a key on the brightness slider. Returns true if the selection
    /// changed.
    pub fn slider_key(&mut self, key: SliderKey) -> bool {
        if !self.slider.key(key) {
            return false;
        }
        self.refresh_from_controls();
        true
    }

    /// Start dragging the brightness slider at a value.
    pub fn slider_press(&mut self, value: Component) {
        self.slider.begin_interaction();
        self.slider_drag(value);
    }

    /// Drag the brightness slider to a value.
    pub fn slider_drag(&mut self, value: Component) {
        if self.slider.set_value(value) {
            self.refresh_from_controls();
        }
    }

    /// Release the brightness slider, after a drag or a run of key presses.
    pub fn slider_release(&mut self) {
        if self.slider.end_interaction() {
            self.refresh_from_controls();
        }
    }

    /// Snap the selection to the web-safe gamut if it is not web-safe.
    pub fn fix_web(&mut self) {
        if !self.selected.is_web_safe() {
            self.set_color(self.selected.to_web_safe());
        }
    }

    /// Snap the selection to the print-safe gamut if it is not print-safe.
    pub fn fix_print(&mut self) {
        if !self.selected.is_print_safe() {
            self.set_color(self.selected.to_print_safe());
        }
    }

    fn refresh_from_controls(&mut self) {
        let mut color = self.slider.selected_color();
        if self.mode == SafetyMode::PrintSafe && !color.is_print_safe() {
            color = color.to_print_safe();
        }
        self.selected = color;
        self.wheel.set_final_color(color);
    }
}

fn pure_color(hsv: &Hsv) -> Color {
    Hsv::new(hsv.hue, hsv.saturation, 1.0).to_color()
}
