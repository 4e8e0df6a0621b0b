//! Keyboard and pointer handling for a hue/saturation wheel.

use crate::{
    navigate::{navigate_polar, Direction, NavigationState},
    Color, Component, SafetyMode,
};

/// The state behind a hue/saturation wheel.
///
/// The wheel shows a selector at its ideal position, filled with the final
/// color (the selected color including brightness).
#[derive(Clone, Debug, PartialEq)]
pub struct WheelState {
    navigation: NavigationState,
    position_color: Color,
    final_color: Color,
    mode: SafetyMode,
}

impl Default for WheelState {
    fn default() -> Self {
        Self {
            navigation: NavigationState::default(),
            position_color: Color::WHITE,
            final_color: Color::WHITE,
            mode: SafetyMode::default(),
        }
    }
}

impl WheelState {
    /// Create a wheel positioned at the center.
    pub fn new() -> Self {
        Self::default()
    }

    /// The continuous position of the selector.
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// The fully bright color at the selector.
    pub fn position_color(&self) -> Color {
        self.position_color
    }

    /// The color shown inside the selector.
    pub fn final_color(&self) -> Color {
        self.final_color
    }

    /// The gamut picked colors are snapped to.
    pub fn mode(&self) -> SafetyMode {
        self.mode
    }

    /// Change the gamut picked colors are snapped to.
    pub fn set_mode(&mut self, mode: SafetyMode) {
        self.mode = mode;
    }

    /// Change the color shown inside the selector.
    pub fn set_final_color(&mut self, color: Color) {
        self.final_color = color;
    }

    /// Move the selector to a color supplied from outside the wheel. The
    /// ideal position is only re-seeded if the color actually changed.
    /// Returns true if it changed.
    pub fn set_position_color(&mut self, color: Color) -> bool {
        if self.position_color == color {
            return false;
        }
        self.position_color = color;
        self.navigation = NavigationState::from_color(color);
        true
    }

    /// Pick the color under a pointer at (`dx`, `dy`) from the center of a
    /// wheel with the given radius. Returns the picked color.
    pub fn pick(&mut self, dx: Component, dy: Component, radius: Component) -> Color {
        self.navigation = NavigationState::at_point(dx, dy, radius);
        self.position_color = self.mode.snap(self.navigation.pure_color());
        self.position_color
    }

    /// Move the selector one step with the keyboard. Returns the new color,
    /// or `None` if the selector could not move.
    pub fn key(&mut self, direction: Direction) -> Option<Color> {
        let moved = navigate_polar(&self.navigation, self.final_color, direction, self.mode)?;
        self.navigation = moved.state;
        self.position_color = moved.color;
        Some(moved.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, Hsv};

    #[test]
    fn external_colors_reseed_the_position() {
        let mut wheel = WheelState::new();
        assert_eq!(wheel.position_color(), Color::WHITE);
        assert_eq!(*wheel.navigation(), NavigationState::default());

        assert!(wheel.set_position_color(Color::new(0, 255, 255)));
        assert_component_eq!(wheel.navigation().ideal_hue, 180.0);
        assert_component_eq!(wheel.navigation().ideal_saturation, 1.0);

        assert!(!wheel.set_position_color(Color::new(0, 255, 255)));
    }

    #[test]
    fn picking() {
        let mut wheel = WheelState::new();
        let picked = wheel.pick(0.0, -50.0, 100.0);
        assert_eq!(picked, Hsv::new(90.0, 0.5, 1.0).to_color());
        assert_eq!(picked, Color::new(191, 255, 128));
        assert_eq!(wheel.position_color(), picked);
        assert_component_eq!(wheel.navigation().ideal_hue, 90.0);

        wheel.set_mode(SafetyMode::WebSafe);
        let picked = wheel.pick(0.0, -50.0, 100.0);
        assert_eq!(picked, Color::new(204, 255, 153));
        // The ideal position is not snapped.
        assert_component_eq!(wheel.navigation().ideal_saturation, 0.5);
    }

    #[test]
    fn keys_search_from_the_final_color() {
        let mut wheel = WheelState::new();
        wheel.set_mode(SafetyMode::WebSafe);

        assert_eq!(wheel.key(Direction::Right), Some(Color::new(255, 204, 204)));
        assert_eq!(wheel.position_color(), Color::new(255, 204, 204));
        assert_component_eq!(wheel.navigation().ideal_saturation, 0.11);
    }

    #[test]
    fn blocked_keys_leave_the_state_alone() {
        let mut wheel = WheelState::new();
        wheel.set_mode(SafetyMode::WebSafe);
        wheel.set_position_color(Color::new(255, 0, 0));
        wheel.set_final_color(Color::new(255, 0, 0));

        let before = wheel.clone();
        assert_eq!(wheel.key(Direction::Right), None);
        assert_eq!(wheel, before);
    }
}
