//! Keyboard navigation through hue/saturation and brightness while the
//! emitted color stays inside a device-safe gamut.
//!
//! Safe gamuts are scattered, irregular subsets of RGB, so "one step to the
//! right" has no closed form. Both searches below perturb a continuous ideal
//! position in small increments and test the resulting color, giving up after
//! a fixed number of attempts. Giving up is not an error: it means the cursor
//! sits on the boundary of the gamut and the caller keeps its state.
//!
//! The ideal position is tracked separately from the emitted color. Deriving
//! it back from a snapped color would drag the cursor towards whatever the
//! snapping favors and eventually get it stuck.

use crate::{
    math::{angle_of, normalize_hue, polar_to_cartesian, Vector},
    models::Hsv,
    Color, Component, SafetyMode,
};

/// Distance moved on the wheel per key press when no gamut is enforced.
pub const WHEEL_STEP: Component = 0.05;

/// Distance moved on the wheel per search iteration.
pub const WHEEL_SEARCH_STEP: Component = 0.01;

/// Maximum number of search iterations on the wheel.
pub const WHEEL_SEARCH_LIMIT: usize = 500;

/// Brightness moved per search iteration on the slider.
pub const BRIGHTNESS_SEARCH_STEP: Component = 0.001;

/// Maximum number of search iterations on the slider.
pub const BRIGHTNESS_SEARCH_LIMIT: usize = 1000;

/// Net brightness change under which an interaction counts as no movement.
const STILL_THRESHOLD: Component = 0.001;

/// Radius under which the angle on the wheel is meaningless.
const CENTER_RADIUS: Component = 0.001;

/// A direction on the color wheel. Up is the positive y axis, right is the
/// positive x axis and hue increases counter-clockwise from the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards +y.
    Up,
    /// Towards -y.
    Down,
    /// Towards -x.
    Left,
    /// Towards +x.
    Right,
}

impl Direction {
    fn offset(&self, distance: Component) -> Vector {
        match self {
            Direction::Up => Vector::new(0.0, distance),
            Direction::Down => Vector::new(0.0, -distance),
            Direction::Left => Vector::new(-distance, 0.0),
            Direction::Right => Vector::new(distance, 0.0),
        }
    }
}

/// The continuous position a color wheel tracks, independent of the
/// (possibly snapped) color it displays.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationState {
    /// Hue in degrees, in [0..360).
    pub ideal_hue: Component,
    /// Saturation (distance from the center), in [0..1].
    pub ideal_saturation: Component,
}

impl NavigationState {
    /// Create a new state. The hue is wrapped and the saturation clamped.
    pub fn new(hue: Component, saturation: Component) -> Self {
        Self {
            ideal_hue: normalize_hue(hue),
            ideal_saturation: saturation.clamp(0.0, 1.0),
        }
    }

    /// Seed the position from a color supplied from outside the wheel.
    ///
    /// Only use this for external changes, never for colors the navigator
    /// emitted itself.
    pub fn from_color(color: Color) -> Self {
        let hsv = color.to_hsv();
        Self::new(hsv.hue, hsv.saturation)
    }

    /// The position under a pointer at (`dx`, `dy`) from the center of a
    /// wheel with the given radius. Screen y grows downwards; pointers
    /// outside the wheel are pulled onto its edge.
    pub fn at_point(dx: Component, dy: Component, radius: Component) -> Self {
        if radius <= 0.0 {
            return Self::default();
        }
        let pointer = Vector::new(dx, -dy);
        let distance = pointer.length().min(radius);
        Self::new(angle_of(pointer), distance / radius)
    }

    /// The fully bright color at this position.
    pub fn pure_color(&self) -> Color {
        Hsv::new(self.ideal_hue, self.ideal_saturation, 1.0).to_color()
    }

    fn position(&self) -> Vector {
        polar_to_cartesian(self.ideal_hue, self.ideal_saturation)
    }

    /// Move `distance` along `direction`, staying on the wheel. With
    /// `keep_hue` the hue is kept when the move lands on the center.
    fn stepped(&self, direction: Direction, distance: Component, keep_hue: bool) -> Self {
        let position = self.position() + direction.offset(distance);
        let radius = position.length();
        let ideal_hue = if keep_hue && radius <= CENTER_RADIUS {
            self.ideal_hue
        } else {
            normalize_hue(angle_of(position))
        };
        Self {
            ideal_hue,
            ideal_saturation: radius.min(1.0),
        }
    }
}

/// The result of a successful move on the wheel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarMove {
    /// The new ideal position.
    pub state: NavigationState,
    /// The color to emit.
    pub color: Color,
}

/// Move the wheel position one step in `direction`.
///
/// With no gamut enforced this always succeeds with a fixed step. Otherwise
/// the position creeps forward until the snapped color differs from `start`,
/// the color currently displayed. Returns `None`, and the caller keeps its
/// state, if no different color is found within the search limit.
pub fn navigate_polar(
    state: &NavigationState,
    start: Color,
    direction: Direction,
    mode: SafetyMode,
) -> Option<PolarMove> {
    if !mode.is_constrained() {
        let state = state.stepped(direction, WHEEL_STEP, false);
        return Some(PolarMove {
            state,
            color: state.pure_color(),
        });
    }

    let mut current = *state;
    for iteration in 0..WHEEL_SEARCH_LIMIT {
        current = current.stepped(direction, WHEEL_SEARCH_STEP, true);

        let color = mode.snap(current.pure_color());
        if color != start {
            tracing::trace!(iteration, %color, ?direction, "wheel moved");
            return Some(PolarMove {
                state: current,
                color,
            });
        }
    }

    tracing::debug!(%start, ?direction, ?mode, "wheel search exhausted");
    None
}

/// The result of settling a brightness value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMove {
    /// The new brightness value.
    pub value: Component,
    /// The print-safe color at that brightness.
    pub color: Color,
}

/// Settle a brightness value onto a print-safe color after an interaction
/// that started at `start_value`.
///
/// The search walks in the direction the user moved so the slider never
/// appears to jump backwards. Returns `None` if the color at `value` is
/// already print-safe.
pub fn navigate_linear(
    hue: Component,
    saturation: Component,
    value: Component,
    start_value: Component,
) -> Option<LinearMove> {
    let current = Hsv::new(hue, saturation, value).to_color();
    if current.is_print_safe() {
        return None;
    }

    let displacement = value - start_value;
    if displacement.abs() < STILL_THRESHOLD {
        return Some(snap_brightness(current));
    }

    let step = if displacement > 0.0 {
        BRIGHTNESS_SEARCH_STEP
    } else {
        -BRIGHTNESS_SEARCH_STEP
    };

    let mut candidate = value;
    for _ in 0..BRIGHTNESS_SEARCH_LIMIT {
        if !(0.0..=1.0).contains(&candidate) {
            break;
        }

        let color = Hsv::new(hue, saturation, candidate).to_color();
        if color.is_print_safe() {
            tracing::trace!(value = candidate, %color, "brightness settled");
            return Some(LinearMove {
                value: candidate,
                color,
            });
        }
        candidate += step;
    }

    tracing::debug!(value, start_value, "brightness search exhausted, snapping");
    Some(snap_brightness(current))
}

/// Force the color through a print-safe snap and read the brightness back.
fn snap_brightness(color: Color) -> LinearMove {
    let color = color.to_print_safe();
    LinearMove {
        value: color.to_hsv().value,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use proptest::prelude::*;

    fn step(
        state: &NavigationState,
        start: Color,
        direction: Direction,
        mode: SafetyMode,
    ) -> PolarMove {
        navigate_polar(state, start, direction, mode).unwrap()
    }

    #[test]
    fn unconstrained_moves_a_fixed_step() {
        let state = NavigationState::new(0.0, 0.5);
        let start = state.pure_color();

        let moved = step(&state, start, Direction::Right, SafetyMode::Unconstrained);
        assert_component_eq!(moved.state.ideal_hue, 0.0);
        assert_component_eq!(moved.state.ideal_saturation, 0.55);
        assert_eq!(moved.color, Color::new(255, 115, 115));

        let moved = step(&state, start, Direction::Up, SafetyMode::Unconstrained);
        assert_component_eq!(moved.state.ideal_hue, 0.05_f64.atan2(0.5).to_degrees());
        assert_component_eq!(moved.state.ideal_saturation, 0.5_f64.hypot(0.05));
        assert_eq!(moved.color, Color::new(255, 139, 127));
    }

    #[test]
    fn unconstrained_clamps_to_the_edge() {
        let state = NavigationState::new(90.0, 1.0);
        let start = state.pure_color();

        let moved = step(&state, start, Direction::Up, SafetyMode::Unconstrained);
        assert_component_eq!(moved.state.ideal_hue, 90.0);
        assert_component_eq!(moved.state.ideal_saturation, 1.0);
    }

    #[test]
    fn unconstrained_crosses_the_center() {
        let state = NavigationState::new(0.0, 0.03);
        let start = state.pure_color();

        let moved = step(&state, start, Direction::Left, SafetyMode::Unconstrained);
        assert_component_eq!(moved.state.ideal_hue, 180.0);
        assert_component_eq!(moved.state.ideal_saturation, 0.02);
    }

    #[test]
    fn unconstrained_landing_on_the_center_takes_the_angle() {
        // (0, 0.05) minus (0, 0.05) is exactly the origin, whose angle is 0.
        let state = NavigationState::new(90.0, 0.05);
        let start = state.pure_color();

        let moved = step(&state, start, Direction::Down, SafetyMode::Unconstrained);
        assert_component_eq!(moved.state.ideal_hue, 0.0);
        assert_component_eq!(moved.state.ideal_saturation, 0.0);
        assert_eq!(moved.color, Color::WHITE);
    }

    #[test]
    fn searching_onto_the_center_keeps_the_hue() {
        let state = NavigationState::new(90.0, 0.05);

        let kept = state.stepped(Direction::Down, 0.05, true);
        assert_component_eq!(kept.ideal_hue, 90.0);
        assert_component_eq!(kept.ideal_saturation, 0.0);

        let taken = state.stepped(Direction::Down, 0.05, false);
        assert_component_eq!(taken.ideal_hue, 0.0);

        // Away from the center the flag makes no difference.
        let state = NavigationState::new(90.0, 0.5);
        assert_eq!(
            state.stepped(Direction::Down, 0.05, true),
            state.stepped(Direction::Down, 0.05, false)
        );
    }

    #[test]
    fn web_safe_search_from_the_center() {
        let state = NavigationState::default();

        let moved = step(&state, Color::WHITE, Direction::Right, SafetyMode::WebSafe);
        assert_eq!(moved.color, Color::new(255, 204, 204));
        assert_component_eq!(moved.state.ideal_hue, 0.0);
        assert_component_eq!(moved.state.ideal_saturation, 0.11);

        let moved = step(&state, Color::WHITE, Direction::Up, SafetyMode::WebSafe);
        assert_eq!(moved.color, Color::new(255, 255, 204));
        assert_component_eq!(moved.state.ideal_hue, 90.0);
        assert_component_eq!(moved.state.ideal_saturation, 0.11);
    }

    #[test]
    fn web_safe_search_towards_the_center() {
        let state = NavigationState::new(0.0, 1.0);
        let red = Color::new(255, 0, 0);

        let moved = step(&state, red, Direction::Left, SafetyMode::WebSafe);
        assert_eq!(moved.color, Color::new(255, 51, 51));
        assert_component_eq!(moved.state.ideal_saturation, 0.9);
    }

    #[test]
    fn search_at_the_boundary_gives_up() {
        // Pushing outwards from the edge keeps producing the same red.
        let state = NavigationState::new(0.0, 1.0);
        let red = Color::new(255, 0, 0);

        let moved = navigate_polar(&state, red, Direction::Right, SafetyMode::WebSafe);
        assert_eq!(moved, None);
    }

    #[test]
    fn print_safe_search_moves_by_the_smallest_step() {
        let state = NavigationState::default();
        let start = Color::WHITE;

        let moved = step(&state, start, Direction::Right, SafetyMode::PrintSafe);
        assert_eq!(moved.color, Color::new(255, 252, 252));
        assert!(moved.color.is_print_safe());
        assert_component_eq!(moved.state.ideal_saturation, 0.01);
    }

    #[test]
    fn seeding_from_colors_and_pointers() {
        let state = NavigationState::from_color(Color::new(0, 255, 255));
        assert_component_eq!(state.ideal_hue, 180.0);
        assert_component_eq!(state.ideal_saturation, 1.0);

        let state = NavigationState::at_point(0.0, -50.0, 100.0);
        assert_component_eq!(state.ideal_hue, 90.0);
        assert_component_eq!(state.ideal_saturation, 0.5);

        let state = NavigationState::at_point(0.0, 300.0, 100.0);
        assert_component_eq!(state.ideal_hue, 270.0);
        assert_component_eq!(state.ideal_saturation, 1.0);

        let state = NavigationState::at_point(5.0, 5.0, 0.0);
        assert_eq!(state, NavigationState::default());
    }

    #[test]
    fn brightness_already_safe() {
        // (128, 0, 0) survives the CMYK round trip.
        assert_eq!(navigate_linear(0.0, 1.0, 0.5, 0.2), None);
    }

    #[test]
    fn brightness_without_movement_snaps() {
        assert_eq!(Hsv::new(30.0, 0.3, 0.3).to_color(), Color::new(76, 65, 54));

        let settled = navigate_linear(30.0, 0.3, 0.3, 0.3).unwrap();
        assert_eq!(settled.color, Color::new(76, 67, 54));
        assert_component_eq!(settled.value, 76.0 / 255.0);
    }

    #[test]
    fn brightness_walks_in_the_direction_of_travel() {
        let up = navigate_linear(30.0, 0.3, 0.3, 0.1).unwrap();
        assert_component_eq!(up.value, 0.308);
        assert_eq!(up.color, Color::new(79, 67, 55));

        let down = navigate_linear(30.0, 0.3, 0.3, 0.34).unwrap();
        assert_component_eq!(down.value, 0.292);
        assert_eq!(down.color, Color::new(74, 63, 52));
    }

    #[test]
    fn brightness_falls_back_when_leaving_the_range() {
        let top = Hsv::new(0.0, 0.7, 1.0).to_color();
        assert!(!top.is_print_safe());

        let settled = navigate_linear(0.0, 0.7, 1.0, 0.9).unwrap();
        assert_eq!(settled.color, Color::new(255, 76, 76));
        assert_component_eq!(settled.value, 1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_state() {
        let state = NavigationState::new(90.0, 0.5);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"ideal_hue":90.0,"ideal_saturation":0.5}"#);
        let restored: NavigationState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);

        let json = serde_json::to_string(&Direction::Left).unwrap();
        assert_eq!(json, r#""Left""#);
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn wheel_emits_only_safe_colors(
            hue in 0.0..360.0f64,
            saturation in 0.0..=1.0f64,
            direction in direction(),
            web in any::<bool>(),
        ) {
            let mode = if web { SafetyMode::WebSafe } else { SafetyMode::PrintSafe };
            let state = NavigationState::new(hue, saturation);
            let start = mode.snap(state.pure_color());

            if let Some(moved) = navigate_polar(&state, start, direction, mode) {
                prop_assert!(mode.admits(moved.color));
                prop_assert_ne!(moved.color, start);
                prop_assert!((0.0..360.0).contains(&moved.state.ideal_hue));
                prop_assert!((0.0..=1.0).contains(&moved.state.ideal_saturation));
            }
        }

        #[test]
        fn unconstrained_wheel_always_moves(
            hue in 0.0..360.0f64,
            saturation in 0.0..=1.0f64,
            direction in direction(),
        ) {
            let state = NavigationState::new(hue, saturation);
            let start = state.pure_color();
            let moved = navigate_polar(&state, start, direction, SafetyMode::Unconstrained);
            prop_assert!(moved.is_some());
        }

        #[test]
        fn brightness_settles_on_print_safe_colors(
            hue in 0.0..360.0f64,
            saturation in 0.0..=1.0f64,
            value in 0.0..=1.0f64,
            start_value in 0.0..=1.0f64,
        ) {
            if let Some(settled) = navigate_linear(hue, saturation, value, start_value) {
                prop_assert!(settled.color.is_print_safe());
                prop_assert!((0.0..=1.0).contains(&settled.value));

                // Anything but the fallback snap was found by walking away
                // from where the interaction started.
                let snapped = snap_brightness(Hsv::new(hue, saturation, value).to_color());
                if settled != snapped {
                    if value > start_value {
                        prop_assert!(settled.value >= value);
                    } else {
                        prop_assert!(settled.value <= value);
                    }
                }
            }
        }
    }
}
