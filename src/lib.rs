//! safehue provides the color engine behind an interactive color picker that
//! can constrain its output to device-safe gamuts.
//!
//! It converts between RGB, HSV, HSL and CMYK, classifies and snaps colors to
//! the web-safe and print-safe gamuts, quantizes a brightness control onto
//! safe levels and navigates a hue/saturation wheel without leaving the
//! active gamut.

#![deny(missing_docs)]

mod color;
mod convert;
mod gamut;
mod math;
mod models;
mod navigate;
mod picker;
mod slider;
mod steps;
mod wheel;


pub use color::{Color, Component, Components};
pub use gamut::{Safety, SafetyMode};
pub use models::{Cmyk, Hsl, Hsv};
pub use navigate::{
    navigate_linear, navigate_polar, Direction, LinearMove, NavigationState, PolarMove,
    BRIGHTNESS_SEARCH_LIMIT, BRIGHTNESS_SEARCH_STEP, WHEEL_SEARCH_LIMIT, WHEEL_SEARCH_STEP,
    WHEEL_STEP,
};
pub use picker::Picker;
pub use slider::{SliderKey, SliderState};
pub use steps::{build_step_table, StepTable};
pub use wheel::WheelState;
