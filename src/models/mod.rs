//! The color notations a [`crate::Color`] can be converted to and from.

mod cmyk;
mod hsl;
mod hsv;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hsv::Hsv;
