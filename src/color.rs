//! A [`Color`] is the 8-bit ARGB value every operation in this crate consumes
//! and produces.

use std::fmt;

/// A 64-bit floating point value that all continuous components are stored
/// as.
pub type Component = f64;

/// Represent the three components that describe a color in one of the
/// cylindrical notations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// An opaque color with 8-bit red, green and blue channels.
///
/// The alpha channel is carried for compatibility with ARGB consumers, but is
/// always fully opaque. Two colors are equal only if every channel is equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// The alpha channel, always 255.
    pub a: u8,
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a new opaque color from its red, green and blue channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Create a color from a packed `0xAARRGGBB` value. The alpha byte is
    /// ignored.
    pub const fn from_argb(argb: u32) -> Self {
        Self::new((argb >> 16) as u8, (argb >> 8) as u8, argb as u8)
    }

    /// Pack the color into a `0xAARRGGBB` value.
    pub const fn to_argb(&self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Returns true if the color is a shade of gray.
    pub fn is_achromatic(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// The red, green and blue channels normalized to [0..1].
    pub(crate) fn to_unit_components(&self) -> Components {
        let unit = |channel: u8| channel as Component / 255.0;
        Components(unit(self.r), unit(self.g), unit(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
