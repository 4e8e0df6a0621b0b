//! Model a color with the CMYK notation.

/// A color specified as cyan, magenta, yellow and key (black) ink coverage,
/// each a whole percentage in [0..100].
///
/// The integer quantization is what makes the RGB to CMYK round trip lossy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    /// Cyan coverage.
    pub cyan: u8,
    /// Magenta coverage.
    pub magenta: u8,
    /// Yellow coverage.
    pub yellow: u8,
    /// Key (black) coverage.
    pub key: u8,
}

impl Cmyk {
    /// Pure black ink.
    pub const BLACK: Cmyk = Cmyk {
        cyan: 0,
        magenta: 0,
        yellow: 0,
        key: 100,
    };

    /// Create a new CMYK color. Each channel is clamped to [0..100].
    pub fn new(cyan: u8, magenta: u8, yellow: u8, key: u8) -> Self {
        Self {
            cyan: cyan.min(100),
            magenta: magenta.min(100),
            yellow: yellow.min(100),
            key: key.min(100),
        }
    }
}
