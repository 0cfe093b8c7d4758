use alloc::string::ToString;

use crate::error::StegoError;

/// Color model of a source image, parsed from its mode tag.
///
/// Determines how many leading channels of each pixel carry embedded bits.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// `"RGB"`: red, green, blue.
    Rgb,
    /// `"RGBA"`: red, green, blue, alpha. Alpha is never written.
    Rgba,
    /// `"CMYK"`: cyan, magenta, yellow, key.
    Cmyk,
    /// `"YCbCr"`: luma and chroma, four embeddable channels.
    YCbCr,
}

impl ColorModel {
    /// Resolve a mode tag. Anything but the four known tags is
    /// [`StegoError::UnsupportedColorModel`].
    pub fn from_mode(mode: &str) -> Result<Self, StegoError> {
        match mode {
            "RGB" => Ok(Self::Rgb),
            "RGBA" => Ok(Self::Rgba),
            "CMYK" => Ok(Self::Cmyk),
            "YCbCr" => Ok(Self::YCbCr),
            other => Err(StegoError::UnsupportedColorModel(other.to_string())),
        }
    }

    /// The mode tag this model was parsed from.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Cmyk => "CMYK",
            Self::YCbCr => "YCbCr",
        }
    }

    /// Number of leading channels per pixel eligible for LSB substitution.
    pub fn embeddable_channels(&self) -> usize {
        match self {
            Self::Rgb | Self::Rgba => 3,
            Self::Cmyk | Self::YCbCr => 4,
        }
    }
}

impl core::str::FromStr for ColorModel {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mode(s)
    }
}
