//! Collaborators that supply and persist pixel data.
//!
//! The engine never touches files. It asks an [`ImageSource`] for pixels and
//! a mode tag, and hands mutated pixels to an [`ImageSink`]. Sinks must be
//! lossless: any lossy re-encoding destroys the embedded message.

use alloc::string::String;

use crate::color::ColorModel;
use crate::error::StegoError;
use crate::pixel::PixelBuffer;

/// Pixels plus the color mode tag they were decoded with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceImage {
    pub pixels: PixelBuffer,
    /// Mode tag such as `"RGB"`, `"RGBA"`, `"CMYK"`, `"YCbCr"`, or `"L"`.
    pub mode: String,
}

impl SourceImage {
    pub fn new(pixels: PixelBuffer, mode: impl Into<String>) -> Self {
        Self {
            pixels,
            mode: mode.into(),
        }
    }

    /// Copy an [`imgref::ImgRef`] of RGB pixels into an `"RGB"` source.
    #[cfg(feature = "imgref")]
    pub fn from_rgb8(img: imgref::ImgRef<'_, rgb::RGB8>) -> Result<Self, StegoError> {
        let (width, height) = typed_dimensions(img.width(), img.height())?;
        let mut data = alloc::vec::Vec::with_capacity(img.width() * img.height() * 3);
        for px in img.pixels() {
            data.extend_from_slice(&[px.r, px.g, px.b]);
        }
        Ok(Self::new(PixelBuffer::new(data, width, height, 3)?, "RGB"))
    }

    /// Copy an [`imgref::ImgRef`] of RGBA pixels into an `"RGBA"` source.
    #[cfg(feature = "imgref")]
    pub fn from_rgba8(img: imgref::ImgRef<'_, rgb::RGBA8>) -> Result<Self, StegoError> {
        let (width, height) = typed_dimensions(img.width(), img.height())?;
        let mut data = alloc::vec::Vec::with_capacity(img.width() * img.height() * 4);
        for px in img.pixels() {
            data.extend_from_slice(&[px.r, px.g, px.b, px.a]);
        }
        Ok(Self::new(PixelBuffer::new(data, width, height, 4)?, "RGBA"))
    }
}

#[cfg(feature = "imgref")]
fn typed_dimensions(width: usize, height: usize) -> Result<(u32, u32), StegoError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(StegoError::DimensionsTooLarge {
            width: u32::MAX,
            height: u32::MAX,
        }),
    }
}

/// Supplies the image an engine embeds into or extracts from.
///
/// Reading must be repeatable: binding the same source twice yields the
/// same pixels.
pub trait ImageSource {
    fn read_image(&mut self) -> Result<SourceImage, StegoError>;
}

/// An in-memory image is its own source; each read hands out a copy.
impl ImageSource for SourceImage {
    fn read_image(&mut self) -> Result<SourceImage, StegoError> {
        Ok(self.clone())
    }
}

impl<S: ImageSource + ?Sized> ImageSource for &mut S {
    fn read_image(&mut self) -> Result<SourceImage, StegoError> {
        (**self).read_image()
    }
}

/// Persists pixels after embedding. Implementations must be lossless.
pub trait ImageSink {
    fn write_image(&mut self, pixels: &PixelBuffer, model: ColorModel) -> Result<(), StegoError>;
}
