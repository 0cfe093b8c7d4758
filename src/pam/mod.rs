//! Lossless PAM (P7) image source and sink.
//!
//! PAM stores raw interleaved samples with a text header, so it round-trips
//! channel LSBs exactly. TUPLTYPE maps to mode tags:
//!
//! | TUPLTYPE    | mode    |
//! |-------------|---------|
//! | `RGB`       | `RGB`   |
//! | `RGB_ALPHA` | `RGBA`  |
//! | `CMYK`      | `CMYK`  |
//! | `YCbCr`     | `YCbCr` |
//! | `GRAYSCALE` | `L`     |
//!
//! Only MAXVAL 255 is supported.

mod decode;
mod encode;

use alloc::vec::Vec;

use crate::color::ColorModel;
use crate::error::StegoError;
use crate::limits::Limits;
use crate::pixel::PixelBuffer;
use crate::source::{ImageSink, ImageSource, SourceImage};

/// Parsed PAM header (internal).
pub(crate) struct PamHeader {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub mode: &'static str,
    pub data_offset: usize,
}

/// Decode PAM bytes into pixels and a mode tag.
pub fn decode(data: &[u8], limits: Option<&Limits>) -> Result<SourceImage, StegoError> {
    let header = decode::parse_header(data)?;
    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
    }
    let pixels = decode::decode_pixels(data, &header)?;
    Ok(SourceImage::new(pixels, header.mode))
}

/// Encode pixels as PAM, choosing TUPLTYPE from `mode`.
pub fn encode(pixels: &PixelBuffer, mode: &str) -> Result<Vec<u8>, StegoError> {
    encode::encode_pam(pixels, mode)
}

/// An [`ImageSource`] over PAM bytes.
#[derive(Clone, Debug)]
pub struct PamSource<'a> {
    data: &'a [u8],
    limits: Option<Limits>,
}

impl<'a> PamSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Apply limits while parsing.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }
}

impl ImageSource for PamSource<'_> {
    fn read_image(&mut self) -> Result<SourceImage, StegoError> {
        decode(self.data, self.limits.as_ref())
    }
}

/// An [`ImageSink`] collecting PAM bytes.
#[derive(Clone, Debug, Default)]
pub struct PamSink {
    bytes: Vec<u8>,
}

impl PamSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoded bytes of the last image written.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl ImageSink for PamSink {
    fn write_image(&mut self, pixels: &PixelBuffer, model: ColorModel) -> Result<(), StegoError> {
        self.bytes = encode(pixels, model.mode())?;
        Ok(())
    }
}
