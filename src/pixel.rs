use alloc::vec;
use alloc::vec::Vec;

use crate::error::StegoError;

/// Owned, interleaved 8-bit pixel data addressed by `(row, column, channel)`.
///
/// Rows are stored top to bottom, each row holds `width` pixels of
/// `channels` bytes. Dimensions and channel stride are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: usize,
}

impl PixelBuffer {
    /// Wrap existing pixel data.
    ///
    /// Bytes past `width * height * channels` are dropped.
    pub fn new(
        mut data: Vec<u8>,
        width: u32,
        height: u32,
        channels: usize,
    ) -> Result<Self, StegoError> {
        let expected = byte_len(width, height, channels)?;
        if data.len() < expected {
            return Err(StegoError::BufferTooSmall {
                needed: expected,
                actual: data.len(),
            });
        }
        data.truncate(expected);
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// A buffer with every channel set to `value`.
    pub fn filled(width: u32, height: u32, channels: usize, value: u8) -> Result<Self, StegoError> {
        let len = byte_len(width, height, channels)?;
        Ok(Self {
            data: vec![value; len],
            width,
            height,
            channels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channels per pixel (the interleave stride).
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of pixels (width * height).
    pub fn pixel_count(&self) -> usize {
        self.data.len() / self.channels
    }

    /// Flat offset of a channel value, or `None` when out of bounds.
    pub fn offset(&self, row: u32, col: u32, channel: usize) -> Option<usize> {
        if row >= self.height || col >= self.width || channel >= self.channels {
            return None;
        }
        Some((row as usize * self.width as usize + col as usize) * self.channels + channel)
    }

    pub fn get(&self, row: u32, col: u32, channel: usize) -> Option<u8> {
        self.offset(row, col, channel).map(|off| self.data[off])
    }

    pub fn get_mut(&mut self, row: u32, col: u32, channel: usize) -> Option<&mut u8> {
        let off = self.offset(row, col, channel)?;
        self.data.get_mut(off)
    }

    /// Overwrite one channel value. Returns `None` when out of bounds.
    pub fn set(&mut self, row: u32, col: u32, channel: usize, value: u8) -> Option<()> {
        *self.get_mut(row, col, channel)? = value;
        Some(())
    }

    /// All channels of one pixel.
    pub fn pixel(&self, row: u32, col: u32) -> Option<&[u8]> {
        let off = self.offset(row, col, 0)?;
        self.data.get(off..off + self.channels)
    }

    /// Raw interleaved bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Take ownership of the raw interleaved bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Convert to an [`imgref::ImgVec`] of RGB pixels. Requires 3 channels.
    #[cfg(feature = "imgref")]
    pub fn to_rgb8(&self) -> Result<imgref::ImgVec<rgb::RGB8>, StegoError> {
        self.require_channels(3)?;
        let pixels = self
            .data
            .chunks_exact(3)
            .map(|p| rgb::RGB8::new(p[0], p[1], p[2]))
            .collect();
        Ok(imgref::ImgVec::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Convert to an [`imgref::ImgVec`] of RGBA pixels. Requires 4 channels.
    #[cfg(feature = "imgref")]
    pub fn to_rgba8(&self) -> Result<imgref::ImgVec<rgb::RGBA8>, StegoError> {
        self.require_channels(4)?;
        let pixels = self
            .data
            .chunks_exact(4)
            .map(|p| rgb::RGBA8::new(p[0], p[1], p[2], p[3]))
            .collect();
        Ok(imgref::ImgVec::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }

    #[cfg(feature = "imgref")]
    fn require_channels(&self, channels: usize) -> Result<(), StegoError> {
        if self.channels != channels {
            return Err(StegoError::UnsupportedVariant(alloc::format!(
                "expected {channels} channels, buffer has {}",
                self.channels
            )));
        }
        Ok(())
    }
}

fn byte_len(width: u32, height: u32, channels: usize) -> Result<usize, StegoError> {
    if channels == 0 {
        return Err(StegoError::UnsupportedVariant(
            "pixel buffer needs at least one channel".into(),
        ));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(channels))
        .ok_or(StegoError::DimensionsTooLarge { width, height })
}
