//! # zenlsb
//!
//! Hide a byte message in the least-significant bits of pixel channel values,
//! and get it back, without changing image dimensions or anything above bit 0.
//!
//! ## Frame layout
//!
//! The embedded bitstream is a 32-bit big-endian message length, then each
//! message byte MSB first, then zero bits up to the next multiple of the
//! embeddable channel count. Bits are written one per channel slot, scanning
//! pixels in [`ScanOrder`] and visiting only the leading embeddable channels
//! of each pixel:
//!
//! | mode    | embeddable channels |
//! |---------|---------------------|
//! | `RGB`   | 3                   |
//! | `RGBA`  | 3 (alpha untouched) |
//! | `CMYK`  | 4                   |
//! | `YCbCr` | 4                   |
//!
//! A frame must be strictly smaller than `width * height * embeddable` bits.
//!
//! ## Non-Goals
//!
//! - Compression, error correction, or integrity checks. A foreign or
//!   re-compressed image decodes to garbage; put a checksum in your
//!   [`Envelope`] if you need one.
//! - Lossy formats. Persist with a lossless sink such as [`pam::PamSink`].
//! - Streaming. The whole image is processed in memory.
//!
//! ## Usage
//!
//! ```
//! use zenlsb::{Engine, PixelBuffer, SourceImage, Unstoppable};
//!
//! let cover = PixelBuffer::filled(16, 16, 4, 200)?;
//! let mut engine = Engine::new(SourceImage::new(cover, "RGBA"));
//!
//! let stego = engine.encode(b"meet at noon", Unstoppable)?.clone();
//!
//! let mut reader = Engine::new(SourceImage::new(stego, "RGBA"));
//! assert_eq!(reader.decode(Unstoppable)?, b"meet at noon");
//! # Ok::<(), zenlsb::StegoError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bits;
mod color;
mod engine;
mod envelope;
mod error;
pub mod frame;
mod inspect;
mod limits;
mod pixel;
mod scan;
mod source;

#[cfg(feature = "pam")]
pub mod pam;

// Re-exports
pub use color::ColorModel;
pub use engine::Engine;
pub use enough::{Stop, Unstoppable};
pub use envelope::{Envelope, Plaintext};
pub use error::StegoError;
pub use frame::Frame;
pub use inspect::{PixelDiff, compare_pixels};
pub use limits::Limits;
pub use pixel::PixelBuffer;
pub use scan::ScanOrder;
pub use source::{ImageSink, ImageSource, SourceImage};
