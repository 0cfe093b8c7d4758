//! The embedded bitstream.
//!
//! A frame is a 32-bit big-endian message length, then 8 bits per message
//! byte, then zero padding up to the next multiple of the embeddable channel
//! count. There is no magic number and no checksum.

use alloc::vec::Vec;

use crate::bits::{self, BYTE_FIELD_BITS, LENGTH_FIELD_BITS};
use crate::error::StegoError;

/// Padded frame size in bits for a message of `message_len` bytes.
pub fn frame_bits(message_len: usize, embeddable: usize) -> u64 {
    let unit = embeddable.max(1) as u64;
    let raw = LENGTH_FIELD_BITS as u64 + message_len as u64 * BYTE_FIELD_BITS as u64;
    raw.div_ceil(unit) * unit
}

/// Largest message length whose padded frame stays strictly below `capacity_bits`.
///
/// Returns 0 when not even a one-byte message fits.
pub fn max_message_len(capacity_bits: u64, embeddable: usize) -> usize {
    let unit = embeddable.max(1) as u64;
    // Largest multiple of `unit` strictly below capacity.
    let limit = (capacity_bits.saturating_sub(1) / unit) * unit;
    let Some(payload) = limit.checked_sub(LENGTH_FIELD_BITS as u64) else {
        return 0;
    };
    let bytes = (payload / BYTE_FIELD_BITS as u64).min(u64::from(u32::MAX));
    usize::try_from(bytes).unwrap_or(usize::MAX)
}

/// Value for the 32-bit length field.
fn length_field(message_len: usize) -> Result<u32, StegoError> {
    u32::try_from(message_len).map_err(|_| {
        StegoError::LimitExceeded(alloc::format!(
            "message length {message_len} does not fit the 32-bit length field"
        ))
    })
}

/// A fully built frame, ready to be written onto channel LSBs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    bits: Vec<u8>,
    padding: usize,
}

impl Frame {
    /// Build the frame for `message` padded to a multiple of `embeddable` bits.
    pub fn build(message: &[u8], embeddable: usize) -> Result<Self, StegoError> {
        let len = length_field(message.len())?;

        let total = frame_bits(message.len(), embeddable) as usize;
        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(&bits::u32_to_bits(len));
        for &byte in message {
            out.extend_from_slice(&bits::byte_to_bits(byte));
        }
        let padding = total - out.len();
        out.resize(total, 0);

        Ok(Self { bits: out, padding })
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Total bit count, padding included.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of trailing zero bits added to align the frame.
    pub fn padding(&self) -> usize {
        self.padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn single_byte_rgb_frame() {
        let frame = Frame::build(b"A", 3).unwrap();
        assert_eq!(frame.len(), 42);
        assert_eq!(frame.padding(), 2);
        assert_eq!(&frame.bits()[..32], &bits::u32_to_bits(1));
        assert_eq!(&frame.bits()[32..40], &[0, 1, 0, 0, 0, 0, 0, 1]);
        assert_eq!(&frame.bits()[40..], &[0, 0]);
    }

    #[test]
    fn aligned_frame_gets_no_padding() {
        // 32 + 8 = 40 bits is already a multiple of 4.
        let frame = Frame::build(b"z", 4).unwrap();
        assert_eq!(frame.len(), 40);
        assert_eq!(frame.padding(), 0);
        assert_eq!(frame_bits(1, 4), 40);
    }

    #[test]
    fn frame_bits_matches_build() {
        for len in 0..20 {
            let message: Vec<u8> = (0..len as u8).collect();
            for k in [3, 4] {
                let frame = Frame::build(&message, k).unwrap();
                assert_eq!(frame.len() as u64, frame_bits(len, k));
                assert_eq!(frame.len() % k, 0);
                assert!(frame.padding() < k);
            }
        }
    }

    #[test]
    fn max_message_len_respects_strict_boundary() {
        // 4x4 RGB: 48 bits. One byte needs 42, two bytes need exactly 48.
        assert_eq!(max_message_len(48, 3), 1);
        // 4x4 CMYK: 64 bits. Three bytes need 56, four need 64.
        assert_eq!(max_message_len(64, 4), 3);
        assert_eq!(max_message_len(33, 3), 0);
        assert_eq!(max_message_len(0, 3), 0);
    }

    #[test]
    fn length_field_bounds() {
        assert_eq!(length_field(0).unwrap(), 0);
        assert_eq!(length_field(u32::MAX as usize).unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_length_is_a_limit_error() {
        assert!(matches!(
            length_field(u32::MAX as usize + 1),
            Err(StegoError::LimitExceeded(_))
        ));
    }
}
