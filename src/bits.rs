//! Fixed-width bit field conversions.
//!
//! Every field is laid out most-significant bit first. Bits are `u8` values
//! holding 0 or 1; only bit 0 of each value is consulted when reading.

use alloc::vec::Vec;

use crate::error::StegoError;

/// Width of the message length field.
pub const LENGTH_FIELD_BITS: usize = 32;

/// Width of one message byte field.
pub const BYTE_FIELD_BITS: usize = 8;

/// Expand a 32-bit unsigned value into 32 bits, MSB first.
pub fn u32_to_bits(n: u32) -> [u8; LENGTH_FIELD_BITS] {
    let mut out = [0u8; LENGTH_FIELD_BITS];
    for (i, bit) in out.iter_mut().enumerate() {
        *bit = ((n >> (31 - i)) & 1) as u8;
    }
    out
}

/// Reassemble a 32-bit unsigned value from exactly 32 MSB-first bits.
pub fn bits_to_u32(bits: &[u8]) -> Result<u32, StegoError> {
    if bits.len() != LENGTH_FIELD_BITS {
        return Err(StegoError::MalformedFrame {
            expected: LENGTH_FIELD_BITS,
            actual: bits.len(),
        });
    }
    Ok(bits
        .iter()
        .fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit & 1)))
}

/// Expand a byte into 8 bits, MSB first.
pub fn byte_to_bits(byte: u8) -> [u8; BYTE_FIELD_BITS] {
    let mut out = [0u8; BYTE_FIELD_BITS];
    for (i, bit) in out.iter_mut().enumerate() {
        *bit = (byte >> (7 - i)) & 1;
    }
    out
}

/// Reassemble a byte from exactly 8 MSB-first bits.
pub fn bits_to_byte(bits: &[u8]) -> Result<u8, StegoError> {
    if bits.len() != BYTE_FIELD_BITS {
        return Err(StegoError::MalformedFrame {
            expected: BYTE_FIELD_BITS,
            actual: bits.len(),
        });
    }
    Ok(pack_byte(bits))
}

#[inline]
fn pack_byte(bits: &[u8]) -> u8 {
    bits.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1))
}

/// Concatenate the 8-bit fields of every message byte, in order.
pub fn message_to_bits(message: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(message.len() * BYTE_FIELD_BITS);
    for &byte in message {
        out.extend_from_slice(&byte_to_bits(byte));
    }
    out
}

/// Inverse of [`message_to_bits`]. The bit count must be a multiple of 8.
pub fn bits_to_message(bits: &[u8]) -> Result<Vec<u8>, StegoError> {
    if bits.len() % BYTE_FIELD_BITS != 0 {
        return Err(StegoError::InvalidFrameLength(bits.len()));
    }
    Ok(bits.chunks_exact(BYTE_FIELD_BITS).map(pack_byte).collect())
}

/// Replace bit 0 of `value` with bit 0 of `bit`. Bits 1..=7 are untouched.
#[inline]
pub fn set_lsb(value: u8, bit: u8) -> u8 {
    (value & !1) | (bit & 1)
}
