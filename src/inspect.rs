use alloc::vec::Vec;

use crate::error::StegoError;
use crate::pixel::PixelBuffer;

/// One pixel whose channel values differ between two buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelDiff {
    pub row: u32,
    pub col: u32,
    pub before: Vec<u8>,
    pub after: Vec<u8>,
}

/// Compare the first `limit` pixels (row-major) of two same-shaped buffers.
///
/// Returns only the pixels that differ, in scan order.
pub fn compare_pixels(
    before: &PixelBuffer,
    after: &PixelBuffer,
    limit: usize,
) -> Result<Vec<PixelDiff>, StegoError> {
    if before.width() != after.width() || before.height() != after.height() {
        return Err(StegoError::DimensionMismatch {
            left_width: before.width(),
            left_height: before.height(),
            right_width: after.width(),
            right_height: after.height(),
        });
    }
    if before.channels() != after.channels() {
        return Err(StegoError::UnsupportedVariant(alloc::format!(
            "channel count differs: {} vs {}",
            before.channels(),
            after.channels()
        )));
    }

    let stride = before.channels();
    let width = before.width() as usize;
    let diffs = before
        .as_bytes()
        .chunks_exact(stride)
        .zip(after.as_bytes().chunks_exact(stride))
        .take(limit)
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, (a, b))| PixelDiff {
            row: (i / width) as u32,
            col: (i % width) as u32,
            before: a.to_vec(),
            after: b.to_vec(),
        })
        .collect();
    Ok(diffs)
}
