/// Resource limits for binding images and extracting messages.
///
/// All fields default to `None` (no limit). Limits never alter the embedded
/// format; they only refuse work up front.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum message length accepted by encode or announced by a length field on decode.
    pub max_message_bytes: Option<u64>,
}

impl Limits {
    /// Check dimensions against limits. Returns Ok(()) or LimitExceeded error.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), crate::StegoError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(crate::StegoError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(crate::StegoError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(crate::StegoError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    /// Check a message byte length against the message limit.
    pub(crate) fn check_message(&self, len: u64) -> Result<(), crate::StegoError> {
        if let Some(max_len) = self.max_message_bytes {
            if len > max_len {
                return Err(crate::StegoError::LimitExceeded(alloc::format!(
                    "message length {len} exceeds limit {max_len}"
                )));
            }
        }
        Ok(())
    }
}
