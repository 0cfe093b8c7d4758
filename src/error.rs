use alloc::boxed::Box;
use alloc::string::String;
use enough::StopReason;

/// Errors from embedding, extraction, and the image adapters.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StegoError {
    #[error("unsupported color model: {0}")]
    UnsupportedColorModel(String),

    #[error("message is empty")]
    EmptyMessage,

    #[error("message too large: frame needs {frame_bits} bits, image holds {capacity_bits}")]
    MessageTooLarge { frame_bits: u64, capacity_bits: u64 },

    #[error("message bit count {0} is not a multiple of 8")]
    InvalidFrameLength(usize),

    #[error("malformed frame field: expected {expected} bits, got {actual}")]
    MalformedFrame { expected: usize, actual: usize },

    #[error("engine has no image bound")]
    Uninitialized,

    #[error("color model {model} embeds {embeddable} channels but pixels have {channels}")]
    ChannelMismatch {
        model: &'static str,
        embeddable: usize,
        channels: usize,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("dimension mismatch: {left_width}x{left_height} vs {right_width}x{right_height}")]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("envelope error: {0}")]
    Envelope(Box<dyn core::error::Error + Send + Sync>),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for StegoError {
    fn from(r: StopReason) -> Self {
        StegoError::Cancelled(r)
    }
}
