/// Errors crossing the decode-engine boundary.
///
/// Public loading entry points never surface these: every failure there
/// degrades to the canonical "no image" sentinel. `BridgeError` is the
/// contract type for [`crate::DecodeEngine`] implementations and raw
/// scanline extraction.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BridgeError {
    #[error("unrecognized container format")]
    UnrecognizedFormat,

    #[error("decode failed: {0}")]
    DecodeFailed(String),

    #[error("unsupported pixel layout: {bpp} bits per pixel")]
    UnsupportedLayout { bpp: u32 },

    #[error("destination buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("stream operation failed")]
    StreamFailure,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
