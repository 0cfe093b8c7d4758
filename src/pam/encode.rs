//! PAM encoder.

use alloc::format;
use alloc::vec::Vec;

use crate::error::StegoError;
use crate::pixel::PixelBuffer;

/// Encode pixels to P7 with MAXVAL 255.
pub(crate) fn encode_pam(pixels: &PixelBuffer, mode: &str) -> Result<Vec<u8>, StegoError> {
    let depth = pixels.channels();
    let tupltype = match (mode, depth) {
        ("RGB", 3) => "RGB",
        ("RGBA", 4) => "RGB_ALPHA",
        ("CMYK", 4) => "CMYK",
        ("YCbCr", _) => "YCbCr",
        ("L", 1) => "GRAYSCALE",
        ("LA", 2) => "GRAYSCALE_ALPHA",
        _ => {
            return Err(StegoError::UnsupportedVariant(format!(
                "cannot encode mode {mode} with {depth} channels as PAM"
            )));
        }
    };

    let width = pixels.width();
    let height = pixels.height();
    let header = format!(
        "P7\nWIDTH {width}\nHEIGHT {height}\nDEPTH {depth}\nMAXVAL 255\nTUPLTYPE {tupltype}\nENDHDR\n"
    );

    let samples = pixels.as_bytes();
    let mut out = Vec::with_capacity(header.len() + samples.len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(samples);
    Ok(out)
}
