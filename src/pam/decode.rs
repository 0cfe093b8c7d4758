//! PAM header parser and sample reader.

use alloc::format;
use alloc::string::ToString;

use super::PamHeader;
use crate::error::StegoError;
use crate::pixel::PixelBuffer;

/// Parse a P7 header up to and including the `ENDHDR` line.
pub(crate) fn parse_header(data: &[u8]) -> Result<PamHeader, StegoError> {
    if data.len() < 3 {
        return Err(StegoError::UnexpectedEof);
    }
    if &data[0..2] != b"P7" || !data[2].is_ascii_whitespace() {
        return Err(StegoError::UnrecognizedFormat);
    }

    let mut width = None;
    let mut height = None;
    let mut depth = None;
    let mut maxval = None;
    let mut tupltype = None;

    let mut pos = 3;
    let data_offset = loop {
        let rest = data.get(pos..).ok_or(StegoError::UnexpectedEof)?;
        let line_len = rest
            .iter()
            .position(|&b| b == b'\n')
            .ok_or(StegoError::UnexpectedEof)?;
        let line = core::str::from_utf8(&rest[..line_len])
            .map_err(|_| StegoError::InvalidHeader("header is not ASCII".into()))?
            .trim();
        pos += line_len + 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        let key = parts.next().unwrap_or_default();
        if key == "ENDHDR" {
            break pos;
        }
        let value = parts
            .next()
            .ok_or_else(|| StegoError::InvalidHeader(format!("{key} has no value")))?;
        match key {
            "WIDTH" => width = Some(parse_u32(key, value)?),
            "HEIGHT" => height = Some(parse_u32(key, value)?),
            "DEPTH" => depth = Some(parse_u32(key, value)?),
            "MAXVAL" => maxval = Some(parse_u32(key, value)?),
            "TUPLTYPE" => tupltype = Some(value.to_string()),
            other => {
                return Err(StegoError::InvalidHeader(format!(
                    "unknown header field {other}"
                )));
            }
        }
    };

    let width = width.ok_or_else(|| missing("WIDTH"))?;
    let height = height.ok_or_else(|| missing("HEIGHT"))?;
    let depth = depth.ok_or_else(|| missing("DEPTH"))?;
    let maxval = maxval.ok_or_else(|| missing("MAXVAL"))?;

    if width == 0 || height == 0 {
        return Err(StegoError::InvalidHeader(format!(
            "zero dimension {width}x{height}"
        )));
    }
    if depth == 0 {
        return Err(StegoError::InvalidHeader("DEPTH is zero".into()));
    }
    if maxval != 255 {
        return Err(StegoError::UnsupportedVariant(format!(
            "MAXVAL {maxval} (only 255 is supported)"
        )));
    }

    let mode = match (tupltype.as_deref(), depth) {
        (Some("RGB"), 3) | (None, 3) => "RGB",
        (Some("RGB_ALPHA"), 4) | (None, 4) => "RGBA",
        (Some("CMYK"), 4) => "CMYK",
        (Some("YCbCr"), _) => "YCbCr",
        (Some("GRAYSCALE"), 1) | (None, 1) => "L",
        (Some("GRAYSCALE_ALPHA"), 2) | (None, 2) => "LA",
        (Some(other), d) => {
            return Err(StegoError::UnsupportedVariant(format!(
                "TUPLTYPE {other} with DEPTH {d}"
            )));
        }
        (None, d) => {
            return Err(StegoError::UnsupportedVariant(format!(
                "DEPTH {d} without TUPLTYPE"
            )));
        }
    };

    Ok(PamHeader {
        width,
        height,
        depth,
        mode,
        data_offset,
    })
}

fn parse_u32(key: &str, value: &str) -> Result<u32, StegoError> {
    value
        .parse()
        .map_err(|_| StegoError::InvalidHeader(format!("{key} value {value:?} is not a number")))
}

fn missing(key: &str) -> StegoError {
    StegoError::InvalidHeader(format!("missing {key}"))
}

/// Copy the sample block that follows the header.
pub(crate) fn decode_pixels(data: &[u8], header: &PamHeader) -> Result<PixelBuffer, StegoError> {
    let (width, height) = (header.width, header.height);
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(header.depth as usize))
        .ok_or(StegoError::DimensionsTooLarge { width, height })?;
    let end = header
        .data_offset
        .checked_add(expected)
        .ok_or(StegoError::DimensionsTooLarge { width, height })?;
    let samples = data
        .get(header.data_offset..end)
        .ok_or(StegoError::UnexpectedEof)?;
    PixelBuffer::new(samples.to_vec(), width, height, header.depth as usize)
}
