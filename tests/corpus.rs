//! Test corpus: embedding across patterns, sizes, color models, and adapters.

use enough::Unstoppable;
use zenlsb::*;

fn checkerboard(w: u32, h: u32, channels: usize) -> PixelBuffer {
    let mut data = vec![0u8; w as usize * h as usize * channels];
    for y in 0..h as usize {
        for x in 0..w as usize {
            let off = (y * w as usize + x) * channels;
            for c in 0..channels {
                data[off + c] = if (x + y) % 2 == 0 {
                    180 + (c as u8 * 15)
                } else {
                    10 + (c as u8 * 30)
                };
            }
        }
    }
    PixelBuffer::new(data, w, h, channels).unwrap()
}

fn noise_pattern(w: u32, h: u32, channels: usize) -> PixelBuffer {
    let mut data = vec![0u8; w as usize * h as usize * channels];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in data.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    PixelBuffer::new(data, w, h, channels).unwrap()
}

fn noise_message(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 8) as u8
        })
        .collect()
}

fn roundtrip(cover: PixelBuffer, mode: &str, message: &[u8]) {
    let mut engine = Engine::new(SourceImage::new(cover.clone(), mode));
    let stego = engine.encode(message, Unstoppable).unwrap().clone();
    for (i, (a, b)) in cover.as_bytes().iter().zip(stego.as_bytes()).enumerate() {
        assert_eq!(a & !1, b & !1, "{mode}: high bits changed at {i}");
    }
    let mut reader = Engine::new(SourceImage::new(stego, mode));
    assert_eq!(reader.decode(Unstoppable).unwrap(), message, "{mode}");
}

// ── Pattern and size grid ───────────────────────────────────────────

#[test]
fn checkerboard_models() {
    let message = b"checkerboard payload";
    roundtrip(checkerboard(16, 12, 3), "RGB", message);
    roundtrip(checkerboard(16, 12, 4), "RGBA", message);
    roundtrip(checkerboard(16, 12, 4), "CMYK", message);
    roundtrip(checkerboard(16, 12, 4), "YCbCr", message);
}

#[test]
fn noise_models() {
    let message = noise_message(100, 7);
    roundtrip(noise_pattern(31, 17, 3), "RGB", &message);
    roundtrip(noise_pattern(31, 17, 4), "RGBA", &message);
    roundtrip(noise_pattern(31, 17, 4), "CMYK", &message);
}

#[test]
fn odd_shapes() {
    // Single row and single column images.
    roundtrip(noise_pattern(64, 1, 3), "RGB", b"wide");
    roundtrip(noise_pattern(1, 64, 3), "RGB", b"tall");
    roundtrip(noise_pattern(3, 97, 4), "CMYK", b"narrow and long");
}

#[test]
fn message_lengths_near_capacity() {
    let cover = noise_pattern(13, 11, 3);
    let mut probe = Engine::new(SourceImage::new(cover.clone(), "RGB"));
    probe.init_from_image().unwrap();
    let max = probe.max_message_len().unwrap();
    for len in [1, 2, max / 2, max - 1, max] {
        roundtrip(cover.clone(), "RGB", &noise_message(len, len as u32));
    }
}

#[test]
fn extra_channels_beyond_embeddable_are_untouched() {
    // A 5-channel buffer tagged RGB: channels 3 and 4 must never change.
    let cover = noise_pattern(10, 10, 5);
    let mut engine = Engine::new(SourceImage::new(cover.clone(), "RGB"));
    let stego = engine.encode(&noise_message(30, 3), Unstoppable).unwrap().clone();
    for (a, b) in cover
        .as_bytes()
        .chunks_exact(5)
        .zip(stego.as_bytes().chunks_exact(5))
    {
        assert_eq!(&a[3..], &b[3..]);
    }
}

// ── Legacy column-major layout ───────────────────────────────────────

#[test]
fn reads_column_major_images() {
    // Lay a frame down by hand walking columns outer, rows inner.
    let (w, h) = (5u32, 4u32);
    let message = b"hi";
    let frame = Frame::build(message, 3).unwrap();
    let mut cover = checkerboard(w, h, 3);
    let mut stream = frame.bits().iter();
    'outer: for x in 0..w {
        for y in 0..h {
            for c in 0..3 {
                let Some(&bit) = stream.next() else {
                    break 'outer;
                };
                let v = cover.get_mut(y, x, c).unwrap();
                *v = bits::set_lsb(*v, bit);
            }
        }
    }

    let mut engine =
        Engine::new(SourceImage::new(cover, "RGB")).with_scan_order(ScanOrder::ColumnMajor);
    assert_eq!(engine.decode(Unstoppable).unwrap(), message);
}

// ── PAM source and sink ──────────────────────────────────────────────

#[cfg(feature = "pam")]
#[test]
fn pam_source_to_sink_roundtrip() {
    let cover = noise_pattern(12, 9, 4);
    let cover_pam = pam::encode(&cover, "RGBA").unwrap();

    let mut engine = Engine::new(pam::PamSource::new(&cover_pam));
    engine.encode(b"through a file", Unstoppable).unwrap();
    let mut sink = pam::PamSink::new();
    engine.write_to(&mut sink).unwrap();

    let stego_pam = sink.into_bytes();
    let mut reader = Engine::new(pam::PamSource::new(&stego_pam));
    assert_eq!(reader.decode(Unstoppable).unwrap(), b"through a file");
    assert_eq!(reader.color_model(), Some(ColorModel::Rgba));

    let stego = pam::decode(&stego_pam, None).unwrap();
    let diffs = compare_pixels(&cover, &stego.pixels, usize::MAX).unwrap();
    assert!(diffs.iter().all(|d| d.before[3] == d.after[3]));
}

#[cfg(feature = "pam")]
#[test]
fn pam_grayscale_is_unsupported() {
    let gray = PixelBuffer::filled(4, 4, 1, 128).unwrap();
    let data = pam::encode(&gray, "L").unwrap();
    let mut engine = Engine::new(pam::PamSource::new(&data));
    assert!(matches!(
        engine.encode(b"x", Unstoppable),
        Err(StegoError::UnsupportedColorModel(_))
    ));
}

#[cfg(feature = "pam")]
#[test]
fn pam_source_limits() {
    let data = pam::encode(&noise_pattern(20, 20, 3), "RGB").unwrap();
    let limits = Limits {
        max_width: Some(10),
        ..Default::default()
    };
    let mut engine = Engine::new(pam::PamSource::new(&data).with_limits(limits));
    assert!(matches!(
        engine.decode(Unstoppable),
        Err(StegoError::LimitExceeded(_))
    ));
}

// ── Envelopes ────────────────────────────────────────────────────────

/// Toy envelope: XOR with a key byte and a trailing tag byte.
struct XorTagged(u8);

impl Envelope for XorTagged {
    fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, StegoError> {
        let mut out: Vec<u8> = plaintext.iter().map(|b| b ^ self.0).collect();
        out.push(self.0);
        Ok(out)
    }

    fn open(&self, payload: &[u8]) -> Result<Vec<u8>, StegoError> {
        match payload.split_last() {
            Some((&tag, body)) if tag == self.0 => Ok(body.iter().map(|b| b ^ self.0).collect()),
            _ => Err(StegoError::Envelope(Box::new(core::fmt::Error))),
        }
    }
}

#[test]
fn sealed_payload_roundtrip() {
    let mut engine = Engine::new(SourceImage::new(checkerboard(20, 20, 3), "RGB"));
    engine
        .encode_sealed(b"attack at dawn", &XorTagged(0x5A), Unstoppable)
        .unwrap();

    // The raw embedded payload is the sealed form.
    let raw = engine.decode(Unstoppable).unwrap();
    assert_eq!(raw.len(), 15);
    assert_ne!(&raw[..14], b"attack at dawn");

    assert_eq!(
        engine.decode_opened(&XorTagged(0x5A), Unstoppable).unwrap(),
        b"attack at dawn"
    );
    assert!(matches!(
        engine.decode_opened(&XorTagged(0x11), Unstoppable),
        Err(StegoError::Envelope(_))
    ));
}

#[test]
fn plaintext_envelope_is_identity() {
    let mut engine = Engine::new(SourceImage::new(checkerboard(20, 20, 3), "RGB"));
    engine
        .encode_sealed(b"plain", &Plaintext, Unstoppable)
        .unwrap();
    assert_eq!(engine.decode(Unstoppable).unwrap(), b"plain");
    assert_eq!(
        engine.decode_opened(&Plaintext, Unstoppable).unwrap(),
        b"plain"
    );
}

// ── Typed buffers ────────────────────────────────────────────────────

#[cfg(feature = "imgref")]
#[test]
fn imgref_rgba_roundtrip() {
    let pixels: Vec<rgb::RGBA8> = (0..64u8)
        .map(|i| rgb::RGBA8::new(i, i.wrapping_mul(3), 255 - i, 128))
        .collect();
    let img = imgref::ImgVec::new(pixels.clone(), 8, 8);

    let mut engine = Engine::new(SourceImage::from_rgba8(img.as_ref()).unwrap());
    let stego = engine.encode(b"typed", Unstoppable).unwrap().to_rgba8().unwrap();
    assert_eq!(stego.width(), 8);
    for (a, b) in pixels.iter().zip(stego.pixels()) {
        assert_eq!(a.a, b.a);
        assert_eq!(a.r & !1, b.r & !1);
    }

    let back = SourceImage::from_rgba8(stego.as_ref()).unwrap();
    let mut reader = Engine::new(back);
    assert_eq!(reader.decode(Unstoppable).unwrap(), b"typed");
}
