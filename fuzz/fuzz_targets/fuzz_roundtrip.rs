#![no_main]
use libfuzzer_sys::fuzz_target;
use zenlsb::*;

fuzz_target!(|data: &[u8]| {
    // First byte picks the model and size, the rest is the message
    let Some((&shape, message)) = data.split_first() else {
        return;
    };
    let (mode, channels) = match shape % 4 {
        0 => ("RGB", 3),
        1 => ("RGBA", 4),
        2 => ("CMYK", 4),
        _ => ("YCbCr", 4),
    };
    let side = 8 + u32::from(shape >> 2);
    let Ok(cover) = PixelBuffer::filled(side, side, channels, shape) else {
        return;
    };

    let mut engine = Engine::new(SourceImage::new(cover.clone(), mode));
    let stego = match engine.encode(message, enough::Unstoppable) {
        Ok(pixels) => pixels.clone(),
        Err(_) => return,
    };

    for (a, b) in cover.as_bytes().iter().zip(stego.as_bytes()) {
        assert_eq!(a & !1, b & !1, "bits above the LSB changed");
    }

    let mut reader = Engine::new(SourceImage::new(stego, mode));
    let decoded = reader.decode(enough::Unstoppable).expect("decode of fresh frame failed");
    assert_eq!(decoded, message, "roundtrip message mismatch");
});
