#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PAM RGB 2x2, all LSBs clear (length field reads zero)
    let mut pam = b"P7\nWIDTH 2\nHEIGHT 2\nDEPTH 3\nMAXVAL 255\nTUPLTYPE RGB\nENDHDR\n".to_vec();
    pam.extend_from_slice(&[0x80; 12]);
    fs::write(format!("{dir}/pam_rgb_2x2.pam"), pam).unwrap();

    // PAM RGBA 4x4, all LSBs set (length field reads u32::MAX)
    let mut pam = b"P7\nWIDTH 4\nHEIGHT 4\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n".to_vec();
    pam.extend_from_slice(&[0xff; 64]);
    fs::write(format!("{dir}/pam_rgba_4x4.pam"), pam).unwrap();

    // PAM CMYK 4x4 carrying the one-byte message "A"
    let mut bits = vec![0u8; 31];
    bits.push(1);
    bits.extend_from_slice(&[0, 1, 0, 0, 0, 0, 0, 1]);
    let mut samples = vec![0x40u8; 64];
    for (s, b) in samples.iter_mut().zip(&bits) {
        *s = (*s & !1) | b;
    }
    let mut pam = b"P7\nWIDTH 4\nHEIGHT 4\nDEPTH 4\nMAXVAL 255\nTUPLTYPE CMYK\nENDHDR\n".to_vec();
    pam.extend_from_slice(&samples);
    fs::write(format!("{dir}/pam_cmyk_a.pam"), pam).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p7.bin"), b"P7").unwrap();
    fs::write(format!("{dir}/p7_no_endhdr.bin"), b"P7\nWIDTH 1\nHEIGHT 1\n").unwrap();
    fs::write(format!("{dir}/p7_gray.bin"), b"P7\nWIDTH 1\nHEIGHT 1\nDEPTH 1\nMAXVAL 255\nENDHDR\n\x00").unwrap();

    println!("Generated seed corpus in {dir}/");
}
