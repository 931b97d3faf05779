#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_ascii";
    fs::create_dir_all(dir).unwrap();

    // Leading byte is the scale factor (mod 8)
    fs::write(format!("{dir}/hash_space.txt"), b"\x01#\n ").unwrap();
    fs::write(format!("{dir}/triangle.txt"), b"\x02 /\\\n/__\\\n").unwrap();
    fs::write(format!("{dir}/crlf.txt"), b"\x03ab\r\ncd\r\n").unwrap();
    fs::write(format!("{dir}/background_only.txt"), b"\x01.,:;-_'`").unwrap();
    fs::write(format!("{dir}/unicode.txt"), "\x01\u{2588}\u{2591}\n\u{a0}x".as_bytes()).unwrap();

    // Degenerate seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/zero_scale.txt"), b"\x00#").unwrap();
    fs::write(format!("{dir}/whitespace.txt"), b"\x01 \n\t\n").unwrap();

    let dir = "fuzz/corpus/fuzz_dump";
    fs::create_dir_all(dir).unwrap();
    fs::write(format!("{dir}/hex.txt"), b"42,4d\n\n28,00\n\nff,ff,ff,00").unwrap();
    fs::write(format!("{dir}/binary.txt"), b"01000010\n\n\n\n00000000").unwrap();
    fs::write(format!("{dir}/decimal_overflow.txt"), b"256,-1,+3").unwrap();

    println!("Generated seed corpora in fuzz/corpus/");
}
