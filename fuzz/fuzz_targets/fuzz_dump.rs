#![no_main]
use bmpgen::DumpFormat;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing arbitrary text must never panic
    if let Ok(text) = core::str::from_utf8(data) {
        for format in DumpFormat::ALL {
            let _ = format.parse(text);
        }
    }

    // Rendering arbitrary bytes must parse back to the same groups
    let (a, rest) = data.split_at(data.len().min(14));
    let (b, c) = rest.split_at(rest.len().min(40));
    let parts: [&[u8]; 3] = [a, b, c];
    for format in DumpFormat::ALL {
        let groups = format.parse(&format.render(&parts)).expect("rendered dump must parse");
        assert_eq!(groups.concat(), data);
    }
});
