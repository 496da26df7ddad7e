#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, &[u8])| {
    let (size, data) = input;
    if let Ok(image) = xcur_core::decode(data, size as u32) {
        assert_eq!(image.pixels.len(), image.width as usize * image.height as usize);
    }
});
