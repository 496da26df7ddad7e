use proptest::prelude::*;
use xcur_core::{COMMENT_CHUNK_TYPE, DecodeError, IMAGE_CHUNK_TYPE, decode, list_images};

struct Chunk {
    width: u32,
    height: u32,
    hotspot: (u32, u32),
    pixels: Vec<u32>,
}

fn gradient(width: u32, height: u32, hotspot: (u32, u32)) -> Chunk {
    let pixels = (0..width * height)
        .map(|i| 0xFF00_0000 | (i.wrapping_mul(2_654_435_761) & 0x00FF_FFFF))
        .collect();
    Chunk {
        width,
        height,
        hotspot,
        pixels,
    }
}

fn xcursor(chunks: &[Chunk]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"Xcur");
    for v in [16u32, 0x0001_0000, chunks.len() as u32] {
        data.extend_from_slice(&v.to_le_bytes());
    }

    let mut offset = 16 + chunks.len() * 12;
    for chunk in chunks {
        for v in [IMAGE_CHUNK_TYPE, chunk.width, offset as u32] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        offset += 36 + chunk.pixels.len() * 4;
    }

    for chunk in chunks {
        for v in [
            36,
            IMAGE_CHUNK_TYPE,
            chunk.width,
            1,
            chunk.width,
            chunk.height,
            chunk.hotspot.0,
            chunk.hotspot.1,
            0,
        ] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        for px in &chunk.pixels {
            data.extend_from_slice(&px.to_le_bytes());
        }
    }
    data
}

fn square(size: u32) -> Chunk {
    gradient(size, size, (size / 2, size / 3))
}

#[test]
fn test_exact_match_among_standard_sizes() {
    let data = xcursor(&[square(16), square(24), square(32), square(48)]);
    let image = decode(&data, 32).unwrap();
    assert_eq!((image.width, image.height), (32, 32));
    assert_eq!((image.hotspot_x, image.hotspot_y), (16, 10));
}

#[test]
fn test_fallback_picks_largest_under_ceiling() {
    let data = xcursor(&[square(16), square(64)]);
    let image = decode(&data, 32).unwrap();
    assert_eq!(image.width, 16);
}

#[test]
fn test_single_chunk_ignores_desired_size() {
    for desired in [0, 1, 32, 48, 1000] {
        let data = xcursor(&[square(96)]);
        let image = decode(&data, desired).unwrap();
        assert_eq!(image.width, 96);
    }
}

#[test]
fn test_selected_fields_match_chunk_header() {
    let data = xcursor(&[gradient(24, 20, (3, 4)), gradient(40, 36, (7, 9))]);
    let image = decode(&data, 40).unwrap();
    assert_eq!((image.width, image.height), (40, 36));
    assert_eq!((image.hotspot_x, image.hotspot_y), (7, 9));
    assert_eq!(image.pixels.len(), 40 * 36);
    assert_eq!(image.nominal_size, 40);
}

#[test]
fn test_roundtrip_32x32() {
    let chunk = gradient(32, 32, (5, 11));
    let expected = chunk.pixels.clone();
    let data = xcursor(&[chunk]);

    let image = decode(&data, 32).unwrap();
    assert_eq!(image.pixels, expected);
    assert_eq!((image.hotspot_x, image.hotspot_y), (5, 11));
}

#[test]
fn test_payload_one_byte_short() {
    let mut data = xcursor(&[square(32)]);
    data.pop();
    assert!(matches!(
        decode(&data, 32),
        Err(DecodeError::CorruptChunk { .. })
    ));
}

#[test]
fn test_bad_magic() {
    let mut data = xcursor(&[square(32)]);
    data[..4].copy_from_slice(b"RIFF");
    assert!(matches!(decode(&data, 32), Err(DecodeError::Format { .. })));

    // Even with a directory count that could never be satisfied.
    data[12..16].copy_from_slice(&u32::MAX.to_le_bytes());
    assert!(matches!(decode(&data, 32), Err(DecodeError::Format { .. })));
}

#[test]
fn test_comment_only_container() {
    let mut data = Vec::new();
    data.extend_from_slice(b"Xcur");
    for v in [16u32, 0x0001_0000, 1, COMMENT_CHUNK_TYPE, 1, 28] {
        data.extend_from_slice(&v.to_le_bytes());
    }
    for v in [20u32, COMMENT_CHUNK_TYPE, 1, 1, 0] {
        data.extend_from_slice(&v.to_le_bytes());
    }

    assert_eq!(
        decode(&data, 32),
        Err(DecodeError::NoImageFound { entries: 1 })
    );
    assert_eq!(
        list_images(&data),
        Err(DecodeError::NoImageFound { entries: 1 })
    );
}

#[test]
fn test_list_images_reports_every_candidate() {
    let data = xcursor(&[square(16), square(24), square(32)]);
    let images = list_images(&data).unwrap();
    let widths: Vec<u32> = images.iter().map(|i| i.width).collect();
    assert_eq!(widths, vec![16, 24, 32]);
    assert_eq!(images[2].index, 2);
    assert_eq!(images[1].hotspot_y, 8);
}

fn patch_single_chunk(data: &mut [u8], field: usize, value: u32) {
    let at = 16 + 12 + field * 4;
    data[at..at + 4].copy_from_slice(&value.to_le_bytes());
}

#[test]
fn test_payload_follows_fixed_header_size() {
    let chunk = gradient(2, 2, (1, 1));
    let expected = chunk.pixels.clone();
    let mut data = xcursor(&[chunk]);
    patch_single_chunk(&mut data, 0, 40);

    let image = decode(&data, 32).unwrap();
    assert_eq!(image.pixels, expected);
    assert_eq!((image.hotspot_x, image.hotspot_y), (1, 1));
}

#[test]
fn test_chunk_type_mismatch_is_tolerated() {
    let chunk = gradient(2, 2, (0, 0));
    let expected = chunk.pixels.clone();
    let mut data = xcursor(&[chunk]);
    patch_single_chunk(&mut data, 1, 7);

    let image = decode(&data, 32).unwrap();
    assert_eq!(image.pixels, expected);
}

#[test]
fn test_nominal_size_mismatch_is_tolerated() {
    let chunk = gradient(3, 3, (0, 0));
    let expected = chunk.pixels.clone();
    let mut data = xcursor(&[chunk]);
    patch_single_chunk(&mut data, 2, 24);

    let image = decode(&data, 24).unwrap();
    assert_eq!(image.width, 3);
    assert_eq!(image.nominal_size, 24);
    assert_eq!(image.pixels, expected);
}

#[test]
fn test_zero_desired_size_uses_ceiling_rule() {
    let data = xcursor(&[square(16), square(64)]);
    assert_eq!(decode(&data, 0).unwrap().width, 16);

    let data = xcursor(&[square(64), square(96)]);
    assert_eq!(decode(&data, 0).unwrap().width, 64);
}

#[test]
fn test_decode_is_deterministic() {
    let data = xcursor(&[square(16), square(28), square(40)]);
    let first = decode(&data, 32);
    for _ in 0..4 {
        assert_eq!(decode(&data, 32), first);
    }
}

proptest! {
    #[test]
    fn prop_arbitrary_bytes_never_panic(data in proptest::collection::vec(any::<u8>(), 0..512), size in 0u32..128) {
        let _ = decode(&data, size);
        let _ = list_images(&data);
    }

    #[test]
    fn prop_any_prefix_is_an_error_or_consistent(cut in 0usize..2000, size in 0u32..64) {
        let data = xcursor(&[square(8), square(16)]);
        let cut = cut.min(data.len());
        if let Ok(image) = decode(&data[..cut], size) {
            prop_assert_eq!(image.pixels.len() as u32, image.width * image.height);
        }
    }

    #[test]
    fn prop_decode_is_deterministic(widths in proptest::collection::vec(1u32..80, 1..5), size in 0u32..100) {
        let chunks: Vec<Chunk> = widths.iter().map(|&w| gradient(w, 2, (0, 0))).collect();
        let data = xcursor(&chunks);
        let a = decode(&data, size).unwrap();
        let b = decode(&data, size).unwrap();
        prop_assert!(widths.contains(&a.width));
        prop_assert_eq!(a, b);
    }
}
