use crate::types::{BYTES_PER_PIXEL, DecodedImage, ImageChunkHeader};

/// Converts a raw little-endian payload into packed `0xAARRGGBB` pixels.
///
/// Bytes are stored blue, green, red, alpha; alpha is kept straight. Rows
/// stay in file order, which is top row first.
pub fn normalize(header: &ImageChunkHeader, raw: &[u8]) -> DecodedImage {
    let pixels = raw
        .chunks_exact(BYTES_PER_PIXEL)
        .map(|px| u32::from_le_bytes([px[0], px[1], px[2], px[3]]))
        .collect();

    DecodedImage {
        width: header.width,
        height: header.height,
        hotspot_x: header.hotspot_x,
        hotspot_y: header.hotspot_y,
        nominal_size: header.subtype,
        delay_ms: header.frame_delay_ms,
        pixels,
    }
}
