use tracing::{debug, warn};

use crate::error::{DecodeError, Result};
use crate::types::{DirectoryEntry, IMAGE_CHUNK_TYPE, IMAGE_HEADER_SIZE, ImageChunkHeader};

/// Reads the fixed 36-byte image header at `offset`. No pixel data is touched.
pub fn read_image_header(data: &[u8], offset: u32) -> Result<ImageChunkHeader> {
    let start = offset as usize;
    let raw: &[u8; IMAGE_HEADER_SIZE] = start
        .checked_add(IMAGE_HEADER_SIZE)
        .and_then(|end| data.get(start..end))
        .and_then(|raw| raw.try_into().ok())
        .ok_or_else(|| {
            DecodeError::truncated(
                "image chunk header",
                start,
                IMAGE_HEADER_SIZE,
                data.len().saturating_sub(start),
            )
        })?;

    Ok(ImageChunkHeader::from_bytes(raw))
}

/// Re-reads the header of `entry` and slices out its pixel payload.
///
/// The payload starts right after the 36-byte header and is exactly
/// `width * height * 4` bytes long.
pub fn extract_chunk<'a>(
    data: &'a [u8],
    entry: &DirectoryEntry,
) -> Result<(ImageChunkHeader, &'a [u8])> {
    let header = read_image_header(data, entry.file_offset)?;
    check_advisory_fields(&header, entry);

    if header.width == 0 || header.height == 0 {
        return Err(DecodeError::corrupt(
            entry.file_offset,
            format!("zero dimension {}x{}", header.width, header.height),
        ));
    }

    let start = entry.file_offset as usize + IMAGE_HEADER_SIZE;
    let remaining = data.len() - start;
    let pixel_len = header.pixel_byte_len().ok_or_else(|| {
        DecodeError::corrupt(
            entry.file_offset,
            format!("dimensions {}x{} overflow", header.width, header.height),
        )
    })?;

    if pixel_len > remaining {
        return Err(DecodeError::corrupt(
            entry.file_offset,
            format!(
                "{}x{} image needs {} payload bytes, {} available",
                header.width, header.height, pixel_len, remaining
            ),
        ));
    }

    debug!(
        offset = entry.file_offset,
        width = header.width,
        height = header.height,
        "extracted image chunk"
    );

    Ok((header, &data[start..start + pixel_len]))
}

fn check_advisory_fields(header: &ImageChunkHeader, entry: &DirectoryEntry) {
    if header.header_size as usize != IMAGE_HEADER_SIZE {
        warn!(
            offset = entry.file_offset,
            header_size = header.header_size,
            "unexpected image header size"
        );
    }
    if header.chunk_type != IMAGE_CHUNK_TYPE {
        warn!(
            offset = entry.file_offset,
            chunk_type = header.chunk_type,
            "chunk header type does not match directory"
        );
    }
    if header.subtype != header.width {
        warn!(
            offset = entry.file_offset,
            subtype = header.subtype,
            width = header.width,
            "nominal size differs from image width"
        );
    }
    if header.subtype != entry.subtype {
        debug!(
            offset = entry.file_offset,
            directory = entry.subtype,
            chunk = header.subtype,
            "nominal size differs between directory and chunk"
        );
    }
}
