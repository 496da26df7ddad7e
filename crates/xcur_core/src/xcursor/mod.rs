//! Xcursor container decoding.
//!
//! Decoding runs in three passes over an immutable buffer: the directory is
//! read, every image candidate's header is peeked to pick one chunk, and only
//! the winning chunk's payload is extracted and normalized.

pub mod chunk;
pub mod container;
pub mod pixels;
pub mod selector;

use tracing::debug;

use crate::error::{DecodeError, Result};
use crate::types::{DecodedImage, ImageSummary};

pub use chunk::{extract_chunk, read_image_header};
pub use container::read_container;
pub use pixels::normalize;
pub use selector::{FALLBACK_CEILING, Selection, SelectionRule, choose_by_width, select_chunk};

/// Decodes the image chunk whose width best matches `desired_size`.
pub fn decode(data: &[u8], desired_size: u32) -> Result<DecodedImage> {
    let (header, entries) = read_container(data)?;
    debug!(
        version = header.version,
        chunks = header.chunk_count,
        desired_size,
        "read xcursor directory"
    );

    let entry = select_chunk(&entries, data, desired_size)?;
    let (chunk_header, raw) = extract_chunk(data, &entry)?;

    Ok(normalize(&chunk_header, raw))
}

/// Lists every image chunk in the container without reading any payload.
pub fn list_images(data: &[u8]) -> Result<Vec<ImageSummary>> {
    let (_, entries) = read_container(data)?;

    let images: Vec<ImageSummary> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_image())
        .map(|(index, entry)| {
            let header = read_image_header(data, entry.file_offset)?;
            Ok(ImageSummary {
                index,
                nominal_size: header.subtype,
                file_offset: entry.file_offset,
                width: header.width,
                height: header.height,
                hotspot_x: header.hotspot_x,
                hotspot_y: header.hotspot_y,
                delay_ms: header.frame_delay_ms,
            })
        })
        .collect::<Result<_>>()?;

    if images.is_empty() {
        return Err(DecodeError::NoImageFound {
            entries: entries.len(),
        });
    }

    Ok(images)
}
