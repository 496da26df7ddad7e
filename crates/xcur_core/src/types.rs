use serde::Serialize;

pub const XCURSOR_MAGIC: [u8; 4] = *b"Xcur";

pub const FILE_HEADER_SIZE: usize = 16;
pub const DIRECTORY_ENTRY_SIZE: usize = 12;
pub const IMAGE_HEADER_SIZE: usize = 36;

pub const IMAGE_CHUNK_TYPE: u32 = 0xFFFD_0002;
pub const COMMENT_CHUNK_TYPE: u32 = 0xFFFE_0001;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub magic: [u8; 4],
    pub header_size: u32,
    pub version: u32,
    pub chunk_count: u32,
}

impl ContainerHeader {
    pub fn from_bytes(raw: &[u8; FILE_HEADER_SIZE]) -> Self {
        let [header_size, version, chunk_count] = le_words(&raw[4..]);
        Self {
            magic: [raw[0], raw[1], raw[2], raw[3]],
            header_size,
            version,
            chunk_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub chunk_type: u32,
    pub subtype: u32,
    pub file_offset: u32,
}

impl DirectoryEntry {
    pub fn from_bytes(raw: &[u8; DIRECTORY_ENTRY_SIZE]) -> Self {
        let [chunk_type, subtype, file_offset] = le_words(raw);
        Self {
            chunk_type,
            subtype,
            file_offset,
        }
    }

    #[inline]
    pub const fn is_image(&self) -> bool {
        self.chunk_type == IMAGE_CHUNK_TYPE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageChunkHeader {
    pub header_size: u32,
    pub chunk_type: u32,
    pub subtype: u32,
    pub version: u32,
    pub width: u32,
    pub height: u32,
    pub hotspot_x: u32,
    pub hotspot_y: u32,
    pub frame_delay_ms: u32,
}

impl ImageChunkHeader {
    pub fn from_bytes(raw: &[u8; IMAGE_HEADER_SIZE]) -> Self {
        let [
            header_size,
            chunk_type,
            subtype,
            version,
            width,
            height,
            hotspot_x,
            hotspot_y,
            frame_delay_ms,
        ] = le_words(raw);

        Self {
            header_size,
            chunk_type,
            subtype,
            version,
            width,
            height,
            hotspot_x,
            hotspot_y,
            frame_delay_ms,
        }
    }

    /// Payload length implied by the declared dimensions, or `None` if it
    /// does not fit in a `usize`.
    pub fn pixel_byte_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(BYTES_PER_PIXEL)
    }
}

fn le_words<const N: usize>(raw: &[u8]) -> [u32; N] {
    debug_assert_eq!(raw.len(), 4 * N);
    let mut words = [0u32; N];
    for (word, bytes) in words.iter_mut().zip(raw.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    words
}

/// One decoded cursor image. Pixels are row-major, top row first, packed as
/// `0xAARRGGBB` with straight alpha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub hotspot_x: u32,
    pub hotspot_y: u32,
    pub nominal_size: u32,
    pub delay_ms: u32,
    #[serde(skip)]
    pub pixels: Vec<u32>,
}

impl DecodedImage {
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }
}

/// Header-only view of one image candidate, as reported by
/// [`list_images`](crate::list_images).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageSummary {
    pub index: usize,
    pub nominal_size: u32,
    pub file_offset: u32,
    pub width: u32,
    pub height: u32,
    pub hotspot_x: u32,
    pub hotspot_y: u32,
    pub delay_ms: u32,
}
