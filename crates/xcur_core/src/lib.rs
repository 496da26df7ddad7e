mod error;
mod traits;
mod types;
pub mod xcursor;

pub use error::{DecodeError, Result};
pub use traits::ImageSink;
pub use types::{
    BYTES_PER_PIXEL, COMMENT_CHUNK_TYPE, ContainerHeader, DIRECTORY_ENTRY_SIZE, DecodedImage,
    DirectoryEntry, FILE_HEADER_SIZE, IMAGE_CHUNK_TYPE, IMAGE_HEADER_SIZE, ImageChunkHeader,
    ImageSummary, XCURSOR_MAGIC,
};
pub use xcursor::{decode, list_images};
