mod error;
mod mmap_reader;

pub use error::{IoError, Result};
pub use mmap_reader::CursorFile;
