use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// A cursor file mapped read-only into memory.
///
/// The mapping is taken once at open time; decoding then runs over
/// [`as_bytes`](Self::as_bytes) without further I/O.
pub struct CursorFile {
    mmap: Mmap,
    path: PathBuf,
}

impl CursorFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let file = File::open(&path).map_err(|source| IoError::Open {
            path: path.clone(),
            source,
        })?;

        let len = file
            .metadata()
            .map_err(|source| IoError::Open {
                path: path.clone(),
                source,
            })?
            .len();
        if len == 0 {
            return Err(IoError::Empty(path));
        }

        // Safety: the mapping is read-only and lives as long as `self`.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|source| IoError::Map {
            path: path.clone(),
            source,
        })?;

        #[cfg(unix)]
        {
            use memmap2::Advice;
            let _ = mmap.advise(Advice::Sequential);
        }

        Ok(Self { mmap, path })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
