use crate::error::{DecodeError, Result};
use crate::types::{
    ContainerHeader, DIRECTORY_ENTRY_SIZE, DirectoryEntry, FILE_HEADER_SIZE, XCURSOR_MAGIC,
};

/// Validates the fixed header and reads the chunk directory that follows it.
///
/// The magic is checked before anything else is read, so a foreign file is
/// rejected with [`DecodeError::Format`] even if it is too short to hold a
/// directory. Entries are returned in directory order.
pub fn read_container(data: &[u8]) -> Result<(ContainerHeader, Vec<DirectoryEntry>)> {
    read_magic(data)?;

    let fixed: &[u8; FILE_HEADER_SIZE] = data
        .get(..FILE_HEADER_SIZE)
        .and_then(|raw| raw.try_into().ok())
        .ok_or_else(|| DecodeError::truncated("file header", 0, FILE_HEADER_SIZE, data.len()))?;
    let header = ContainerHeader::from_bytes(fixed);

    let directory_len = header.chunk_count as u64 * DIRECTORY_ENTRY_SIZE as u64;
    let available = (data.len() - FILE_HEADER_SIZE) as u64;
    if directory_len > available {
        return Err(DecodeError::Truncated {
            what: "chunk directory",
            offset: FILE_HEADER_SIZE as u64,
            needed: directory_len,
            available,
        });
    }

    let (directory, _) = data[FILE_HEADER_SIZE..FILE_HEADER_SIZE + directory_len as usize]
        .as_chunks::<DIRECTORY_ENTRY_SIZE>();
    let entries = directory.iter().map(DirectoryEntry::from_bytes).collect();

    Ok((header, entries))
}

fn read_magic(data: &[u8]) -> Result<[u8; 4]> {
    let mut found = [0u8; 4];
    let available = data.len().min(4);
    found[..available].copy_from_slice(&data[..available]);

    if found[..available] != XCURSOR_MAGIC[..available] {
        return Err(DecodeError::Format {
            expected: XCURSOR_MAGIC,
            found,
        });
    }
    if available < 4 {
        return Err(DecodeError::truncated("magic", 0, 4, available));
    }

    Ok(found)
}
