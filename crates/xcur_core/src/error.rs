use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Invalid format: expected magic {expected:?}, found {found:?}")]
    Format { expected: [u8; 4], found: [u8; 4] },

    #[error("Truncated {what} at offset {offset}: need {needed} bytes, {available} available")]
    Truncated {
        what: &'static str,
        offset: u64,
        needed: u64,
        available: u64,
    },

    #[error("Corrupt image chunk at offset {offset}: {reason}")]
    CorruptChunk { offset: u64, reason: String },

    #[error("No image chunk found in {entries} directory entries")]
    NoImageFound { entries: usize },
}

impl DecodeError {
    pub(crate) fn truncated(
        what: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    ) -> Self {
        Self::Truncated {
            what,
            offset: offset as u64,
            needed: needed as u64,
            available: available as u64,
        }
    }

    pub(crate) fn corrupt(offset: u32, reason: impl Into<String>) -> Self {
        Self::CorruptChunk {
            offset: offset as u64,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
