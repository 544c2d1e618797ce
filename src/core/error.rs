use thiserror::Error;

/// Reason a pointer argument was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("negative block offset {0} not allowed")]
    NegativeBlockOffset(i64),

    #[error("negative block address {0} not allowed")]
    NegativeBlockAddress(i64),

    #[error("block offset {0} too large")]
    BlockOffsetTooLarge(u64),

    #[error("block address {0} too large")]
    BlockAddressTooLarge(u64),

    #[error("span end {end:#x} precedes start {start:#x}")]
    InvertedSpan { start: u64, end: u64 },
}

#[derive(Error, Debug)]
pub enum VfpError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error("Block offset {offset} lies past the end of a {block_len}-byte block")]
    OffsetOutOfBlock { offset: u16, block_len: usize },

    #[error("Invalid line format configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VfpError {
    /// The rejected argument, if this is an argument error
    pub fn argument(&self) -> Option<ArgumentError> {
        match self {
            VfpError::InvalidArgument(reason) => Some(*reason),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VfpError>;
