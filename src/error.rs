//! Error types for building and querying the suggestion index

/// Result type for index operations
pub type SuggestResult<T> = Result<T, SuggestError>;

/// Errors that can occur while building or querying an automaton
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestError {
    /// A word or query contains a byte outside the supported alphabet,
    /// or the reserved separator
    InvalidCharacter {
        /// Byte offset of the offending character
        position: usize,
        /// The offending byte
        byte: u8,
    },
    /// The concatenated corpus is too long to address with 32-bit state ids
    CorpusTooLarge { len: usize },
    /// Configuration values are out of range
    Config(String),
}

impl std::fmt::Display for SuggestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestError::InvalidCharacter { position, byte } => {
                write!(f, "Invalid character 0x{:02x} at byte {}", byte, position)
            }
            SuggestError::CorpusTooLarge { len } => {
                write!(f, "Corpus of {} bytes is too large to index", len)
            }
            SuggestError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for SuggestError {}
