use thiserror::Error;

/// Failures raised while unpacking the bit stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The stream ended with a tile count other than the expected total.
    #[error("expected {expected} tiles, got {actual}")]
    TileCount { expected: usize, actual: usize },

    /// A field value has no entry in the symbol table.
    #[error("symbol index {index} at bit {bit} is outside the symbol table")]
    InvalidIndex { index: usize, bit: usize },

    /// A field started inside the buffer but its bits run past the last byte.
    #[error("field at bit {bit} runs past the end of the buffer")]
    Truncated { bit: usize },
}

#[derive(Error, Debug)]
pub enum BeachError {
    /// The requested codec configuration cannot be built.
    #[error("config error: {0}")]
    Config(String),

    /// Packed data does not match the schema it was decoded with.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Malformed base64 transport of the packed asset.
    #[error("asset error: {0}")]
    Asset(String),

    /// Page number outside `1..=PAGE_COUNT`.
    #[error("page {0} is out of range")]
    PageOutOfRange(usize),

    /// Grid snapshot or export could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
