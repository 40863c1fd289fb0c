/// Custom Result type for hsf operations, wrapping the custom [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hsf library, encompassing all possible error
/// cases that can occur while encoding or decoding HSF streams.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Errors that occur while encoding an input sequence
    #[error("Error encoding sequence: {0}")]
    EncodeError(#[from] EncodeError),

    /// Errors that occur while decoding an HSF stream
    #[error("Error decoding stream: {0}")]
    DecodeError(#[from] DecodeError),

    /// Errors related to file suffix handling
    #[error("Error processing path: {0}")]
    ExtensionError(#[from] ExtensionError),

    /// Standard I/O errors
    #[error("Error with IO: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors raised while validating and encoding an input sequence
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// A byte outside {A,C,G,T,N} was found in the input
    ///
    /// A single trailing non-symbol byte (e.g. a newline) is stripped before
    /// validation; any other offender is fatal.
    #[error("Invalid symbol 0x{byte:02x} at offset {offset}")]
    InvalidSymbol { byte: u8, offset: usize },

    /// The input contained no symbols (after the optional trailing strip)
    #[error("Input is empty")]
    EmptyInput,

    /// The input holds more symbols than a 32-bit segment length can frame
    #[error("Input of {0} symbols exceeds the 32-bit length field")]
    InputTooLarge(usize),
}

/// Errors raised while decoding an HSF stream
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// An InfoByte outside the valid topology range was read
    ///
    /// Valid topology ids are 0..=164; 255 is reserved and never written.
    #[error("Invalid topology id: {0} (valid ids are 0..=164)")]
    InvalidTopology(u8),

    /// A segment declared a negative symbol count
    #[error("Invalid segment length: {0}")]
    InvalidLength(i32),

    /// The stream ended in the middle of a segment
    #[error("Unexpected end of stream while reading segment {0}")]
    Truncated(&'static str),

    /// A payload bit path left the decoding tree
    ///
    /// Cannot occur on well-formed streams; indicates corruption.
    #[error("Invalid code path in payload for topology {0}")]
    InvalidCode(u8),
}

/// Errors related to file suffixes expected by the CLI
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ExtensionError {
    /// When the extension is not supported
    #[error("Unsupported extension in path: {0}")]
    UnsupportedExtension(String),
}
