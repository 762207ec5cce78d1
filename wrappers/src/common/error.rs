use ruc::RucError;
use thiserror::Error;

/// Failures surfaced by the text codec.
///
/// Lookups never fail: a missing key or value is reported through
/// `Option`/`bool` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortedError {
    /// A key or a value could not be encoded, no output was produced.
    #[error("Encoding error: {0}")]
    Encode(String),

    /// The input text is malformed or does not match the element types.
    #[error("Decoding error: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, SortedError>;

impl SortedError {
    /// Keeps the root cause only, the full chain goes to the log.
    pub(crate) fn encode(e: Box<dyn RucError>) -> Self {
        SortedError::Encode(e.get_lowest_msg())
    }

    pub(crate) fn decode(e: Box<dyn RucError>) -> Self {
        SortedError::Decode(e.get_lowest_msg())
    }
}
