/*!
Error handling for the algorithm registry.

Name resolution and validation never fail; these errors only come from the
strict parsing, hex decoding, cipher keying and reporting surfaces.
*/

use std::fmt;
use std::io;
use thiserror::Error;

use crate::core::diagnostics::error_queue::ErrorCode;

/// Result type for the algorithm registry
pub type Result<T> = std::result::Result<T, Error>;

/// Which catalog a name was looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    /// Symmetric cipher catalog
    Cipher,
    /// Message digest catalog
    Digest,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::Cipher => write!(f, "cipher"),
            AlgorithmKind::Digest => write!(f, "digest"),
        }
    }
}

/// Error type for the algorithm registry
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while writing a listing
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Strict parse of an algorithm name that is not in the catalog
    #[error("Unknown {kind} algorithm: {name:?}")]
    UnknownAlgorithm {
        kind: AlgorithmKind,
        name: String,
    },

    /// Hex input with an odd number of digits
    #[error("Hex string has odd length {0}")]
    OddHexLength(usize),

    /// Hex input containing a non-hex character
    #[error("Invalid hex character {found:?} at position {position}")]
    InvalidHex {
        position: usize,
        found: char,
    },

    /// Provider rejected a cipher setup; the code is also on the error queue
    #[error("Provider error ({0})")]
    Provider(ErrorCode),
}

impl Error {
    /// Create an UnknownAlgorithm error
    pub fn unknown_algorithm(kind: AlgorithmKind, name: &str) -> Self {
        Error::UnknownAlgorithm {
            kind,
            name: name.to_string(),
        }
    }
}

/// Convert from Error to io::Error (for compatibility)
impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::Io(io_error) => io_error,
            other => io::Error::new(io::ErrorKind::InvalidInput, other.to_string()),
        }
    }
}
