/*!
Constants for the algorithm registry.

This module contains the catalog names, fallback selections and
reporting defaults.
*/

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default prefix for diagnostic listings
pub const DEFAULT_PREFIX: &str = "opmsg: ";

/// Marker appended to the default entry of a listing
pub const DEFAULT_MARKER: &str = " (default)";

/// Separator between a base message and an error description
pub const DIAGNOSTIC_SEPARATOR: &str = ":";

/// Cipher selection constants
pub mod ciphers {
    use crate::core::crypto::types::CipherAlgorithm;

    /// Cipher substituted for unrecognized names
    pub const FALLBACK: CipherAlgorithm = CipherAlgorithm::Aes256Cbc;

    /// "No encryption" selection; valid, but never resolved
    pub const NULL: &str = "null";
}

/// Digest selection constants
pub mod digests {
    use crate::core::crypto::types::DigestAlgorithm;

    /// Digest substituted for unrecognized names
    pub const FALLBACK: DigestAlgorithm = DigestAlgorithm::Sha512;
}
