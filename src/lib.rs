/*!
# Algo Registry

Algorithm resolution and diagnostic composition for a crypto message
framework.

## Overview

This library sits between user or config supplied algorithm names and the
crypto provider:

- Resolves cipher and digest names to provider handles, with a fixed
  fallback (`aes256cbc`, `sha512`) for unrecognized names
- Keys cipher handles into RustCrypto encryptor/decryptor state
- Validates algorithm names before any cryptographic operation
- Encodes bytes as lowercase hex and checks hex digest strings
- Composes one diagnostic message from the provider error queue or, if
  that is empty, the OS `errno`
- Writes catalog listings with a configurable prefix

It does not encrypt, manage keys or parse configuration files.
*/

// Core components
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::error::{Error, Result, AlgorithmKind};
pub use crate::core::constants::{VERSION, DEFAULT_PREFIX};

// Re-export algorithm selection
pub use crate::core::crypto::{
    Cipher, CipherMode, Digest, CipherAlgorithm, DigestAlgorithm, Encryptor, Decryptor, GcmContext
};
pub use crate::core::crypto::registry::{
    AlgorithmRegistry, get_registry,
    resolve_cipher, resolve_digest, lookup_cipher, lookup_digest,
    is_valid_cipher_name, is_valid_digest_name,
    list_cipher_names, list_digest_names
};

// Re-export encoding helpers
pub use crate::core::encoding::{encode_hex, decode_hex, looks_like_hex_hash};

// Re-export diagnostics
pub use crate::core::diagnostics::{
    DiagnosticComposer, ErrorReport, ErrorSource, ProviderErrorQueue, OsError,
    ErrorCode, Library, compose_error
};

// Re-export reporting
pub use crate::core::report::{ReportConfig, Reporter};

/// Provider-facing error queue and errno access
pub mod diagnostics {
    pub use crate::core::diagnostics::error_queue::{
        MAX_QUEUED_ERRORS, reasons, push_error, pop_error, peek_error, clear_errors,
        pending_errors, error_string, load_error_strings
    };
    pub use crate::core::diagnostics::os_error::{errno, describe_os_error};
    #[cfg(has_errno_location)]
    pub use crate::core::diagnostics::os_error::set_errno;
}
