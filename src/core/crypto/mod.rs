/*!
Cryptographic algorithm selection.

This module provides the algorithm types, the provider handles and
the registry that resolves names to handles.
*/

// Algorithm enums and size constants
pub mod types;

// Primitive handles
pub mod provider;

// Keyed provider state
pub mod context;

// Registry for algorithm management
pub mod registry;

pub use provider::{Cipher, CipherMode, Digest};
pub use context::{Decryptor, Encryptor, GcmContext};
pub use types::{CipherAlgorithm, DigestAlgorithm};
pub use registry::{
    get_registry, resolve_cipher, resolve_digest, lookup_cipher, lookup_digest,
    is_valid_cipher_name, is_valid_digest_name, list_cipher_names, list_digest_names
};
