/*!
Registry for cipher and digest algorithms.

This module provides the name-to-handle catalogs used to turn
user or config supplied algorithm names into provider primitives.
*/

pub mod manager;

// Re-export registry manager functions
pub use manager::{
    AlgorithmRegistry,
    CatalogEntry,
    get_registry,
    resolve_cipher,
    resolve_digest,
    lookup_cipher,
    lookup_digest,
    is_valid_cipher_name,
    is_valid_digest_name,
    list_cipher_names,
    list_digest_names,
};
