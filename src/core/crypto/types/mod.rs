/*!
Core types for cryptographic algorithm selection.

This module provides the algorithm enums and primitive size constants
used throughout the registry.
*/

pub mod algorithms;
pub mod constants;

// Re-export core types for easier access
pub use algorithms::{CipherAlgorithm, DigestAlgorithm};
