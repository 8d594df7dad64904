//! Core components for the algorithm registry.
//!
//! This module contains algorithm selection, hex encoding, diagnostic
//! composition, reporting and error handling.

// Algorithm selection
pub mod crypto;

// Hex codec and hash validation
pub mod encoding;

// Provider and OS error diagnostics
pub mod diagnostics;

// Catalog listings
pub mod report;

// Registry constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{Error, Result, AlgorithmKind};
pub use self::constants::VERSION;
