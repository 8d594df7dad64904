/*!
Diagnostics for failed provider and OS calls.

Two independent error sources feed the composer: the provider's
thread-local error queue and the OS `errno` indicator. Both are
per-thread, so diagnostics must be composed right after the failing call
on the same thread.
*/

pub mod composer;
pub mod error_queue;
pub mod os_error;

pub use composer::{DiagnosticComposer, compose_error};
pub use error_queue::{
    ErrorCode, Library, ProviderErrorQueue, clear_errors, error_string, load_error_strings,
    peek_error, pending_errors, pop_error, push_error,
};
pub use os_error::{OsError, describe_os_error, errno};
#[cfg(has_errno_location)]
pub use os_error::set_errno;

/// A pending error read from a source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// Source-specific error code
    pub code: i64,
    /// Human-readable description
    pub description: String,
}

/// A source of pending errors
pub trait ErrorSource {
    /// Return the next pending error, or `None` if there is none
    ///
    /// Sources backed by a queue consume the returned entry.
    fn next_error(&self) -> Option<ErrorReport>;
}
