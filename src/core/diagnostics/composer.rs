/*!
Diagnostic message composition.

A composer holds two error sources in priority order. `compose` asks the
provider queue first and the OS indicator only when the queue is empty,
so a message never carries more than one suffix.
*/

use crate::core::constants::DIAGNOSTIC_SEPARATOR;
use crate::core::diagnostics::error_queue::ProviderErrorQueue;
use crate::core::diagnostics::os_error::OsError;
use crate::core::diagnostics::ErrorSource;

/// Merges provider and OS error state into one message
#[derive(Debug, Clone, Default)]
pub struct DiagnosticComposer<P = ProviderErrorQueue, O = OsError> {
    provider: P,
    os: O,
}

impl DiagnosticComposer {
    /// Create a composer over the thread's provider queue and errno
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: ErrorSource, O: ErrorSource> DiagnosticComposer<P, O> {
    /// Create a composer over custom sources
    pub fn with_sources(provider: P, os: O) -> Self {
        Self { provider, os }
    }

    /// Append the highest-priority pending error to `base`
    ///
    /// A provider error is consumed from its queue. Returns `base`
    /// unchanged when neither source reports anything.
    pub fn compose(&self, base: &str) -> String {
        let report = self.provider.next_error().or_else(|| self.os.next_error());

        match report {
            Some(report) => {
                log::trace!("Composing diagnostic with error code {}", report.code);
                let mut message = String::with_capacity(
                    base.len() + DIAGNOSTIC_SEPARATOR.len() + report.description.len(),
                );
                message.push_str(base);
                message.push_str(DIAGNOSTIC_SEPARATOR);
                message.push_str(&report.description);
                message
            }
            None => base.to_string(),
        }
    }
}

/// Compose a diagnostic from the calling thread's error state
pub fn compose_error(base: &str) -> String {
    DiagnosticComposer::new().compose(base)
}
