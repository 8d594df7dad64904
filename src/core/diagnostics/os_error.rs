/*!
OS last-error indicator.

Reads the calling thread's `errno` and renders codes as the platform's
error text. Reading never resets the indicator. Overwriting is only
available on targets whose libc exposes the errno slot (see `build.rs`).
*/

use std::io;

use crate::core::diagnostics::{ErrorReport, ErrorSource};

#[cfg(errno_symbol = "__errno_location")]
unsafe fn errno_location() -> *mut libc::c_int {
    unsafe { libc::__errno_location() }
}

#[cfg(errno_symbol = "__error")]
unsafe fn errno_location() -> *mut libc::c_int {
    unsafe { libc::__error() }
}

#[cfg(errno_symbol = "__errno")]
unsafe fn errno_location() -> *mut libc::c_int {
    unsafe { libc::__errno() }
}

#[cfg(errno_symbol = "___errno")]
unsafe fn errno_location() -> *mut libc::c_int {
    unsafe { libc::___errno() }
}

/// Read the calling thread's last OS error code
pub fn errno() -> i32 {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// Overwrite the calling thread's last OS error code
#[cfg(has_errno_location)]
pub fn set_errno(code: i32) {
    // errno_location is always valid for the calling thread
    unsafe { *errno_location() = code };
}

/// Describe an OS error code the way `strerror` does
pub fn describe_os_error(code: i32) -> String {
    let text = io::Error::from_raw_os_error(code).to_string();
    // std appends " (os error N)"
    match text.rfind(" (os error") {
        Some(end) => text[..end].to_string(),
        None => text,
    }
}

/// `ErrorSource` over the calling thread's `errno`
#[derive(Debug, Clone, Copy, Default)]
pub struct OsError;

impl ErrorSource for OsError {
    fn next_error(&self) -> Option<ErrorReport> {
        let code = errno();
        if code == 0 {
            return None;
        }
        Some(ErrorReport {
            code: code as i64,
            description: describe_os_error(code),
        })
    }
}

#[cfg(all(test, has_errno_location))]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_read_errno() {
        set_errno(libc::ENOENT);
        assert_eq!(errno(), libc::ENOENT);
        set_errno(0);
        assert_eq!(errno(), 0);
    }

    #[test]
    fn test_describe_os_error() {
        assert_eq!(describe_os_error(libc::ENOENT), "No such file or directory");
        assert!(!describe_os_error(libc::EACCES).is_empty());
    }

    #[test]
    fn test_description_strips_code() {
        let text = describe_os_error(libc::ENOENT);
        assert!(!text.contains("os error"), "{}", text);
    }

    #[test]
    fn test_source_reads_without_reset() {
        set_errno(libc::EACCES);
        let report = OsError.next_error().unwrap();
        assert_eq!(report.code, libc::EACCES as i64);
        assert_eq!(errno(), libc::EACCES);

        set_errno(0);
        assert!(OsError.next_error().is_none());
    }
}
