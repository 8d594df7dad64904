/*!
Thread-local error queue of the crypto provider.

Provider adapters push an `ErrorCode` when a primitive call fails; the
diagnostic composer pops it to build a message. Each thread has its own
queue, so errors must be read on the thread that raised them.

Error codes pack the reporting library into the top 8 bits and the reason
into the low 24 bits. Human-readable reason strings live in a table that is
built on first use.
*/

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use once_cell::sync::Lazy;

use crate::core::diagnostics::{ErrorReport, ErrorSource};

/// Maximum number of errors held per thread; older entries are dropped
pub const MAX_QUEUED_ERRORS: usize = 16;

const REASON_BITS: u32 = 24;
const REASON_MASK: u32 = (1 << REASON_BITS) - 1;

/// Library that raised a provider error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Library {
    /// Operating system call made by the provider
    Sys = 2,
    /// Envelope (high level cipher/digest) routines
    Evp = 6,
    /// Random number generation
    Rand = 36,
    /// Provider loading and dispatch
    Provider = 57,
}

impl Library {
    /// Decode a library number
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            2 => Some(Library::Sys),
            6 => Some(Library::Evp),
            36 => Some(Library::Rand),
            57 => Some(Library::Provider),
            _ => None,
        }
    }

    /// Get the library number
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Human-readable library name
    pub fn name(&self) -> &'static str {
        match self {
            Library::Sys => "system library",
            Library::Evp => "digital envelope routines",
            Library::Rand => "random number generator",
            Library::Provider => "provider routines",
        }
    }
}

/// Well-known reason codes
pub mod reasons {
    pub const BAD_DECRYPT: u32 = 100;
    pub const WRONG_FINAL_BLOCK_LENGTH: u32 = 109;
    pub const INVALID_KEY_LENGTH: u32 = 130;
    pub const INVALID_IV_LENGTH: u32 = 194;
    pub const DATA_NOT_MULTIPLE_OF_BLOCK_LENGTH: u32 = 138;
    pub const UNSUPPORTED_CIPHER: u32 = 107;
    pub const UNSUPPORTED_DIGEST: u32 = 108;
    pub const TAG_MISMATCH: u32 = 196;
    pub const ENTROPY_SOURCE_FAILURE: u32 = 119;
    pub const PROVIDER_NOT_FOUND: u32 = 101;
}

/// A packed provider error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(u32);

impl ErrorCode {
    /// Pack a library and reason into a code
    pub fn new(library: Library, reason: u32) -> Self {
        ErrorCode(((library.as_u8() as u32) << REASON_BITS) | (reason & REASON_MASK))
    }

    /// Wrap a raw packed code
    pub fn from_raw(raw: u32) -> Self {
        ErrorCode(raw)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }

    /// The reporting library, if it is a known one
    pub fn library(&self) -> Option<Library> {
        Library::from_u8((self.0 >> REASON_BITS) as u8)
    }

    pub fn reason(&self) -> u32 {
        self.0 & REASON_MASK
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&error_string(*self))
    }
}

static REASON_STRINGS: Lazy<HashMap<u32, &'static str>> = Lazy::new(|| {
    log::debug!("Loading provider error strings");
    HashMap::from([
        (reasons::BAD_DECRYPT, "bad decrypt"),
        (reasons::WRONG_FINAL_BLOCK_LENGTH, "wrong final block length"),
        (reasons::INVALID_KEY_LENGTH, "invalid key length"),
        (reasons::INVALID_IV_LENGTH, "invalid iv length"),
        (reasons::DATA_NOT_MULTIPLE_OF_BLOCK_LENGTH, "data not multiple of block length"),
        (reasons::UNSUPPORTED_CIPHER, "unsupported cipher"),
        (reasons::UNSUPPORTED_DIGEST, "unsupported digest"),
        (reasons::TAG_MISMATCH, "tag mismatch"),
        (reasons::ENTROPY_SOURCE_FAILURE, "entropy source failure"),
        (reasons::PROVIDER_NOT_FOUND, "provider not found"),
    ])
});

thread_local! {
    static QUEUE: RefCell<VecDeque<ErrorCode>> = RefCell::new(VecDeque::with_capacity(MAX_QUEUED_ERRORS));
}

/// Load the reason string table if it is not loaded yet
pub fn load_error_strings() {
    Lazy::force(&REASON_STRINGS);
}

/// Describe an error code as `error:<CODE>:<library>:<reason>`
pub fn error_string(code: ErrorCode) -> String {
    let library = match code.library() {
        Some(library) => library.name().to_string(),
        None => format!("lib({})", code.raw() >> REASON_BITS),
    };
    let reason = match REASON_STRINGS.get(&code.reason()) {
        Some(reason) => reason.to_string(),
        None => format!("reason({})", code.reason()),
    };
    format!("error:{:08X}:{}:{}", code.raw(), library, reason)
}

/// Record an error on this thread's queue
pub fn push_error(code: ErrorCode) {
    QUEUE.with(|queue| {
        let mut queue = queue.borrow_mut();
        if queue.len() == MAX_QUEUED_ERRORS {
            queue.pop_front();
        }
        queue.push_back(code);
    });
}

/// Remove and return the oldest pending error
pub fn pop_error() -> Option<ErrorCode> {
    QUEUE.with(|queue| queue.borrow_mut().pop_front())
}

/// Return the oldest pending error without removing it
pub fn peek_error() -> Option<ErrorCode> {
    QUEUE.with(|queue| queue.borrow().front().copied())
}

/// Drop every pending error on this thread
pub fn clear_errors() {
    QUEUE.with(|queue| queue.borrow_mut().clear());
}

/// Number of pending errors on this thread
pub fn pending_errors() -> usize {
    QUEUE.with(|queue| queue.borrow().len())
}

/// `ErrorSource` over the current thread's provider queue
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderErrorQueue;

impl ErrorSource for ProviderErrorQueue {
    fn next_error(&self) -> Option<ErrorReport> {
        let code = pop_error()?;
        load_error_strings();
        Some(ErrorReport {
            code: code.raw() as i64,
            description: error_string(code),
        })
    }
}
