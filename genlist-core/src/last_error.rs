//! Process-wide last-error register.
//!
//! Every failing list operation stores its [`ErrorKind`] here before
//! returning. The register is shared by all lists and all threads: the
//! last writer wins, and a successful call never clears it. Callers that
//! need reliable diagnostics should inspect the returned [`Error`]
//! instead; the register exists for C callers that only see a boolean.

use crate::error::{Error, ErrorKind};
use std::sync::atomic::{AtomicI32, Ordering};

static LAST_ERROR: AtomicI32 = AtomicI32::new(ErrorKind::None.code());

/// Returns the kind of the most recent failure across the process.
pub fn last_error() -> ErrorKind {
    ErrorKind::from_code(LAST_ERROR.load(Ordering::Relaxed)).unwrap_or_default()
}

/// Clears the register back to [`ErrorKind::None`].
pub fn reset_last_error() {
    LAST_ERROR.store(ErrorKind::None.code(), Ordering::Relaxed);
}

/// Stores `err` in the register and hands it back.
///
/// List operations call this themselves; it is public for outer layers
/// that detect failures of their own, such as null handles.
pub fn record(err: Error) -> Error {
    tracing::debug!(kind = %err.kind(), "list operation failed: {err}");
    LAST_ERROR.store(err.kind().code(), Ordering::Relaxed);
    err
}

/// Records `err` and returns it as `Err`.
pub(crate) fn fail<T>(err: Error) -> crate::Result<T> {
    Err(record(err))
}
