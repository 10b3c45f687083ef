use core::fmt;

use thiserror::Error;

/// Errors surfaced by [`GrowableCharBuffer`](crate::GrowableCharBuffer).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Growing the buffer would overflow `usize`, or the allocator refused
    /// the request.
    #[error("cannot grow a buffer of {length} bytes by {additional} more")]
    OutOfCapacity {
        /// Bytes written when the growth was requested.
        length: usize,
        /// Bytes the caller asked room for.
        additional: usize,
    },
    /// The format specifier does not apply to the kind of value given.
    #[error("format spec {spec} does not apply to {kind} values")]
    FormatSpecMismatch {
        /// Kind of the value, e.g. `"integer"` or `"date"`.
        kind: &'static str,
        /// Short description of the rejected specifier.
        spec: &'static str,
    },
    /// The underlying formatter failed, e.g. on a malformed date pattern.
    #[error("value formatting failed")]
    Format(#[from] fmt::Error),
}
