//! A stack-first growable string buffer, and the string-building strategies
//! it is benchmarked against.
//!
//! [`GrowableCharBuffer`] accumulates text in a region the caller lends it
//! (typically a local array) and moves to a heap region only when that runs
//! out. Scalars appended through [`GrowableCharBuffer::append_formatted`] are
//! formatted straight into the spare region when they fit.
//!
//! [`Record`] and [`Strategy`] are the benchmark fixture: one ten-field record
//! rendered by naive concatenation, by `String` with and without pre-sizing,
//! and by the buffer on the stack and on the heap. All strategies produce the
//! same bytes.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod error;
mod options;
mod record;
mod scalar;
mod storage;
mod strategy;
mod writer;

#[cfg(test)]
mod tests;

pub use buffer::GrowableCharBuffer;
pub use error::BufferError;
pub use options::FixtureOptions;
pub use record::Record;
pub use scalar::{FormatSpec, Scalar};
pub use strategy::{
    DATE_PATTERN, DATE_TIME_PATTERN, DECIMAL_DIGITS, Strategy, TIME_PATTERN, write_record,
};
