//! A stack-first, append-only string buffer.
//!
//! [`GrowableCharBuffer`] starts on a region the caller lends it (usually a
//! local array) and moves to a heap region of its own only when that region
//! runs out. Text that fits in the initial region never touches the
//! allocator.
//!
//! ```rust
//! use valuebuf::{FormatSpec, GrowableCharBuffer};
//!
//! let mut region = [0u8; 64];
//! let mut buf = GrowableCharBuffer::with_region(&mut region);
//! buf.append_text("total:")?;
//! buf.append_formatted(12.5f64, Some(FormatSpec::Fixed(2)))?;
//! assert!(!buf.is_spilled());
//! assert_eq!(buf.materialize(), "total:12.50");
//! # Ok::<(), valuebuf::BufferError>(())
//! ```
use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::{
    BufferError, FormatSpec, Scalar,
    storage::{Storage, allocate_region},
    writer::RegionWriter,
};

/// Signals that a formatted append must go through a temporary `String`,
/// either because the value has no direct form or because the spare region
/// is too short for it.
#[derive(Debug)]
pub(crate) struct UnsupportedDirectFormat;

/// Append-only text accumulator over a borrowed or owned byte region.
///
/// The lifetime `'r` ties the buffer to the region passed to
/// [`with_region`](Self::with_region); the borrow checker therefore keeps the
/// buffer, and any [`as_str`](Self::as_str) view of it, from outliving a
/// stack array it was built on. [`materialize`](Self::materialize) hands out
/// an owned `String` that is free to escape.
///
/// When an append does not fit, the buffer allocates an owned region with
/// room for `max(len + needed, 2 * capacity)` bytes, copies what it has
/// written, and continues there.
pub struct GrowableCharBuffer<'r> {
    storage: Storage<'r>,
    len: usize,
    growth_events: usize,
}

impl<'r> GrowableCharBuffer<'r> {
    /// Wraps a caller-owned region. Does not allocate.
    pub fn with_region(region: &'r mut [u8]) -> Self {
        Self {
            storage: Storage::Borrowed(region),
            len: 0,
            growth_events: 0,
        }
    }

    /// Creates a buffer that owns a region of exactly `capacity` bytes.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails, like [`String::with_capacity`].
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Storage::Owned(Vec::with_capacity(capacity)),
            len: 0,
            growth_events: 0,
        }
    }

    /// Like [`with_capacity`](Self::with_capacity) but reports allocation
    /// failure instead of panicking.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfCapacity`] if the region cannot be allocated.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, BufferError> {
        let region = allocate_region(capacity, &[]).ok_or(BufferError::OutOfCapacity {
            length: 0,
            additional: capacity,
        })?;
        Ok(Self {
            storage: Storage::Owned(region),
            len: 0,
            growth_events: 0,
        })
    }

    /// Bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the current region in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Bytes that can still be appended without growing.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// Whether the buffer has moved onto a region it allocated itself.
    ///
    /// A buffer built with [`with_capacity`](Self::with_capacity) is owned
    /// from the start.
    #[must_use]
    pub fn is_spilled(&self) -> bool {
        self.storage.is_owned()
    }

    /// How many times the buffer reallocated.
    #[must_use]
    pub fn growth_events(&self) -> usize {
        self.growth_events
    }

    /// The text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        let written = &self.storage.as_slice()[..self.len];
        debug_assert!(core::str::from_utf8(written).is_ok());
        // Only whole `&str` pieces are ever copied into `[0, len)`.
        unsafe { core::str::from_utf8_unchecked(written) }
    }

    /// Ensures at least `additional` more bytes fit without a further
    /// reallocation, growing with the doubling policy if needed.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfCapacity`] if `len + additional` overflows or the
    /// allocator refuses the new region. The buffer is unchanged on error.
    pub fn reserve(&mut self, additional: usize) -> Result<(), BufferError> {
        if additional <= self.remaining() {
            return Ok(());
        }
        let out_of_capacity = BufferError::OutOfCapacity {
            length: self.len,
            additional,
        };
        let required = self.len.checked_add(additional).ok_or(out_of_capacity.clone())?;
        let capacity = self.capacity();
        let new_capacity = required.max(capacity.saturating_mul(2));
        let region = allocate_region(new_capacity, &self.storage.as_slice()[..self.len])
            .ok_or(out_of_capacity)?;

        tracing::trace!(
            length = self.len,
            from = capacity,
            to = new_capacity,
            borrowed = !self.storage.is_owned(),
            "growing buffer"
        );
        // Dropping an owned region frees it; a borrowed one is just released.
        self.storage = Storage::Owned(region);
        self.growth_events += 1;
        Ok(())
    }

    /// Appends `text`, growing first if it does not fit.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfCapacity`] if the buffer cannot grow.
    pub fn append_text(&mut self, text: &str) -> Result<(), BufferError> {
        if text.is_empty() {
            return Ok(());
        }
        self.reserve(text.len())?;
        self.storage.put(self.len, text.as_bytes());
        self.len += text.len();
        Ok(())
    }

    /// Appends a single character.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfCapacity`] if the buffer cannot grow.
    pub fn append_char(&mut self, c: char) -> Result<(), BufferError> {
        self.append_text(c.encode_utf8(&mut [0; 4]))
    }

    /// Appends `c` `count` times, reserving the whole run up front.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfCapacity`] if the run's size overflows or the
    /// buffer cannot grow.
    pub fn append_repeated(&mut self, c: char, count: usize) -> Result<(), BufferError> {
        let mut utf8 = [0; 4];
        let encoded = c.encode_utf8(&mut utf8);
        let total = encoded
            .len()
            .checked_mul(count)
            .ok_or(BufferError::OutOfCapacity {
                length: self.len,
                additional: usize::MAX,
            })?;
        self.reserve(total)?;
        for _ in 0..count {
            self.append_text(encoded)?;
        }
        Ok(())
    }

    /// Appends `value` rendered with `spec`.
    ///
    /// Values that support it are formatted straight into the spare region;
    /// anything else, or anything that turns out not to fit, is formatted
    /// into a temporary `String` and appended from there. Either way the
    /// bytes match [`Scalar::render`].
    ///
    /// # Errors
    ///
    /// [`BufferError::FormatSpecMismatch`] if `spec` does not apply to the
    /// value, [`BufferError::Format`] if the formatter fails, and
    /// [`BufferError::OutOfCapacity`] if the buffer cannot grow. Nothing is
    /// appended on error.
    pub fn append_formatted<'v>(
        &mut self,
        value: impl Into<Scalar<'v>>,
        spec: Option<FormatSpec<'_>>,
    ) -> Result<(), BufferError> {
        let value = value.into();
        value.check_spec(spec)?;
        match self.try_write_direct(&value, spec) {
            Ok(result) => result,
            Err(UnsupportedDirectFormat) => {
                tracing::debug!(
                    kind = value.kind(),
                    remaining = self.remaining(),
                    "formatting through a temporary string"
                );
                let rendered = value.render(spec)?;
                self.append_text(&rendered)
            }
        }
    }

    /// Formats `value` into the spare region.
    fn try_write_direct(
        &mut self,
        value: &Scalar<'_>,
        spec: Option<FormatSpec<'_>>,
    ) -> Result<Result<(), BufferError>, UnsupportedDirectFormat> {
        if !value.supports_direct_write() {
            return Err(UnsupportedDirectFormat);
        }
        self.write_direct_with(|writer| value.write_to(spec, writer))
    }

    /// Runs `write` against a bounded writer over the spare region. The outer
    /// `Err` asks the caller to fall back; the inner result is the outcome of
    /// a direct write that did happen.
    ///
    /// Running out of room always means falling back, even when `write`
    /// swallowed the sink's error and reported success. Nothing is kept from
    /// a write that is not accepted.
    pub(crate) fn write_direct_with(
        &mut self,
        write: impl FnOnce(&mut RegionWriter<'_>) -> Result<(), BufferError>,
    ) -> Result<Result<(), BufferError>, UnsupportedDirectFormat> {
        let start = self.len;
        let mut writer = self.storage.spare_writer(start);
        let outcome = write(&mut writer);
        let (written, exhausted) = (writer.written(), writer.is_exhausted());
        if exhausted {
            self.storage.truncate(start);
            return Err(UnsupportedDirectFormat);
        }
        match outcome {
            Ok(()) => {
                self.len = start + written;
                Ok(Ok(()))
            }
            Err(err) => {
                self.storage.truncate(start);
                Ok(Err(err))
            }
        }
    }

    /// Consumes the buffer and returns exactly the text written.
    ///
    /// An owned region is reused for the `String` without copying; a
    /// borrowed region is copied out.
    #[must_use]
    pub fn materialize(self) -> String {
        match self.storage {
            Storage::Borrowed(region) => {
                let written = &region[..self.len];
                debug_assert!(core::str::from_utf8(written).is_ok());
                // Only whole `&str` pieces are ever copied into `[0, len)`.
                String::from(unsafe { core::str::from_utf8_unchecked(written) })
            }
            Storage::Owned(region) => {
                debug_assert_eq!(region.len(), self.len);
                debug_assert!(core::str::from_utf8(&region).is_ok());
                // Only whole `&str` pieces are ever copied into `[0, len)`.
                unsafe { String::from_utf8_unchecked(region) }
            }
        }
    }
}

impl fmt::Write for GrowableCharBuffer<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_text(s).map_err(|_| fmt::Error)
    }
}

impl fmt::Display for GrowableCharBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for GrowableCharBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableCharBuffer")
            .field("text", &self.as_str())
            .field("capacity", &self.capacity())
            .field("spilled", &self.is_spilled())
            .field("growth_events", &self.growth_events)
            .finish()
    }
}

impl From<GrowableCharBuffer<'_>> for String {
    fn from(buffer: GrowableCharBuffer<'_>) -> Self {
        buffer.materialize()
    }
}
