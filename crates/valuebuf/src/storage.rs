use alloc::vec::Vec;

use crate::writer::RegionWriter;

/// The region a [`GrowableCharBuffer`](crate::GrowableCharBuffer) writes into.
///
/// `Borrowed` is memory the caller handed in (typically a stack array); it is
/// never freed here and simply stops being referenced once the buffer moves
/// to `Owned`. `Owned` keeps its length equal to the bytes written, with the
/// rest of the region held as spare capacity, so growing never touches bytes
/// that will not be read.
#[derive(Debug)]
pub(crate) enum Storage<'r> {
    Borrowed(&'r mut [u8]),
    Owned(Vec<u8>),
}

impl Storage<'_> {
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        match self {
            Storage::Borrowed(region) => region.len(),
            Storage::Owned(region) => region.capacity(),
        }
    }

    /// The bytes of the region that can be read. For `Owned` that is exactly
    /// the written prefix; for `Borrowed` it is the whole region.
    #[inline]
    pub(crate) fn as_slice(&self) -> &[u8] {
        match self {
            Storage::Borrowed(region) => &region[..],
            Storage::Owned(region) => &region[..],
        }
    }

    #[inline]
    pub(crate) fn is_owned(&self) -> bool {
        matches!(self, Storage::Owned(_))
    }

    /// Copies `bytes` in at `at`, the current written length. The caller has
    /// already made room for them.
    #[inline]
    pub(crate) fn put(&mut self, at: usize, bytes: &[u8]) {
        match self {
            Storage::Borrowed(region) => region[at..at + bytes.len()].copy_from_slice(bytes),
            Storage::Owned(region) => {
                debug_assert_eq!(region.len(), at);
                debug_assert!(region.capacity() - at >= bytes.len());
                region.extend_from_slice(bytes);
            }
        }
    }

    /// A bounded writer over the unwritten part of the region, starting at
    /// `at`.
    pub(crate) fn spare_writer(&mut self, at: usize) -> RegionWriter<'_> {
        match self {
            Storage::Borrowed(region) => RegionWriter::new(&mut region[at..]),
            Storage::Owned(region) => {
                debug_assert_eq!(region.len(), at);
                RegionWriter::spare(region)
            }
        }
    }

    /// Forgets anything past `len`. A borrowed region needs no work since the
    /// buffer's own length is the source of truth there.
    pub(crate) fn truncate(&mut self, len: usize) {
        if let Storage::Owned(region) = self {
            region.truncate(len);
        }
    }
}

/// Allocates an owned region with room for exactly `capacity` bytes, holding
/// a copy of `prefix`.
///
/// Returns `None` when the allocator refuses the request.
pub(crate) fn allocate_region(capacity: usize, prefix: &[u8]) -> Option<Vec<u8>> {
    debug_assert!(prefix.len() <= capacity);
    let mut region = Vec::new();
    region.try_reserve_exact(capacity).ok()?;
    region.extend_from_slice(prefix);
    Some(region)
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::{Storage, allocate_region};

    #[test]
    fn owned_region_holds_only_the_prefix() {
        let region = allocate_region(16, b"abc").unwrap();
        assert_eq!(region, b"abc");
        assert_eq!(region.capacity(), 16);
    }

    #[test]
    fn truncate_drops_an_abandoned_owned_write() {
        let mut storage = Storage::Owned(allocate_region(8, b"ab").unwrap());
        let mut writer = storage.spare_writer(2);
        writer.write_str("cd").unwrap();
        assert!(writer.write_str("efghij").is_err());
        storage.truncate(2);
        assert_eq!(storage.as_slice(), b"ab");
        assert_eq!(storage.capacity(), 8);
    }
}
