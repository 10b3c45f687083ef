use alloc::vec::Vec;
use core::fmt;

enum Sink<'r> {
    /// A caller's region, written from the front.
    Slice(&'r mut [u8]),
    /// The spare capacity of an owned region; never reallocates.
    Spare(&'r mut Vec<u8>),
}

/// A `fmt::Write` sink over a fixed amount of room.
///
/// Writes are all-or-nothing per `write_str` call: a piece that does not fit
/// is rejected whole and the writer is marked exhausted, so the written
/// prefix is always a sequence of complete `&str` pieces and therefore valid
/// UTF-8.
pub(crate) struct RegionWriter<'r> {
    sink: Sink<'r>,
    written: usize,
    exhausted: bool,
}

impl<'r> RegionWriter<'r> {
    pub(crate) fn new(region: &'r mut [u8]) -> Self {
        Self {
            sink: Sink::Slice(region),
            written: 0,
            exhausted: false,
        }
    }

    /// Appends into `region` without ever growing it past its capacity.
    pub(crate) fn spare(region: &'r mut Vec<u8>) -> Self {
        Self {
            sink: Sink::Spare(region),
            written: 0,
            exhausted: false,
        }
    }

    /// Number of bytes accepted so far.
    pub(crate) fn written(&self) -> usize {
        self.written
    }

    /// Whether a write was rejected for lack of room, as opposed to a
    /// formatter error.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl fmt::Write for RegionWriter<'_> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let accepted = match &mut self.sink {
            Sink::Slice(region) => match region.get_mut(self.written..self.written + s.len()) {
                Some(dst) => {
                    dst.copy_from_slice(s.as_bytes());
                    true
                }
                None => false,
            },
            Sink::Spare(region) => {
                let fits = region.capacity() - region.len() >= s.len();
                if fits {
                    region.extend_from_slice(s.as_bytes());
                }
                fits
            }
        };
        if !accepted {
            self.exhausted = true;
            return Err(fmt::Error);
        }
        self.written += s.len();
        Ok(())
    }
}
