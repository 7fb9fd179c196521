//! Bounded, flush-ahead report writer.
//!
//! Stages formatted report bytes in a fixed-capacity buffer and flushes to
//! the underlying sink whenever the next append could overflow. The staging
//! buffer never grows: capacity is fixed at construction, bounded by the
//! 95-character alphabet rather than the input length.
//!
//! Report framing: `{` + duplicates in detection order joined by `", "` +
//! `}` + newline. A scan with no duplicates produces `{}`.

use std::io::{self, Write};

/// Default staging capacity in bytes.
pub const DEFAULT_CAPACITY: usize = 256;

/// Smallest usable capacity: a worst-case append is the 2-byte separator
/// plus one character, and the 2-byte closer must also fit in an empty
/// buffer.
pub const MIN_CAPACITY: usize = 4;

const SEPARATOR: &[u8] = b", ";
const OPENER: u8 = b'{';
const CLOSER: &[u8] = b"}\n";

/// Streams a delimited duplicate report through a fixed-size staging buffer.
///
/// Writes are batched: bytes accumulate in the staging buffer and reach the
/// sink in bounded `write_all` calls. A failed flush aborts immediately;
/// bytes already on the sink stay there.
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    sink: W,
    staging: Vec<u8>,
    capacity: usize,
    first_entry: bool,
    flushes: usize,
}

impl<W: Write> ReportWriter<W> {
    /// Create a writer with the default 256-byte staging buffer and emit
    /// the opening delimiter.
    pub fn new(sink: W) -> io::Result<Self> {
        Self::with_capacity(sink, DEFAULT_CAPACITY)
    }

    /// Create a writer with a custom staging capacity.
    ///
    /// Capacities below [`MIN_CAPACITY`] are clamped up to it; the report
    /// bytes on the sink are identical for every capacity.
    pub fn with_capacity(sink: W, capacity: usize) -> io::Result<Self> {
        let capacity = capacity.max(MIN_CAPACITY);
        let mut writer = Self {
            sink,
            staging: Vec::with_capacity(capacity),
            capacity,
            first_entry: true,
            flushes: 0,
        };
        writer.reserve(1)?;
        writer.staging.push(OPENER);
        Ok(writer)
    }

    /// Append one reported duplicate character.
    pub fn push(&mut self, ch: u8) -> io::Result<()> {
        // Worst case for this step: separator + character.
        self.reserve(SEPARATOR.len() + 1)?;
        if self.first_entry {
            self.first_entry = false;
        } else {
            self.staging.extend_from_slice(SEPARATOR);
        }
        self.staging.push(ch);
        Ok(())
    }

    /// Close the report and flush everything to the sink.
    pub fn finish(mut self) -> io::Result<usize> {
        self.reserve(CLOSER.len())?;
        self.staging.extend_from_slice(CLOSER);
        self.flush_staging()?;
        self.sink.flush()?;
        Ok(self.flushes)
    }

    /// Ensure room for `needed` bytes, flushing the staging buffer first if
    /// the append would overflow it.
    fn reserve(&mut self, needed: usize) -> io::Result<()> {
        if self.staging.len() + needed > self.capacity {
            self.flush_staging()?;
        }
        Ok(())
    }

    fn flush_staging(&mut self) -> io::Result<()> {
        if self.staging.is_empty() {
            return Ok(());
        }
        log::trace!("flushing {} staged report bytes", self.staging.len());
        self.sink.write_all(&self.staging)?;
        self.staging.clear();
        self.flushes += 1;
        Ok(())
    }
}
