// src/filter/mod.rs
//! NaN stripping for xyz record streams
//!
//! The filter reads fixed-size [`GeoRecord`](crate::record::GeoRecord)
//! blocks from a byte source, drops every record with a NaN longitude,
//! latitude or height, and writes the rest to a byte sink unchanged and in
//! their original order. A partial record at the end of the input is
//! treated as end of stream.
//!
//! - [`filter_records`] - the plain native-order filter
//! - [`RecordFilter`] - the same loop with [`FilterOptions`]
//! - [`RecordStream`] - iterator over raw record blocks
//!
//! # Example
//!
//! ```
//! use mbstrip_rs::filter::filter_records;
//! use mbstrip_rs::record::GeoRecord;
//!
//! let mut input = Vec::new();
//! input.extend_from_slice(&GeoRecord::new(1.0, 2.0, 3.0).to_bytes());
//! input.extend_from_slice(&GeoRecord::new(f64::NAN, 5.0, 6.0).to_bytes());
//!
//! let mut output = Vec::new();
//! let stats = filter_records(input.as_slice(), &mut output).unwrap();
//!
//! assert_eq!(stats.records_dropped, 1);
//! assert_eq!(output, input[..24]);
//! ```

mod stream;
#[cfg(feature = "async")]
mod async_filter;

pub use stream::RecordStream;

#[cfg(feature = "async")]
pub use async_filter::filter_records_async;

use crate::endian::swap_fields;
use crate::error::Result;
use crate::record::{Endianness, GeoRecord, RecordBytes, RECORD_SIZE};
use std::io::{Read, Write};
use tracing::{debug, trace};

/// Layout of the records the filter writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLayout {
    /// Surviving records are copied byte for byte
    #[default]
    Verbatim,
    /// Surviving records are rewritten with every field in host byte order
    Native,
}

/// Filter configuration
///
/// The default reads native-order records and copies survivors verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOptions {
    /// Byte order of the fields in the input stream
    pub input_order: Endianness,
    pub output: OutputLayout,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_order(mut self, order: Endianness) -> Self {
        self.input_order = order;
        self
    }

    pub fn with_output(mut self, output: OutputLayout) -> Self {
        self.output = output;
        self
    }
}

/// Counters from one pass over a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterStats {
    pub records_read: u64,
    pub records_written: u64,
    pub records_dropped: u64,
    /// Bytes after the last full record that were ignored
    pub trailing_bytes: usize,
}

impl FilterStats {
    pub fn bytes_written(&self) -> u64 {
        self.records_written * RECORD_SIZE as u64
    }

    pub(crate) fn record(&mut self, kept: bool) {
        self.records_read += 1;
        if kept {
            self.records_written += 1;
        } else {
            self.records_dropped += 1;
        }
    }
}

/// Stream transducer that drops records containing NaN fields
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFilter {
    options: FilterOptions,
}

impl RecordFilter {
    pub fn new(options: FilterOptions) -> Self {
        RecordFilter { options }
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Decide what to do with one record
    ///
    /// Returns the bytes to emit, or `None` if the record has a NaN field.
    pub fn classify(&self, raw: &RecordBytes) -> Option<RecordBytes> {
        let mut native = *raw;
        if self.options.input_order.needs_swap() {
            swap_fields(&mut native);
        }

        if GeoRecord::from_bytes(&native).has_nan() {
            return None;
        }

        match self.options.output {
            OutputLayout::Verbatim => Some(*raw),
            OutputLayout::Native => Some(native),
        }
    }

    /// Filter every record from `reader` into `writer`
    ///
    /// Reads one record at a time until fewer than a full record's worth of
    /// bytes remain. The writer is flushed before returning.
    ///
    /// # Errors
    ///
    /// Returns [`StripError::Io`](crate::error::StripError::Io) if reading
    /// or writing fails for any reason other than end of stream.
    pub fn run<R: Read, W: Write>(&self, reader: R, mut writer: W) -> Result<FilterStats> {
        let mut stream = RecordStream::new(reader);
        let mut stats = FilterStats::default();

        while let Some(raw) = stream.next_record()? {
            match self.classify(&raw) {
                Some(out) => {
                    writer.write_all(&out)?;
                    stats.record(true);
                }
                None => {
                    trace!(index = stats.records_read, "dropping record with NaN field");
                    stats.record(false);
                }
            }
        }
        writer.flush()?;

        stats.trailing_bytes = stream.trailing_bytes();
        debug!(
            read = stats.records_read,
            written = stats.records_written,
            dropped = stats.records_dropped,
            trailing_bytes = stats.trailing_bytes,
            input_order = self.options.input_order.name(),
            "record stream exhausted"
        );
        Ok(stats)
    }
}

/// Filter native-order records from `reader` into `writer`, copying
/// survivors verbatim
pub fn filter_records<R: Read, W: Write>(reader: R, writer: W) -> Result<FilterStats> {
    RecordFilter::default().run(reader, writer)
}
