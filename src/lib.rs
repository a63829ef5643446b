// src/lib.rs
//! # mbstrip-rs
//!
//! Binary plumbing for xyz bathymetry pipelines: strip records with NaN
//! coordinates or heights out of a fixed-layout record stream, and reverse
//! the byte order of fixed-width values so records can move between hosts
//! of different endianness.
//!
//! ## Record format
//!
//! A stream is a plain concatenation of 24-byte records, each holding
//! longitude, latitude and height as `f64` values. There is no header,
//! delimiter or length prefix. See [`record`] for the layout constants.
//!
//! ## Quick Start
//!
//! ### Filtering a stream
//!
//! ```rust,no_run
//! use mbstrip_rs::*;
//! use std::io::{self, BufReader, BufWriter};
//!
//! fn main() -> Result<()> {
//!     let stdin = io::stdin();
//!     let stdout = io::stdout();
//!     let stats = filter_records(BufReader::new(stdin.lock()), BufWriter::new(stdout.lock()))?;
//!     eprintln!("dropped {} records", stats.records_dropped);
//!     Ok(())
//! }
//! ```
//!
//! ### Big-endian input
//!
//! ```rust
//! use mbstrip_rs::*;
//!
//! let input = GeoRecord::new(-122.0, 36.8, -950.0).encode(Endianness::Big);
//! let filter = RecordFilter::new(
//!     FilterOptions::new()
//!         .with_input_order(Endianness::Big)
//!         .with_output(OutputLayout::Native),
//! );
//!
//! let mut output = Vec::new();
//! filter.run(&input[..], &mut output).unwrap();
//! let bytes: RecordBytes = output.as_slice().try_into().unwrap();
//! assert_eq!(GeoRecord::from_bytes(&bytes).height, -950.0);
//! ```
//!
//! ### Byte reversal
//!
//! ```rust
//! use mbstrip_rs::endian::swap_bytes;
//!
//! let mut src = [1u8, 2, 3, 4];
//! let mut dest = [0u8; 4];
//! swap_bytes(Some(&mut dest[..]), Some(&mut src[..]), 4).unwrap();
//! assert_eq!(dest, [4, 3, 2, 1]);
//! ```

// Modules
pub mod error;
pub mod record;
pub mod endian;
pub mod filter;

// Re-export commonly used types at the crate root for convenience
pub use error::{StripError, Result};

pub use record::{
    GeoRecord,
    Endianness,
    RecordBytes,
    FIELD_COUNT,
    FIELD_SIZE,
    RECORD_SIZE,
};

pub use endian::{
    Reversal,
    reverse_in_place,
    reverse_into,
    swap_bytes,
    swap_endianness,
    swap_fields,
};

pub use filter::{
    filter_records,
    FilterOptions,
    FilterStats,
    OutputLayout,
    RecordFilter,
    RecordStream,
};

#[cfg(feature = "async")]
pub use filter::filter_records_async;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use mbstrip_rs::prelude::*;
    //! ```

    pub use crate::error::{StripError, Result};
    pub use crate::record::{GeoRecord, Endianness, RECORD_SIZE};
    pub use crate::filter::{filter_records, FilterOptions, RecordFilter};
    pub use crate::endian::{reverse_in_place, reverse_into};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!LIBRARY_VERSION.is_empty());
    }

    #[test]
    fn test_record_size_matches_fields() {
        assert_eq!(RECORD_SIZE, FIELD_SIZE * FIELD_COUNT);
        assert_eq!(RECORD_SIZE, 24);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(StripError::OddLength(3).to_string(), "Byte reversal requires an even length, got 3");
        let err = StripError::SpanOutOfBounds { len: 8, available: 4 };
        assert_eq!(err.to_string(), "Span out of bounds: requested 8 bytes from buffer of size 4");
    }

    #[test]
    fn test_default_options() {
        let options = FilterOptions::default();
        assert_eq!(options.input_order, Endianness::Native);
        assert_eq!(options.output, OutputLayout::Verbatim);
    }
}

