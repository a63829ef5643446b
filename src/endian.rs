// src/endian.rs
//! Byte-order reversal for fixed-width binary values
//!
//! The primitives here reverse the byte sequence of an even-length span,
//! either in place or into a separate destination buffer. They are generic
//! over length: call them once per scalar to convert individual fields, or
//! once over a whole buffer to reverse it end to end.
//!
//! Nothing here allocates. Every operation validates its arguments before
//! touching memory, so a rejected call leaves all buffers unchanged.
//!
//! # Example
//!
//! ```
//! use mbstrip_rs::endian::{reverse_in_place, reverse_into};
//!
//! let mut value = 0x0102_0304u32.to_ne_bytes();
//! reverse_in_place(&mut value).unwrap();
//! assert_eq!(u32::from_ne_bytes(value), 0x0403_0201);
//!
//! let src = [1u8, 2, 3, 4];
//! let mut dest = [0u8; 4];
//! reverse_into(&mut dest, &src).unwrap();
//! assert_eq!(dest, [4, 3, 2, 1]);
//! assert_eq!(src, [1, 2, 3, 4]);
//! ```
use crate::error::{StripError, Result};
use crate::record::{RecordBytes, FIELD_SIZE};
use bytemuck::Pod;

/// The two ways a span can be reversed
///
/// `Copy` borrows `src` immutably and `dest` mutably, so the two can never
/// alias or overlap.
#[derive(Debug)]
pub enum Reversal<'a> {
    /// Reverse the span in place
    InPlace(&'a mut [u8]),
    /// Write the reversed `src` into the front of `dest`
    Copy { dest: &'a mut [u8], src: &'a [u8] },
}

impl Reversal<'_> {
    pub fn apply(self) -> Result<()> {
        match self {
            Reversal::InPlace(span) => reverse_in_place(span),
            Reversal::Copy { dest, src } => reverse_into(dest, src),
        }
    }
}

fn check_len(len: usize) -> Result<()> {
    if len == 0 {
        return Err(StripError::EmptySpan);
    }
    if len % 2 != 0 {
        return Err(StripError::OddLength(len));
    }
    Ok(())
}

fn check_bounds(len: usize, available: usize) -> Result<()> {
    if len > available {
        return Err(StripError::SpanOutOfBounds { len, available });
    }
    Ok(())
}

// Caller guarantees an even, non-zero length
fn exchange_ends(span: &mut [u8]) {
    let mut start = 0;
    let mut end = span.len() - 1;
    while start < end {
        span.swap(start, end);
        start += 1;
        end -= 1;
    }
}

/// Reverse the bytes of `span` in place
///
/// Fails without touching `span` if it is empty or has odd length.
pub fn reverse_in_place(span: &mut [u8]) -> Result<()> {
    check_len(span.len())?;
    exchange_ends(span);
    Ok(())
}

/// Write the byte-reversed contents of `src` into `dest`
///
/// Both ends of `dest` are filled on each step, so every destination byte
/// is written exactly once. Only the first `src.len()` bytes of `dest` are
/// touched and `src` is never modified.
///
/// # Errors
///
/// * [`StripError::EmptySpan`] / [`StripError::OddLength`] for a bad `src` length
/// * [`StripError::SpanOutOfBounds`] if `dest` is shorter than `src`
pub fn reverse_into(dest: &mut [u8], src: &[u8]) -> Result<()> {
    let len = src.len();
    check_len(len)?;
    check_bounds(len, dest.len())?;

    let mut start = 0;
    let mut end = len - 1;
    while start < end {
        dest[start] = src[end];
        dest[end] = src[start];
        start += 1;
        end -= 1;
    }
    Ok(())
}

/// Reverse the first `len` bytes of `src`
///
/// Mirrors the classic `swap(dest, src, len)` contract: without a `dest`
/// the reversal happens in place, otherwise the reversed bytes land in
/// `dest` and `src` is left alone. A missing `src`, a zero or odd `len`,
/// or a `len` that exceeds either buffer is rejected before any write.
///
/// ```
/// use mbstrip_rs::endian::swap_bytes;
///
/// let mut word = [0xAAu8, 0xBB];
/// swap_bytes(None, Some(&mut word[..]), 2).unwrap();
/// assert_eq!(word, [0xBB, 0xAA]);
///
/// assert!(swap_bytes(None, None, 2).is_err());
/// ```
pub fn swap_bytes(dest: Option<&mut [u8]>, src: Option<&mut [u8]>, len: usize) -> Result<()> {
    let src = src.ok_or(StripError::MissingSource)?;
    check_len(len)?;
    check_bounds(len, src.len())?;

    match dest {
        None => Reversal::InPlace(&mut src[..len]).apply(),
        Some(dest) => {
            check_bounds(len, dest.len())?;
            Reversal::Copy { dest: &mut dest[..len], src: &src[..len] }.apply()
        }
    }
}

/// Reverse the bytes of every element in `data`
///
/// Single-byte types are left as they are. Element types with an odd size
/// greater than one have no defined byte reversal and are rejected.
pub fn swap_endianness<T: Pod>(data: &mut [T]) -> Result<()> {
    let size = std::mem::size_of::<T>();
    if size <= 1 || data.is_empty() {
        return Ok(());
    }
    check_len(size)?;

    let bytes: &mut [u8] = bytemuck::cast_slice_mut(data);
    for chunk in bytes.chunks_exact_mut(size) {
        exchange_ends(chunk);
    }
    Ok(())
}

/// Reverse each field of a record independently, converting it between
/// little- and big-endian layouts while keeping field order
pub fn swap_fields(record: &mut RecordBytes) {
    for field in record.chunks_exact_mut(FIELD_SIZE) {
        exchange_ends(field);
    }
}
