// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Byte reversal requires a source buffer")]
    MissingSource,

    #[error("Byte reversal requires a non-empty span")]
    EmptySpan,

    #[error("Byte reversal requires an even length, got {0}")]
    OddLength(usize),

    #[error("Span out of bounds: requested {len} bytes from buffer of size {available}")]
    SpanOutOfBounds { len: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, StripError>;
