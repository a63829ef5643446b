//! NaN stripping filter
//! Reads native-order xyz records (three f64 values each) on stdin and
//! writes every record without a NaN field to stdout, unchanged.
//! Meant to sit between a grid-to-xyz extractor and a gridding tool.
//!
//! Takes no arguments. Diagnostics go to stderr, controlled by RUST_LOG.

use mbstrip_rs::filter_records;
use std::io::{self, BufReader, BufWriter};
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr; stdout carries record bytes only
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))?;

    let format_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let reader = BufReader::new(stdin.lock());
    let writer = BufWriter::new(stdout.lock());

    let stats = filter_records(reader, writer)?;
    tracing::debug!(
        "Kept {} of {} records ({} trailing bytes ignored)",
        stats.records_written,
        stats.records_read,
        stats.trailing_bytes
    );

    Ok(())
}
