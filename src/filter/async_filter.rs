// src/filter/async_filter.rs
// Only compiled with feature = "async"
use super::{FilterStats, RecordFilter};
use crate::error::Result;
use crate::record::{RecordBytes, RECORD_SIZE};
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, trace};

impl RecordFilter {
    /// Async counterpart of [`RecordFilter::run`]
    ///
    /// Same record-at-a-time loop over tokio I/O: read one record, maybe
    /// write one, stop at the first short read.
    pub async fn run_async<R, W>(&self, mut reader: R, mut writer: W) -> Result<FilterStats>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut stats = FilterStats::default();
        let mut block = [0u8; RECORD_SIZE];

        loop {
            let filled = fill_block(&mut reader, &mut block).await?;
            if filled < RECORD_SIZE {
                stats.trailing_bytes = filled;
                break;
            }

            match self.classify(&block) {
                Some(out) => {
                    writer.write_all(&out).await?;
                    stats.record(true);
                }
                None => {
                    trace!(index = stats.records_read, "dropping record with NaN field");
                    stats.record(false);
                }
            }
        }
        writer.flush().await?;

        debug!(
            read = stats.records_read,
            written = stats.records_written,
            dropped = stats.records_dropped,
            trailing_bytes = stats.trailing_bytes,
            "async record stream exhausted"
        );
        Ok(stats)
    }
}

/// Filter native-order records between two async streams
pub async fn filter_records_async<R, W>(reader: R, writer: W) -> Result<FilterStats>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    RecordFilter::default().run_async(reader, writer).await
}

async fn fill_block<R: AsyncRead + Unpin>(reader: &mut R, block: &mut RecordBytes) -> io::Result<usize> {
    let mut filled = 0;
    while filled < block.len() {
        match reader.read(&mut block[filled..]).await {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
