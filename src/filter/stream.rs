// src/filter/stream.rs
use crate::error::Result;
use crate::record::{RecordBytes, RECORD_SIZE};
use std::io::{self, Read};

/// Iterator over fixed-size record blocks read from a byte source
///
/// Each item is one full record, exactly as read. Iteration ends at end of
/// stream, including when fewer than [`RECORD_SIZE`] bytes remain; those
/// trailing bytes are discarded and counted in [`trailing_bytes`].
///
/// # Example
///
/// ```
/// use mbstrip_rs::filter::RecordStream;
/// use mbstrip_rs::record::GeoRecord;
/// use std::io::Cursor;
///
/// let mut data = GeoRecord::new(1.0, 2.0, 3.0).to_bytes().to_vec();
/// data.extend_from_slice(&[0xFF; 5]);
///
/// let mut stream = RecordStream::new(Cursor::new(data));
/// let records: Vec<_> = stream.by_ref().collect::<Result<_, _>>().unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(stream.trailing_bytes(), 5);
/// ```
///
/// [`trailing_bytes`]: RecordStream::trailing_bytes
pub struct RecordStream<R> {
    reader: R,
    trailing: usize,
    finished: bool,
}

impl<R: Read> RecordStream<R> {
    pub fn new(reader: R) -> Self {
        RecordStream {
            reader,
            trailing: 0,
            finished: false,
        }
    }

    /// Number of bytes left over after the last full record
    pub fn trailing_bytes(&self) -> usize {
        self.trailing
    }

    /// True once end of stream (or an error) has been reached
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read the next full record, or `None` at end of stream
    pub fn next_record(&mut self) -> Result<Option<RecordBytes>> {
        if self.finished {
            return Ok(None);
        }

        let mut block = [0u8; RECORD_SIZE];
        let filled = match fill_block(&mut self.reader, &mut block) {
            Ok(filled) => filled,
            Err(e) => {
                self.finished = true;
                return Err(e.into());
            }
        };

        if filled < RECORD_SIZE {
            self.finished = true;
            self.trailing = filled;
            return Ok(None);
        }

        Ok(Some(block))
    }
}

impl<R: Read> Iterator for RecordStream<R> {
    type Item = Result<RecordBytes>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Read until `block` is full or the source is exhausted, returning the
/// number of bytes placed in `block`
fn fill_block<R: Read>(reader: &mut R, block: &mut RecordBytes) -> io::Result<usize> {
    let mut filled = 0;
    while filled < block.len() {
        match reader.read(&mut block[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
