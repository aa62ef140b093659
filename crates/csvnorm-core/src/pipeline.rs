use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::row::normalize_row;

/// What one run of the pipeline did with its input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    pub rows_emitted: u64,
    pub rows_dropped: u64,
}

/// Drives the stream: the first record passes through as the header, every
/// following record is normalized or dropped with one warning. Row-level
/// failures stay inside this loop; only I/O errors escape.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<PipelineSummary> {
    let mut summary = PipelineSummary::default();
    let mut record = String::new();

    if !read_record(&mut input, &mut record)? {
        return Ok(summary);
    }
    output.write_all(record.as_bytes())?;
    output.write_all(b"\n")?;

    let mut record_number: u64 = 1;
    while read_record(&mut input, &mut record)? {
        record_number += 1;
        if record.is_empty() {
            // Blank separator line, not a row.
            continue;
        }
        match normalize_row(&record) {
            Ok(row) => {
                output.write_all(row.as_bytes())?;
                output.write_all(b"\n")?;
                summary.rows_emitted += 1;
            }
            Err(err) => {
                warn!("row {record_number} dropped: {err}");
                summary.rows_dropped += 1;
            }
        }
    }

    output.flush()?;
    Ok(summary)
}

/// Reads one logical record, retaining newlines that fall inside an open
/// quoted field. Returns false at end of input.
fn read_record<R: BufRead>(input: &mut R, record: &mut String) -> io::Result<bool> {
    record.clear();
    let mut line = String::new();

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            // An unterminated quoted field swallows the rest of the input;
            // whatever accumulated becomes the final record.
            return Ok(!record.is_empty());
        }
        record.push_str(&line);

        if !record.ends_with('\n') {
            // Final line of the input had no newline terminator.
            return Ok(true);
        }
        if quotes_balanced(record) {
            record.pop();
            return Ok(true);
        }
        // The newline sits inside an open quoted field; keep reading.
    }
}

/// Doubled escape quotes contribute two characters, so plain parity tells
/// whether a quoted field is still open.
fn quotes_balanced(text: &str) -> bool {
    text.bytes().filter(|&byte| byte == b'"').count() % 2 == 0
}
