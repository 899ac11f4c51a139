//! Line-by-line wishlist filtering
//!
//! Consecutive `dimwishlist:` lines form a run. Each run is filtered and
//! deduplicated as a unit when the next non-entry line (or the end of input)
//! is reached. Every other line is copied through untouched, in place.
//!
//! A run that fails to decode, parse or resolve is written out exactly as it
//! was read, with one warning logged, so a single bad item never blocks the
//! rest of the document.
//!
//! Lines are handled as bytes: only entry lines need to be UTF-8, anything
//! else is copied through whatever its encoding.

use crate::dedup::dedupe_by_perk_set;
use crate::entry::{WishlistEntry, ENTRY_PREFIX};
use crate::filter::{filter_line, FilterError};
use crate::manifest::ManifestIndex;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

/// Stream failures; these abort the whole run
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("reading wishlist: {0}")]
    Read(#[source] io::Error),

    #[error("writing wishlist: {0}")]
    Write(#[source] io::Error),
}

/// A raw wishlist line without its terminator, classified once on read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Entry(Vec<u8>),
    Passthrough(Vec<u8>),
}

impl Line {
    pub fn classify(line: Vec<u8>) -> Self {
        if line.starts_with(ENTRY_PREFIX.as_bytes()) {
            Line::Entry(line)
        } else {
            Line::Passthrough(line)
        }
    }
}

/// Counters gathered over one pass through a wishlist
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    /// Lines read from the input
    pub lines: usize,
    /// Runs of entry lines processed
    pub runs: usize,
    /// Runs written back unmodified because they failed to filter
    pub failed_runs: usize,
    /// Entry lines read
    pub entries_in: usize,
    /// Entry lines written
    pub entries_out: usize,
}

/// Filter and deduplicate one run of entry lines
///
/// Output is grouped by item in the order items first survive filtering,
/// then by perk set within each item.
pub fn filter_run<S: AsRef<str>>(
    lines: &[S],
    index: &mut ManifestIndex,
) -> Result<Vec<WishlistEntry>, FilterError> {
    let mut item_order: Vec<String> = Vec::new();
    let mut by_item: HashMap<String, Vec<WishlistEntry>> = HashMap::new();

    for line in lines {
        let Some(entry) = filter_line(line.as_ref(), index)? else {
            continue;
        };
        let entries = by_item.entry(entry.item.clone()).or_insert_with(|| {
            item_order.push(entry.item.clone());
            Vec::new()
        });
        entries.push(entry);
    }

    Ok(item_order
        .into_iter()
        .flat_map(|item| dedupe_by_perk_set(by_item.remove(&item).unwrap_or_default()))
        .collect())
}

/// Strip a trailing `\n` and then a trailing `\r`
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn write_line<W: Write>(output: &mut W, line: &[u8]) -> Result<(), StreamError> {
    output.write_all(line).map_err(StreamError::Write)?;
    output.write_all(b"\n").map_err(StreamError::Write)
}

/// Decode a run of entry lines, failing on the first one that isn't UTF-8
fn decode_run(run: &[Vec<u8>]) -> Result<Vec<&str>, FilterError> {
    run.iter()
        .map(|line| {
            std::str::from_utf8(line).map_err(|source| FilterError::Encoding {
                line: String::from_utf8_lossy(line).into_owned(),
                source,
            })
        })
        .collect()
}

/// Filter a whole wishlist from `input` into `output`
pub fn filter_wishlist<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    index: &mut ManifestIndex,
) -> Result<FilterSummary, StreamError> {
    let mut summary = FilterSummary::default();
    let mut run: Vec<Vec<u8>> = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .map_err(StreamError::Read)?;
        if read == 0 {
            break;
        }
        summary.lines += 1;

        match Line::classify(trim_line_ending(&buf).to_vec()) {
            Line::Entry(line) => run.push(line),
            Line::Passthrough(line) => {
                if !run.is_empty() {
                    flush_run(&mut run, output, index, &mut summary)?;
                }
                write_line(output, &line)?;
            }
        }
    }

    if !run.is_empty() {
        flush_run(&mut run, output, index, &mut summary)?;
    }

    output.flush().map_err(StreamError::Write)?;
    Ok(summary)
}

fn flush_run<W: Write>(
    run: &mut Vec<Vec<u8>>,
    output: &mut W,
    index: &mut ManifestIndex,
    summary: &mut FilterSummary,
) -> Result<(), StreamError> {
    summary.runs += 1;
    summary.entries_in += run.len();

    match decode_run(run).and_then(|lines| filter_run(&lines[..], index)) {
        Ok(entries) => {
            debug!(lines = run.len(), kept = entries.len(), "filtered wishlist run");
            summary.entries_out += entries.len();
            for entry in &entries {
                writeln!(output, "{}", entry).map_err(StreamError::Write)?;
            }
        }
        Err(err) => {
            warn!(lines = run.len(), "{}; keeping run unmodified", err);
            summary.failed_runs += 1;
            summary.entries_out += run.len();
            for line in run.iter() {
                write_line(output, line)?;
            }
        }
    }

    run.clear();
    Ok(())
}
