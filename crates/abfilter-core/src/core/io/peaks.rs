use crate::core::models::label::LabelMap;
use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum PeakListError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Layout of a whitespace-separated peak list (`ppm weight atom_id [extra...]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeakListFormat {
    /// Lines whose trimmed content starts with this prefix are copied verbatim.
    pub comment_prefix: String,
    /// Zero-based index of the atom-serial column.
    pub atom_id_column: usize,
}

impl Default for PeakListFormat {
    fn default() -> Self {
        Self {
            comment_prefix: "#".to_string(),
            atom_id_column: 2,
        }
    }
}

/// What the filter does with one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    /// Write the input line unchanged, terminator included.
    Copy,
    /// Write nothing.
    Drop,
    /// Write this line instead, followed by a single `\n`.
    Relabel(String),
}

/// Counters collected while filtering a peak list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub copied: usize,
    pub labeled: usize,
    pub dropped: usize,
}

impl FilterStats {
    pub fn lines_read(&self) -> usize {
        self.copied + self.labeled + self.dropped
    }
}

/// Decides what to write for a single peak-list line.
///
/// Blank lines, comments, rows too short to hold the atom column and rows whose
/// atom column is not an integer are passed through. Rows with an integer atom
/// serial are relabeled when the serial is in `labels` and dropped otherwise,
/// including integers too large to be any atom's serial.
/// Relabeled rows keep every other field in place, joined by single spaces.
pub fn classify_line(line: &str, labels: &LabelMap, format: &PeakListFormat) -> LineAction {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(format.comment_prefix.as_str()) {
        return LineAction::Copy;
    }

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    let Some(raw_id) = fields.get(format.atom_id_column) else {
        return LineAction::Copy;
    };
    let id = match raw_id.parse::<i64>() {
        Ok(id) => id,
        // Still an integer, just not one any atom can carry.
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return LineAction::Drop;
        }
        Err(_) => return LineAction::Copy,
    };

    let label = usize::try_from(id)
        .ok()
        .and_then(|serial| labels.label_for(serial));
    match label {
        Some(label) => {
            let rewritten: Vec<&str> = fields
                .iter()
                .enumerate()
                .map(|(i, &field)| {
                    if i == format.atom_id_column {
                        label.as_str()
                    } else {
                        field
                    }
                })
                .collect();
            LineAction::Relabel(rewritten.join(" "))
        }
        None => LineAction::Drop,
    }
}

/// Streams a peak list from `reader` to `writer`, relabeling rows with `labels`.
///
/// Lines are processed in order, one at a time; memory use does not grow with
/// the size of the input. The writer is flushed before returning.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn filter_peaks(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    labels: &LabelMap,
    format: &PeakListFormat,
) -> Result<FilterStats, PeakListError> {
    let mut stats = FilterStats::default();
    let mut line = String::new();
    let mut line_num = 0usize;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        line_num += 1;

        match classify_line(&line, labels, format) {
            LineAction::Copy => {
                writer.write_all(line.as_bytes())?;
                stats.copied += 1;
            }
            LineAction::Drop => {
                trace!(line = line_num, "Dropping row with unlabeled atom.");
                stats.dropped += 1;
            }
            LineAction::Relabel(rewritten) => {
                writeln!(writer, "{}", rewritten)?;
                stats.labeled += 1;
            }
        }
    }

    writer.flush()?;
    Ok(stats)
}
