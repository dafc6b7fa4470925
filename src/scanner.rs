//! Bad-password scanner - bounded-time similarity scan over the corpus.

use std::io::BufRead;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::corpus::{CorpusError, default_corpus_path, open_corpus};
use crate::distance::levenshtein_chars;

/// Wall-clock ceiling for one corpus scan (250,000 microseconds).
pub const SCAN_BUDGET: Duration = Duration::from_micros(250_000);

/// Outcome of a single scan.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScanSummary {
    pub min_distance: usize,
    pub lines_scanned: usize,
    /// `false` when the budget ran out before the end of the corpus.
    pub exhausted: bool,
}

/// Returns the smallest edit distance between `password` and any entry of
/// the shipped corpus.
///
/// The scan stops when the corpus ends or [`SCAN_BUDGET`] elapses, whichever
/// comes first, so the value is a best-effort minimum over the lines read.
///
/// The search starts from the byte length of `password` while distances
/// count `char`s. For non-ASCII passwords the result can therefore be larger
/// than the password's character count: `"ééé"` against a corpus holding
/// only `"zzzzzzzzzz"` yields 6 (its byte length), not 3. It never exceeds
/// the byte length.
///
/// # Errors
///
/// Returns [`CorpusError::Unavailable`] if the corpus cannot be opened.
pub fn find_minimum_distance_to_bad_password(password: &str) -> Result<usize, CorpusError> {
    find_minimum_distance_to_bad_password_in(password, default_corpus_path())
}

/// Same as [`find_minimum_distance_to_bad_password`] against a specific
/// corpus file.
pub fn find_minimum_distance_to_bad_password_in<P: AsRef<Path>>(
    password: &str,
    path: P,
) -> Result<usize, CorpusError> {
    let corpus = open_corpus(path)?;
    scan_corpus(password, corpus, SCAN_BUDGET).map(|summary| summary.min_distance)
}

/// Streams `corpus` line by line tracking the running minimum distance.
///
/// The budget is checked before each line, never in the middle of a
/// comparison. `corpus` is owned by the scan and dropped on return, whether
/// the scan finished, ran out of time, or hit a read error.
pub(crate) fn scan_corpus<R: BufRead>(
    password: &str,
    mut corpus: R,
    budget: Duration,
) -> Result<ScanSummary, CorpusError> {
    let mut summary = ScanSummary {
        min_distance: password.len(),
        lines_scanned: 0,
        exhausted: false,
    };

    let candidate: Vec<char> = password.chars().collect();
    let mut entry = Vec::new();

    let started = Instant::now();
    let mut line = Vec::new();

    while started.elapsed() < budget {
        line.clear();
        if corpus.read_until(b'\n', &mut line)? == 0 {
            summary.exhausted = true;
            break;
        }
        summary.lines_scanned += 1;

        entry.clear();
        entry.extend(String::from_utf8_lossy(strip_line_terminator(&line)).chars());
        let distance = levenshtein_chars(&candidate, &entry);
        if distance < summary.min_distance {
            summary.min_distance = distance;
        }
    }

    #[cfg(feature = "tracing")]
    {
        if summary.exhausted {
            tracing::debug!(
                "Corpus scan complete: {} lines in {:?}",
                summary.lines_scanned,
                started.elapsed()
            );
        } else {
            tracing::warn!(
                "Corpus scan truncated by budget {:?} after {} lines",
                budget,
                summary.lines_scanned
            );
        }
    }

    Ok(summary)
}

/// Drops a trailing `\n` or `\r\n`; entries are compared without it.
fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
