//! Bad-password corpus module
//!
//! Locates and opens the newline-delimited list of known-bad passwords.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the corpus shipped with the crate.
pub const DEFAULT_CORPUS_FILE: &str = "password_list.txt";

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Could not open password file for reading: {path}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read password file: {0}")]
    Read(#[from] std::io::Error),
}

/// Returns the path of the shipped corpus.
///
/// The file lives in `data/` next to the crate manifest; it is not
/// configurable through the environment.
///
/// The path is fixed at compile time from `CARGO_MANIFEST_DIR`. A binary
/// moved to a machine without that source tree gets
/// [`CorpusError::Unavailable`] from every default-path call; deployments
/// like that should ship the file themselves and use the `_in` /
/// `_with_corpus` variants.
pub fn default_corpus_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(DEFAULT_CORPUS_FILE)
}

/// Opens a corpus file for streaming.
///
/// # Errors
///
/// Returns [`CorpusError::Unavailable`] if the file is missing, unreadable
/// or the path does not name a regular file.
pub fn open_corpus<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, CorpusError> {
    let path = path.as_ref();

    let unavailable = |source: std::io::Error| {
        #[cfg(feature = "tracing")]
        tracing::error!("Corpus acquisition FAILED: {:?}: {}", path, source);
        CorpusError::Unavailable {
            path: path.to_path_buf(),
            source,
        }
    };

    let file = File::open(path).map_err(unavailable)?;

    // Opening a directory succeeds on unix, reading it does not.
    let metadata = file.metadata().map_err(unavailable)?;
    if !metadata.is_file() {
        return Err(unavailable(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Corpus opened: {:?} ({} bytes)", path, metadata.len());

    Ok(BufReader::new(file))
}
