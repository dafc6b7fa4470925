//! Password strength signals library
//!
//! This library computes a handful of structural signals for a candidate
//! password and its edit distance to a list of known-bad passwords.
//!
//! # Features
//!
//! - `async` (default): Enables async checking with channel delivery
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Enables serialization of [`PasswordReport`]
//!
//! # Corpus
//!
//! The bad-password list ships in `data/password_list.txt`. Scans against it
//! are limited to [`SCAN_BUDGET`]; the reported distance is the minimum found
//! within that time.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_checker::check_password;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("password12345".to_string().into());
//! let report = check_password(&password).expect("Failed to read corpus");
//!
//! println!("Length: {}", report.password_length);
//! println!("Distance: {}", report.minimum_distance_to_bad_password);
//! ```

// Internal modules
mod checker;
mod corpus;
mod distance;
mod scanner;
mod signals;

// Public API
pub use checker::{PasswordReport, check_password, check_password_with_corpus};
pub use corpus::{CorpusError, DEFAULT_CORPUS_FILE, default_corpus_path, open_corpus};
pub use distance::levenshtein;
pub use scanner::{
    SCAN_BUDGET, find_minimum_distance_to_bad_password, find_minimum_distance_to_bad_password_in,
};
pub use signals::{
    PASSPHRASE_MINIMUM_LENGTH, contains_digits, contains_mix_of_case, contains_special_chars,
    looks_like_a_pass_phrase,
};

#[cfg(feature = "async")]
pub use checker::{check_password_tx, check_password_with_corpus_tx};
