//! Password signals
//!
//! Each signal is a pure predicate over the candidate string. None of them
//! can fail, including on empty input.

mod case;
mod digits;
mod passphrase;
mod special;

pub use case::contains_mix_of_case;
pub use digits::contains_digits;
pub use passphrase::{PASSPHRASE_MINIMUM_LENGTH, looks_like_a_pass_phrase};
pub use special::contains_special_chars;
