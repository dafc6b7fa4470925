//! Passphrase signal - guesses whether the password is a multi-word phrase.

/// Character count from which a password may be a passphrase.
pub const PASSPHRASE_MINIMUM_LENGTH: usize = 15;

const SPACE_CHAR: char = ' ';

/// Returns `true` if the password is at least [`PASSPHRASE_MINIMUM_LENGTH`]
/// characters long, does not start with a space, and has no control
/// characters.
///
/// Length counts `char`s, not bytes. The phrase is not required to contain
/// a space anywhere.
pub fn looks_like_a_pass_phrase(password: &str) -> bool {
    let long_enough = password.chars().count() >= PASSPHRASE_MINIMUM_LENGTH;
    let no_leading_space = !password.starts_with(SPACE_CHAR);
    let only_printables = password.chars().all(|c| !c.is_control());

    long_enough && no_leading_space && only_printables
}
