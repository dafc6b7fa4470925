//! Special characters signal - checks for anything outside `[A-Za-z0-9]`.

/// Returns `true` unless the password is a non-empty run of ASCII letters
/// and digits.
///
/// The empty string is not alphanumeric, so it counts as containing special
/// characters. Non-ASCII characters always count as special.
pub fn contains_special_chars(password: &str) -> bool {
    password.is_empty() || !password.bytes().all(|b| b.is_ascii_alphanumeric())
}
