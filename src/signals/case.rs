//! Case signal - checks for both uppercase and lowercase letters.

/// Returns `true` if the password differs from both its lowercase and its
/// uppercase form.
///
/// Strings without cased letters equal both forms and yield `false`.
pub fn contains_mix_of_case(password: &str) -> bool {
    password != password.to_lowercase() && password != password.to_uppercase()
}
