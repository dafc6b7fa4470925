//! Digits signal - checks for ASCII digits.

/// Returns `true` if the password contains at least one of `0`-`9`.
pub fn contains_digits(password: &str) -> bool {
    password.bytes().any(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMOJI_STRING: &str = "😀 😁 😂🤣 😃";

    #[test]
    fn test_contains_digits_positive() {
        let with_digits = [
            "password1234".to_string(),
            "1234".to_string(),
            "password 1234".to_string(),
            "password!1234".to_string(),
            format!("password1234{}", EMOJI_STRING),
        ];
        for pwd in &with_digits {
            assert!(contains_digits(pwd), "{:?} should contain digits", pwd);
        }
    }

    #[test]
    fn test_contains_digits_negative() {
        for pwd in ["", "password", "!\"£$%^&*(", EMOJI_STRING] {
            assert!(!contains_digits(pwd), "{:?} should not contain digits", pwd);
        }
    }

    #[test]
    fn test_contains_digits_ignores_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits
        assert!(!contains_digits("password٣"));
        assert!(!contains_digits("password１"));
    }
}
