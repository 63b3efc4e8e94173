//! Requirements section - the five named checks shown to the user.

use secrecy::{ExposeSecret, SecretString};

use super::variety::SPECIAL_CHARS;
use crate::types::Requirements;

const MIN_LENGTH: usize = 12;

/// Evaluates the five display requirements. These are independent of the
/// score arithmetic; a password can score 4 with requirements unmet and
/// vice versa.
pub fn requirements_section(password: &SecretString) -> Requirements {
    let pwd = password.expose_secret();
    Requirements {
        length: pwd.chars().count() >= MIN_LENGTH,
        uppercase: pwd.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: pwd.chars().any(|c| c.is_ascii_lowercase()),
        digit: pwd.chars().any(|c| c.is_ascii_digit()),
        symbol: pwd.chars().any(|c| SPECIAL_CHARS.contains(c)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirements_for(pwd_str: &str) -> Requirements {
        let pwd = SecretString::new(pwd_str.to_string().into());
        requirements_section(&pwd)
    }

    #[test]
    fn test_requirements_section_length_boundary() {
        assert!(!requirements_for("elevenchars").length);
        assert!(requirements_for("twelvechars!").length);
    }

    #[test]
    fn test_requirements_section_length_independent_of_content() {
        // 12 identical characters still satisfy the length requirement
        let req = requirements_for("aaaaaaaaaaaa");
        assert!(req.length);
        assert!(req.lowercase);
        assert!(!req.uppercase);
        assert!(!req.digit);
        assert!(!req.symbol);
    }

    #[test]
    fn test_requirements_section_all_met() {
        let req = requirements_for("Str0ng&Steady!");
        assert!(req.all_met());
    }

    #[test]
    fn test_requirements_section_empty_password() {
        assert_eq!(requirements_for(""), Requirements::default());
    }
}
