//! Character variety section - detects which character classes are present.

use secrecy::{ExposeSecret, SecretString};

use crate::types::CharacterClasses;

/// The symbol set recognized by the variety scan and the requirements
/// check. Characters outside this set count toward no class.
pub(crate) const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Scans the password for the four character classes.
pub fn character_variety_section(password: &SecretString) -> CharacterClasses {
    let pwd = password.expose_secret();
    CharacterClasses {
        has_lowercase: pwd.chars().any(|c| c.is_ascii_lowercase()),
        has_uppercase: pwd.chars().any(|c| c.is_ascii_uppercase()),
        has_digit: pwd.chars().any(|c| c.is_ascii_digit()),
        has_symbol: pwd.chars().any(|c| SPECIAL_CHARS.contains(c)),
    }
}
