//! Crack-time section - keyspace divided by a flat guess rate.

use secrecy::{ExposeSecret, SecretString};

use crate::types::{CharacterClasses, CrackTimes};

/// Modeled attacker throughput, guesses per second. Both displayed
/// scenarios use the same rate and differ only in presentation.
const GUESSES_PER_SECOND: f64 = 1e10;

/// Above this many seconds both estimates collapse to "centuries".
const CENTURIES_THRESHOLD_SECS: f64 = 1e8;

/// Estimates how long an exhaustive search of the detected alphabet
/// would take, as display strings for the two attacker models.
pub fn crack_time_section(password: &SecretString, classes: CharacterClasses) -> CrackTimes {
    // Floor the alphabet at 1 so the empty password stays well-defined.
    let possible_chars = classes.pool_size().max(1) as f64;
    let length = password.expose_secret().chars().count();

    // Saturates to infinity for long, high-variety passwords; infinity
    // takes the "centuries" branch below.
    let combinations = possible_chars.powf(length as f64);
    let seconds_to_crack = combinations / GUESSES_PER_SECOND;

    if seconds_to_crack > CENTURIES_THRESHOLD_SECS {
        return CrackTimes {
            online: "centuries".to_string(),
            offline: "centuries".to_string(),
        };
    }

    CrackTimes {
        online: format!("{} hours", (seconds_to_crack / 3600.0) as u64),
        offline: format!("{} seconds", seconds_to_crack as u64),
    }
}
