//! Pattern analysis section - repeated runs, sequences and keyboard walks.

use secrecy::{ExposeSecret, SecretString};

use crate::types::PatternFinding;

/// Wrapped so the "7890" window is caught along with "0123".."6789".
const SEQUENTIAL_DIGITS: &str = "01234567890";
const SEQUENTIAL_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
const KEYBOARD_ROWS: [&str; 3] = ["qwerty", "asdfgh", "zxcvbn"];

/// Minimum run length for a sequential digit/letter finding.
const SEQUENCE_LEN: usize = 4;

/// Analyzes the password for weak structural patterns.
///
/// Each finding kind is reported at most once; the checks are independent
/// and a password may trigger several.
pub fn pattern_analysis_section(password: &SecretString) -> Vec<PatternFinding> {
    let pwd = password.expose_secret();
    let lowered = pwd.to_lowercase();
    let mut findings = Vec::new();

    if has_repeated_run(pwd) {
        findings.push(PatternFinding::RepeatedCharacters);
    }
    if contains_sequence_window(pwd, SEQUENTIAL_DIGITS) {
        findings.push(PatternFinding::SequentialDigits);
    }
    if contains_sequence_window(&lowered, SEQUENTIAL_LETTERS) {
        findings.push(PatternFinding::SequentialLetters);
    }
    if KEYBOARD_ROWS.iter().any(|row| lowered.contains(row)) {
        findings.push(PatternFinding::KeyboardPattern);
    }

    findings
}

/// True if any character repeats 3+ times consecutively (e.g. "aaa").
fn has_repeated_run(pwd: &str) -> bool {
    let chars: Vec<char> = pwd.chars().collect();
    let mut run = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 1;
        }
    }
    false
}

/// True if any 4-character window of `sequence` occurs in `haystack`.
fn contains_sequence_window(haystack: &str, sequence: &str) -> bool {
    (0..=sequence.len() - SEQUENCE_LEN)
        .any(|i| haystack.contains(&sequence[i..i + SEQUENCE_LEN]))
}
