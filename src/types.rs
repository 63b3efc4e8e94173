//! Assessment data model.
//!
//! Everything here is derived fresh per evaluation call and owns no
//! shared state.

use std::fmt;

/// Pool sizes used for keyspace arithmetic, per character class.
const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
const SYMBOL_POOL: u32 = 32;

/// Which of the four character classes appear in the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl CharacterClasses {
    /// Number of classes present (the variety score component).
    pub fn count(&self) -> u32 {
        [
            self.has_lowercase,
            self.has_uppercase,
            self.has_digit,
            self.has_symbol,
        ]
        .iter()
        .filter(|&&present| present)
        .count() as u32
    }

    /// Usable alphabet size: the summed pool sizes of the present classes.
    /// Zero when no class is present (empty password).
    pub fn pool_size(&self) -> u32 {
        let mut pool = 0;
        if self.has_lowercase {
            pool += LOWERCASE_POOL;
        }
        if self.has_uppercase {
            pool += UPPERCASE_POOL;
        }
        if self.has_digit {
            pool += DIGIT_POOL;
        }
        if self.has_symbol {
            pool += SYMBOL_POOL;
        }
        pool
    }
}

/// A weak structural property detected in the password.
///
/// Each kind appears at most once per assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PatternFinding {
    RepeatedCharacters,
    SequentialDigits,
    SequentialLetters,
    KeyboardPattern,
}

impl PatternFinding {
    /// Human-readable description for display.
    pub fn description(&self) -> &'static str {
        match self {
            Self::RepeatedCharacters => "Contains repeated characters",
            Self::SequentialDigits => "Contains sequential numbers",
            Self::SequentialLetters => "Contains sequential letters",
            Self::KeyboardPattern => "Contains keyboard patterns",
        }
    }

    /// Improvement suggestion for the findings that cost score points.
    /// Keyboard patterns are reported but carry no suggestion or penalty.
    pub(crate) fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::RepeatedCharacters => Some("Avoid repeated characters"),
            Self::SequentialDigits => Some("Avoid sequential numbers"),
            Self::SequentialLetters => Some("Avoid sequential letters"),
            Self::KeyboardPattern => None,
        }
    }
}

impl fmt::Display for PatternFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Displayed strength score, 0..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrengthScore(u8);

impl StrengthScore {
    /// Halves the raw component total and caps at 4. The raw scale
    /// (0..=12) exists only inside the evaluator; callers see 0..=4.
    pub(crate) fn from_raw_total(raw_total: u32) -> Self {
        Self((raw_total / 2).min(4) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/4", self.0)
    }
}

/// Warning label bucket.
///
/// Derived from the raw component total, not from the displayed score;
/// the two scales deliberately diverge (raw 7 is "strong" while the
/// displayed score is 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StrengthWarning {
    #[cfg_attr(feature = "serde", serde(rename = "very weak"))]
    VeryWeak,
    #[cfg_attr(feature = "serde", serde(rename = "weak"))]
    Weak,
    #[cfg_attr(feature = "serde", serde(rename = "moderate"))]
    Moderate,
    #[cfg_attr(feature = "serde", serde(rename = "strong"))]
    Strong,
    #[cfg_attr(feature = "serde", serde(rename = "very strong"))]
    VeryStrong,
}

impl StrengthWarning {
    pub(crate) fn from_raw_total(raw_total: u32) -> Self {
        match raw_total {
            0..2 => Self::VeryWeak,
            2..4 => Self::Weak,
            4..6 => Self::Moderate,
            6..8 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryWeak => "very weak",
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
            Self::VeryStrong => "very strong",
        }
    }
}

impl fmt::Display for StrengthWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "This password is {}", self.label())
    }
}

/// Crack-time estimates for the two displayed attacker models.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CrackTimes {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "online_throttling_100_per_hour")
    )]
    pub online: String,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "offline_fast_hashing_1e10_per_second")
    )]
    pub offline: String,
}

/// The five named requirements shown to the user, independent of the
/// score arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Requirements {
    /// Length >= 12 characters.
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl Requirements {
    /// Display name and state of every requirement, in presentation order.
    pub fn entries(&self) -> [(&'static str, bool); 5] {
        [
            ("Length", self.length),
            ("Uppercase", self.uppercase),
            ("Lowercase", self.lowercase),
            ("Numbers", self.digit),
            ("Special Characters", self.symbol),
        ]
    }

    pub fn all_met(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.digit && self.symbol
    }
}

/// Full result of one password evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Assessment {
    /// Displayed strength score, 0..=4.
    pub score: StrengthScore,
    /// Quantized keyspace entropy in bits, >= 0.
    pub entropy_bits: f64,
    /// Detected weak patterns, at most one entry per kind.
    pub findings: Vec<PatternFinding>,
    /// Improvement suggestions, one per penalized finding.
    pub suggestions: Vec<String>,
    /// Warning label derived from the raw component total.
    pub warning: StrengthWarning,
    pub crack_times: CrackTimes,
    pub requirements: Requirements,
}
