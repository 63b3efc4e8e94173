//! Password strength analysis library
//!
//! This library evaluates a password and produces a deterministic
//! assessment: a 0-4 strength score, a quantized entropy estimate,
//! detected weak patterns, improvement suggestions, a warning label,
//! crack-time estimates for two attacker models and a per-requirement
//! checklist. Evaluation is a pure function: no I/O, no global state,
//! the same input always yields the same assessment.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Enables `Serialize` impls on the assessment types
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path to the common-password wordlist
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::evaluate_password_strength;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let assessment = evaluate_password_strength(&password);
//!
//! println!("Score: {}", assessment.score);
//! println!("Entropy: {:.2} bits", assessment.entropy_bits);
//! println!("{}", assessment.warning);
//! for (name, met) in assessment.requirements.entries() {
//!     println!("{} {}", if met { "ok" } else { "--" }, name);
//! }
//! ```

// Internal modules
mod evaluator;
mod sections;
mod types;
mod wordlist;

// Public API
pub use evaluator::evaluate_password_strength;
pub use types::{
    Assessment, CharacterClasses, CrackTimes, PatternFinding, Requirements, StrengthScore,
    StrengthWarning,
};
pub use wordlist::{
    init_wordlist, init_wordlist_from_path, is_common_password, WordlistError,
};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
