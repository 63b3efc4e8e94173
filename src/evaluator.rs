//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    character_variety_section, crack_time_section, entropy_section, pattern_analysis_section,
    requirements_section,
};
use crate::types::{Assessment, StrengthScore, StrengthWarning};

/// Evaluates password strength and returns a full assessment.
///
/// Pure and total over every string input: no I/O, no global state, and
/// the same input always yields the same assessment.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// An `Assessment` with score, entropy, findings, suggestions, warning,
/// crack-time estimates and the requirement booleans.
pub fn evaluate_password_strength(password: &SecretString) -> Assessment {
    let pwd_len = password.expose_secret().chars().count();

    let classes = character_variety_section(password);
    let findings = pattern_analysis_section(password);
    let entropy_bits = entropy_section(password);

    // Length component: one point per three characters, capped at 4
    let length_component = (pwd_len / 3).min(4) as u32;

    // Variety component: one point per character class present
    let variety_component = classes.count();

    // Pattern component: starts at 2, loses a point per penalized
    // finding. Keyboard walks are reported but never penalized.
    let mut pattern_component: i32 = 2;
    let mut suggestions = Vec::new();
    for finding in &findings {
        if let Some(suggestion) = finding.suggestion() {
            pattern_component -= 1;
            suggestions.push(suggestion.to_string());
        }
    }
    // All three penalties together would reach -1; the component floors
    // at 0 so the raw total stays non-negative.
    let pattern_component = pattern_component.max(0) as u32;

    // Entropy component: one point per 50 bits, capped at 2
    let entropy_component = ((entropy_bits / 50.0) as u32).min(2);

    // The empty password is pinned to the floor of every scale; its
    // untouched pattern component would otherwise put the raw total at 2.
    let raw_total = if pwd_len == 0 {
        0
    } else {
        length_component + variety_component + pattern_component + entropy_component
    };

    Assessment {
        score: StrengthScore::from_raw_total(raw_total),
        entropy_bits,
        warning: StrengthWarning::from_raw_total(raw_total),
        crack_times: crack_time_section(password, classes),
        requirements: requirements_section(password),
        findings,
        suggestions,
    }
}

/// Async version that sends the assessment via channel.
///
/// Carries the presentation layer's short analysis delay, honors
/// cancellation before evaluating, and delivers nothing when cancelled.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Assessment>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation cancelled before it ran");
        return;
    }

    let assessment = evaluate_password_strength(password);

    if let Err(_e) = tx.send(assessment).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password assessment: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PatternFinding, Requirements};

    fn evaluate(pwd_str: &str) -> Assessment {
        let pwd = SecretString::new(pwd_str.to_string().into());
        evaluate_password_strength(&pwd)
    }

    #[test]
    fn test_evaluate_empty_password() {
        let assessment = evaluate("");
        assert_eq!(assessment.score.value(), 0);
        assert_eq!(assessment.entropy_bits, 0.0);
        assert_eq!(assessment.warning, StrengthWarning::VeryWeak);
        assert!(assessment.findings.is_empty());
        assert!(assessment.suggestions.is_empty());
        assert_eq!(assessment.requirements, Requirements::default());
        assert_eq!(assessment.crack_times.online, "0 hours");
        assert_eq!(assessment.crack_times.offline, "0 seconds");
    }

    #[test]
    fn test_evaluate_repeated_chars_password() {
        let assessment = evaluate("aaa");
        assert_eq!(assessment.findings, vec![PatternFinding::RepeatedCharacters]);
        assert_eq!(assessment.suggestions, vec!["Avoid repeated characters"]);
        assert_eq!(assessment.score.value(), 1);
        assert_eq!(assessment.warning, StrengthWarning::Weak);
    }

    #[test]
    fn test_evaluate_strong_mixed_password() {
        // 20 characters, all four classes, no detectable patterns
        let assessment = evaluate("Kx9!Tz2@Wq5#Rv8%Lp0&");
        assert!(assessment.findings.is_empty());
        assert_eq!(assessment.entropy_bits, 140.0);
        assert_eq!(assessment.score.value(), 4);
        assert_eq!(assessment.warning, StrengthWarning::VeryStrong);
        assert_eq!(assessment.crack_times.online, "centuries");
        assert!(assessment.requirements.all_met());
    }

    #[test]
    fn test_evaluate_keyboard_pattern_not_penalized() {
        let assessment = evaluate("qwerty123");
        assert_eq!(assessment.findings, vec![PatternFinding::KeyboardPattern]);
        // Keyboard walks produce a finding but no suggestion and no
        // pattern penalty, so the raw total stays at 8 here.
        assert!(assessment.suggestions.is_empty());
        assert_eq!(assessment.score.value(), 4);
        assert_eq!(assessment.warning, StrengthWarning::VeryStrong);
    }

    #[test]
    fn test_evaluate_pattern_component_floors_at_zero() {
        // Triggers all three penalized findings at once
        let assessment = evaluate("aaa1234abcd");
        assert_eq!(assessment.suggestions.len(), 3);
        // length 3 + variety 2 + pattern 0 (floored) + entropy 1 = 6
        assert_eq!(assessment.score.value(), 3);
        assert_eq!(assessment.warning, StrengthWarning::Strong);
    }

    #[test]
    fn test_evaluate_warning_tracks_raw_total_not_displayed_score() {
        // length 2 + variety 3 + pattern 2 + entropy 0 = raw 7:
        // warning says "strong" while the displayed score is 3
        let assessment = evaluate("Hello12");
        assert_eq!(assessment.score.value(), 3);
        assert_eq!(assessment.warning, StrengthWarning::Strong);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let first = evaluate("MyP@ssw0rd!");
        let second = evaluate("MyP@ssw0rd!");
        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_score_boundaries() {
        let test_passwords = vec![
            "",
            "a",
            "password",
            "MyPass123!",
            "VeryStrongPassword123!@#",
            "aaa1234abcdqwerty",
        ];

        for pwd_str in test_passwords {
            let assessment = evaluate(pwd_str);
            assert!(
                assessment.score.value() <= 4,
                "Score {} out of bounds for password '{}'",
                assessment.score.value(),
                pwd_str
            );
            assert!(assessment.entropy_bits >= 0.0);
        }
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_evaluate_tx_delivers_assessment() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        evaluate_password_strength_tx(&pwd, token, tx).await;

        let assessment = rx.recv().await.expect("Should receive assessment");
        assert_eq!(assessment, evaluate_password_strength(&pwd));
    }

    #[tokio::test]
    async fn test_evaluate_tx_cancelled_delivers_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        evaluate_password_strength_tx(&pwd, token, tx).await;

        assert!(rx.recv().await.is_none());
    }
}
