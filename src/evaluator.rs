//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::entropy;
use crate::sections::{length_section, pattern_section, variety_section};
use crate::types::{Criteria, StrengthLabel, StrengthResult};

const PATTERN_PENALTY: i32 = 10;

/// Evaluates password strength and returns a detailed result.
///
/// Total and deterministic: every input, including the empty string, yields
/// a well-defined `StrengthResult`. Score is additive (length tiers plus 15
/// per character class), reduced by 10 per detected weak pattern, then
/// clamped to 0-100.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthResult {
    let pwd = password.expose_secret();

    if pwd.is_empty() {
        return StrengthResult::empty();
    }

    let length = length_section(pwd);
    let variety = variety_section(pwd);
    let patterns = pattern_section(pwd);

    let mut score = length.points + variety.points;
    score -= (patterns.len() as i32) * PATTERN_PENALTY;
    let score = score.clamp(0, 100) as u8;

    // Crack time is derived from the unrounded entropy; only the stored
    // field is rounded for display.
    let bits = entropy::entropy_bits(pwd);
    let crack_time = entropy::crack_time(bits);

    StrengthResult {
        score,
        label: StrengthLabel::from_score(f64::from(score)),
        criteria: Criteria {
            length: length.meets_minimum,
            uppercase: variety.uppercase,
            lowercase: variety.lowercase,
            number: variety.number,
            special: variety.special,
        },
        entropy_bits: bits.round() as u32,
        patterns,
        crack_time,
    }
}

/// True when the password satisfies all five checklist criteria.
pub fn is_password_valid(password: &SecretString) -> bool {
    evaluate_password_strength(password).criteria.all_met()
}

/// Async version that sends the evaluation result via channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    // Debounce window so rapid keystrokes can cancel a pending evaluation.
    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        return;
    }

    let result = evaluate_password_strength(password);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
