//! Bulk aggregation: evaluates a batch of passwords and summarizes the
//! score distribution.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::evaluator::evaluate_password_strength;
use crate::types::{StrengthLabel, StrengthResult};

#[derive(Error, Debug)]
pub enum BulkError {
    /// Every input was empty or whitespace after trimming.
    #[error("no passwords left to analyze after filtering")]
    NothingToAnalyze,
    #[cfg(feature = "async")]
    #[error("bulk analysis was cancelled")]
    Cancelled,
}

/// One surviving password and its evaluation, in input order.
#[derive(Debug)]
pub struct BulkEntry {
    pub password: SecretString,
    pub result: StrengthResult,
}

/// Tally of results per strength band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelCounts {
    pub very_weak: usize,
    pub weak: usize,
    pub medium: usize,
    pub strong: usize,
    pub very_strong: usize,
}

impl LabelCounts {
    fn tally(&mut self, label: StrengthLabel) {
        match label {
            StrengthLabel::VeryWeak => self.very_weak += 1,
            StrengthLabel::Weak => self.weak += 1,
            StrengthLabel::Medium => self.medium += 1,
            StrengthLabel::Strong => self.strong += 1,
            StrengthLabel::VeryStrong => self.very_strong += 1,
        }
    }

    pub fn get(&self, label: StrengthLabel) -> usize {
        match label {
            StrengthLabel::VeryWeak => self.very_weak,
            StrengthLabel::Weak => self.weak,
            StrengthLabel::Medium => self.medium,
            StrengthLabel::Strong => self.strong,
            StrengthLabel::VeryStrong => self.very_strong,
        }
    }

    pub fn total(&self) -> usize {
        self.very_weak + self.weak + self.medium + self.strong + self.very_strong
    }
}

/// Aggregate statistics over a batch of evaluations. Recomputed wholesale
/// on every call, never updated incrementally.
#[derive(Debug)]
pub struct BulkSummary {
    /// Per-password results, input order preserved.
    pub entries: Vec<BulkEntry>,
    /// Number of passwords that survived trimming.
    pub total_count: usize,
    /// Arithmetic mean of the per-password scores, rounded.
    pub average_score: u8,
    /// The five-band label of the (unrounded) average score.
    pub overall_label: StrengthLabel,
    pub counts: LabelCounts,
}

/// Evaluates every non-blank password in the batch and computes
/// distribution statistics.
///
/// Inputs are trimmed first; blank entries are dropped. When nothing
/// survives, returns [`BulkError::NothingToAnalyze`] instead of a
/// degenerate summary.
pub fn analyze_bulk(
    passwords: &[SecretString],
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<BulkSummary, BulkError> {
    let filtered: Vec<SecretString> = passwords
        .iter()
        .map(|p| p.expose_secret().trim())
        .filter(|p| !p.is_empty())
        .map(|p| SecretString::new(p.to_string().into()))
        .collect();

    if filtered.is_empty() {
        return Err(BulkError::NothingToAnalyze);
    }

    let mut entries = Vec::with_capacity(filtered.len());
    for password in filtered {
        // Check cancellation between evaluations (async only)
        #[cfg(feature = "async")]
        if let Some(ref t) = token {
            if t.is_cancelled() {
                return Err(BulkError::Cancelled);
            }
        }

        let result = evaluate_password_strength(&password);
        entries.push(BulkEntry { password, result });
    }

    let total_count = entries.len();
    let score_sum: u32 = entries.iter().map(|e| u32::from(e.result.score)).sum();
    let average = f64::from(score_sum) / total_count as f64;

    let mut counts = LabelCounts::default();
    for entry in &entries {
        counts.tally(entry.result.label);
    }

    Ok(BulkSummary {
        entries,
        total_count,
        average_score: average.round() as u8,
        overall_label: StrengthLabel::from_score(average),
        counts,
    })
}

/// Async version that sends the summary (or error) via channel.
#[cfg(feature = "async")]
pub async fn analyze_bulk_tx(
    passwords: &[SecretString],
    token: CancellationToken,
    tx: mpsc::Sender<Result<BulkSummary, BulkError>>,
) {
    let outcome = analyze_bulk(passwords, Some(token));

    if let Err(e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send bulk analysis result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
