//! Suspicion scoring over the evaluated reason list.
//!
//! Each reason carries its severity in its own wording: anything naming
//! the producer is heavy, anything reporting a mismatch or a missing
//! element is medium, everything else is light. Heavy takes priority when
//! a wording matches both triggers. Deductions are commutative, so the
//! score is independent of reason order and idempotent over re-runs.

/// Severity class of one reason, derived from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Heavy,
    Medium,
    Light,
}

impl Severity {
    /// Classifies a reason by lexical inspection of its message.
    pub fn of(reason: &str) -> Self {
        let lower = reason.to_lowercase();
        if lower.contains("producer") {
            Severity::Heavy
        } else if lower.contains("mismatch") || lower.contains("missing") {
            Severity::Medium
        } else {
            Severity::Light
        }
    }

    /// Score deduction for one reason of this class.
    pub fn weight(self) -> f64 {
        match self {
            Severity::Heavy => 0.35,
            Severity::Medium => 0.20,
            Severity::Light => 0.05,
        }
    }
}

/// Threshold below which a non-empty reason list flags the document.
/// Sits above any single-deduction outcome, so even one light reason
/// is enough to flag.
const SUSPICION_THRESHOLD: f64 = 0.99;

/// Reduces the reason list to a suspicion score in [0, 1] (3 decimal
/// places) and the boolean verdict.
pub fn score(reasons: &[String]) -> (f64, bool) {
    let mut value = 1.0f64;
    for reason in reasons {
        value -= Severity::of(reason).weight();
    }
    let value = (value.max(0.0) * 1000.0).round() / 1000.0;
    let suspicious = !reasons.is_empty() && value < SUSPICION_THRESHOLD;
    (value, suspicious)
}
