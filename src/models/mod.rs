//! Shared data models for validation output and the ticket schema.

pub mod ticket;

use self::ticket::Label;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
/// One ticket whose stored label/comment disagree with the rule table.
pub struct Mismatch {
    pub id: String,
    pub stored_label: Label,
    pub stored_comment: String,
    /// Absent when the ticket could not be classified at all.
    pub expected_label: Option<Label>,
    pub expected_comment: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
/// A dataset line excluded from aggregates (parse or schema failure).
pub struct SkippedRecord {
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
/// Per-label correct/incorrect tally.
pub struct LabelTally {
    pub label: Label,
    pub correct: usize,
    pub incorrect: usize,
}

#[derive(Debug, Clone, Serialize)]
/// Aggregated validation summary used by printers and the report file.
pub struct ValidateSummary {
    pub total: usize,
    pub matched: usize,
    pub mismatched: usize,
    pub skipped: usize,
    /// `matched / (matched + mismatched)`; `None` when nothing classified.
    pub accuracy: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
/// Validation results container, also the shape of the report file.
pub struct ValidateResult {
    pub mismatches: Vec<Mismatch>,
    pub skipped: Vec<SkippedRecord>,
    pub by_label: Vec<LabelTally>,
    pub summary: ValidateSummary,
}
