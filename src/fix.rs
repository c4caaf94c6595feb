//! Repair pass: rewrite any ticket whose stored label or comment disagree
//! with the rule table.
//!
//! Identity and attribute fields are preserved; only label and comment are
//! overwritten. Unparseable and unclassifiable records pass through with
//! their original bytes, never guessed. Running the fixer on its own output
//! is a no-op.

use crate::dataset::{render_line, Record};
use crate::models::ticket::Label;
use crate::triage::{classify, RuleTable};

#[derive(Debug)]
/// One applied (or planned) correction.
pub struct FixChange {
    pub id: String,
    pub from: Label,
    pub to: Label,
    pub comment_only: bool,
}

#[derive(Debug)]
/// Result of a fix pass over the whole dataset.
pub struct FixOutcome {
    pub total: usize,
    pub changed: usize,
    pub unclassifiable: usize,
    pub skipped: usize,
    pub changes: Vec<FixChange>,
    /// Corrected dataset content, in input order.
    pub lines: Vec<String>,
}

/// Compute the corrected dataset. Pure with respect to the filesystem;
/// the caller decides whether `lines` get written.
pub fn run_fix(records: &[Record], table: &RuleTable) -> FixOutcome {
    let mut lines = Vec::with_capacity(records.len());
    let mut changes = Vec::new();
    let mut unclassifiable = 0usize;
    let mut skipped = 0usize;

    for rec in records {
        let ticket = match &rec.parsed {
            Ok(t) => t,
            Err(_) => {
                skipped += 1;
                lines.push(rec.raw.clone());
                continue;
            }
        };
        match classify(&ticket.attrs(), table) {
            Ok(expected) => {
                if ticket.label == expected.label && ticket.comment == expected.comment {
                    lines.push(rec.raw.clone());
                } else {
                    let mut fixed = ticket.clone();
                    changes.push(FixChange {
                        id: fixed.id.clone(),
                        from: fixed.label,
                        to: expected.label,
                        comment_only: fixed.label == expected.label,
                    });
                    fixed.label = expected.label;
                    fixed.comment = expected.comment;
                    lines.push(render_line(&fixed));
                }
            }
            Err(_) => {
                unclassifiable += 1;
                lines.push(rec.raw.clone());
            }
        }
    }

    FixOutcome {
        total: records.len(),
        changed: changes.len(),
        unclassifiable,
        skipped,
        changes,
        lines,
    }
}
