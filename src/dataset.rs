//! JSONL dataset store: one ticket per line, read and rewritten wholesale.
//!
//! Parsing distinguishes `Malformed` (not JSON) from `Schema` (JSON that
//! violates the ticket schema or the id format). Broken lines keep their raw
//! text so the fixer can pass them through byte-identical.

use crate::error::{AppError, RecordError};
use crate::models::ticket::Ticket;
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Required id shape for every ticket.
pub const ID_PATTERN: &str = r"^TKT-\d{5}$";

#[derive(Debug)]
/// One dataset line, 1-based position, raw text, and its parse outcome.
pub struct Record {
    pub line: usize,
    pub raw: String,
    pub parsed: Result<Ticket, RecordError>,
}

/// Read and parse the dataset. Blank lines are ignored. Only an unreadable
/// file is fatal; broken lines come back as `Record`s with an error.
pub fn read_dataset(path: &Path) -> Result<Vec<Record>, AppError> {
    let data = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    let id_re = Regex::new(ID_PATTERN).expect("bad id pattern");
    let mut records = Vec::new();
    for (idx, raw) in data.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let line = idx + 1;
        records.push(Record {
            line,
            raw: raw.to_string(),
            parsed: parse_line(raw, line, &id_re),
        });
    }
    Ok(records)
}

fn parse_line(raw: &str, line: usize, id_re: &Regex) -> Result<Ticket, RecordError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| RecordError::Malformed {
            line,
            detail: e.to_string(),
        })?;
    let ticket: Ticket = serde_json::from_value(value).map_err(|e| RecordError::Schema {
        line,
        detail: e.to_string(),
    })?;
    if !id_re.is_match(&ticket.id) {
        return Err(RecordError::Schema {
            line,
            detail: format!("id '{}' does not match {}", ticket.id, ID_PATTERN),
        });
    }
    Ok(ticket)
}

/// Serialize one ticket to its dataset line.
pub fn render_line(ticket: &Ticket) -> String {
    serde_json::to_string(ticket).expect("ticket serialization cannot fail")
}

/// Write the full dataset, replacing the file.
pub fn write_dataset(path: &Path, lines: &[String]) -> Result<(), AppError> {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for l in lines {
        out.push_str(l);
        out.push('\n');
    }
    fs::write(path, out).map_err(|e| AppError::io(path, e))
}

/// Append lines to an existing dataset (creates the file if absent).
pub fn append_dataset(path: &Path, lines: &[String]) -> Result<(), AppError> {
    let mut f = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::io(path, e))?;
    for l in lines {
        writeln!(f, "{}", l).map_err(|e| AppError::io(path, e))?;
    }
    Ok(())
}

/// Highest numeric suffix among well-formed ids already in the dataset,
/// so appended tickets can continue the numbering.
pub fn max_ticket_number(records: &[Record]) -> u32 {
    records
        .iter()
        .filter_map(|r| r.parsed.as_ref().ok())
        .filter_map(|t| t.id.strip_prefix("TKT-"))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}
