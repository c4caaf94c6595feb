//! Triagen core library.
//!
//! This crate exposes programmatic APIs for generating, validating, and
//! fixing a labeled JSONL dataset of synthetic security-alert tickets
//! against a deterministic triage rulebook.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `triage`: The ordered rule table and `classify` function.
//! - `generate`: Archetype-driven ticket synthesis with a seeded RNG.
//! - `validate`: Accuracy pass and mismatch report writer.
//! - `fix`: In-place dataset repair, idempotent by construction.
//! - `dataset`: JSONL read/write with per-line error capture.
//! - `models`: Ticket schema and validation output structs.
//! - `output`: Human/JSON printers for generate/validate/fix.
//! - `error`: Error taxonomy.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod fix;
pub mod generate;
pub mod models;
pub mod output;
pub mod triage;
pub mod utils;
pub mod validate;
