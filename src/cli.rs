//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "triagen",
    version,
    about = "Synthetic security-ticket dataset toolkit",
    long_about = "Triagen — generate, validate, and fix a labeled JSONL dataset of synthetic security-alert tickets against a deterministic triage rulebook.\n\nConfiguration precedence: CLI > triagen.toml > defaults.",
    after_help = "Examples:\n  triagen generate --dataset tickets.jsonl --count 200 --seed 42\n  triagen validate --dataset tickets.jsonl --report triage-report.json\n  triagen fix --dataset tickets.jsonl --dry-run\n  triagen fix --dataset tickets.jsonl --check",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for generating, validating, and fixing tickets.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current triagen version."
    )]
    Version,
    /// Generate synthetic tickets
    #[command(
        about = "Generate synthetic tickets",
        long_about = "Synthesize tickets across scenario archetypes. Labels and comments are assigned by the triage rulebook at creation time.",
        after_help = "Examples:\n  triagen generate --count 200 --seed 42\n  triagen generate --dataset data/tickets.jsonl --append"
    )]
    Generate {
        #[arg(long, help = "Working root (default: current dir)")]
        root: Option<String>,
        #[arg(long, help = "Dataset path, relative to root (default: tickets.jsonl)")]
        dataset: Option<String>,
        #[arg(long, help = "Number of tickets to generate (default: 100)")]
        count: Option<usize>,
        #[arg(long, help = "RNG seed for reproducible output")]
        seed: Option<u64>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Append to the dataset instead of replacing it")]
        append: bool,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Validate stored labels/comments against the rulebook
    #[command(
        about = "Validate the dataset",
        long_about = "Recompute every ticket's expected label and comment and compare against stored values. Writes a mismatch report and exits non-zero when mismatches exist.",
        after_help = "Examples:\n  triagen validate\n  triagen validate --dataset data/tickets.jsonl --output json"
    )]
    Validate {
        #[arg(long, help = "Working root (default: current dir)")]
        root: Option<String>,
        #[arg(long, help = "Dataset path, relative to root (default: tickets.jsonl)")]
        dataset: Option<String>,
        #[arg(long, help = "Report path, relative to root (default: triage-report.json)")]
        report: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Rewrite mismatched tickets so they conform
    #[command(
        about = "Fix the dataset",
        long_about = "Overwrite label and comment of any ticket that disagrees with the rulebook. Ids and attributes are preserved; unclassifiable records are left untouched. When --dry-run or --check is set, nothing is written.",
        after_help = "Examples:\n  triagen fix\n  triagen fix --out tickets-fixed.jsonl\n  triagen fix --check"
    )]
    Fix {
        #[arg(long, help = "Working root (default: current dir)")]
        root: Option<String>,
        #[arg(long, help = "Dataset path, relative to root (default: tickets.jsonl)")]
        dataset: Option<String>,
        #[arg(long, help = "Write the corrected dataset here instead of in place")]
        out: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Preview planned fixes without changing files")]
        dry_run: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero if fixes would occur (implies no write)")]
        check: bool,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
