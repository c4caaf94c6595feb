//! Triagen CLI binary entry point.
//! Delegates to modules for generate/validate/fix and prints results.

mod cli;
mod config;
mod dataset;
mod error;
mod fix;
mod generate;
mod models;
mod output;
mod triage;
mod utils;
mod validate;

use clap::Parser;
use cli::{Cli, Commands};
use triage::RuleTable;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Generate {
            root,
            dataset,
            count,
            seed,
            append,
            output,
        } => {
            let eff = config::resolve_effective(
                root.as_deref(),
                dataset.as_deref(),
                None,
                output.as_deref(),
                count,
                seed,
                if append { Some(true) } else { None },
            );
            if config::load_config(&eff.root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No triagen.toml found; using defaults."
                );
            }
            let dataset_path = eff.root.join(&eff.dataset);
            let table = RuleTable::standard();
            match generate::run_generate(&dataset_path, eff.count, eff.seed, eff.append, &table) {
                Ok(stats) => output::print_generate(&stats, &eff.output),
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            }
        }
        Commands::Validate {
            root,
            dataset,
            report,
            output,
        } => {
            let eff = config::resolve_effective(
                root.as_deref(),
                dataset.as_deref(),
                report.as_deref(),
                output.as_deref(),
                None,
                None,
                None,
            );
            if config::load_config(&eff.root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No triagen.toml found; using defaults."
                );
            }
            let dataset_path = eff.root.join(&eff.dataset);
            if !dataset_path.is_file() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "Dataset file not found: {} (pass --dataset or configure triagen.toml)",
                        dataset_path.to_string_lossy()
                    )
                );
                std::process::exit(2);
            }
            let records = match dataset::read_dataset(&dataset_path) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            let table = RuleTable::standard();
            let res = validate::run_validate(&records, &table);
            let report_path = eff.root.join(&eff.report);
            if let Err(e) = validate::write_report(&report_path, &res) {
                eprintln!("{} {}", utils::error_prefix(), e);
                std::process::exit(2);
            }
            if eff.output != "json" {
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!("Report written to {}", report_path.to_string_lossy())
                );
            }
            output::print_validate(&res, &eff.output);
            if res.summary.mismatched > 0 {
                std::process::exit(1);
            }
        }
        Commands::Fix {
            root,
            dataset,
            out,
            dry_run,
            check,
            output,
        } => {
            let eff = config::resolve_effective(
                root.as_deref(),
                dataset.as_deref(),
                None,
                output.as_deref(),
                None,
                None,
                None,
            );
            if config::load_config(&eff.root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No triagen.toml found; using defaults."
                );
            }
            let dataset_path = eff.root.join(&eff.dataset);
            if !dataset_path.is_file() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "Dataset file not found: {} (pass --dataset or configure triagen.toml)",
                        dataset_path.to_string_lossy()
                    )
                );
                std::process::exit(2);
            }
            let records = match dataset::read_dataset(&dataset_path) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            let table = RuleTable::standard();
            let outcome = fix::run_fix(&records, &table);
            // Dry-run or check forces write off for this run.
            let write = !(dry_run || check);
            let target_path = out
                .as_deref()
                .map(|p| eff.root.join(p))
                .unwrap_or_else(|| dataset_path.clone());
            if write {
                if let Err(e) = dataset::write_dataset(&target_path, &outcome.lines) {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            }
            output::print_fix(
                &outcome,
                &eff.output,
                write,
                &target_path.to_string_lossy(),
            );
            if check && outcome.changed > 0 {
                std::process::exit(1);
            }
        }
    }
}
