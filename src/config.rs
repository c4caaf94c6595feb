//! Configuration discovery and effective settings resolution.
//!
//! Triagen reads `triagen.toml|yaml|yml` from the working root and merges it
//! with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `dataset`: `tickets.jsonl`
//! - `report`: `triage-report.json`
//! - `output`: `human`
//! - `generate.count`: 100
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Generation-related configuration section under `[generate]`.
pub struct GenerateCfg {
    pub count: Option<usize>,
    pub seed: Option<u64>,
    pub append: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `triagen.toml|yaml`.
pub struct TriagenConfig {
    pub dataset: Option<String>,
    pub report: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub generate: Option<GenerateCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub dataset: String,
    pub report: String,
    pub output: String,
    pub count: usize,
    pub seed: Option<u64>,
    pub append: bool,
}

/// Load `triagen.toml`, `triagen.yaml`, or `triagen.yml` from `root`.
/// Returns `None` when no config file exists or none parses.
pub fn load_config(root: &Path) -> Option<TriagenConfig> {
    let toml_path = root.join("triagen.toml");
    if let Ok(s) = fs::read_to_string(&toml_path) {
        if let Ok(cfg) = toml::from_str::<TriagenConfig>(&s) {
            return Some(cfg);
        }
    }
    for name in ["triagen.yaml", "triagen.yml"] {
        let p = root.join(name);
        if let Ok(s) = fs::read_to_string(&p) {
            if let Ok(cfg) = serde_yaml::from_str::<TriagenConfig>(&s) {
                return Some(cfg);
            }
        }
    }
    None
}

/// Resolve the effective configuration: CLI > config file > defaults.
pub fn resolve_effective(
    root: Option<&str>,
    dataset: Option<&str>,
    report: Option<&str>,
    output: Option<&str>,
    count: Option<usize>,
    seed: Option<u64>,
    append: Option<bool>,
) -> Effective {
    let root = PathBuf::from(root.unwrap_or("."));
    let cfg = load_config(&root).unwrap_or_default();
    let gen_cfg = cfg.generate.unwrap_or_default();
    Effective {
        dataset: dataset
            .map(str::to_string)
            .or(cfg.dataset)
            .unwrap_or_else(|| "tickets.jsonl".to_string()),
        report: report
            .map(str::to_string)
            .or(cfg.report)
            .unwrap_or_else(|| "triage-report.json".to_string()),
        output: output
            .map(str::to_string)
            .or(cfg.output)
            .unwrap_or_else(|| "human".to_string()),
        count: count.or(gen_cfg.count).unwrap_or(100),
        seed: seed.or(gen_cfg.seed),
        append: append.or(gen_cfg.append).unwrap_or(false),
        root,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config_file() {
        let tmp = tempdir().unwrap();
        let eff = resolve_effective(
            Some(tmp.path().to_str().unwrap()),
            None,
            None,
            None,
            None,
            None,
            None,
        );
        assert_eq!(eff.dataset, "tickets.jsonl");
        assert_eq!(eff.report, "triage-report.json");
        assert_eq!(eff.output, "human");
        assert_eq!(eff.count, 100);
        assert_eq!(eff.seed, None);
        assert!(!eff.append);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let tmp = tempdir().unwrap();
        let cfg = r#"
dataset = "data/tickets.jsonl"
output = "json"

[generate]
count = 500
seed = 42
"#;
        std::fs::write(tmp.path().join("triagen.toml"), cfg).unwrap();
        let eff = resolve_effective(
            Some(tmp.path().to_str().unwrap()),
            None,
            None,
            None,
            None,
            None,
            None,
        );
        assert_eq!(eff.dataset, "data/tickets.jsonl");
        assert_eq!(eff.output, "json");
        assert_eq!(eff.count, 500);
        assert_eq!(eff.seed, Some(42));
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let tmp = tempdir().unwrap();
        std::fs::write(tmp.path().join("triagen.toml"), "dataset = \"a.jsonl\"\n").unwrap();
        let eff = resolve_effective(
            Some(tmp.path().to_str().unwrap()),
            Some("b.jsonl"),
            None,
            Some("json"),
            Some(7),
            Some(1),
            Some(true),
        );
        assert_eq!(eff.dataset, "b.jsonl");
        assert_eq!(eff.output, "json");
        assert_eq!(eff.count, 7);
        assert_eq!(eff.seed, Some(1));
        assert!(eff.append);
    }

    #[test]
    fn test_yaml_config_is_accepted() {
        let tmp = tempdir().unwrap();
        std::fs::write(tmp.path().join("triagen.yaml"), "dataset: y.jsonl\n").unwrap();
        let eff = resolve_effective(
            Some(tmp.path().to_str().unwrap()),
            None,
            None,
            None,
            None,
            None,
            None,
        );
        assert_eq!(eff.dataset, "y.jsonl");
    }
}
