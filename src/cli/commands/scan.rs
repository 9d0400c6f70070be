//! Scan command implementation.
//!
//! Redacts (or, with `--dry-run`, counts) sensitive env values across the
//! snapshot tree and prints the report.

use std::path::{Path, PathBuf};

use crate::cli::args::ScanArgs;
use crate::config::{load_config, SnapredactConfig};
use crate::error::Result;
use crate::scan::{
    ScanOptions, ScanOutcome, ScanReport, Scanner, DEFAULT_ROOT, DEFAULT_SAMPLE_LIMIT,
};
use crate::secrets::{parse_explicit_list, SensitivityPolicy};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Scan options and policy after merging flags, config and defaults.
#[derive(Debug, Clone)]
pub struct ScanSettings {
    /// Resolved scan options.
    pub options: ScanOptions,
    /// Built-in names plus config and `--explicit` names.
    pub policy: SensitivityPolicy,
}

impl ScanSettings {
    /// Merge command-line arguments over the config file over defaults.
    ///
    /// Explicit names are unioned rather than overridden.
    pub fn resolve(args: &ScanArgs, config: &SnapredactConfig) -> Self {
        let root = args
            .root
            .clone()
            .or_else(|| config.root.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

        let sample_limit = args
            .sample_limit
            .or(config.sample_limit)
            .unwrap_or(DEFAULT_SAMPLE_LIMIT);

        let mut policy = SensitivityPolicy::with_builtins_and_custom(&config.explicit);
        for raw in &args.explicit {
            policy.add_explicit_names(parse_explicit_list(raw));
        }

        Self {
            options: ScanOptions {
                root,
                snapshot: args.snapshot.clone(),
                dry_run: args.dry_run,
                sample_limit,
            },
            policy,
        }
    }
}

/// The scan command implementation.
pub struct ScanCommand {
    working_dir: PathBuf,
    args: ScanArgs,
    config_path: Option<PathBuf>,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(working_dir: &Path, args: ScanArgs, config_path: Option<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
            config_path,
        }
    }

    fn print_report(&self, report: &ScanReport, ui: &mut dyn UserInterface) -> Result<()> {
        if self.args.json {
            ui.message(&report.to_json()?);
        } else {
            for line in report.render_lines() {
                ui.message(&line);
            }
        }
        Ok(())
    }
}

impl Command for ScanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.working_dir, self.config_path.as_deref())?;
        let settings = ScanSettings::resolve(&self.args, &config);
        tracing::debug!("Scanning with {:?}", settings.options);

        let scanner = Scanner::new(settings.policy);
        let report = match scanner.run(&settings.options)? {
            ScanOutcome::NoFiles { pattern } => {
                ui.message(&format!("No files found for pattern: {}", pattern));
                return Ok(CommandResult::success());
            }
            ScanOutcome::Completed(report) => report,
        };

        self.print_report(&report, ui)?;

        if report.has_failures() {
            for path in &report.files_failed {
                ui.error(&format!("Could not write {}", path.display()));
            }
            return Ok(CommandResult::failure(1));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
  "kind": "Service",
  "spec": {
    "template": {
      "spec": {
        "containers": [
          {
            "env": [
              {"name": "API_KEY", "value": "xyz"},
              {"name": "PORT", "value": "8080"},
              {"name": "AUTHOR", "value": "jdoe"}
            ]
          }
        ]
      }
    }
  }
}"#;

    fn setup_tree() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let file = temp
            .path()
            .join("snaps/2026-01-18/run/api/describes/api.json");
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, SNAPSHOT).unwrap();
        (temp, file)
    }

    fn args_for(temp: &TempDir) -> ScanArgs {
        ScanArgs {
            root: Some(temp.path().join("snaps")),
            ..Default::default()
        }
    }

    #[test]
    fn resolve_uses_defaults() {
        let settings = ScanSettings::resolve(&ScanArgs::default(), &SnapredactConfig::default());

        assert_eq!(settings.options.root, PathBuf::from(DEFAULT_ROOT));
        assert_eq!(settings.options.sample_limit, DEFAULT_SAMPLE_LIMIT);
        assert!(!settings.options.dry_run);
        assert!(settings.policy.is_explicit("FIREBASE_CONFIG"));
    }

    #[test]
    fn resolve_prefers_flags_over_config() {
        let args = ScanArgs {
            root: Some(PathBuf::from("from-flag")),
            sample_limit: Some(3),
            ..Default::default()
        };
        let config = SnapredactConfig {
            root: Some(PathBuf::from("from-config")),
            sample_limit: Some(9),
            ..Default::default()
        };

        let settings = ScanSettings::resolve(&args, &config);

        assert_eq!(settings.options.root, PathBuf::from("from-flag"));
        assert_eq!(settings.options.sample_limit, 3);
    }

    #[test]
    fn resolve_falls_back_to_config() {
        let config = SnapredactConfig {
            root: Some(PathBuf::from("from-config")),
            sample_limit: Some(9),
            ..Default::default()
        };

        let settings = ScanSettings::resolve(&ScanArgs::default(), &config);

        assert_eq!(settings.options.root, PathBuf::from("from-config"));
        assert_eq!(settings.options.sample_limit, 9);
    }

    #[test]
    fn resolve_unions_explicit_names() {
        let args = ScanArgs {
            explicit: vec![" DATABASE_URL , ,".to_string(), "REDIS_URL".to_string()],
            ..Default::default()
        };
        let config = SnapredactConfig {
            explicit: vec!["SENTRY_DSN".to_string()],
            ..Default::default()
        };

        let policy = ScanSettings::resolve(&args, &config).policy;

        assert!(policy.is_explicit("DATABASE_URL"));
        assert!(policy.is_explicit("REDIS_URL"));
        assert!(policy.is_explicit("SENTRY_DSN"));
        assert!(policy.is_explicit("API_KEY"));
        assert!(!policy.is_explicit(""));
    }

    #[test]
    fn live_scan_prints_report() {
        let (temp, file) = setup_tree();
        let mut ui = MockUI::new();

        let result = ScanCommand::new(temp.path(), args_for(&temp), None)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(
            &ui.messages()[..3],
            ["files_scanned=1", "files_changed=1", "redacted_values=2"]
        );
        assert_eq!(
            &ui.messages()[3..],
            [
                format!("{}\tAPI_KEY", file.display()),
                format!("{}\tAUTHOR", file.display())
            ]
        );
        let written = fs::read_to_string(&file).unwrap();
        assert!(written.contains("\"8080\""));
        assert!(!written.contains("xyz"));
        assert!(!written.contains("jdoe"));
    }

    #[test]
    fn dry_run_leaves_files_alone() {
        let (temp, file) = setup_tree();
        let mut ui = MockUI::new();
        let args = ScanArgs {
            dry_run: true,
            ..args_for(&temp)
        };

        ScanCommand::new(temp.path(), args, None)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.messages()[1], "files_changed=0 (dry-run)");
        assert_eq!(ui.messages()[2], "redacted_values=2");
        assert_eq!(fs::read_to_string(&file).unwrap(), SNAPSHOT);
    }

    #[test]
    fn json_report() {
        let (temp, _file) = setup_tree();
        let mut ui = MockUI::new();
        let args = ScanArgs {
            json: true,
            ..args_for(&temp)
        };

        ScanCommand::new(temp.path(), args, None)
            .execute(&mut ui)
            .unwrap();

        let report: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(report["files_changed"], 1);
        assert_eq!(report["redacted_values"], 2);
        assert_eq!(report["samples"][1]["name"], "AUTHOR");
    }

    #[test]
    fn reads_explicit_names_from_config_file() {
        let (temp, file) = setup_tree();
        fs::write(
            &file,
            r#"{"spec":{"template":{"spec":{"containers":[{"env":[{"name":"DATABASE_URL","value":"postgres://db"}]}]}}}}"#,
        )
        .unwrap();
        fs::write(temp.path().join(".snapredact.yml"), "explicit: [DATABASE_URL]\n").unwrap();
        let mut ui = MockUI::new();

        ScanCommand::new(temp.path(), args_for(&temp), None)
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("redacted_values=1"));
        assert!(fs::read_to_string(&file).unwrap().contains("REDACTED"));
    }

    #[test]
    fn missing_tree_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = ScanCommand::new(temp.path(), args_for(&temp), None)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("No files found for pattern"));
        assert!(ui.errors().is_empty());
    }
}
