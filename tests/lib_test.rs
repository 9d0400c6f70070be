//! Library integration tests.

use snapredact::RedactError;

#[test]
fn error_types_are_public() {
    let err = RedactError::ConfigNotFound {
        path: "x.yml".into(),
    };
    assert!(err.to_string().contains("x.yml"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> snapredact::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use snapredact::cli::{Cli, Commands};

    let cli = Cli::parse_from(["snapredact", "--dry-run", "--snapshot", "2026-01-18"]);
    assert!(cli.scan.dry_run);
    assert!(cli.command.is_none());

    let cli = Cli::parse_from(["snapredact", "completions", "bash"]);
    assert!(matches!(cli.command, Some(Commands::Completions(_))));
}

#[test]
fn policy_and_sentinel_are_public() {
    use snapredact::secrets::{SensitivityPolicy, DEFAULT_EXPLICIT, REDACTED, SENSITIVE_TOKENS};

    assert_eq!(REDACTED, "REDACTED");
    assert_eq!(SENSITIVE_TOKENS.len(), 7);

    let policy = SensitivityPolicy::with_builtins();
    for name in DEFAULT_EXPLICIT {
        assert!(policy.is_sensitive_name(name));
    }
}
