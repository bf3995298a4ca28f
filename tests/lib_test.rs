//! Library integration tests.

use stylelint_pretty::ReportError;

#[test]
fn error_types_are_public() {
    let err = ReportError::ResultsNotFound {
        path: "results.json".into(),
    };
    assert!(err.to_string().contains("results.json"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> stylelint_pretty::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use stylelint_pretty::cli::Cli;

    let cli = Cli::parse_from(["stylelint-pretty", "--columns", "100", "results.json"]);
    assert_eq!(cli.columns, Some(100));
    assert!(cli.input.is_some());
}

#[test]
fn formatter_is_reexported() {
    let formatter = stylelint_pretty::ReportFormatter::default();
    assert_eq!(formatter.format(&[]), "");
}
