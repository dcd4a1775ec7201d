use std::io::Read;
use std::path::Path;

use schemalint::syntax::ValidationConfig;
use schemalint::LoadError;

use crate::cmd::CheckArgs;
use crate::exit::{io_error, most_severe, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_outcome, CheckOutcome, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let config = args.config()?;
    let mut code = SUCCESS;
    let mut invalid = 0usize;
    let mut failed = 0usize;

    for path in &args.paths {
        match check_path(&config, path) {
            Ok(outcome) => {
                if !outcome.is_success() {
                    invalid += 1;
                    code = most_severe(code, DATA_INVALID);
                }
                print_outcome(&outcome, format);
            }
            Err(err) => {
                failed += 1;
                tracing::debug!(path = %path.display(), code = err.code, "schema not checked");
                eprintln!("error: {err}");
                code = most_severe(code, err.code);
            }
        }
    }

    tracing::info!(
        checked = args.paths.len(),
        invalid,
        failed,
        "schema check finished"
    );
    Ok(code)
}

fn check_path(config: &ValidationConfig, path: &Path) -> CliResult<CheckOutcome> {
    let source = source_name(path);
    let text = read_source(path)?;
    check_text(config, source, &text)
}

fn check_text(config: &ValidationConfig, source: String, text: &str) -> CliResult<CheckOutcome> {
    let result = match schemalint::validator_from_str(config, text) {
        Ok(validator) => Ok(validator.validate_schema()),
        Err(LoadError::Schema(err)) => Err(err.to_string()),
        Err(LoadError::Json(err)) => {
            return Err(CliError::new(USAGE, format!("{source}: invalid JSON: {err}")));
        }
    };

    let success = matches!(&result, Ok(report) if report.is_success());
    tracing::debug!(source = %source, success, "checked schema");
    Ok(CheckOutcome { source, result })
}

fn source_name(path: &Path) -> String {
    if path == Path::new("-") {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn read_source(path: &Path) -> CliResult<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|err| io_error("failed reading stdin", err))?;
        return Ok(text);
    }

    std::fs::read_to_string(path)
        .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_schema_produces_clean_outcome() {
        let config = ValidationConfig::default();
        let outcome = check_text(&config, "a.json".to_string(), r#"{"type":"string"}"#).unwrap();
        assert!(outcome.is_success());
    }

    #[test]
    fn bad_keyword_produces_failing_outcome() {
        let config = ValidationConfig::default();
        let outcome = check_text(&config, "a.json".to_string(), r#"{"maximum":"ten"}"#).unwrap();
        assert!(!outcome.is_success());
        assert_eq!(outcome.result.as_ref().map(|r| r.len()), Ok(1));
    }

    #[test]
    fn non_object_document_is_rejected_not_fatal() {
        let config = ValidationConfig::default();
        let outcome = check_text(&config, "a.json".to_string(), r#""hello""#).unwrap();
        assert_eq!(
            outcome.result.as_ref().err().map(String::as_str),
            Some("not a schema (not an object)")
        );
    }

    #[test]
    fn unparsable_json_is_a_usage_error() {
        let config = ValidationConfig::default();
        let err = check_text(&config, "a.json".to_string(), "{").err().unwrap();
        assert_eq!(err.code, USAGE);
        assert!(err.message.starts_with("a.json: invalid JSON"));
    }

    #[test]
    fn stdin_is_named() {
        assert_eq!(source_name(Path::new("-")), "<stdin>");
        assert_eq!(source_name(Path::new("dir/s.json")), "dir/s.json");
    }
}
