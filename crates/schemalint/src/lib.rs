//! JSON Schema syntax linting.
//!
//! schemalint checks that schema documents are themselves well formed,
//! keyword by keyword, before they are used to validate any data.
//!
//! # Crate Structure
//!
//! - [`syntax`] — Keyword registry, per-keyword checkers and reports
//!
//! The `schemalint` binary (behind the `cli` feature) reads schema files
//! and prints their reports.

/// Re-export syntax validation types.
pub mod syntax {
    pub use schemalint_syntax::*;
}

pub use schemalint_syntax::{JsonValidator, ValidationConfig, ValidationReport};

/// Parse `text` as JSON and wrap it in a validator under `config`.
pub fn validator_from_str(
    config: &ValidationConfig,
    text: &str,
) -> Result<JsonValidator, LoadError> {
    let schema: serde_json::Value = serde_json::from_str(text)?;
    Ok(JsonValidator::new(config, Some(schema))?)
}

/// Errors turning JSON text into a [`JsonValidator`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not a schema.
    #[error(transparent)]
    Schema(#[from] syntax::SchemaConstructionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_and_validates_text() {
        let config = ValidationConfig::default();
        let validator = validator_from_str(&config, r#"{"type": "string"}"#).unwrap();
        assert!(validator.validate_schema().is_success());
    }

    #[test]
    fn reports_json_and_shape_failures() {
        let config = ValidationConfig::default();
        assert!(matches!(
            validator_from_str(&config, "{not json"),
            Err(LoadError::Json(_))
        ));
        let err = validator_from_str(&config, r#""hello""#).unwrap_err();
        assert_eq!(err.to_string(), "not a schema (not an object)");
    }
}
