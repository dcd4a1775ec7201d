use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;

use crate::config::ValidationConfig;
use crate::error::{Result, SchemaConstructionError};
use crate::report::ValidationReport;
use crate::syntax::SyntaxValidator;

/// Lifecycle of a [`JsonValidator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorState {
    /// Constructed, `validate_schema` not called yet.
    Unvalidated,
    /// `validate_schema` has run at least once.
    Validated,
}

/// Entry point: wraps one schema document and checks its syntax.
#[derive(Debug)]
pub struct JsonValidator {
    config: ValidationConfig,
    syntax: SyntaxValidator,
    schema: Value,
    validated: AtomicBool,
}

impl JsonValidator {
    /// Wrap `schema` for validation under `config`.
    ///
    /// Fails when `schema` is absent or is not a JSON object. JSON `null`
    /// counts as present but not an object.
    pub fn new(config: &ValidationConfig, schema: Option<Value>) -> Result<Self> {
        let schema = schema.ok_or(SchemaConstructionError::NullSchema)?;
        if !schema.is_object() {
            return Err(SchemaConstructionError::NotAnObject);
        }

        Ok(Self {
            config: config.clone(),
            syntax: SyntaxValidator::new(config),
            schema,
            validated: AtomicBool::new(false),
        })
    }

    /// Check the syntax of every keyword in the wrapped schema.
    ///
    /// Never fails: malformed keywords are reported in the returned report.
    pub fn validate_schema(&self) -> ValidationReport {
        let report = self.syntax.validate(&self.schema);
        self.validated.store(true, Ordering::Relaxed);
        report
    }

    pub fn state(&self) -> ValidatorState {
        if self.validated.load(Ordering::Relaxed) {
            ValidatorState::Validated
        } else {
            ValidatorState::Unvalidated
        }
    }

    pub fn schema(&self) -> &Value {
        &self.schema
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl TryFrom<Value> for JsonValidator {
    type Error = SchemaConstructionError;

    /// Wrap `schema` under the default config.
    fn try_from(schema: Value) -> Result<Self> {
        Self::new(&ValidationConfig::default(), Some(schema))
    }
}
