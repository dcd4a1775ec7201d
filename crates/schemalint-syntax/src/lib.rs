//! Keyword-level syntax validation of JSON Schema documents.
//!
//! Checks that a schema is itself well formed: `maximum` must be a number,
//! `properties` must be an object of schemas, and so on for every keyword
//! of the active dialect. This is distinct from validating data instances
//! against a schema, which this crate does not do.
//!
//! Unknown keywords are ignored, so schemas using vocabulary from newer
//! drafts or private extensions still pass.
//!
//! ```
//! use schemalint_syntax::{JsonValidator, ValidationConfig};
//! use serde_json::json;
//!
//! let config = ValidationConfig::default();
//! let validator = JsonValidator::new(&config, Some(json!({"maximum": "ten"}))).unwrap();
//!
//! let report = validator.validate_schema();
//! assert!(!report.is_success());
//! assert_eq!(report.messages()[0].keyword, "maximum");
//! ```

pub mod checkers;
pub mod config;
pub mod error;
pub mod keyword;
pub mod pointer;
pub mod registry;
pub mod report;
pub mod syntax;
pub mod validator;

pub use config::{KeywordDialect, ValidationConfig, ValidationConfigBuilder, DEFAULT_MAX_DEPTH};
pub use error::{ConfigError, ConfigResult, Result, SchemaConstructionError};
pub use keyword::{Keyword, NodeType};
pub use pointer::JsonPointer;
pub use registry::{CheckerRegistry, SyntaxChecker};
pub use report::{ValidationMessage, ValidationReport};
pub use syntax::{CheckContext, SyntaxValidator};
pub use validator::{JsonValidator, ValidatorState};
