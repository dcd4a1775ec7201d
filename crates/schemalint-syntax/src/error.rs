/// Errors raised when a [`JsonValidator`](crate::JsonValidator) cannot be built.
///
/// The `Display` strings are fixed so callers can match on them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaConstructionError {
    /// No schema was supplied.
    #[error("schema is null")]
    NullSchema,

    /// The schema is present but is not a JSON object.
    #[error("not a schema (not an object)")]
    NotAnObject,
}

pub type Result<T> = std::result::Result<T, SchemaConstructionError>;

/// Errors raised while assembling a [`ValidationConfig`](crate::ValidationConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A checker was registered under a name that already has one.
    #[error("keyword already registered: {0}")]
    DuplicateKeyword(String),

    /// The nesting cap must allow at least the top-level schema.
    #[error("max_depth must be greater than zero")]
    InvalidMaxDepth,
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
