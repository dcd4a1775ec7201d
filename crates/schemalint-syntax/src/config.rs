use std::fmt;
use std::sync::Arc;

use crate::error::{ConfigError, ConfigResult};
use crate::keyword::Keyword;
use crate::registry::{CheckerRegistry, SyntaxChecker};

/// Default cap on sub-schema nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Keyword vocabulary and grammar in force.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KeywordDialect {
    /// JSON Schema draft v3.
    #[default]
    DraftV3,
}

impl KeywordDialect {
    pub fn keywords(self) -> &'static [Keyword] {
        match self {
            KeywordDialect::DraftV3 => &Keyword::ALL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            KeywordDialect::DraftV3 => "draft-v3",
        }
    }
}

/// Controls syntax validation behavior.
///
/// Cloning is cheap: clones share the same checker registry.
#[derive(Clone)]
pub struct ValidationConfig {
    dialect: KeywordDialect,
    max_depth: usize,
    registry: Arc<CheckerRegistry>,
}

impl ValidationConfig {
    /// Config for `dialect` with default limits and no custom checkers.
    pub fn new(dialect: KeywordDialect) -> Self {
        Self {
            dialect,
            max_depth: DEFAULT_MAX_DEPTH,
            registry: Arc::new(CheckerRegistry::for_dialect(dialect)),
        }
    }

    pub fn builder() -> ValidationConfigBuilder {
        ValidationConfigBuilder::default()
    }

    pub fn dialect(&self) -> KeywordDialect {
        self.dialect
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn registry(&self) -> &Arc<CheckerRegistry> {
        &self.registry
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::new(KeywordDialect::default())
    }
}

impl fmt::Debug for ValidationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationConfig")
            .field("dialect", &self.dialect)
            .field("max_depth", &self.max_depth)
            .field("keywords", &self.registry.len())
            .finish()
    }
}

/// Builder for [`ValidationConfig`] with custom limits or extra checkers.
pub struct ValidationConfigBuilder {
    dialect: KeywordDialect,
    max_depth: usize,
    custom: Vec<(String, Box<dyn SyntaxChecker>)>,
}

impl Default for ValidationConfigBuilder {
    fn default() -> Self {
        Self {
            dialect: KeywordDialect::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            custom: Vec::new(),
        }
    }
}

impl ValidationConfigBuilder {
    pub fn dialect(mut self, dialect: KeywordDialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Bind a checker to a keyword outside the dialect's vocabulary.
    pub fn checker(
        mut self,
        keyword: impl Into<String>,
        checker: impl SyntaxChecker + 'static,
    ) -> Self {
        let checker: Box<dyn SyntaxChecker> = Box::new(checker);
        self.custom.push((keyword.into(), checker));
        self
    }

    pub fn build(self) -> ConfigResult<ValidationConfig> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth);
        }

        let mut registry = CheckerRegistry::for_dialect(self.dialect);
        for (keyword, checker) in self.custom {
            registry.register(keyword, checker)?;
        }

        Ok(ValidationConfig {
            dialect: self.dialect,
            max_depth: self.max_depth,
            registry: Arc::new(registry),
        })
    }
}
