use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::checkers;
use crate::config::KeywordDialect;
use crate::error::{ConfigError, ConfigResult};
use crate::syntax::CheckContext;

/// Structural rule for the value of one keyword.
///
/// Implementations are stateless: the same value must always produce the
/// same messages. Violations are reported through the context, never
/// returned as errors.
pub trait SyntaxChecker: Send + Sync {
    /// Check `value`, the value of the keyword this checker is bound to.
    fn check(&self, value: &Value, ctx: &mut CheckContext<'_>);

    /// One-line summary of the accepted grammar.
    fn grammar(&self) -> &str {
        "custom keyword"
    }
}

/// Keyword-name to checker mapping.
///
/// Built once per [`ValidationConfig`](crate::ValidationConfig) and never
/// mutated afterward, so it can be shared across threads.
pub struct CheckerRegistry {
    checkers: BTreeMap<String, Box<dyn SyntaxChecker>>,
}

impl CheckerRegistry {
    /// Registry holding exactly the built-in checkers of `dialect`.
    pub fn for_dialect(dialect: KeywordDialect) -> Self {
        let checkers = dialect
            .keywords()
            .iter()
            .map(|keyword| (keyword.as_str().to_string(), checkers::builtin(*keyword)))
            .collect();
        Self { checkers }
    }

    pub(crate) fn register(
        &mut self,
        name: impl Into<String>,
        checker: Box<dyn SyntaxChecker>,
    ) -> ConfigResult<()> {
        let name = name.into();
        if self.checkers.contains_key(&name) {
            return Err(ConfigError::DuplicateKeyword(name));
        }
        self.checkers.insert(name, checker);
        Ok(())
    }

    /// Find the checker bound to `keyword`, if any.
    pub fn lookup(&self, keyword: &str) -> Option<&dyn SyntaxChecker> {
        self.checkers.get(keyword).map(|checker| &**checker)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.checkers.contains_key(keyword)
    }

    /// Registered keyword names, sorted.
    pub fn keywords(&self) -> Vec<&str> {
        self.checkers.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::for_dialect(KeywordDialect::default())
    }
}

impl fmt::Debug for CheckerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckerRegistry")
            .field("keywords", &self.keywords())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::Keyword;

    struct Noop;

    impl SyntaxChecker for Noop {
        fn check(&self, _value: &Value, _ctx: &mut CheckContext<'_>) {}
    }

    #[test]
    fn draft_v3_registry_covers_every_keyword() {
        let registry = CheckerRegistry::for_dialect(KeywordDialect::DraftV3);
        assert_eq!(registry.len(), Keyword::ALL.len());
        for keyword in Keyword::ALL {
            assert!(registry.contains(keyword.as_str()), "missing {keyword}");
        }
    }

    #[test]
    fn unknown_keyword_has_no_checker() {
        let registry = CheckerRegistry::default();
        assert!(registry.lookup("toto").is_none());
        assert!(registry.lookup("required").is_none());
        assert!(registry.lookup("maximum").is_some());
    }

    #[test]
    fn keywords_are_sorted() {
        let registry = CheckerRegistry::default();
        let keywords = registry.keywords();
        assert_eq!(keywords.first(), Some(&"$ref"));
        let mut sorted = keywords.clone();
        sorted.sort_unstable();
        assert_eq!(keywords, sorted);
    }

    #[test]
    fn register_rejects_duplicates() {
        let mut registry = CheckerRegistry::default();
        assert_eq!(
            registry.register("maximum", Box::new(Noop)),
            Err(ConfigError::DuplicateKeyword("maximum".to_string()))
        );
        assert!(registry.register("x-custom", Box::new(Noop)).is_ok());
        assert!(registry.contains("x-custom"));
        assert_eq!(registry.lookup("x-custom").map(|c| c.grammar()), Some("custom keyword"));
    }

    #[test]
    fn builtin_checkers_describe_their_grammar() {
        let registry = CheckerRegistry::default();
        assert_eq!(registry.lookup("uniqueItems").map(|c| c.grammar()), Some("boolean"));
        assert_eq!(registry.lookup("$ref").map(|c| c.grammar()), Some("string"));
    }
}
