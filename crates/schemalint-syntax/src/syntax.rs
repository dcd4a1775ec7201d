use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::ValidationConfig;
use crate::keyword::NodeType;
use crate::pointer::JsonPointer;
use crate::registry::CheckerRegistry;
use crate::report::{ValidationMessage, ValidationReport};

/// Walks a schema's keywords and dispatches each to its registered checker.
#[derive(Debug, Clone)]
pub struct SyntaxValidator {
    registry: Arc<CheckerRegistry>,
    max_depth: usize,
}

impl SyntaxValidator {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            registry: Arc::clone(config.registry()),
            max_depth: config.max_depth(),
        }
    }

    /// Check every keyword of `schema` and return the collected messages.
    ///
    /// A non-object `schema` yields a single message at the root.
    pub fn validate(&self, schema: &Value) -> ValidationReport {
        let root = JsonPointer::root();
        let mut messages = Vec::new();

        match schema {
            Value::Object(map) => {
                tracing::debug!(keywords = map.len(), "syntax validation started");
                self.validate_object(map, &root, 0, &mut messages);
            }
            other => messages.push(ValidationMessage::wrong_type(
                "",
                root,
                NodeType::of(other),
                &[NodeType::Object],
            )),
        }

        tracing::debug!(messages = messages.len(), "syntax validation finished");
        ValidationReport::from_messages(messages)
    }

    fn validate_object(
        &self,
        schema: &Map<String, Value>,
        path: &JsonPointer,
        depth: usize,
        messages: &mut Vec<ValidationMessage>,
    ) {
        for (keyword, value) in schema {
            let Some(checker) = self.registry.lookup(keyword) else {
                tracing::trace!(keyword = %keyword, path = %path, "ignoring unknown keyword");
                continue;
            };

            let mut ctx = CheckContext {
                validator: self,
                keyword,
                path,
                depth,
                messages: &mut *messages,
            };
            checker.check(value, &mut ctx);
        }
    }
}

/// Handle given to a checker while it inspects one keyword value.
pub struct CheckContext<'a> {
    validator: &'a SyntaxValidator,
    keyword: &'a str,
    path: &'a JsonPointer,
    depth: usize,
    messages: &'a mut Vec<ValidationMessage>,
}

impl CheckContext<'_> {
    pub fn keyword(&self) -> &str {
        self.keyword
    }

    /// Location of the schema object holding the keyword.
    pub fn path(&self) -> &JsonPointer {
        self.path
    }

    /// Nesting depth of the schema object; the root is 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn report(&mut self, message: impl Into<String>) {
        self.messages.push(ValidationMessage::new(
            self.keyword,
            self.path.clone(),
            message,
        ));
    }

    /// Report `value` as having a type outside `expected`.
    pub fn report_wrong_type(&mut self, value: &Value, expected: &[NodeType]) {
        self.messages.push(ValidationMessage::wrong_type(
            self.keyword,
            self.path.clone(),
            NodeType::of(value),
            expected,
        ));
    }

    /// Report a part of the keyword value (`subject`) as mistyped.
    pub fn report_member_type(&mut self, subject: &str, value: &Value, expected: &[NodeType]) {
        self.messages.push(ValidationMessage::wrong_member_type(
            self.keyword,
            self.path.clone(),
            subject,
            NodeType::of(value),
            expected,
        ));
    }

    /// Return whether `value` has one of the `expected` types, reporting if not.
    ///
    /// `Number` in `expected` also admits integers.
    pub fn expect_type(&mut self, value: &Value, expected: &[NodeType]) -> bool {
        if type_matches(value, expected) {
            return true;
        }
        self.report_wrong_type(value, expected);
        false
    }

    /// Validate a nested schema found under this keyword.
    ///
    /// `segment` locates the schema below the keyword (a member name or an
    /// array index); `None` means the keyword value itself is the schema.
    pub fn validate_subschema(&mut self, segment: Option<&str>, value: &Value) {
        let Value::Object(schema) = value else {
            match segment {
                Some(segment) => {
                    let subject = format!("member {segment:?}");
                    self.report_member_type(&subject, value, &[NodeType::Object]);
                }
                None => self.report_wrong_type(value, &[NodeType::Object]),
            }
            return;
        };

        let depth = self.depth + 1;
        if depth >= self.validator.max_depth {
            tracing::warn!(
                path = %self.path,
                keyword = self.keyword,
                max_depth = self.validator.max_depth,
                "schema nesting limit reached"
            );
            self.report(format!(
                "schema nesting exceeds maximum depth ({})",
                self.validator.max_depth
            ));
            return;
        }

        let base = self.path.join(self.keyword);
        let location = match segment {
            Some(segment) => base.join(segment),
            None => base,
        };
        self.validator
            .validate_object(schema, &location, depth, self.messages);
    }
}

pub(crate) fn type_matches(value: &Value, expected: &[NodeType]) -> bool {
    let found = NodeType::of(value);
    expected.contains(&found)
        || (found == NodeType::Integer && expected.contains(&NodeType::Number))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::registry::SyntaxChecker;

    fn validate(schema: Value) -> ValidationReport {
        SyntaxValidator::new(&ValidationConfig::default()).validate(&schema)
    }

    #[test]
    fn empty_schema_has_no_messages() {
        let report = validate(json!({}));
        assert!(report.is_success());
        assert!(report.messages().is_empty());
    }

    #[test]
    fn unknown_keywords_are_skipped() {
        assert!(validate(json!({"toto": 2, "x-vendor": {"maximum": "bad"}})).is_success());
    }

    #[test]
    fn non_object_root_is_reported() {
        let report = validate(json!([1, 2]));
        assert_eq!(report.len(), 1);
        assert_eq!(report.messages()[0].found, Some(NodeType::Array));
    }

    #[test]
    fn messages_follow_sorted_key_order() {
        let report = validate(json!({"title": 1, "maximum": "x", "enum": []}));
        let keywords: Vec<&str> = report.messages().iter().map(|m| m.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["enum", "maximum", "title"]);
    }

    #[test]
    fn nested_messages_carry_nested_path() {
        let report = validate(json!({"properties": {"a": {"maximum": "bad"}}}));
        assert!(!report.is_success());
        let message = &report.messages()[0];
        assert_eq!(message.keyword, "maximum");
        assert_eq!(message.path.to_string(), "/properties/a");
    }

    #[test]
    fn validating_twice_gives_equal_reports() {
        let validator = SyntaxValidator::new(&ValidationConfig::default());
        let schema = json!({"items": [{"type": "foo"}, 3], "minItems": -1});
        assert_eq!(validator.validate(&schema), validator.validate(&schema));
    }

    #[test]
    fn depth_cap_reports_instead_of_recursing() {
        let config = ValidationConfig::builder().max_depth(3).build().unwrap();
        let validator = SyntaxValidator::new(&config);

        let mut schema = json!({"maximum": "bad"});
        for _ in 0..5 {
            schema = json!({"items": schema});
        }

        let report = validator.validate(&schema);
        assert_eq!(report.len(), 1);
        let message = &report.messages()[0];
        assert_eq!(message.keyword, "items");
        assert_eq!(message.path.to_string(), "/items/items");
        assert!(message.message.contains("maximum depth (3)"));
    }

    #[test]
    fn deep_schema_within_default_cap_is_walked() {
        let mut schema = json!({"type": "string"});
        for _ in 0..100 {
            schema = json!({"properties": {"p": schema}});
        }
        assert!(validate(schema).is_success());
    }

    struct Positive;

    impl SyntaxChecker for Positive {
        fn check(&self, value: &Value, ctx: &mut CheckContext<'_>) {
            if ctx.expect_type(value, &[NodeType::Number]) && value.as_f64() <= Some(0.0) {
                ctx.report("value must be positive");
            }
        }
    }

    #[test]
    fn custom_checker_runs_at_every_depth() {
        let config = ValidationConfig::builder()
            .checker("x-positive", Positive)
            .build()
            .unwrap();
        let validator = SyntaxValidator::new(&config);

        let report = validator.validate(&json!({
            "x-positive": 2,
            "properties": {"a": {"x-positive": -1}}
        }));
        assert_eq!(report.len(), 1);
        assert_eq!(report.messages()[0].keyword, "x-positive");
        assert_eq!(report.messages()[0].path.to_string(), "/properties/a");
        assert_eq!(report.messages()[0].message, "value must be positive");
    }
}
