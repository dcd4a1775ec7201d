use serde_json::Value;

use super::NUMBER;
use crate::keyword::NodeType;
use crate::registry::SyntaxChecker;
use crate::syntax::CheckContext;

/// Accepts any value of one of a fixed set of types.
pub struct TypeChecker {
    expected: &'static [NodeType],
    grammar: &'static str,
}

impl TypeChecker {
    pub const fn new(expected: &'static [NodeType], grammar: &'static str) -> Self {
        Self { expected, grammar }
    }
}

impl SyntaxChecker for TypeChecker {
    fn check(&self, value: &Value, ctx: &mut CheckContext<'_>) {
        ctx.expect_type(value, self.expected);
    }

    fn grammar(&self) -> &str {
        self.grammar
    }
}

/// `divisibleBy`: a non-zero number.
pub struct DivisibleByChecker;

impl SyntaxChecker for DivisibleByChecker {
    fn check(&self, value: &Value, ctx: &mut CheckContext<'_>) {
        if ctx.expect_type(value, NUMBER) && value.as_f64() == Some(0.0) {
            ctx.report("divisor must not be zero");
        }
    }

    fn grammar(&self) -> &str {
        "non-zero number"
    }
}

/// Length and item-count bounds: a non-negative integer.
pub struct CountChecker;

impl SyntaxChecker for CountChecker {
    fn check(&self, value: &Value, ctx: &mut CheckContext<'_>) {
        if !ctx.expect_type(value, &[NodeType::Integer]) {
            return;
        }
        if value.as_u64().is_none() {
            ctx.report("value must not be negative");
        }
    }

    fn grammar(&self) -> &str {
        "non-negative integer"
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::checkers::test_support::{check, is_valid};
    use crate::keyword::NodeType;

    #[test]
    fn numeric_bounds_accept_integers_and_decimals() {
        for keyword in ["maximum", "minimum"] {
            assert!(is_valid(keyword, json!(10)));
            assert!(is_valid(keyword, json!(-2.5)));
            assert!(!is_valid(keyword, json!("ten")));
            assert!(!is_valid(keyword, json!(null)));
            assert!(!is_valid(keyword, json!([1])));
        }
    }

    #[test]
    fn wrong_type_message_names_found_type() {
        let report = check("maximum", json!("ten"));
        assert_eq!(report.len(), 1);
        let message = &report.messages()[0];
        assert_eq!(message.keyword, "maximum");
        assert_eq!(message.found, Some(NodeType::String));
        assert_eq!(message.expected, vec![NodeType::Integer, NodeType::Number]);
    }

    #[test]
    fn flags_require_booleans() {
        for keyword in ["exclusiveMaximum", "exclusiveMinimum", "uniqueItems"] {
            assert!(is_valid(keyword, json!(true)));
            assert!(is_valid(keyword, json!(false)));
            assert!(!is_valid(keyword, json!("true")));
            assert!(!is_valid(keyword, json!(1)));
        }
    }

    #[test]
    fn annotations_require_strings() {
        for keyword in ["$ref", "id", "description", "title"] {
            assert!(is_valid(keyword, json!("anything")));
            assert!(is_valid(keyword, json!("")));
            assert!(!is_valid(keyword, json!({})));
            assert!(!is_valid(keyword, json!(false)));
        }
    }

    #[test]
    fn divisible_by_rejects_zero() {
        assert!(is_valid("divisibleBy", json!(3)));
        assert!(is_valid("divisibleBy", json!(0.5)));
        assert!(!is_valid("divisibleBy", json!(0)));
        assert!(!is_valid("divisibleBy", json!(0.0)));
        assert!(!is_valid("divisibleBy", json!("2")));
        assert_eq!(
            check("divisibleBy", json!(0)).messages()[0].message,
            "divisor must not be zero"
        );
    }

    #[test]
    fn counts_require_non_negative_integers() {
        for keyword in ["maxItems", "minItems", "maxLength", "minLength"] {
            assert!(is_valid(keyword, json!(0)));
            assert!(is_valid(keyword, json!(12)));
            assert!(!is_valid(keyword, json!(-1)));
            assert!(!is_valid(keyword, json!(1.5)));
            assert!(!is_valid(keyword, json!("3")));
        }
    }
}
