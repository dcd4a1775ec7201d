use serde_json::Value;

use super::{first_duplicate, regex_error};
use crate::keyword::NodeType;
use crate::registry::SyntaxChecker;
use crate::syntax::CheckContext;

/// `enum`: a non-empty array of unique values.
pub struct EnumChecker;

impl SyntaxChecker for EnumChecker {
    fn check(&self, value: &Value, ctx: &mut CheckContext<'_>) {
        let Some(elements) = value.as_array() else {
            ctx.report_wrong_type(value, &[NodeType::Array]);
            return;
        };

        if elements.is_empty() {
            ctx.report("array must not be empty");
        } else if let Some(index) = first_duplicate(elements) {
            ctx.report(format!("array elements must be unique (element {index} repeats)"));
        }
    }

    fn grammar(&self) -> &str {
        "non-empty array of unique values"
    }
}

/// `pattern`: a string holding an ECMA 262 regular expression.
pub struct PatternChecker;

impl SyntaxChecker for PatternChecker {
    fn check(&self, value: &Value, ctx: &mut CheckContext<'_>) {
        let Some(pattern) = value.as_str() else {
            ctx.report_wrong_type(value, &[NodeType::String]);
            return;
        };

        if let Some(err) = regex_error(pattern) {
            tracing::debug!(pattern, error = %err, "pattern is not a valid regex");
            ctx.report(format!("{pattern:?} is not a valid regular expression"));
        }
    }

    fn grammar(&self) -> &str {
        "regular expression string"
    }
}
