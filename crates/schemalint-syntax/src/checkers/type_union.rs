use serde_json::Value;

use super::first_duplicate;
use crate::keyword::NodeType;
use crate::registry::SyntaxChecker;
use crate::syntax::CheckContext;

/// Type names accepted by `type` and `disallow`.
pub const PRIMITIVE_TYPES: [&str; 8] = [
    "string", "number", "integer", "boolean", "object", "array", "null", "any",
];

/// `type` and `disallow`: a primitive type name, or a non-empty array of
/// unique type names and schemas.
pub struct TypeUnionChecker;

impl SyntaxChecker for TypeUnionChecker {
    fn check(&self, value: &Value, ctx: &mut CheckContext<'_>) {
        match value {
            Value::String(name) => check_type_name(name, ctx),
            Value::Array(elements) => {
                if elements.is_empty() {
                    ctx.report("array must not be empty");
                    return;
                }
                if let Some(index) = first_duplicate(elements) {
                    ctx.report(format!("array elements must be unique (element {index} repeats)"));
                }
                for (index, element) in elements.iter().enumerate() {
                    match element {
                        Value::String(name) => check_type_name(name, ctx),
                        Value::Object(_) => {
                            ctx.validate_subschema(Some(&index.to_string()), element)
                        }
                        other => ctx.report_member_type(
                            &format!("element {index}"),
                            other,
                            &[NodeType::Object, NodeType::String],
                        ),
                    }
                }
            }
            other => {
                ctx.report_wrong_type(other, &[NodeType::Array, NodeType::String]);
            }
        }
    }

    fn grammar(&self) -> &str {
        "type name, or non-empty array of type names and schemas"
    }
}

fn check_type_name(name: &str, ctx: &mut CheckContext<'_>) {
    if !PRIMITIVE_TYPES.contains(&name) {
        ctx.report(format!("unknown primitive type {name:?}"));
    }
}
