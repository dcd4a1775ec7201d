use serde_json::Value;

use super::regex_error;
use crate::keyword::NodeType;
use crate::registry::SyntaxChecker;
use crate::syntax::CheckContext;

/// `properties`: an object whose members are schemas.
///
/// A member's draft v3 `required` attribute, when present, must be a boolean.
pub struct PropertiesChecker;

impl SyntaxChecker for PropertiesChecker {
    fn check(&self, value: &Value, ctx: &mut CheckContext<'_>) {
        let Some(members) = value.as_object() else {
            ctx.report_wrong_type(value, &[NodeType::Object]);
            return;
        };

        for (name, member) in members {
            if let Some(required) = member.get("required") {
                if !required.is_boolean() {
                    ctx.report_member_type(
                        &format!("\"required\" attribute of member {name:?}"),
                        required,
                        &[NodeType::Boolean],
                    );
                }
            }
            ctx.validate_subschema(Some(name), member);
        }
    }

    fn grammar(&self) -> &str {
        "object of schemas"
    }
}

/// `patternProperties`: an object whose member names are regular
/// expressions and whose members are schemas.
pub struct PatternPropertiesChecker;

impl SyntaxChecker for PatternPropertiesChecker {
    fn check(&self, value: &Value, ctx: &mut CheckContext<'_>) {
        let Some(members) = value.as_object() else {
            ctx.report_wrong_type(value, &[NodeType::Object]);
            return;
        };

        for (pattern, member) in members {
            if let Some(err) = regex_error(pattern) {
                tracing::debug!(pattern = %pattern, error = %err, "member name is not a regex");
                ctx.report(format!("member name {pattern:?} is not a valid regular expression"));
            }
            ctx.validate_subschema(Some(pattern), member);
        }
    }

    fn grammar(&self) -> &str {
        "object of schemas keyed by regular expression"
    }
}

/// `items` and `extends`: a schema or an array of schemas.
pub struct SchemaOrArrayChecker;

impl SyntaxChecker for SchemaOrArrayChecker {
    fn check(&self, value: &Value, ctx: &mut CheckContext<'_>) {
        match value {
            Value::Object(_) => ctx.validate_subschema(None, value),
            Value::Array(schemas) => {
                for (index, schema) in schemas.iter().enumerate() {
                    ctx.validate_subschema(Some(&index.to_string()), schema);
                }
            }
            other => ctx.report_wrong_type(other, &[NodeType::Array, NodeType::Object]),
        }
    }

    fn grammar(&self) -> &str {
        "schema, or array of schemas"
    }
}

/// `additionalItems` and `additionalProperties`: a boolean or a schema.
pub struct BooleanOrSchemaChecker;

impl SyntaxChecker for BooleanOrSchemaChecker {
    fn check(&self, value: &Value, ctx: &mut CheckContext<'_>) {
        match value {
            Value::Bool(_) => {}
            Value::Object(_) => ctx.validate_subschema(None, value),
            other => ctx.report_wrong_type(other, &[NodeType::Boolean, NodeType::Object]),
        }
    }

    fn grammar(&self) -> &str {
        "boolean, or schema"
    }
}
