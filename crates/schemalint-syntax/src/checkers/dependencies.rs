use serde_json::Value;

use crate::keyword::NodeType;
use crate::registry::SyntaxChecker;
use crate::syntax::CheckContext;

/// `dependencies`: an object whose members are a property name, an array
/// of property names, or a schema.
pub struct DependenciesChecker;

impl SyntaxChecker for DependenciesChecker {
    fn check(&self, value: &Value, ctx: &mut CheckContext<'_>) {
        let Some(members) = value.as_object() else {
            ctx.report_wrong_type(value, &[NodeType::Object]);
            return;
        };

        for (name, dependency) in members {
            match dependency {
                Value::String(_) => {}
                Value::Array(names) => {
                    for (index, element) in names.iter().enumerate() {
                        if !element.is_string() {
                            ctx.report_member_type(
                                &format!("element {index} of dependency {name:?}"),
                                element,
                                &[NodeType::String],
                            );
                        }
                    }
                }
                Value::Object(_) => ctx.validate_subschema(Some(name), dependency),
                other => ctx.report_member_type(
                    &format!("dependency {name:?}"),
                    other,
                    &[NodeType::Array, NodeType::Object, NodeType::String],
                ),
            }
        }
    }

    fn grammar(&self) -> &str {
        "object of property names, arrays of property names, or schemas"
    }
}
