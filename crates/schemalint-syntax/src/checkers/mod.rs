//! Built-in checkers for the draft v3 keyword set.
//!
//! [`builtin`] is an exhaustive match, so adding a [`Keyword`] variant
//! without a checker fails to compile.

mod dependencies;
mod primitive;
mod subschema;
mod type_union;
mod values;

pub use dependencies::DependenciesChecker;
pub use primitive::{CountChecker, DivisibleByChecker, TypeChecker};
pub use subschema::{
    BooleanOrSchemaChecker, PatternPropertiesChecker, PropertiesChecker, SchemaOrArrayChecker,
};
pub use type_union::{TypeUnionChecker, PRIMITIVE_TYPES};
pub use values::{EnumChecker, PatternChecker};

use std::collections::HashSet;
use std::fmt::Write;

use serde_json::Value;

use crate::keyword::{Keyword, NodeType};
use crate::registry::SyntaxChecker;

const NUMBER: &[NodeType] = &[NodeType::Integer, NodeType::Number];

/// Checker for a built-in keyword.
pub fn builtin(keyword: Keyword) -> Box<dyn SyntaxChecker> {
    match keyword {
        Keyword::Maximum | Keyword::Minimum => Box::new(TypeChecker::new(NUMBER, "number")),
        Keyword::ExclusiveMaximum | Keyword::ExclusiveMinimum | Keyword::UniqueItems => {
            Box::new(TypeChecker::new(&[NodeType::Boolean], "boolean"))
        }
        Keyword::Ref | Keyword::Id | Keyword::Description | Keyword::Title => {
            Box::new(TypeChecker::new(&[NodeType::String], "string"))
        }
        Keyword::DivisibleBy => Box::new(DivisibleByChecker),
        Keyword::MaxItems | Keyword::MinItems | Keyword::MaxLength | Keyword::MinLength => {
            Box::new(CountChecker)
        }
        Keyword::Type | Keyword::Disallow => Box::new(TypeUnionChecker),
        Keyword::Properties => Box::new(PropertiesChecker),
        Keyword::PatternProperties => Box::new(PatternPropertiesChecker),
        Keyword::Items | Keyword::Extends => Box::new(SchemaOrArrayChecker),
        Keyword::AdditionalItems | Keyword::AdditionalProperties => {
            Box::new(BooleanOrSchemaChecker)
        }
        Keyword::Dependencies => Box::new(DependenciesChecker),
        Keyword::Enum => Box::new(EnumChecker),
        Keyword::Pattern => Box::new(PatternChecker),
    }
}

/// Why `pattern` is not an ECMA 262 regular expression, if it is not.
fn regex_error(pattern: &str) -> Option<regress::Error> {
    regress::Regex::new(pattern).err()
}

/// Index of the first element equal to an earlier one.
///
/// Numbers compare by value, so `1` and `1.0` are equal at any depth.
fn first_duplicate(items: &[Value]) -> Option<usize> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().position(|item| {
        let mut key = String::new();
        canonical_key(item, &mut key);
        !seen.insert(key)
    })
}

/// Append a rendering of `value` under which equal instances coincide.
fn canonical_key(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                let _ = write!(out, "{i}");
            } else if let Some(u) = n.as_u64() {
                let _ = write!(out, "{u}");
            } else {
                push_float(n.as_f64().unwrap_or(f64::NAN), out);
            }
        }
        Value::String(s) => {
            let _ = write!(out, "{s:?}");
        }
        Value::Array(elements) => {
            out.push('[');
            for element in elements {
                canonical_key(element, out);
                out.push(',');
            }
            out.push(']');
        }
        Value::Object(members) => {
            let mut names: Vec<&String> = members.keys().collect();
            names.sort();
            out.push('{');
            for name in names {
                let _ = write!(out, "{name:?}:");
                canonical_key(&members[name.as_str()], out);
                out.push(',');
            }
            out.push('}');
        }
    }
}

// 2^63 and 2^64, both exact in f64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

fn push_float(f: f64, out: &mut String) {
    let _ = if f.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&f) {
        write!(out, "{}", f as i64)
    } else if f.fract() == 0.0 && (0.0..U64_BOUND).contains(&f) {
        write!(out, "{}", f as u64)
    } else {
        write!(out, "{f:?}")
    };
}
