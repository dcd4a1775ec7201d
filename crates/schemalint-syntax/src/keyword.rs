use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

/// Keywords recognized by the draft v3 dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Keyword {
    AdditionalItems,
    AdditionalProperties,
    Dependencies,
    Description,
    Disallow,
    DivisibleBy,
    Ref,
    Enum,
    ExclusiveMaximum,
    ExclusiveMinimum,
    Extends,
    Id,
    Items,
    Maximum,
    MaxItems,
    MaxLength,
    Minimum,
    MinItems,
    MinLength,
    Pattern,
    PatternProperties,
    Properties,
    Title,
    Type,
    UniqueItems,
}

impl Keyword {
    pub const ALL: [Keyword; 25] = [
        Keyword::AdditionalItems,
        Keyword::AdditionalProperties,
        Keyword::Dependencies,
        Keyword::Description,
        Keyword::Disallow,
        Keyword::DivisibleBy,
        Keyword::Ref,
        Keyword::Enum,
        Keyword::ExclusiveMaximum,
        Keyword::ExclusiveMinimum,
        Keyword::Extends,
        Keyword::Id,
        Keyword::Items,
        Keyword::Maximum,
        Keyword::MaxItems,
        Keyword::MaxLength,
        Keyword::Minimum,
        Keyword::MinItems,
        Keyword::MinLength,
        Keyword::Pattern,
        Keyword::PatternProperties,
        Keyword::Properties,
        Keyword::Title,
        Keyword::Type,
        Keyword::UniqueItems,
    ];

    /// Name of the keyword as it appears in a schema.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::AdditionalItems => "additionalItems",
            Keyword::AdditionalProperties => "additionalProperties",
            Keyword::Dependencies => "dependencies",
            Keyword::Description => "description",
            Keyword::Disallow => "disallow",
            Keyword::DivisibleBy => "divisibleBy",
            Keyword::Ref => "$ref",
            Keyword::Enum => "enum",
            Keyword::ExclusiveMaximum => "exclusiveMaximum",
            Keyword::ExclusiveMinimum => "exclusiveMinimum",
            Keyword::Extends => "extends",
            Keyword::Id => "id",
            Keyword::Items => "items",
            Keyword::Maximum => "maximum",
            Keyword::MaxItems => "maxItems",
            Keyword::MaxLength => "maxLength",
            Keyword::Minimum => "minimum",
            Keyword::MinItems => "minItems",
            Keyword::MinLength => "minLength",
            Keyword::Pattern => "pattern",
            Keyword::PatternProperties => "patternProperties",
            Keyword::Properties => "properties",
            Keyword::Title => "title",
            Keyword::Type => "type",
            Keyword::UniqueItems => "uniqueItems",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyword::ALL
            .into_iter()
            .find(|keyword| keyword.as_str() == s)
            .ok_or_else(|| format!("unknown keyword: {s}"))
    }
}

/// JSON type of a schema node, as named by JSON Schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
}

impl NodeType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Array(_) => NodeType::Array,
            Value::Bool(_) => NodeType::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => NodeType::Integer,
            Value::Number(_) => NodeType::Number,
            Value::Null => NodeType::Null,
            Value::Object(_) => NodeType::Object,
            Value::String(_) => NodeType::String,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Array => "array",
            NodeType::Boolean => "boolean",
            NodeType::Integer => "integer",
            NodeType::Null => "null",
            NodeType::Number => "number",
            NodeType::Object => "object",
            NodeType::String => "string",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
