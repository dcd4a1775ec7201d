use std::fmt;

use serde::Serialize;

use crate::keyword::NodeType;
use crate::pointer::JsonPointer;

/// One syntax violation found in a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    /// Keyword whose value is malformed.
    pub keyword: String,
    /// Location of the schema object holding `keyword`.
    pub path: JsonPointer,
    pub message: String,
    /// Type of the offending value, for type mismatches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<NodeType>,
    /// Types the keyword accepts at this position.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expected: Vec<NodeType>,
}

impl ValidationMessage {
    pub fn new(keyword: impl Into<String>, path: JsonPointer, message: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            path,
            message: message.into(),
            found: None,
            expected: Vec::new(),
        }
    }

    /// Build a type-mismatch message for the keyword value itself.
    pub fn wrong_type(
        keyword: impl Into<String>,
        path: JsonPointer,
        found: NodeType,
        expected: &[NodeType],
    ) -> Self {
        Self::wrong_member_type(keyword, path, "value", found, expected)
    }

    /// Build a type-mismatch message for part of a keyword value.
    pub fn wrong_member_type(
        keyword: impl Into<String>,
        path: JsonPointer,
        subject: &str,
        found: NodeType,
        expected: &[NodeType],
    ) -> Self {
        let names: Vec<&str> = expected.iter().map(|t| t.as_str()).collect();
        Self {
            keyword: keyword.into(),
            path,
            message: format!(
                "{subject} has wrong type (found {found}, expected one of [{}])",
                names.join(", ")
            ),
            found: Some(found),
            expected: expected.to_vec(),
        }
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_root() {
            "#".to_string()
        } else {
            format!("#{}", self.path)
        };
        write!(f, "{path}: {}: {}", self.keyword, self.message)
    }
}

/// Outcome of one syntax validation pass.
///
/// Success is derived from the message list and cannot be set on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    messages: Vec<ValidationMessage>,
}

impl ValidationReport {
    pub fn from_messages(messages: Vec<ValidationMessage>) -> Self {
        Self { messages }
    }

    pub fn is_success(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages in discovery order.
    pub fn messages(&self) -> &[ValidationMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<ValidationMessage> {
        self.messages
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            return f.write_str("schema is valid");
        }
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{message}")?;
        }
        Ok(())
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationReport", 2)?;
        state.serialize_field("success", &self.is_success())?;
        state.serialize_field("messages", &self.messages)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_success() {
        let report = ValidationReport::default();
        assert!(report.is_success());
        assert!(report.messages().is_empty());
        assert_eq!(report.to_string(), "schema is valid");
    }

    #[test]
    fn success_tracks_message_presence() {
        let report = ValidationReport::from_messages(vec![ValidationMessage::new(
            "enum",
            JsonPointer::root(),
            "array must not be empty",
        )]);
        assert!(!report.is_success());
        assert_eq!(report.len(), 1);
        assert_eq!(report.to_string(), "#: enum: array must not be empty");
    }

    #[test]
    fn wrong_type_lists_expected_types() {
        let message = ValidationMessage::wrong_type(
            "maximum",
            JsonPointer::root().join("properties").join("a"),
            NodeType::String,
            &[NodeType::Integer, NodeType::Number],
        );
        assert_eq!(message.found, Some(NodeType::String));
        assert_eq!(
            message.to_string(),
            "#/properties/a: maximum: value has wrong type (found string, expected one of [integer, number])"
        );
    }

    #[test]
    fn serializes_derived_success_flag() {
        let report = ValidationReport::from_messages(vec![ValidationMessage::wrong_type(
            "title",
            JsonPointer::root(),
            NodeType::Boolean,
            &[NodeType::String],
        )]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["messages"][0]["keyword"], "title");
        assert_eq!(json["messages"][0]["path"], "");
        assert_eq!(json["messages"][0]["found"], "boolean");
        assert_eq!(json["messages"][0]["expected"][0], "string");
    }
}
