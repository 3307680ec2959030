use serde::Deserialize;

/// Field type tag as reported by a describe document.
///
/// The tag domain is closed over the variants below; anything the schema
/// source reports outside of it lands in [`FieldType::Other`] with the
/// original tag preserved, so schema evolution never breaks generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FieldType {
    Boolean,
    Int,
    Double,
    Currency,
    Date,
    DateTime,
    Phone,
    Text,
    TextArea,
    Reference,
    /// Unrecognized tag, carried verbatim for traceability.
    Other(String),
}

impl FieldType {
    /// Parse a raw describe type tag. Total: unknown tags become `Other`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "boolean" => Self::Boolean,
            "int" => Self::Int,
            "double" => Self::Double,
            "currency" => Self::Currency,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "phone" => Self::Phone,
            "string" => Self::Text,
            "textarea" => Self::TextArea,
            "reference" => Self::Reference,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether this field holds the id of another sObject.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference)
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(FieldType::parse("boolean"), FieldType::Boolean);
        assert_eq!(FieldType::parse("int"), FieldType::Int);
        assert_eq!(FieldType::parse("double"), FieldType::Double);
        assert_eq!(FieldType::parse("currency"), FieldType::Currency);
        assert_eq!(FieldType::parse("date"), FieldType::Date);
        assert_eq!(FieldType::parse("datetime"), FieldType::DateTime);
        assert_eq!(FieldType::parse("phone"), FieldType::Phone);
        assert_eq!(FieldType::parse("string"), FieldType::Text);
        assert_eq!(FieldType::parse("textarea"), FieldType::TextArea);
        assert_eq!(FieldType::parse("reference"), FieldType::Reference);
    }

    #[test]
    fn test_parse_unknown_tag_keeps_original() {
        assert_eq!(
            FieldType::parse("picklist"),
            FieldType::Other("picklist".to_string())
        );
        assert_eq!(
            FieldType::parse("address"),
            FieldType::Other("address".to_string())
        );
    }

    #[test]
    fn test_is_reference() {
        assert!(FieldType::Reference.is_reference());
        assert!(!FieldType::Text.is_reference());
        assert!(!FieldType::Other("reference2".to_string()).is_reference());
    }
}
