//! Scalar type mapping from describe type tags to TypeScript expressions.

use sobtype_core::FieldType;

/// TypeScript expression for one scalar field, with an optional
/// traceability comment for tags outside the mapping table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarType<'a> {
    pub expr: &'static str,
    pub comment: Option<&'a str>,
}

impl ScalarType<'_> {
    fn plain(expr: &'static str) -> Self {
        Self {
            expr,
            comment: None,
        }
    }
}

/// Map a describe type tag to its TypeScript expression.
///
/// Total over the tag domain: unrecognized tags degrade to `string` with
/// the original tag carried as a comment, never an error.
pub fn map_scalar(field_type: &FieldType) -> ScalarType<'_> {
    match field_type {
        FieldType::Boolean => ScalarType::plain("boolean"),
        FieldType::Int | FieldType::Double | FieldType::Currency => ScalarType::plain("number"),
        FieldType::Date | FieldType::DateTime => ScalarType::plain("DateString"),
        FieldType::Phone => ScalarType::plain("PhoneString"),
        FieldType::Text | FieldType::TextArea => ScalarType::plain("string"),
        FieldType::Reference => ScalarType::plain("SalesforceId"),
        FieldType::Other(tag) => ScalarType {
            expr: "string",
            comment: Some(tag),
        },
    }
}
