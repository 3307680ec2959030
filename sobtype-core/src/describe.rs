use serde::Deserialize;

use crate::FieldType;

/// Full describe result for one sObject, as returned by the schema source.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SObjectDescribe {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescribe>,
    #[serde(default)]
    pub child_relationships: Vec<ChildRelationship>,
}

/// One field of an sObject.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescribe {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub calculated: bool,
    /// Possible target sObjects; non-empty only for reference fields.
    #[serde(default)]
    pub reference_to: Vec<String>,
    /// Traversable property name; present only for some reference fields.
    #[serde(default)]
    pub relationship_name: Option<String>,
}

/// One child relationship of an sObject.
///
/// A missing `relationshipName` signals an anonymous relationship; a
/// non-empty `junctionIdListNames` signals a many-to-many junction object
/// exposing one side per listed name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildRelationship {
    #[serde(rename = "childSObject")]
    pub child_s_object: String,
    #[serde(default)]
    pub relationship_name: Option<String>,
    #[serde(default)]
    pub junction_id_list_names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_describe_document() {
        let doc = r#"{
            "name": "Account",
            "fields": [
                { "name": "Id", "type": "id" },
                { "name": "Name", "type": "string" },
                {
                    "name": "OwnerId",
                    "type": "reference",
                    "referenceTo": ["User"],
                    "relationshipName": "Owner"
                },
                { "name": "Score__c", "type": "double", "calculated": true }
            ],
            "childRelationships": [
                {
                    "childSObject": "Contact",
                    "relationshipName": "Contacts",
                    "junctionIdListNames": []
                },
                { "childSObject": "AccountPartner" }
            ]
        }"#;

        let describe: SObjectDescribe = serde_json::from_str(doc).unwrap();
        assert_eq!(describe.name, "Account");
        assert_eq!(describe.fields.len(), 4);
        assert_eq!(describe.fields[0].field_type, FieldType::Other("id".to_string()));
        assert_eq!(describe.fields[2].reference_to, vec!["User"]);
        assert_eq!(describe.fields[2].relationship_name.as_deref(), Some("Owner"));
        assert!(describe.fields[3].calculated);
        assert_eq!(describe.child_relationships.len(), 2);
        assert_eq!(
            describe.child_relationships[0].relationship_name.as_deref(),
            Some("Contacts")
        );
        assert!(describe.child_relationships[1].relationship_name.is_none());
        assert!(describe.child_relationships[1].junction_id_list_names.is_empty());
    }

    #[test]
    fn test_missing_optional_sections_default_empty() {
        let describe: SObjectDescribe =
            serde_json::from_str(r#"{ "name": "Empty__c" }"#).unwrap();
        assert_eq!(describe.name, "Empty__c");
        assert!(describe.fields.is_empty());
        assert!(describe.child_relationships.is_empty());
    }
}
