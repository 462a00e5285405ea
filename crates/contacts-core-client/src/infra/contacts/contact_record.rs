// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::contacts::models::{Contact, ContactId};
use crate::infra::document_store::{Document, DocumentSnapshot, StoreError};

/// The persisted form of a contact. The identifier is not part of the document, it's the name
/// of the document. Missing fields are read as empty and unknown fields are ignored.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct ContactRecord {
    name: String,
    phone: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_uri: Option<String>,
}

impl ContactRecord {
    pub fn into_document(self) -> Result<Document, StoreError> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(document) => Ok(document),
            value => Err(StoreError::Serialization(format!(
                "Expected a contact to serialize into an object, got {value}."
            ))),
        }
    }

    pub fn into_contact(self, id: impl Into<ContactId>) -> Contact {
        Contact {
            id: id.into(),
            name: self.name,
            phone: self.phone,
            email: self.email,
            photo_uri: self.photo_uri.filter(|uri| !uri.is_empty()),
        }
    }
}

impl From<&Contact> for ContactRecord {
    fn from(value: &Contact) -> Self {
        Self {
            name: value.name.clone(),
            phone: value.phone.clone(),
            email: value.email.clone(),
            photo_uri: value.photo_uri.clone(),
        }
    }
}

impl TryFrom<DocumentSnapshot> for Contact {
    type Error = StoreError;

    fn try_from(value: DocumentSnapshot) -> Result<Self, Self::Error> {
        let record: ContactRecord = serde_json::from_value(serde_json::Value::Object(value.data))?;
        Ok(record.into_contact(value.id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn snapshot(id: &str, value: serde_json::Value) -> DocumentSnapshot {
        let serde_json::Value::Object(data) = value else {
            panic!("Expected an object")
        };
        DocumentSnapshot {
            id: id.to_string(),
            data,
        }
    }

    #[test]
    fn test_writes_documented_field_names() {
        let contact = Contact::new("Ana")
            .set_id("ignored")
            .set_phone("555")
            .set_email("a@x.com")
            .set_photo_uri("file:///photo.jpg".to_string());

        let document = ContactRecord::from(&contact).into_document().unwrap();

        assert_eq!(
            serde_json::Value::Object(document),
            json!({
                "name": "Ana",
                "phone": "555",
                "email": "a@x.com",
                "photoUri": "file:///photo.jpg"
            })
        );
    }

    #[test]
    fn test_reads_partial_documents_and_ignores_extra_fields() {
        let contact = Contact::try_from(snapshot(
            "c1",
            json!({ "name": "Ana", "photoUri": "", "favorite": true }),
        ))
        .unwrap();

        assert_eq!(contact, Contact::new("Ana").set_id("c1"));
    }

    #[test]
    fn test_rejects_malformed_documents() {
        assert!(Contact::try_from(snapshot("c1", json!({ "name": 42 }))).is_err());
    }
}
