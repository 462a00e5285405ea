// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use contacts_utils::id_string;

use super::ContactValidationError;

id_string!(
    /// Identifies a contact within the contact collection of its owner. Empty until the contact
    /// has been written to the store for the first time.
    ContactId
);

/// A single entry of a user's address book.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Reference to a display image (local file path or remote URI). Passed through verbatim.
    pub photo_uri: Option<String>,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn set_id(mut self, id: impl Into<ContactId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn set_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn set_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn set_photo_uri(mut self, photo_uri: impl Into<Option<String>>) -> Self {
        self.photo_uri = photo_uri.into();
        self
    }
}

impl Contact {
    /// Checks the fields required to create a contact.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::BlankName);
        }
        Ok(())
    }

    /// Checks the fields required to overwrite an existing contact.
    pub fn validate_existing(&self) -> Result<(), ContactValidationError> {
        if self.id.is_empty() {
            return Err(ContactValidationError::MissingId);
        }
        self.validate()
    }

    /// Returns true if the name contains `query` ignoring case. A blank query matches every
    /// contact.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_names() {
        assert_eq!(
            Contact::new("   ").validate(),
            Err(ContactValidationError::BlankName)
        );
        assert_eq!(Contact::new("Ana").validate(), Ok(()));
    }

    #[test]
    fn test_validate_existing_requires_id() {
        assert_eq!(
            Contact::new("Ana").validate_existing(),
            Err(ContactValidationError::MissingId)
        );
        assert_eq!(Contact::new("Ana").set_id("c1").validate_existing(), Ok(()));
        assert_eq!(
            Contact::new("").set_id("c1").validate_existing(),
            Err(ContactValidationError::BlankName)
        );
    }

    #[test]
    fn test_matches() {
        let contact = Contact::new("Ana María");
        assert!(contact.matches("ana"));
        assert!(contact.matches("MARÍA"));
        assert!(contact.matches("  "));
        assert!(!contact.matches("bob"));
    }
}
