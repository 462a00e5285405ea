// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use futures::StreamExt;
use tracing::{debug, warn};

use crate::app::deps::{AppConfig, DynDocumentStore};
use crate::domain::contacts::models::{Contact, ContactId, ContactValidationError, ContactsError};
use crate::domain::contacts::repos::{ContactsRepository, ContactsSubscription};
use crate::domain::shared::models::UserId;
use crate::infra::document_store::{DocumentPath, DocumentSnapshot};

use super::contact_record::ContactRecord;

/// Stores contacts at `{users}/{userId}/{contacts}/{contactId}`.
pub struct DocumentContactsRepository {
    store: DynDocumentStore,
    users_collection: String,
    contacts_collection: String,
}

impl DocumentContactsRepository {
    pub fn new(store: DynDocumentStore, config: &AppConfig) -> Self {
        Self {
            store,
            users_collection: config.users_collection.clone(),
            contacts_collection: config.contacts_collection.clone(),
        }
    }

    fn contacts_path(&self, user_id: &UserId) -> DocumentPath {
        DocumentPath::collection(&self.users_collection)
            .doc(user_id.as_ref())
            .subcollection(&self.contacts_collection)
    }
}

#[async_trait]
impl ContactsRepository for DocumentContactsRepository {
    async fn fetch_all(&self, user_id: &UserId) -> Result<Vec<Contact>, ContactsError> {
        let snapshots = self.store.get_all(&self.contacts_path(user_id)).await?;
        Ok(contacts_from_snapshots(snapshots))
    }

    fn subscribe(&self, user_id: &UserId) -> Result<ContactsSubscription, ContactsError> {
        let path = self.contacts_path(user_id);
        let listener = self.store.listen(&path)?;
        debug!("Subscribed to {}.", path);

        Ok(listener
            .map(|result| {
                result
                    .map(contacts_from_snapshots)
                    .map_err(ContactsError::from)
            })
            .boxed())
    }

    async fn create(&self, user_id: &UserId, contact: &Contact) -> Result<Contact, ContactsError> {
        let document = ContactRecord::from(contact).into_document()?;
        let id = self
            .store
            .add(&self.contacts_path(user_id), document)
            .await?;

        Ok(Contact {
            id: ContactId::from(id),
            ..contact.clone()
        })
    }

    async fn update(&self, user_id: &UserId, contact: &Contact) -> Result<(), ContactsError> {
        if contact.id.is_empty() {
            return Err(ContactValidationError::MissingId.into());
        }

        let document = ContactRecord::from(contact).into_document()?;
        self.store
            .set(&self.contacts_path(user_id).doc(contact.id.as_ref()), document)
            .await?;
        Ok(())
    }

    async fn delete(&self, user_id: &UserId, contact_id: &ContactId) -> Result<(), ContactsError> {
        if contact_id.is_empty() {
            return Err(ContactValidationError::MissingId.into());
        }

        self.store
            .delete(&self.contacts_path(user_id).doc(contact_id.as_ref()))
            .await?;
        Ok(())
    }
}

/// Documents that can't be read as a contact are skipped.
fn contacts_from_snapshots(snapshots: Vec<DocumentSnapshot>) -> Vec<Contact> {
    snapshots
        .into_iter()
        .filter_map(|snapshot| {
            let id = snapshot.id.clone();
            Contact::try_from(snapshot)
                .inspect_err(|err| warn!("Skipping unreadable contact {id}. {err}"))
                .ok()
        })
        .collect()
}
