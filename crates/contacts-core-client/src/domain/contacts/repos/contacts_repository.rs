// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::contacts::models::{Contact, ContactId, ContactsError};
use crate::domain::shared::models::UserId;

/// A live view of a user's contact list. Every item is the complete list at that point in time.
/// The stream ends after yielding an error. Dropping it releases the underlying listener.
pub type ContactsSubscription = BoxStream<'static, Result<Vec<Contact>, ContactsError>>;

/// Persists contacts per user in the remote store. Implementations don't retry failed requests.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ContactsRepository: Send + Sync {
    /// Reads all contacts of `user_id` once.
    async fn fetch_all(&self, user_id: &UserId) -> Result<Vec<Contact>, ContactsError>;

    /// Subscribes to the contacts of `user_id`. The current list is emitted right away.
    fn subscribe(&self, user_id: &UserId) -> Result<ContactsSubscription, ContactsError>;

    /// Stores a new contact. The identifier of `contact` is ignored, the returned contact
    /// carries the identifier assigned by the store.
    async fn create(&self, user_id: &UserId, contact: &Contact) -> Result<Contact, ContactsError>;

    /// Overwrites the contact with the identifier of `contact`.
    async fn update(&self, user_id: &UserId, contact: &Contact) -> Result<(), ContactsError>;

    /// Deletes a contact. Deleting a contact that doesn't exist succeeds.
    async fn delete(&self, user_id: &UserId, contact_id: &ContactId) -> Result<(), ContactsError>;
}
