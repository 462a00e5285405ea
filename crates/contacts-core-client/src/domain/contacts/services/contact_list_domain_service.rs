// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::contacts::models::{Contact, ContactsError, LiveSync};
use crate::domain::shared::models::UserId;

/// Holds the contact list of the currently loaded user and keeps it in line with the store.
/// The cached list only ever changes after the store confirmed a request.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ContactListDomainService: Send + Sync {
    /// The user the cached list belongs to.
    fn current_user_id(&self) -> Option<UserId>;

    /// A snapshot of the cached list.
    fn contacts(&self) -> Vec<Contact>;

    /// Subscribes to changes of the cached list.
    fn observe_contacts(&self) -> watch::Receiver<Vec<Contact>>;

    /// Loads the contacts of `user_id` unless they're already loaded.
    async fn load_contacts(&self, user_id: &UserId) -> Result<(), ContactsError>;

    /// Fetches the contacts of the current user again.
    async fn reload_contacts(&self) -> Result<(), ContactsError>;

    async fn add_contact(&self, contact: Contact) -> Result<Contact, ContactsError>;
    async fn update_contact(&self, contact: Contact) -> Result<(), ContactsError>;
    async fn delete_contact(&self, contact: &Contact) -> Result<(), ContactsError>;

    /// Binds the list to `user_id` and keeps it updated with every change in the store until
    /// the returned handle is dropped.
    fn start_live_sync(&self, user_id: &UserId) -> Result<LiveSync, ContactsError>;

    /// Empties the list and unbinds it from the current user.
    fn clear_cache(&self);
}
