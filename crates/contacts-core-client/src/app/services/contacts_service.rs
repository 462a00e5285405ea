// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use tokio::sync::watch;

use contacts_proc_macros::InjectDependencies;

use crate::app::deps::*;
use crate::dtos::{Contact, ContactId, ContactsError, LiveSync, UserId};

/// The contact list as seen by the presentation layer.
#[derive(InjectDependencies)]
pub struct ContactsService {
    #[inject]
    contact_list_domain_service: DynContactListDomainService,
}

impl ContactsService {
    /// The user whose contacts are currently loaded.
    pub fn loaded_user_id(&self) -> Option<UserId> {
        self.contact_list_domain_service.current_user_id()
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.contact_list_domain_service.contacts()
    }

    /// A receiver that always holds the current contact list and can be awaited for changes.
    pub fn observe_contacts(&self) -> watch::Receiver<Vec<Contact>> {
        self.contact_list_domain_service.observe_contacts()
    }

    pub fn contact(&self, id: &ContactId) -> Option<Contact> {
        self.contact_list_domain_service
            .contacts()
            .into_iter()
            .find(|c| &c.id == id)
    }

    /// Returns the contacts whose name contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<Contact> {
        self.contact_list_domain_service
            .contacts()
            .into_iter()
            .filter(|c| c.matches(query))
            .collect()
    }

    pub async fn load_contacts(&self, user_id: &UserId) -> Result<(), ContactsError> {
        self.contact_list_domain_service
            .load_contacts(user_id)
            .await
    }

    pub async fn reload_contacts(&self) -> Result<(), ContactsError> {
        self.contact_list_domain_service.reload_contacts().await
    }

    pub async fn add_contact(&self, contact: Contact) -> Result<Contact, ContactsError> {
        self.contact_list_domain_service.add_contact(contact).await
    }

    pub async fn update_contact(&self, contact: Contact) -> Result<(), ContactsError> {
        self.contact_list_domain_service
            .update_contact(contact)
            .await
    }

    pub async fn delete_contact(&self, contact: &Contact) -> Result<(), ContactsError> {
        self.contact_list_domain_service
            .delete_contact(contact)
            .await
    }

    /// Keeps the contact list in sync with the store until the returned handle is dropped.
    /// Must be called from within a Tokio runtime.
    pub fn start_live_sync(&self, user_id: &UserId) -> Result<LiveSync, ContactsError> {
        self.contact_list_domain_service.start_live_sync(user_id)
    }
}
