// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use contacts_proc_macros::DependenciesStruct;

use crate::app::deps::{DynClientEventDispatcher, DynContactsRepository};
use crate::domain::contacts::models::{
    Contact, ContactId, ContactValidationError, ContactsError, LiveSync,
};
use crate::domain::contacts::repos::ContactsSubscription;
use crate::domain::shared::models::UserId;
use crate::ClientEvent;

use super::super::ContactListDomainService as ContactListDomainServiceTrait;
use super::contact_list_state::{ContactListState, Reconciliation};

#[derive(DependenciesStruct)]
pub struct ContactListDomainService {
    client_event_dispatcher: DynClientEventDispatcher,
    contacts_repo: DynContactsRepository,
    #[state]
    state: Arc<ContactListState>,
}

#[async_trait]
impl ContactListDomainServiceTrait for ContactListDomainService {
    fn current_user_id(&self) -> Option<UserId> {
        self.state.user_id()
    }

    fn contacts(&self) -> Vec<Contact> {
        self.state.contacts()
    }

    fn observe_contacts(&self) -> watch::Receiver<Vec<Contact>> {
        self.state.subscribe()
    }

    async fn load_contacts(&self, user_id: &UserId) -> Result<(), ContactsError> {
        if self.state.user_id().as_ref() == Some(user_id) {
            debug!("Contacts of {user_id} are loaded already.");
            return Ok(());
        }
        self.fetch_contacts(user_id).await
    }

    async fn reload_contacts(&self) -> Result<(), ContactsError> {
        let user_id = self.state.user_id().ok_or(ContactsError::NotAuthenticated)?;
        self.fetch_contacts(&user_id).await
    }

    async fn add_contact(&self, contact: Contact) -> Result<Contact, ContactsError> {
        let user_id = self.state.user_id().ok_or(ContactsError::NotAuthenticated)?;
        contact.validate()?;

        // The store assigns the identifier.
        let contact = Contact {
            id: ContactId::default(),
            ..contact
        };

        let saved_contact = self
            .contacts_repo
            .create(&user_id, &contact)
            .await
            .inspect_err(|err| warn!("Failed to add contact for {user_id}. {err}"))?;

        // A running live sync may have delivered the new contact already.
        self.reconcile(&user_id, |contacts| {
            match contacts.iter_mut().find(|c| c.id == saved_contact.id) {
                Some(existing) if *existing == saved_contact => return false,
                Some(existing) => *existing = saved_contact.clone(),
                None => contacts.push(saved_contact.clone()),
            }
            true
        });

        Ok(saved_contact)
    }

    async fn update_contact(&self, contact: Contact) -> Result<(), ContactsError> {
        let user_id = self.state.user_id().ok_or(ContactsError::NotAuthenticated)?;
        contact.validate_existing()?;

        self.contacts_repo
            .update(&user_id, &contact)
            .await
            .inspect_err(|err| {
                warn!("Failed to update contact {} for {user_id}. {err}", contact.id)
            })?;

        self.reconcile(&user_id, |contacts| {
            let Some(existing) = contacts.iter_mut().find(|c| c.id == contact.id) else {
                return false;
            };
            if *existing == contact {
                return false;
            }
            *existing = contact;
            true
        });

        Ok(())
    }

    async fn delete_contact(&self, contact: &Contact) -> Result<(), ContactsError> {
        let Some(user_id) = self.state.user_id() else {
            error!("Cannot delete contact {} since no user is loaded.", contact.id);
            return Err(ContactsError::NotAuthenticated);
        };
        if contact.id.is_empty() {
            return Err(ContactValidationError::MissingId.into());
        }

        self.contacts_repo
            .delete(&user_id, &contact.id)
            .await
            .inspect_err(|err| {
                error!("Failed to delete contact {} for {user_id}. {err}", contact.id)
            })?;

        self.reconcile(&user_id, |contacts| {
            let count = contacts.len();
            contacts.retain(|c| c.id != contact.id);
            contacts.len() != count
        });

        Ok(())
    }

    fn start_live_sync(&self, user_id: &UserId) -> Result<LiveSync, ContactsError> {
        let subscription = self.contacts_repo.subscribe(user_id)?;

        let (generation, changed) = self.state.rebind(user_id.clone());
        if changed {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::ContactListChanged);
        }

        info!("Starting live sync of contacts for {user_id}…");
        let task = tokio::spawn(run_live_sync(
            self.state.clone(),
            self.client_event_dispatcher.clone(),
            user_id.clone(),
            generation,
            subscription,
        ));

        Ok(LiveSync::new(user_id.clone(), task))
    }

    fn clear_cache(&self) {
        if self.state.unbind() {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::ContactListChanged);
        }
    }
}

impl ContactListDomainService {
    async fn fetch_contacts(&self, user_id: &UserId) -> Result<(), ContactsError> {
        debug!("Loading contacts of {user_id}…");
        let ticket = self.state.begin_load();

        match self.contacts_repo.fetch_all(user_id).await {
            Ok(contacts) => {
                let count = contacts.len();
                match self.state.bind(ticket, user_id.clone(), contacts) {
                    Reconciliation::Stale => debug!(
                        "Discarding contacts of {user_id}. The contact list changed while loading."
                    ),
                    _ => {
                        info!("Loaded {count} contacts of {user_id}.");
                        self.client_event_dispatcher
                            .dispatch_event(ClientEvent::ContactListChanged);
                    }
                }
                Ok(())
            }
            Err(err) => {
                error!("Failed to load contacts of {user_id}. {err}");
                // Never leave the contacts of a previous user behind.
                if self.state.abandon_load(ticket) == Reconciliation::Changed {
                    self.client_event_dispatcher
                        .dispatch_event(ClientEvent::ContactListChanged);
                }
                Err(err)
            }
        }
    }

    fn reconcile(&self, user_id: &UserId, apply: impl FnOnce(&mut Vec<Contact>) -> bool) {
        match self.state.reconcile(user_id, apply) {
            Reconciliation::Changed => self
                .client_event_dispatcher
                .dispatch_event(ClientEvent::ContactListChanged),
            Reconciliation::Unchanged => (),
            Reconciliation::Stale => warn!(
                "Ignoring completed request for {user_id}. The contact list belongs to another user now."
            ),
        }
    }
}

async fn run_live_sync(
    state: Arc<ContactListState>,
    client_event_dispatcher: DynClientEventDispatcher,
    user_id: UserId,
    generation: u64,
    mut subscription: ContactsSubscription,
) {
    while let Some(result) = subscription.next().await {
        let contacts = match result {
            Ok(contacts) => contacts,
            Err(error) => {
                error!("Live sync of contacts for {user_id} failed. {error}");
                client_event_dispatcher.dispatch_event(ClientEvent::ContactsSyncFailed { error });
                return;
            }
        };

        match state.replace(generation, contacts) {
            Reconciliation::Changed => {
                client_event_dispatcher.dispatch_event(ClientEvent::ContactListChanged)
            }
            Reconciliation::Unchanged => (),
            Reconciliation::Stale => {
                debug!("Ending live sync for {user_id} since the contact list was rebound.");
                return;
            }
        }
    }
    debug!("Live sync of contacts for {user_id} ended.");
}
