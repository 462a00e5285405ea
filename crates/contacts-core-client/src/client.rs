// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::app::deps::DynAppContext;
use crate::client_builder::{
    ClientBuilder, UndefinedAuthenticationService, UndefinedDocumentStore,
};
use crate::dtos::{ContactsError, LiveSync, UserId};
use crate::services::{AccountService, ContactsService};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedDocumentStore, UndefinedAuthenticationService> {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub account: AccountService,
    pub contacts: ContactsService,
    pub(crate) ctx: DynAppContext,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub fn current_user_id(&self) -> Option<UserId> {
        self.ctx.current_user_id()
    }

    /// Loads the contacts of the signed-in user.
    pub async fn load_contacts(&self) -> Result<(), ContactsError> {
        let user_id = self
            .current_user_id()
            .ok_or(ContactsError::NotAuthenticated)?;
        self.contacts.load_contacts(&user_id).await
    }

    /// Keeps the contacts of the signed-in user in sync until the returned handle is dropped.
    pub fn start_live_sync(&self) -> Result<LiveSync, ContactsError> {
        let user_id = self
            .current_user_id()
            .ok_or(ContactsError::NotAuthenticated)?;
        self.contacts.start_live_sync(&user_id)
    }
}
