// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynAuthenticationService, DynDocumentStore,
    DynTimeProvider,
};
use crate::app::services::{AccountService, ContactsService};
use crate::client::ClientInner;
use crate::domain::contacts::services::impls::{
    ContactListDomainService, ContactListDomainServiceDependencies,
};
use crate::domain::general::services::TimeProvider;
use crate::infra::account::DocumentUserProfileRepository;
use crate::infra::contacts::DocumentContactsRepository;
use crate::infra::events::ImmediateClientEventDispatcher;
use crate::infra::general::SystemTimeProvider;
use crate::{Client, ClientDelegate};

pub struct UndefinedDocumentStore;
pub struct UndefinedAuthenticationService;

pub struct ClientBuilder<S, A> {
    app_config: AppConfig,
    authentication_service: A,
    delegate: Option<Box<dyn ClientDelegate>>,
    document_store: S,
    time_provider: DynTimeProvider,
}

impl ClientBuilder<UndefinedDocumentStore, UndefinedAuthenticationService> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            app_config: Default::default(),
            authentication_service: UndefinedAuthenticationService,
            delegate: None,
            document_store: UndefinedDocumentStore,
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }
}

impl<A> ClientBuilder<UndefinedDocumentStore, A> {
    pub fn set_document_store(
        self,
        document_store: DynDocumentStore,
    ) -> ClientBuilder<DynDocumentStore, A> {
        ClientBuilder {
            app_config: self.app_config,
            authentication_service: self.authentication_service,
            delegate: self.delegate,
            document_store,
            time_provider: self.time_provider,
        }
    }
}

impl<S> ClientBuilder<S, UndefinedAuthenticationService> {
    pub fn set_authentication_service(
        self,
        authentication_service: DynAuthenticationService,
    ) -> ClientBuilder<S, DynAuthenticationService> {
        ClientBuilder {
            app_config: self.app_config,
            authentication_service,
            delegate: self.delegate,
            document_store: self.document_store,
            time_provider: self.time_provider,
        }
    }
}

impl<S, A> ClientBuilder<S, A> {
    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl ClientBuilder<DynDocumentStore, DynAuthenticationService> {
    pub fn build(self) -> Client {
        let event_dispatcher = Arc::new(ImmediateClientEventDispatcher::new(self.delegate));

        let contacts_repo = Arc::new(DocumentContactsRepository::new(
            self.document_store.clone(),
            &self.app_config,
        ));
        let user_profile_repo = Arc::new(DocumentUserProfileRepository::new(
            self.document_store,
            &self.app_config,
        ));

        let contact_list_domain_service =
            Arc::new(ContactListDomainService::from(ContactListDomainServiceDependencies {
                client_event_dispatcher: event_dispatcher.clone(),
                contacts_repo,
            }));

        let dependencies = AppDependencies {
            auth_service: self.authentication_service,
            client_event_dispatcher: event_dispatcher.clone(),
            contact_list_domain_service,
            ctx: Arc::new(AppContext::new(self.app_config)),
            time_provider: self.time_provider,
            user_profile_repo,
        };

        let client_inner = Arc::new(ClientInner {
            account: AccountService::from(&dependencies),
            contacts: ContactsService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
