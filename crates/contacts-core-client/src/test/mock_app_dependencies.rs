// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use derivative::Derivative;

use crate::app::deps::{AppConfig, AppContext, AppDependencies, DynTimeProvider};
use crate::app::event_handlers::MockClientEventDispatcherTrait;
use crate::domain::account::repos::mocks::MockUserProfileRepository;
use crate::domain::account::services::mocks::MockAuthenticationService;
use crate::domain::contacts::repos::mocks::MockContactsRepository;
use crate::domain::contacts::services::impls::ContactListDomainServiceDependencies;
use crate::domain::contacts::services::mocks::MockContactListDomainService;
use crate::domain::shared::models::{Session, UserId};
use crate::test::ConstantTimeProvider;

pub fn mock_reference_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 9, 6, 0, 0, 0).unwrap()
}

pub fn mock_account_id() -> UserId {
    UserId::from("jane-doe")
}

pub fn mock_account_email() -> String {
    "jane.doe@example.org".to_string()
}

pub fn mock_session() -> Session {
    Session {
        user_id: mock_account_id(),
        email: mock_account_email(),
        signed_in_at: mock_reference_date(),
    }
}

impl Default for AppContext {
    fn default() -> Self {
        AppContext::new(AppConfig::default())
    }
}

#[derive(Derivative)]
#[derivative(Default)]
pub struct MockAppDependencies {
    pub auth_service: MockAuthenticationService,
    pub client_event_dispatcher: MockClientEventDispatcherTrait,
    pub contact_list_domain_service: MockContactListDomainService,
    pub ctx: AppContext,
    #[derivative(Default(value = "Arc::new(ConstantTimeProvider::new(mock_reference_date()))"))]
    pub time_provider: DynTimeProvider,
    pub user_profile_repo: MockUserProfileRepository,
}

impl MockAppDependencies {
    pub fn into_deps(self) -> AppDependencies {
        AppDependencies::from(self)
    }
}

impl From<MockAppDependencies> for AppDependencies {
    fn from(mock: MockAppDependencies) -> Self {
        AppDependencies {
            auth_service: Arc::new(mock.auth_service),
            client_event_dispatcher: Arc::new(mock.client_event_dispatcher),
            contact_list_domain_service: Arc::new(mock.contact_list_domain_service),
            ctx: Arc::new(mock.ctx),
            time_provider: mock.time_provider,
            user_profile_repo: Arc::new(mock.user_profile_repo),
        }
    }
}

#[derive(Default)]
pub struct MockContactListDomainServiceDependencies {
    pub client_event_dispatcher: MockClientEventDispatcherTrait,
    pub contacts_repo: MockContactsRepository,
}

impl MockContactListDomainServiceDependencies {
    pub fn into_deps(self) -> ContactListDomainServiceDependencies {
        ContactListDomainServiceDependencies::from(self)
    }
}

impl From<MockContactListDomainServiceDependencies> for ContactListDomainServiceDependencies {
    fn from(value: MockContactListDomainServiceDependencies) -> Self {
        Self {
            client_event_dispatcher: Arc::new(value.client_event_dispatcher),
            contacts_repo: Arc::new(value.contacts_repo),
        }
    }
}
