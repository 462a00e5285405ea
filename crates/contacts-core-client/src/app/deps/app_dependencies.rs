// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::account::repos::UserProfileRepository;
use crate::domain::account::services::AuthenticationService;
use crate::domain::contacts::repos::ContactsRepository;
use crate::domain::contacts::services::ContactListDomainService;
use crate::domain::general::services::{IDProvider, TimeProvider};
use crate::infra::document_store::DocumentStore;

use super::AppContext;

pub type DynAppContext = Arc<AppContext>;
pub type DynAuthenticationService = Arc<dyn AuthenticationService>;
pub type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub type DynContactListDomainService = Arc<dyn ContactListDomainService>;
pub type DynContactsRepository = Arc<dyn ContactsRepository>;
pub type DynDocumentStore = Arc<dyn DocumentStore>;
pub type DynIDProvider = Arc<dyn IDProvider>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;
pub type DynUserProfileRepository = Arc<dyn UserProfileRepository>;

pub struct AppDependencies {
    pub auth_service: DynAuthenticationService,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub contact_list_domain_service: DynContactListDomainService,
    pub ctx: DynAppContext,
    pub time_provider: DynTimeProvider,
    pub user_profile_repo: DynUserProfileRepository,
}
