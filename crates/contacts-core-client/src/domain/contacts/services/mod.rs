// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contact_list_domain_service::ContactListDomainService;

mod contact_list_domain_service;
pub mod impls;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::contact_list_domain_service::MockContactListDomainService;
}
