// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contact_list_domain_service::{
    ContactListDomainService, ContactListDomainServiceDependencies,
};

mod contact_list_domain_service;
mod contact_list_state;
