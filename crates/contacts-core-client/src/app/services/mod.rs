// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_service::AccountService;
pub use contacts_service::ContactsService;

mod account_service;
mod contacts_service;
