// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contacts_repository::{ContactsRepository, ContactsSubscription};

mod contacts_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::contacts_repository::MockContactsRepository;
}
