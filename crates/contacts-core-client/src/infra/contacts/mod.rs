// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use document_contacts_repository::DocumentContactsRepository;

mod contact_record;
mod document_contacts_repository;
