// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod account;
pub mod contacts;
pub mod document_store;
pub mod events;
pub mod general;
