// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use collection_listener::{CollectionListener, ListenerRegistration};
pub use document_path::DocumentPath;
pub use document_store::{Document, DocumentSnapshot, DocumentStore};
pub use in_memory_document_store::InMemoryDocumentStore;
pub use store_error::StoreError;

mod collection_listener;
mod document_path;
mod document_store;
mod in_memory_document_store;
mod store_error;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::document_store::MockDocumentStore;
}
