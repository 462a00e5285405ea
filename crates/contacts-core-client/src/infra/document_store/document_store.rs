// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use super::{CollectionListener, DocumentPath, StoreError};

/// A schemaless document.
pub type Document = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    pub id: String,
    pub data: Document,
}

/// A hierarchical document database organizing documents in nested, named collections, e.g.
/// `users/{userId}/contacts/{contactId}`.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait DocumentStore: Send + Sync {
    /// Returns all documents of `collection` in insertion order.
    async fn get_all(&self, collection: &DocumentPath) -> Result<Vec<DocumentSnapshot>, StoreError>;

    /// Adds `document` to `collection` under a generated identifier which is returned.
    async fn add(&self, collection: &DocumentPath, document: Document)
        -> Result<String, StoreError>;

    /// Creates or fully overwrites the document at `path`.
    async fn set(&self, path: &DocumentPath, document: Document) -> Result<(), StoreError>;

    /// Deletes the document at `path`. Succeeds if there is no such document.
    async fn delete(&self, path: &DocumentPath) -> Result<(), StoreError>;

    /// Registers a listener on `collection` which receives the current documents right away
    /// and again after every change.
    fn listen(&self, collection: &DocumentPath) -> Result<CollectionListener, StoreError>;
}
