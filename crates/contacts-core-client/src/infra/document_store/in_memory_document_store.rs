// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tracing::{debug, warn};

use crate::app::deps::DynIDProvider;

use super::{
    CollectionListener, Document, DocumentPath, DocumentSnapshot, DocumentStore,
    ListenerRegistration, StoreError,
};

/// A process-local `DocumentStore`. Besides serving as a backend for tests and demos it can
/// simulate outages, access rule rejections and failing listeners.
#[derive(Clone)]
pub struct InMemoryDocumentStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    id_provider: DynIDProvider,
    collections: RwLock<HashMap<DocumentPath, IndexMap<String, Document>>>,
    listeners: Mutex<HashMap<u64, Listener>>,
    next_listener_id: AtomicU64,
    is_offline: AtomicBool,
    denied_paths: RwLock<Vec<DocumentPath>>,
    scheduled_failures: Mutex<VecDeque<StoreError>>,
}

struct Listener {
    collection: DocumentPath,
    tx: UnboundedSender<Result<Vec<DocumentSnapshot>, StoreError>>,
}

impl InMemoryDocumentStore {
    pub fn new(id_provider: DynIDProvider) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                id_provider,
                collections: Default::default(),
                listeners: Default::default(),
                next_listener_id: AtomicU64::new(1),
                is_offline: AtomicBool::new(false),
                denied_paths: Default::default(),
                scheduled_failures: Default::default(),
            }),
        }
    }
}

impl InMemoryDocumentStore {
    /// While offline every request fails with `StoreError::Unavailable`.
    pub fn set_offline(&self, is_offline: bool) {
        self.inner.is_offline.store(is_offline, Ordering::SeqCst);
    }

    /// Rejects every request for `path` and everything below it.
    pub fn deny_access(&self, path: DocumentPath) {
        self.inner.denied_paths.write().push(path);
    }

    pub fn allow_all_access(&self) {
        self.inner.denied_paths.write().clear();
    }

    /// Lets the next request fail with `error`. Calls queue up.
    pub fn fail_next_request(&self, error: StoreError) {
        self.inner.scheduled_failures.lock().push_back(error);
    }

    /// Delivers `error` to all listeners of `collection` and removes them.
    pub fn fail_listeners(&self, collection: &DocumentPath, error: StoreError) {
        let mut listeners = self.inner.listeners.lock();
        listeners.retain(|_, listener| {
            if &listener.collection != collection {
                return true;
            }
            _ = listener.tx.send(Err(error.clone()));
            false
        });
    }

    /// The number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    /// Returns the document at `path` bypassing all simulated failures.
    pub fn document(&self, path: &DocumentPath) -> Option<Document> {
        let collection = path.parent()?;
        self.inner
            .collections
            .read()
            .get(&collection)
            .and_then(|documents| documents.get(path.id()))
            .cloned()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get_all(&self, collection: &DocumentPath) -> Result<Vec<DocumentSnapshot>, StoreError> {
        collection.ensure_collection()?;
        self.inner.round_trip(collection).await?;
        Ok(self.inner.snapshot(collection))
    }

    async fn add(
        &self,
        collection: &DocumentPath,
        document: Document,
    ) -> Result<String, StoreError> {
        collection.ensure_collection()?;
        self.inner.round_trip(collection).await?;

        let id = self.inner.id_provider.new_id();
        debug!("Adding document {} to {}.", id, collection);
        self.inner
            .collections
            .write()
            .entry(collection.clone())
            .or_default()
            .insert(id.clone(), document);
        self.inner.notify_listeners(collection);

        Ok(id)
    }

    async fn set(&self, path: &DocumentPath, document: Document) -> Result<(), StoreError> {
        path.ensure_document()?;
        self.inner.round_trip(path).await?;

        let collection = self.inner.parent_collection(path)?;
        self.inner
            .collections
            .write()
            .entry(collection.clone())
            .or_default()
            .insert(path.id().to_string(), document);
        self.inner.notify_listeners(&collection);

        Ok(())
    }

    async fn delete(&self, path: &DocumentPath) -> Result<(), StoreError> {
        path.ensure_document()?;
        self.inner.round_trip(path).await?;

        let collection = self.inner.parent_collection(path)?;
        let removed = self
            .inner
            .collections
            .write()
            .get_mut(&collection)
            .and_then(|documents| documents.shift_remove(path.id()))
            .is_some();

        if removed {
            self.inner.notify_listeners(&collection);
        } else {
            debug!("Nothing to delete at {}.", path);
        }

        Ok(())
    }

    fn listen(&self, collection: &DocumentPath) -> Result<CollectionListener, StoreError> {
        collection.ensure_collection()?;
        self.inner.check_access(collection)?;

        let (tx, rx) = unbounded_channel();
        let listener_id = self.inner.next_listener_id.fetch_add(1, Ordering::SeqCst);

        {
            // Holding the lock guarantees that no change slips in between the initial snapshot
            // and the registration.
            let mut listeners = self.inner.listeners.lock();
            _ = tx.send(Ok(self.inner.snapshot(collection)));
            listeners.insert(
                listener_id,
                Listener {
                    collection: collection.clone(),
                    tx,
                },
            );
        }
        debug!("Registered listener {} on {}.", listener_id, collection);

        let store: Weak<StoreInner> = Arc::downgrade(&self.inner);
        let registration = ListenerRegistration::new(move || {
            let Some(store) = store.upgrade() else {
                return;
            };
            if store.listeners.lock().remove(&listener_id).is_some() {
                debug!("Removed listener {}.", listener_id);
            }
        });

        Ok(CollectionListener::new(rx, registration))
    }
}

impl StoreInner {
    /// Simulates the network round trip of a request.
    async fn round_trip(&self, path: &DocumentPath) -> Result<(), StoreError> {
        tokio::task::yield_now().await;

        if let Some(error) = self.scheduled_failures.lock().pop_front() {
            warn!("Request for {} failed. {}", path, error);
            return Err(error);
        }

        self.check_access(path)
    }

    fn check_access(&self, path: &DocumentPath) -> Result<(), StoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("The store is offline.".to_string()));
        }

        if self
            .denied_paths
            .read()
            .iter()
            .any(|denied| path.starts_with(denied))
        {
            return Err(StoreError::PermissionDenied {
                path: path.to_string(),
            });
        }

        Ok(())
    }

    fn parent_collection(&self, path: &DocumentPath) -> Result<DocumentPath, StoreError> {
        path.parent().ok_or_else(|| StoreError::InvalidPath {
            path: path.to_string(),
        })
    }

    fn snapshot(&self, collection: &DocumentPath) -> Vec<DocumentSnapshot> {
        self.collections
            .read()
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(id, data)| DocumentSnapshot {
                        id: id.clone(),
                        data: data.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn notify_listeners(&self, collection: &DocumentPath) {
        let mut listeners = self.listeners.lock();
        if !listeners.values().any(|l| &l.collection == collection) {
            return;
        }

        let snapshot = self.snapshot(collection);
        // Listeners whose receiving end is gone are dropped along the way.
        listeners.retain(|_, listener| {
            if &listener.collection != collection {
                return true;
            }
            listener.tx.send(Ok(snapshot.clone())).is_ok()
        });
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use serde_json::json;

    use crate::infra::general::UUIDProvider;

    use super::*;

    fn store() -> InMemoryDocumentStore {
        InMemoryDocumentStore::new(Arc::new(UUIDProvider::new()))
    }

    fn doc(name: &str) -> Document {
        let mut document = Document::new();
        document.insert("name".to_string(), json!(name));
        document
    }

    fn contacts() -> DocumentPath {
        DocumentPath::collection("users")
            .doc("u1")
            .subcollection("contacts")
    }

    #[tokio::test]
    async fn test_keeps_insertion_order() {
        let store = store();
        let first = store.add(&contacts(), doc("B")).await.unwrap();
        let second = store.add(&contacts(), doc("A")).await.unwrap();
        store.set(&contacts().doc("x"), doc("C")).await.unwrap();

        let ids = store
            .get_all(&contacts())
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect::<Vec<_>>();

        assert_eq!(ids, vec![first, second, "x".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_missing_document_succeeds() {
        let store = store();
        store.delete(&contacts().doc("missing")).await.unwrap();
        assert!(store.get_all(&contacts()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_simulated_failures() {
        let store = store();

        store.fail_next_request(StoreError::Unavailable("timeout".to_string()));
        assert_eq!(
            store.add(&contacts(), doc("A")).await,
            Err(StoreError::Unavailable("timeout".to_string()))
        );
        assert!(store.add(&contacts(), doc("A")).await.is_ok());

        store.deny_access(DocumentPath::collection("users").doc("u1"));
        assert!(matches!(
            store.get_all(&contacts()).await,
            Err(StoreError::PermissionDenied { .. })
        ));
    }

    #[tokio::test]
    async fn test_listener_receives_snapshots_until_dropped() {
        let store = store();
        let mut listener = store.listen(&contacts()).unwrap();

        assert_eq!(listener.next().await, Some(Ok(vec![])));

        store.set(&contacts().doc("c1"), doc("A")).await.unwrap();
        assert_eq!(
            listener.next().await,
            Some(Ok(vec![DocumentSnapshot {
                id: "c1".to_string(),
                data: doc("A")
            }]))
        );

        assert_eq!(store.listener_count(), 1);
        drop(listener);
        assert_eq!(store.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_listener_ends_after_error() {
        let store = store();
        let mut listener = store.listen(&contacts()).unwrap();
        _ = listener.next().await;

        store.fail_listeners(&contacts(), StoreError::Unavailable("gone".to_string()));

        assert_eq!(
            listener.next().await,
            Some(Err(StoreError::Unavailable("gone".to_string())))
        );
        assert_eq!(listener.next().await, None);
        assert_eq!(store.listener_count(), 0);
    }
}
