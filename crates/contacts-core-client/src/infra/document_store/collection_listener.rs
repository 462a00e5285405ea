// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc::UnboundedReceiver;

use super::{DocumentSnapshot, StoreError};

/// Deregisters a listener from its store when removed or dropped.
pub struct ListenerRegistration {
    remove: Option<Box<dyn FnOnce() + Send>>,
}

impl ListenerRegistration {
    pub fn new(remove: impl FnOnce() + Send + 'static) -> Self {
        Self {
            remove: Some(Box::new(remove)),
        }
    }

    pub fn remove(mut self) {
        self.perform_remove()
    }

    fn perform_remove(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove()
        }
    }
}

impl Drop for ListenerRegistration {
    fn drop(&mut self) {
        self.perform_remove()
    }
}

/// The snapshots of a listened-to collection. Ends after the first error. The listener stays
/// registered for as long as this value is alive.
pub struct CollectionListener {
    snapshots: UnboundedReceiver<Result<Vec<DocumentSnapshot>, StoreError>>,
    _registration: ListenerRegistration,
}

impl CollectionListener {
    pub fn new(
        snapshots: UnboundedReceiver<Result<Vec<DocumentSnapshot>, StoreError>>,
        registration: ListenerRegistration,
    ) -> Self {
        Self {
            snapshots,
            _registration: registration,
        }
    }
}

impl Stream for CollectionListener {
    type Item = Result<Vec<DocumentSnapshot>, StoreError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.snapshots.poll_recv(cx)
    }
}

impl Debug for CollectionListener {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "CollectionListener")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_registration_removes_once_on_drop() {
        let removed = Arc::new(AtomicBool::new(false));
        let registration = {
            let removed = removed.clone();
            ListenerRegistration::new(move || {
                assert!(!removed.swap(true, Ordering::SeqCst));
            })
        };

        assert!(!removed.load(Ordering::SeqCst));
        drop(registration);
        assert!(removed.load(Ordering::SeqCst));
    }
}
