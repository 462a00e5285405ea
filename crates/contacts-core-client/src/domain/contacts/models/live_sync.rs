// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};

use tokio::task::JoinHandle;

use crate::domain::shared::models::UserId;

/// Owns a running live synchronization of a user's contact list. The underlying store listener
/// is released as soon as the handle is stopped or dropped.
pub struct LiveSync {
    user_id: UserId,
    task: Option<JoinHandle<()>>,
}

impl LiveSync {
    pub fn new(user_id: UserId, task: JoinHandle<()>) -> Self {
        Self {
            user_id,
            task: Some(task),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns true once the synchronization ended, either because the subscription failed or
    /// because the contact list was bound to another user.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map(|t| t.is_finished()).unwrap_or(true)
    }

    /// Stops the synchronization and waits until the subscription has been released.
    pub async fn stop(mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        task.abort();
        _ = task.await;
    }
}

impl Drop for LiveSync {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Debug for LiveSync {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveSync")
            .field("user_id", &self.user_id)
            .field("is_finished", &self.is_finished())
            .finish()
    }
}
