// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;

use crate::domain::shared::models::{Session, UserId};

pub struct AppConfig {
    /// The top-level collection holding one document per user.
    pub users_collection: String,
    /// The subcollection of a user document holding the user's contacts.
    pub contacts_collection: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            users_collection: "users".to_string(),
            contacts_collection: "contacts".to_string(),
        }
    }
}

pub struct AppContext {
    pub session: RwLock<Option<Session>>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: Default::default(),
            config,
        }
    }
}

impl AppContext {
    pub fn session(&self) -> Option<Session> {
        self.session.read().clone()
    }

    pub fn current_user_id(&self) -> Option<UserId> {
        self.session.read().as_ref().map(|s| s.user_id.clone())
    }

    pub fn set_session(&self, session: Session) {
        self.session.write().replace(session);
    }

    pub fn reset_session(&self) -> Option<Session> {
        self.session.write().take()
    }
}
