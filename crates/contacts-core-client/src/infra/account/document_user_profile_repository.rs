// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::app::deps::{AppConfig, DynDocumentStore};
use crate::domain::account::models::UserProfile;
use crate::domain::account::repos::UserProfileRepository;
use crate::infra::document_store::{DocumentPath, StoreError};

/// Stores user profiles at `{users}/{userId}`.
pub struct DocumentUserProfileRepository {
    store: DynDocumentStore,
    users_collection: String,
}

#[derive(Serialize)]
struct UserProfileRecord<'a> {
    uid: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
}

impl DocumentUserProfileRepository {
    pub fn new(store: DynDocumentStore, config: &AppConfig) -> Self {
        Self {
            store,
            users_collection: config.users_collection.clone(),
        }
    }
}

#[async_trait]
impl UserProfileRepository for DocumentUserProfileRepository {
    async fn set(&self, profile: &UserProfile) -> Result<()> {
        let record = UserProfileRecord {
            uid: profile.uid.as_ref(),
            name: &profile.name,
            email: &profile.email,
            phone: &profile.phone,
        };

        let serde_json::Value::Object(document) = serde_json::to_value(record)? else {
            return Err(StoreError::Serialization("Expected an object.".to_string()).into());
        };

        let path = DocumentPath::collection(&self.users_collection).doc(profile.uid.as_ref());
        self.store.set(&path, document).await?;
        Ok(())
    }
}
