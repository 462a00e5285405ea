// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::contacts::models::ContactsError;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("The store is unavailable: {0}")]
    Unavailable(String),
    #[error("Permission denied for {path}.")]
    PermissionDenied { path: String },
    #[error("Invalid path {path}.")]
    InvalidPath { path: String },
    #[error("Failed to convert document: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        StoreError::Serialization(value.to_string())
    }
}

impl From<StoreError> for ContactsError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::PermissionDenied { .. } => {
                ContactsError::PermissionDenied(value.to_string())
            }
            StoreError::Unavailable(_)
            | StoreError::InvalidPath { .. }
            | StoreError::Serialization(_) => ContactsError::RemoteUnavailable(value.to_string()),
        }
    }
}
