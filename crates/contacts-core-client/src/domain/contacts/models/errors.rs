// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    #[error("A contact requires a name.")]
    BlankName,
    #[error("The contact has not been saved yet and has no identifier.")]
    MissingId,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ContactsError {
    /// The store could not be reached or failed to process the request.
    #[error("The contacts store is unavailable: {0}")]
    RemoteUnavailable(String),
    /// The store rejected the request (authentication or access rules).
    #[error("Access to the contacts store was denied: {0}")]
    PermissionDenied(String),
    #[error("No user is signed in.")]
    NotAuthenticated,
    /// The request was rejected before it was sent to the store.
    #[error(transparent)]
    ValidationFailed(#[from] ContactValidationError),
}
