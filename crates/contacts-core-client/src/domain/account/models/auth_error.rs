// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::Display;

/// Form fields that must not be blank.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum RequiredField {
    Name,
    Email,
    Phone,
    Password,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("An account with this email address exists already.")]
    EmailAlreadyInUse,
    #[error("The {field} must not be empty.")]
    ValidationFailed { field: RequiredField },
    #[error("The authentication service is unavailable: {0}")]
    Unavailable(String),
}
