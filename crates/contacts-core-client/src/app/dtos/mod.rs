// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::account::models::{
    AuthError, AuthenticatedUser, RegistrationRequest, RequiredField, UserProfile,
};
pub use crate::domain::contacts::models::{
    Contact, ContactId, ContactValidationError, ContactsError, LiveSync,
};
pub use crate::domain::shared::models::{Session, UserId};
