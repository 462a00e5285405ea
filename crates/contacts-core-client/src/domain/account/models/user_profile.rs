// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;

/// Profile data stored alongside a user's contacts when the account is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub uid: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
}
