// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use auth_error::{AuthError, RequiredField};
pub use authenticated_user::AuthenticatedUser;
pub use registration_request::RegistrationRequest;
pub use user_profile::UserProfile;

mod auth_error;
mod authenticated_user;
mod registration_request;
mod user_profile;
