// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use user_profile_repository::UserProfileRepository;

mod user_profile_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::user_profile_repository::MockUserProfileRepository;
}
