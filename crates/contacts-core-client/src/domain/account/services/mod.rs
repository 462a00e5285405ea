// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use authentication_service::AuthenticationService;

mod authentication_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::authentication_service::MockAuthenticationService;
}
