// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::account::models::{AuthError, AuthenticatedUser};

/// The hosted email/password authentication provider.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AuthenticationService: Send + Sync {
    fn current_user(&self) -> Option<AuthenticatedUser>;

    async fn sign_in(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<AuthenticatedUser, AuthError>;

    async fn create_account(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<AuthenticatedUser, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}
