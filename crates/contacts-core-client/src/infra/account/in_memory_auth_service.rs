// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

use crate::app::deps::DynIDProvider;
use crate::domain::account::models::{AuthError, AuthenticatedUser};
use crate::domain::account::services::AuthenticationService;
use crate::domain::shared::models::UserId;

/// A process-local email/password authentication provider. Email addresses are matched
/// case-insensitively.
pub struct InMemoryAuthService {
    id_provider: DynIDProvider,
    accounts: RwLock<HashMap<String, Account>>,
    current_user: RwLock<Option<AuthenticatedUser>>,
    is_unavailable: AtomicBool,
}

struct Account {
    user_id: UserId,
    email: String,
    password: SecretString,
}

impl InMemoryAuthService {
    pub fn new(id_provider: DynIDProvider) -> Self {
        Self {
            id_provider,
            accounts: Default::default(),
            current_user: Default::default(),
            is_unavailable: AtomicBool::new(false),
        }
    }

    /// Registers an account without signing in.
    pub fn insert_account(
        &self,
        email: &str,
        password: SecretString,
    ) -> Result<UserId, AuthError> {
        let key = normalized_email(email);
        let mut accounts = self.accounts.write();
        if accounts.contains_key(&key) {
            return Err(AuthError::EmailAlreadyInUse);
        }

        let user_id = UserId::from(self.id_provider.new_id());
        accounts.insert(
            key,
            Account {
                user_id: user_id.clone(),
                email: email.trim().to_string(),
                password,
            },
        );
        Ok(user_id)
    }

    pub fn set_unavailable(&self, is_unavailable: bool) {
        self.is_unavailable.store(is_unavailable, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<(), AuthError> {
        if self.is_unavailable.load(Ordering::SeqCst) {
            return Err(AuthError::Unavailable(
                "The authentication service cannot be reached.".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthenticationService for InMemoryAuthService {
    fn current_user(&self) -> Option<AuthenticatedUser> {
        self.current_user.read().clone()
    }

    async fn sign_in(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<AuthenticatedUser, AuthError> {
        self.ensure_available()?;

        let user = {
            let accounts = self.accounts.read();
            let account = accounts
                .get(&normalized_email(email))
                .filter(|account| account.password.expose_secret() == password.expose_secret())
                .ok_or(AuthError::InvalidCredentials)?;

            AuthenticatedUser {
                user_id: account.user_id.clone(),
                email: account.email.clone(),
            }
        };

        info!("Signed in as {}.", user.user_id);
        self.current_user.write().replace(user.clone());
        Ok(user)
    }

    async fn create_account(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<AuthenticatedUser, AuthError> {
        self.ensure_available()?;

        let user_id = self.insert_account(email, password.clone())?;
        let user = AuthenticatedUser {
            user_id,
            email: email.trim().to_string(),
        };

        info!("Created account {}.", user.user_id);
        self.current_user.write().replace(user.clone());
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(user) = self.current_user.write().take() {
            debug!("Signed out {}.", user.user_id);
        }
        Ok(())
    }
}

fn normalized_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::infra::general::UUIDProvider;

    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    #[tokio::test]
    async fn test_sign_in_checks_credentials() {
        let service = InMemoryAuthService::new(Arc::new(UUIDProvider::new()));
        let user_id = service
            .insert_account("Jane@Example.org", secret("pw"))
            .unwrap();

        assert_eq!(
            service.sign_in("jane@example.org", &secret("nope")).await,
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(service.current_user(), None);

        let user = service
            .sign_in(" jane@example.org ", &secret("pw"))
            .await
            .unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(service.current_user(), Some(user));

        service.sign_out().await.unwrap();
        assert_eq!(service.current_user(), None);
    }

    #[tokio::test]
    async fn test_create_account_rejects_duplicates() {
        let service = InMemoryAuthService::new(Arc::new(UUIDProvider::new()));
        service
            .create_account("jane@example.org", &secret("pw"))
            .await
            .unwrap();

        assert_eq!(
            service
                .create_account("JANE@example.org", &secret("pw2"))
                .await,
            Err(AuthError::EmailAlreadyInUse)
        );
    }
}
