// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::{ExposeSecret, SecretString};
use tracing::{error, info, instrument};

use contacts_proc_macros::InjectDependencies;

use crate::app::deps::*;
use crate::dtos::{
    AuthError, AuthenticatedUser, RegistrationRequest, RequiredField, Session, UserId,
    UserProfile,
};
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct AccountService {
    #[inject]
    auth_service: DynAuthenticationService,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    contact_list_domain_service: DynContactListDomainService,
    #[inject]
    ctx: DynAppContext,
    #[inject]
    time_provider: DynTimeProvider,
    #[inject]
    user_profile_repo: DynUserProfileRepository,
}

impl AccountService {
    pub fn session(&self) -> Option<Session> {
        self.ctx.session()
    }

    pub fn current_user_id(&self) -> Option<UserId> {
        self.ctx.current_user_id()
    }

    /// Picks up a user that is still signed in at the authentication provider, e.g. after a
    /// restart of the app.
    pub fn restore_session(&self) -> Option<Session> {
        if let Some(session) = self.ctx.session() {
            return Some(session);
        }
        let user = self.auth_service.current_user()?;
        Some(self.start_session(user))
    }

    #[instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: SecretString) -> Result<Session, AuthError> {
        if email.trim().is_empty() {
            return Err(AuthError::ValidationFailed {
                field: RequiredField::Email,
            });
        }
        if password.expose_secret().trim().is_empty() {
            return Err(AuthError::ValidationFailed {
                field: RequiredField::Password,
            });
        }

        let user = self.auth_service.sign_in(email.trim(), &password).await?;
        Ok(self.start_session(user))
    }

    /// Creates an account, signs in and stores the user's profile. If only storing the profile
    /// fails, the error is returned while the user stays signed in.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegistrationRequest) -> Result<Session, AuthError> {
        request.validate()?;

        let user = self
            .auth_service
            .create_account(request.email.trim(), &request.password)
            .await?;
        let session = self.start_session(user);

        let profile = UserProfile {
            uid: session.user_id.clone(),
            name: request.name.trim().to_string(),
            email: session.email.clone(),
            phone: request.phone.trim().to_string(),
        };

        if let Err(err) = self.user_profile_repo.set(&profile).await {
            error!("Failed to store profile of {}. {:?}", profile.uid, err);
            return Err(AuthError::Unavailable(err.to_string()));
        }

        Ok(session)
    }

    /// Signs out and forgets the contacts of the signed-out user.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.auth_service.sign_out().await?;

        let session = self.ctx.reset_session();
        self.contact_list_domain_service.clear_cache();

        if let Some(session) = session {
            info!("Signed out {}.", session.user_id);
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::SessionChanged);
        }

        Ok(())
    }
}

impl AccountService {
    fn start_session(&self, user: AuthenticatedUser) -> Session {
        let session = Session {
            user_id: user.user_id,
            email: user.email,
            signed_in_at: self.time_provider.now(),
        };

        // The contacts of another user must not survive a change of accounts.
        if let Some(loaded_user_id) = self.contact_list_domain_service.current_user_id() {
            if loaded_user_id != session.user_id {
                self.contact_list_domain_service.clear_cache();
            }
        }

        info!("Started session for {}.", session.user_id);
        self.ctx.set_session(session.clone());
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SessionChanged);

        session
    }
}
