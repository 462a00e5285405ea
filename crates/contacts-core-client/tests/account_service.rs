// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{anyhow, Result};
use mockall::predicate;
use pretty_assertions::assert_eq;
use secrecy::SecretString;

use contacts_core_client::dtos::{
    AuthError, AuthenticatedUser, RegistrationRequest, RequiredField, UserProfile,
};
use contacts_core_client::services::AccountService;
use contacts_core_client::test::{mock_data, MockAppDependencies};
use contacts_core_client::{user_id, ClientEvent};

fn password(value: &str) -> SecretString {
    SecretString::new(value.to_string())
}

fn jane() -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: mock_data::account_id(),
        email: mock_data::account_email(),
    }
}

fn registration() -> RegistrationRequest {
    RegistrationRequest {
        name: " Jane Doe ".to_string(),
        email: mock_data::account_email(),
        phone: "555 0100".to_string(),
        password: password("hunter2"),
    }
}

#[tokio::test]
async fn test_sign_in_starts_session() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.auth_service
        .expect_sign_in()
        .once()
        .withf(|email, _| email == "jane.doe@example.org")
        .return_once(|_, _| Box::pin(async { Ok(jane()) }));
    deps.contact_list_domain_service
        .expect_current_user_id()
        .return_const(None);
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::SessionChanged))
        .return_const(());

    let service = AccountService::from(&deps.into_deps());
    let session = service
        .sign_in(" jane.doe@example.org ", password("hunter2"))
        .await?;

    assert_eq!(session, mock_data::session());
    assert_eq!(service.session(), Some(mock_data::session()));
    assert_eq!(service.current_user_id(), Some(mock_data::account_id()));

    Ok(())
}

#[tokio::test]
async fn test_sign_in_rejects_blank_credentials() {
    let deps = MockAppDependencies::default();
    let service = AccountService::from(&deps.into_deps());

    assert_eq!(
        service.sign_in("  ", password("hunter2")).await,
        Err(AuthError::ValidationFailed {
            field: RequiredField::Email
        })
    );
    assert_eq!(
        service.sign_in("jane.doe@example.org", password("")).await,
        Err(AuthError::ValidationFailed {
            field: RequiredField::Password
        })
    );
    assert_eq!(service.session(), None);
}

#[tokio::test]
async fn test_failed_sign_in_keeps_signed_out() {
    let mut deps = MockAppDependencies::default();
    deps.auth_service
        .expect_sign_in()
        .once()
        .return_once(|_, _| Box::pin(async { Err(AuthError::InvalidCredentials) }));

    let service = AccountService::from(&deps.into_deps());

    assert_eq!(
        service
            .sign_in("jane.doe@example.org", password("wrong"))
            .await,
        Err(AuthError::InvalidCredentials)
    );
    assert_eq!(service.session(), None);
}

#[tokio::test]
async fn test_signing_in_as_another_user_clears_contacts() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.auth_service
        .expect_sign_in()
        .once()
        .return_once(|_, _| Box::pin(async { Ok(jane()) }));
    deps.contact_list_domain_service
        .expect_current_user_id()
        .return_const(Some(user_id!("someone-else")));
    deps.contact_list_domain_service
        .expect_clear_cache()
        .once()
        .return_const(());
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .return_const(());

    let service = AccountService::from(&deps.into_deps());
    service
        .sign_in("jane.doe@example.org", password("hunter2"))
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_register_creates_account_and_profile() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.auth_service
        .expect_create_account()
        .once()
        .withf(|email, _| email == "jane.doe@example.org")
        .return_once(|_, _| Box::pin(async { Ok(jane()) }));
    deps.contact_list_domain_service
        .expect_current_user_id()
        .return_const(None);
    deps.user_profile_repo
        .expect_set()
        .once()
        .with(predicate::eq(UserProfile {
            uid: mock_data::account_id(),
            name: "Jane Doe".to_string(),
            email: mock_data::account_email(),
            phone: "555 0100".to_string(),
        }))
        .return_once(|_| Box::pin(async { Ok(()) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::SessionChanged))
        .return_const(());

    let service = AccountService::from(&deps.into_deps());
    let session = service.register(registration()).await?;

    assert_eq!(session, mock_data::session());

    Ok(())
}

#[tokio::test]
async fn test_register_validates_before_creating_account() {
    let deps = MockAppDependencies::default();
    let service = AccountService::from(&deps.into_deps());

    let request = RegistrationRequest {
        phone: " ".to_string(),
        ..registration()
    };

    assert_eq!(
        service.register(request).await,
        Err(AuthError::ValidationFailed {
            field: RequiredField::Phone
        })
    );
}

#[tokio::test]
async fn test_failed_profile_write_keeps_session() {
    let mut deps = MockAppDependencies::default();

    deps.auth_service
        .expect_create_account()
        .once()
        .return_once(|_, _| Box::pin(async { Ok(jane()) }));
    deps.contact_list_domain_service
        .expect_current_user_id()
        .return_const(None);
    deps.user_profile_repo
        .expect_set()
        .once()
        .return_once(|_| Box::pin(async { Err(anyhow!("store offline")) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .return_const(());

    let service = AccountService::from(&deps.into_deps());

    assert_eq!(
        service.register(registration()).await,
        Err(AuthError::Unavailable("store offline".to_string()))
    );
    assert_eq!(service.session(), Some(mock_data::session()));
}

#[tokio::test]
async fn test_sign_out_resets_session_and_contacts() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx.set_session(mock_data::session());

    deps.auth_service
        .expect_sign_out()
        .once()
        .return_once(|| Box::pin(async { Ok(()) }));
    deps.contact_list_domain_service
        .expect_clear_cache()
        .once()
        .return_const(());
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::SessionChanged))
        .return_const(());

    let service = AccountService::from(&deps.into_deps());
    service.sign_out().await?;

    assert_eq!(service.session(), None);
    assert_eq!(service.current_user_id(), None);

    Ok(())
}

#[tokio::test]
async fn test_restores_session_of_signed_in_user() {
    let mut deps = MockAppDependencies::default();

    deps.auth_service
        .expect_current_user()
        .once()
        .return_const(Some(jane()));
    deps.contact_list_domain_service
        .expect_current_user_id()
        .return_const(None);
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .return_const(());

    let service = AccountService::from(&deps.into_deps());

    assert_eq!(service.restore_session(), Some(mock_data::session()));
    // The session is known now, the provider isn't asked again.
    assert_eq!(service.restore_session(), Some(mock_data::session()));
}
