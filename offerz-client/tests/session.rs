//! Admin login, restore and logout

mod common;

use common::{ADMIN_EMAIL, ADMIN_PASSWORD, ADMIN_TOKEN, MockState, seeded};
use offerz_client::session::{FileTokenStore, MemoryTokenStore, TokenStore};
use offerz_client::{
    Access, AuthState, ClientError, HttpClient, LoginOutcome, OffersClient, Route, guard,
};

#[tokio::test]
async fn failed_login_stays_unauthenticated_and_persists_nothing() {
    let state = MockState::new(seeded(3));
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::in_dir(dir.path());
    let mut client = OffersClient::new(state.client(), store.clone());

    let outcome = client.login(ADMIN_EMAIL, "wrong-password").await;
    assert_eq!(outcome, LoginOutcome::Failed("Invalid credentials".into()));
    assert_eq!(client.auth_state(), &AuthState::Unauthenticated);
    assert_eq!(store.load().unwrap(), None);
    assert!(!store.path().exists());
    assert_eq!(client.http().token().await, None);

    assert_eq!(
        guard(&Route::AdminDashboard, client.auth_state()),
        Access::Redirect(Route::AdminLogin)
    );
}

#[tokio::test]
async fn login_persists_token_and_restore_picks_it_up() {
    let state = MockState::new(seeded(3));
    let dir = tempfile::tempdir().unwrap();

    let mut client = OffersClient::new(state.client(), FileTokenStore::in_dir(dir.path()));
    let outcome = client.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert!(outcome.is_success());
    assert_eq!(client.http().token().await.as_deref(), Some(ADMIN_TOKEN));

    // A fresh process sharing the same data directory
    let mut restored = OffersClient::new(state.client(), FileTokenStore::in_dir(dir.path()));
    assert!(restored.auth_state().is_loading());
    assert_eq!(
        guard(&Route::AdminStores, restored.auth_state()),
        Access::Pending
    );

    let auth = restored.restore().await;
    assert_eq!(auth.admin().map(|a| a.email.as_str()), Some(ADMIN_EMAIL));
    assert_eq!(guard(&Route::AdminStores, restored.auth_state()), Access::Allow);
    assert!(state.requests().contains(&"/api/auth/me".to_string()));
}

#[tokio::test]
async fn rejected_token_is_torn_down_on_restore() {
    let state = MockState::new(seeded(3));
    let store = MemoryTokenStore::with_token("expired-token");
    let mut client = OffersClient::new(state.client(), store);

    assert_eq!(client.restore().await, &AuthState::Unauthenticated);
    assert_eq!(client.http().token().await, None);
}

#[tokio::test]
async fn no_token_means_unauthenticated_without_a_request() {
    let state = MockState::new(seeded(3));
    let mut client = OffersClient::new(state.client(), MemoryTokenStore::new());

    assert_eq!(client.restore().await, &AuthState::Unauthenticated);
    assert!(state.requests().is_empty());
}

#[tokio::test]
async fn unauthorized_admin_call_signs_out() {
    let state = MockState::new(seeded(3));
    let mut client = OffersClient::new(state.client(), MemoryTokenStore::new());
    assert!(client.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.is_success());

    // Token revoked behind the client's back
    client.http().set_token(Some("revoked".into())).await;
    let result = client.admin().stores().await;
    let result = client.check(result).await;

    assert!(matches!(result, Err(ref e) if e.is_unauthorized()));
    assert_eq!(client.auth_state(), &AuthState::Unauthenticated);
}

#[tokio::test]
async fn logout_clears_everything() {
    let state = MockState::new(seeded(3));
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::in_dir(dir.path());
    let mut client = OffersClient::new(state.client(), store.clone());

    assert!(client.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.is_success());
    assert_eq!(store.load().unwrap().as_deref(), Some(ADMIN_TOKEN));

    client.logout().await.unwrap();
    assert_eq!(store.load().unwrap(), None);
    assert_eq!(client.http().token().await, None);
    assert_eq!(client.auth_state(), &AuthState::Unauthenticated);

    let err = client.admin().stats().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 401, .. }));
}
