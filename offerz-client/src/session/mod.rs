//! Admin auth session
//!
//! `AuthSession` owns the login state and the persisted token. It never holds
//! a transport; every operation takes the transport it should configure, so
//! the same session can drive a network or an in-process client.

pub mod storage;

pub use storage::{FileTokenStore, MemoryTokenStore, STORAGE_FILE, TOKEN_STORAGE_KEY, TokenStore};

use shared::Envelope;
use shared::client::{AdminProfile, LoginRequest, LoginResponse};

use crate::ClientResult;
use crate::client::HttpClient;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const ME_PATH: &str = "/api/auth/me";

/// Message shown when the server gives no reason for a failed login
pub const LOGIN_FAILED: &str = "Login failed";

/// Session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Persisted token not verified yet
    Loading,
    Authenticated(AdminProfile),
    Unauthenticated,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }

    pub fn admin(&self) -> Option<&AdminProfile> {
        match self {
            AuthState::Authenticated(admin) => Some(admin),
            _ => None,
        }
    }
}

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success(AdminProfile),
    /// Message to show under the form
    Failed(String),
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success(_))
    }
}

pub struct AuthSession {
    store: Box<dyn TokenStore>,
    state: AuthState,
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl AuthSession {
    /// New session in the `Loading` state
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            state: AuthState::Loading,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Verify a persisted token, if any, against `/api/auth/me`
    pub async fn restore<C: HttpClient>(&mut self, http: &C) -> &AuthState {
        let token = self.store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read stored token");
            None
        });

        let Some(token) = token else {
            self.state = AuthState::Unauthenticated;
            return &self.state;
        };

        http.set_token(Some(token)).await;
        match http.get::<Envelope<AdminProfile>>(ME_PATH).await {
            Ok(admin) => {
                let admin = admin.into_inner();
                tracing::info!(email = %admin.email, "Session restored");
                self.state = AuthState::Authenticated(admin);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored token rejected, signing out");
                self.teardown(http).await;
            }
        }
        &self.state
    }

    /// Attempt a login. Failures are reported in the outcome, never as `Err`.
    pub async fn login<C: HttpClient>(
        &mut self,
        http: &C,
        email: &str,
        password: &str,
    ) -> LoginOutcome {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        match http
            .post::<Envelope<LoginResponse>, _>(LOGIN_PATH, &request)
            .await
        {
            Ok(response) => {
                let LoginResponse { token, admin } = response.into_inner();
                if let Err(e) = self.store.save(&token) {
                    tracing::warn!(error = %e, "Failed to persist token");
                }
                http.set_token(Some(token)).await;
                tracing::info!(email = %admin.email, "Logged in");
                self.state = AuthState::Authenticated(admin.clone());
                LoginOutcome::Success(admin)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                if self.state.is_loading() {
                    self.state = AuthState::Unauthenticated;
                }
                let message = e.server_message().unwrap_or(LOGIN_FAILED).to_string();
                LoginOutcome::Failed(message)
            }
        }
    }

    /// Forget the token everywhere
    pub async fn logout<C: HttpClient>(&mut self, http: &C) -> ClientResult<()> {
        http.set_token(None).await;
        self.state = AuthState::Unauthenticated;
        self.store.clear()
    }

    /// Pass `result` through, signing out first if the server refused the token
    pub async fn check<C: HttpClient, T>(
        &mut self,
        http: &C,
        result: ClientResult<T>,
    ) -> ClientResult<T> {
        if let Err(e) = &result
            && e.is_unauthorized()
            && self.state.is_authenticated()
        {
            tracing::warn!(error = %e, "Session expired");
            self.teardown(http).await;
        }
        result
    }

    /// Replace the cached profile after a successful profile update
    pub fn update_admin(&mut self, admin: AdminProfile) {
        if self.state.is_authenticated() {
            self.state = AuthState::Authenticated(admin);
        }
    }

    async fn teardown<C: HttpClient>(&mut self, http: &C) {
        if let Err(e) = self.logout(http).await {
            tracing::warn!(error = %e, "Failed to clear stored token");
        }
    }
}
