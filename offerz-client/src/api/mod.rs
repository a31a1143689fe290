//! API facades
//!
//! `PublicApi` and `AdminApi` borrow a transport and expose one typed method
//! per backend endpoint. `OffersClient` bundles a transport with the admin
//! session.

pub mod admin;
pub mod public;

pub use admin::AdminApi;
pub use public::PublicApi;

use crate::catalog::CatalogApi;
use crate::client::{HttpClient, NetworkHttpClient};
use crate::session::{AuthSession, AuthState, FileTokenStore, LoginOutcome, TokenStore};
use crate::{ClientConfig, ClientResult};

/// Body of a mutation response; the content is not used
pub(crate) type Ack = serde_json::Value;

/// Unwrap a read, falling back to an empty value.
///
/// Read paths never surface errors to the pages; they log and render empty.
pub fn or_default<T: Default>(result: ClientResult<T>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to fetch {}", what);
        T::default()
    })
}

/// Transport plus admin session
#[derive(Debug)]
pub struct OffersClient<C> {
    http: C,
    session: AuthSession,
}

impl OffersClient<NetworkHttpClient> {
    /// Network client with the token persisted under `config.data_dir`
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let http = config.build_http_client()?;
        Ok(Self::new(http, FileTokenStore::in_dir(&config.data_dir)))
    }
}

impl<C: HttpClient> OffersClient<C> {
    pub fn new(http: C, store: impl TokenStore + 'static) -> Self {
        Self {
            http,
            session: AuthSession::new(store),
        }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn public(&self) -> PublicApi<'_, C> {
        PublicApi::new(&self.http)
    }

    pub fn catalog(&self) -> CatalogApi<'_, C> {
        CatalogApi::new(&self.http)
    }

    pub fn admin(&self) -> AdminApi<'_, C> {
        AdminApi::new(&self.http)
    }

    pub fn auth_state(&self) -> &AuthState {
        self.session.state()
    }

    pub async fn restore(&mut self) -> &AuthState {
        self.session.restore(&self.http).await
    }

    pub async fn login(&mut self, email: &str, password: &str) -> LoginOutcome {
        self.session.login(&self.http, email, password).await
    }

    pub async fn logout(&mut self) -> ClientResult<()> {
        self.session.logout(&self.http).await
    }

    /// Sign out if `result` says the token was refused
    pub async fn check<T>(&mut self, result: ClientResult<T>) -> ClientResult<T> {
        self.session.check(&self.http, result).await
    }

    pub fn session_mut(&mut self) -> &mut AuthSession {
        &mut self.session
    }
}
