//! OAuth2 client credential provider.
//!
//! The provider keeps a single bearer token in memory, mirrored to a JSON file so that
//! consecutive runs of the binary reuse a token until it expires. The file holds the token
//! and its absolute expiry and is overwritten wholesale on every refresh.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use oauth2::{
    basic::BasicClient, ClientId, ClientSecret, EndpointNotSet, EndpointSet, TokenResponse,
    TokenUrl,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::Error;

/// Minimum remaining lifetime for a cached token to be handed out.
pub const SAFETY_MARGIN_SECS: i64 = 10;

type OAuthClient =
    BasicClient<EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Source of the current time, replaceable in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Bearer token with its absolute expiry, as persisted in the credential cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedToken {
    pub access_token: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    /// Whether the token outlives `now` by more than the safety margin.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now + TimeDelta::seconds(SAFETY_MARGIN_SECS) < self.expires_at
    }
}

struct TokenState {
    token: Option<CachedToken>,
    cache_checked: bool,
}

/// Supplies valid bearer tokens, refreshing them through the client credentials grant.
pub struct TokenProvider {
    oauth: OAuthClient,
    http: reqwest::Client,
    cache_path: Option<PathBuf>,
    clock: Arc<dyn Clock>,
    state: Mutex<TokenState>,
}

impl TokenProvider {
    /// Create a provider exchanging credentials at `token_url`.
    ///
    /// `http` should not follow redirects, the token endpoint never redirects.
    pub fn new(
        client_id: &str,
        client_secret: &str,
        token_url: &url::Url,
        http: reqwest::Client,
    ) -> Self {
        let oauth = BasicClient::new(ClientId::new(client_id.to_string()))
            .set_client_secret(ClientSecret::new(client_secret.to_string()))
            .set_token_uri(TokenUrl::from_url(token_url.clone()));

        Self {
            oauth,
            http,
            cache_path: None,
            clock: Arc::new(SystemClock),
            state: Mutex::new(TokenState {
                token: None,
                cache_checked: false,
            }),
        }
    }

    /// Mirror the token to a JSON file at `path`.
    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Seed the in-memory token, the cache file is then only written on refresh.
    pub fn with_token(self, token: CachedToken) -> Self {
        let state = TokenState {
            token: Some(token),
            cache_checked: true,
        };

        Self {
            state: Mutex::new(state),
            ..self
        }
    }

    /// Return a bearer token valid for at least [`SAFETY_MARGIN_SECS`] more seconds.
    ///
    /// Loads the credential cache on first use and refreshes the token when it is absent or
    /// about to expire. Concurrent callers wait for a single refresh.
    ///
    /// # Returns
    /// - `Ok(String)` - The access token
    /// - `Err(Error::AuthError)` - The token endpoint rejected the exchange or was unreachable
    pub async fn acquire(&self) -> Result<String, Error> {
        let mut state = self.state.lock().await;

        if !state.cache_checked {
            state.cache_checked = true;
            state.token = self.load_cache().await;
        }

        let now = self.clock.now();
        if let Some(token) = state.token.as_ref().filter(|t| t.is_valid_at(now)) {
            return Ok(token.access_token.clone());
        }

        let token = self.refresh(now).await?;
        self.store_cache(&token).await;

        let access_token = token.access_token.clone();
        state.token = Some(token);

        Ok(access_token)
    }

    async fn refresh(&self, now: DateTime<Utc>) -> Result<CachedToken, Error> {
        tracing::debug!("Refreshing Blizzard access token");

        let response = self
            .oauth
            .exchange_client_credentials()
            .request_async(&self.http)
            .await
            .map_err(|e| Error::AuthError(e.to_string()))?;

        // A response without a lifetime is treated as already expired
        let expires_in = response
            .expires_in()
            .and_then(|d| TimeDelta::from_std(d).ok())
            .unwrap_or_default();

        tracing::info!(
            "Acquired Blizzard access token valid for {}s",
            expires_in.num_seconds()
        );

        Ok(CachedToken {
            access_token: response.access_token().secret().to_string(),
            expires_at: now + expires_in,
        })
    }

    async fn load_cache(&self) -> Option<CachedToken> {
        let path = self.cache_path.as_ref()?;

        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!("No credential cache at {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(token) => Some(token),
            Err(e) => {
                tracing::warn!("Ignoring unreadable credential cache {}: {}", path.display(), e);
                None
            }
        }
    }

    async fn store_cache(&self, token: &CachedToken) {
        let Some(path) = self.cache_path.as_ref() else {
            return;
        };

        let result = match serde_json::to_string_pretty(token) {
            Ok(json) => tokio::fs::write(path, json).await.map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        if let Err(e) = result {
            tracing::warn!("Failed to write credential cache {}: {}", path.display(), e);
        }
    }
}
