use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    token::{CachedToken, Clock, TokenProvider},
    Config, Error, GameVersion, Namespace, Region,
};

static DEFAULT_USER_AGENT: &str = concat!("blackwater/", env!("CARGO_PKG_VERSION"));

/// Authenticated client for the Blizzard game data API.
///
/// Cloning is cheap, clones share the HTTP connection pool and the token provider.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientRef>,
    region: Region,
    locale: String,
}

struct ClientRef {
    http: reqwest::Client,
    token: TokenProvider,
    config: Config,
    game_version: GameVersion,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Derive a client for another region and locale sharing the same credentials.
    pub fn with_region(&self, region: Region, locale: &str) -> Self {
        Self {
            inner: self.inner.clone(),
            region,
            locale: locale.to_string(),
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn game_version(&self) -> GameVersion {
        self.inner.game_version
    }

    /// Namespace query value for this client's region and game version.
    pub fn namespace(&self, namespace: Namespace) -> String {
        namespace.value(self.inner.game_version, self.region)
    }

    /// Perform a GET against an API path such as `/data/wow/item/25`.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        namespace: Namespace,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        let mut url = self.inner.config.base_url(self.region)?;
        url.set_path(path);
        url.query_pairs_mut()
            .append_pair("namespace", &self.namespace(namespace))
            .append_pair("locale", &self.locale)
            .extend_pairs(query);

        self.send(url).await
    }

    /// Follow a resource reference returned by a previous response.
    ///
    /// References already carry their namespace, the locale is appended when missing.
    pub async fn fetch_href<T: DeserializeOwned>(&self, href: &str) -> Result<T, Error> {
        if href.trim().is_empty() {
            return Err(Error::EmptyHref);
        }

        let mut url = Url::parse(href)?;
        if !url.query_pairs().any(|(key, _)| key == "locale") {
            url.query_pairs_mut().append_pair("locale", &self.locale);
        }

        self.send(url).await
    }

    async fn send<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let token = self.inner.token.acquire().await?;

        tracing::debug!("GET {}", url);

        let response = self
            .inner
            .http
            .get(url.clone())
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::StatusError {
                status,
                url: url.to_string(),
            });
        }

        // gzip bodies are decompressed by reqwest before they reach us
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|source| Error::DecodeError {
            url: url.to_string(),
            source,
        })
    }
}

/// Builder for [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    client_id: Option<String>,
    client_secret: Option<String>,
    user_agent: Option<String>,
    region: Option<(Region, String)>,
    game_version: GameVersion,
    config: Option<Config>,
    token_cache_path: Option<PathBuf>,
    clock: Option<Arc<dyn Clock>>,
    token: Option<CachedToken>,
}

impl ClientBuilder {
    pub fn client_id(mut self, client_id: &str) -> Self {
        self.client_id = Some(client_id.to_string());
        self
    }

    pub fn client_secret(mut self, client_secret: &str) -> Self {
        self.client_secret = Some(client_secret.to_string());
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Region and locale of requests, defaults to `eu` / `en_GB`.
    pub fn region(mut self, region: Region, locale: &str) -> Self {
        self.region = Some((region, locale.to_string()));
        self
    }

    pub fn game_version(mut self, game_version: GameVersion) -> Self {
        self.game_version = game_version;
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Persist the access token to a JSON file between runs.
    pub fn token_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_cache_path = Some(path.into());
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Start with a known access token instead of loading the cache file.
    pub fn token(mut self, token: CachedToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let client_id = self
            .client_id
            .ok_or_else(|| Error::ConfigError("client_id is required".to_string()))?;
        let client_secret = self
            .client_secret
            .ok_or_else(|| Error::ConfigError("client_secret is required".to_string()))?;

        let config = match self.config {
            Some(config) => config,
            None => Config::builder().build()?,
        };

        let user_agent = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .build()?;
        let oauth_http = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        let mut token = TokenProvider::new(&client_id, &client_secret, &config.token_url, oauth_http);
        if let Some(path) = self.token_cache_path {
            token = token.with_cache_path(path);
        }
        if let Some(clock) = self.clock {
            token = token.with_clock(clock);
        }
        if let Some(cached) = self.token {
            token = token.with_token(cached);
        }

        let (region, locale) = self
            .region
            .unwrap_or_else(|| (Region::Eu, "en_GB".to_string()));

        Ok(Client {
            inner: Arc::new(ClientRef {
                http,
                token,
                config,
                game_version: self.game_version,
            }),
            region,
            locale,
        })
    }
}
