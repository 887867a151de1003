//! Endpoint configuration for the Blizzard client.
//!
//! Production code uses the defaults. Tests override both URLs to point at a mock server.

use url::Url;

use crate::Error;

/// Default OAuth2 token endpoint.
pub static DEFAULT_TOKEN_URL: &str = "https://oauth.battle.net/token";

/// Endpoint configuration for [`Client`](crate::Client).
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL overriding the regional API host
    pub(crate) api_url: Option<Url>,
    /// OAuth2 token endpoint
    pub(crate) token_url: Url,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Base URL for a region, `https://{region}.api.blizzard.com` unless overridden.
    pub(crate) fn base_url(&self, region: crate::Region) -> Result<Url, Error> {
        match &self.api_url {
            Some(url) => Ok(url.clone()),
            None => Ok(Url::parse(&format!(
                "https://{}.api.blizzard.com",
                region.as_str()
            ))?),
        }
    }
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    api_url: Option<String>,
    token_url: Option<String>,
}

impl ConfigBuilder {
    /// Override the API base URL for every region.
    pub fn api_url(mut self, url: &str) -> Self {
        self.api_url = Some(url.to_string());
        self
    }

    /// Override the OAuth2 token endpoint.
    pub fn token_url(mut self, url: &str) -> Self {
        self.token_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> Result<Config, Error> {
        let api_url = self.api_url.as_deref().map(Url::parse).transpose()?;
        let token_url = Url::parse(self.token_url.as_deref().unwrap_or(DEFAULT_TOKEN_URL))?;

        Ok(Config { api_url, token_url })
    }
}
