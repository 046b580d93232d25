//! Client configuration: credentials, registry URL, integration style and
//! HTTP options.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::Error;

/// Which upstream integration the client talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// JSON API with the credentials carried as URL path segments.
    #[default]
    PathCredential,
    /// JSON API authenticated with HTTP Basic auth.
    BasicAuth,
    /// HTML company search page, scraped for the matching row.
    HtmlSearch,
}

impl StrategyKind {
    /// Registry URL used when the configuration does not name one.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            StrategyKind::PathCredential | StrategyKind::BasicAuth => {
                "https://api.customs.gov.mv/api/"
            }
            StrategyKind::HtmlSearch => "https://www.customs.gov.mv/",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StrategyKind::PathCredential => "path-credential",
                StrategyKind::BasicAuth => "basic-auth",
                StrategyKind::HtmlSearch => "html-search",
            }
        )
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "path-credential" => Ok(StrategyKind::PathCredential),
            "basic-auth" => Ok(StrategyKind::BasicAuth),
            "html-search" => Ok(StrategyKind::HtmlSearch),
            other => Err(Error::Config(format!("unknown strategy '{}'", other))),
        }
    }
}

/// Options handed through to the HTTP client when it is built.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransportOptions {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header. `None` keeps reqwest's default.
    pub user_agent: Option<String>,
    /// Extra headers sent with every request.
    pub headers: BTreeMap<String, String>,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: None,
            headers: BTreeMap::new(),
        }
    }
}

/// Configuration for a [`crate::CustomsClient`]. Built once and never mutated.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    #[serde(default, rename = "url", alias = "base_url")]
    base_url: Option<String>,
    #[serde(default)]
    strategy: StrategyKind,
    #[serde(default)]
    transport: TransportOptions,
}

impl ClientConfig {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            base_url: None,
            strategy: StrategyKind::default(),
            transport: TransportOptions::default(),
        }
    }

    /// Points the client at a different registry URL (e.g. a staging host).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_transport(mut self, transport: TransportOptions) -> Self {
        self.transport = transport;
        self
    }

    /// Parses a TOML document:
    ///
    /// ```toml
    /// username = "trader-api"
    /// password = "secret"
    /// url = "https://api.customs.gov.mv/api/"
    /// strategy = "path-credential"
    ///
    /// [transport]
    /// timeout_secs = 10
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Reads `CUSTOMS_USERNAME`, `CUSTOMS_PASSWORD`, `CUSTOMS_URL`,
    /// `CUSTOMS_STRATEGY` and `CUSTOMS_TIMEOUT_SECS`. Missing credentials
    /// default to empty strings.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::new(
            &lookup("CUSTOMS_USERNAME").unwrap_or_default(),
            &lookup("CUSTOMS_PASSWORD").unwrap_or_default(),
        );
        if let Some(url) = lookup("CUSTOMS_URL").filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(&url);
        }
        if let Some(strategy) = lookup("CUSTOMS_STRATEGY") {
            config = config.with_strategy(strategy.parse()?);
        }
        if let Some(timeout) = lookup("CUSTOMS_TIMEOUT_SECS") {
            let timeout_secs = timeout.trim().parse().map_err(|_| {
                Error::Config(format!("CUSTOMS_TIMEOUT_SECS is not a number: '{}'", timeout))
            })?;
            config = config.with_transport(TransportOptions {
                timeout_secs,
                ..TransportOptions::default()
            });
        }
        Ok(config)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    pub fn transport(&self) -> &TransportOptions {
        &self.transport
    }

    /// The registry URL, always ending in `/` so relative endpoints resolve
    /// beneath it. Falls back to the strategy's default when unset or blank.
    pub fn base_url(&self) -> String {
        let url = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| self.strategy.default_base_url());
        format!("{}/", url.trim_end_matches('/'))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("strategy", &self.strategy)
            .field("transport", &self.transport)
            .finish()
    }
}
