//! Upstream integrations. Each one turns a [`LookupRequest`] into the raw
//! trader the registry returned, or `None` when the registry has no match.

mod basic_auth;
mod html_search;
mod path_credential;

pub use self::basic_auth::BasicAuthRest;
pub use self::html_search::HtmlSearch;
pub use self::path_credential::{expand_template, PathCredentialRest};

use crate::{
    config::{ClientConfig, StrategyKind},
    types::{LookupRequest, RawTrader},
    Error,
};

/// One way of asking the registry for a trader.
#[allow(async_fn_in_trait)]
pub trait LookupStrategy {
    /// Fetches the trader matching `request`. A 404 or an empty result is
    /// `Ok(None)`; transport and parse failures are errors.
    async fn fetch(&self, request: &LookupRequest<'_>) -> Result<Option<RawTrader>, Error>;

    /// Whether the returned trader's identifier must be checked against the
    /// request before it is handed to the caller.
    fn verifies_identifier(&self) -> bool {
        true
    }
}

/// The integration selected by [`ClientConfig::strategy`].
pub enum Strategy {
    PathCredential(PathCredentialRest),
    BasicAuth(BasicAuthRest),
    HtmlSearch(HtmlSearch),
}

impl Strategy {
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        Ok(match config.strategy() {
            StrategyKind::PathCredential => {
                Strategy::PathCredential(PathCredentialRest::new(config)?)
            }
            StrategyKind::BasicAuth => Strategy::BasicAuth(BasicAuthRest::new(config)?),
            StrategyKind::HtmlSearch => Strategy::HtmlSearch(HtmlSearch::new(config)?),
        })
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::PathCredential(_) => StrategyKind::PathCredential,
            Strategy::BasicAuth(_) => StrategyKind::BasicAuth,
            Strategy::HtmlSearch(_) => StrategyKind::HtmlSearch,
        }
    }
}

impl LookupStrategy for Strategy {
    async fn fetch(&self, request: &LookupRequest<'_>) -> Result<Option<RawTrader>, Error> {
        match self {
            Strategy::PathCredential(s) => s.fetch(request).await,
            Strategy::BasicAuth(s) => s.fetch(request).await,
            Strategy::HtmlSearch(s) => s.fetch(request).await,
        }
    }

    fn verifies_identifier(&self) -> bool {
        match self {
            Strategy::PathCredential(s) => s.verifies_identifier(),
            Strategy::BasicAuth(s) => s.verifies_identifier(),
            Strategy::HtmlSearch(s) => s.verifies_identifier(),
        }
    }
}
