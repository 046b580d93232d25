//! JSON trader API that expects the credentials as path segments.

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde_json::json;

use super::LookupStrategy;
use crate::{
    config::ClientConfig,
    transport::Transport,
    types::{LookupKey, LookupRequest, RawTrader},
    Error,
};

const TRADER_DETAILS: &str = "Traders/Details/{user}/{password}";

/// Splits an endpoint template into path segments, replacing the `{user}`
/// and `{password}` segments with the credentials.
///
/// Placeholders are only recognised as whole segments and the credentials
/// are inserted verbatim; percent-encoding happens when the segments are
/// appended to the URL.
pub fn expand_template(template: &str, username: &str, password: &str) -> Vec<String> {
    template
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| match segment {
            "{user}" => username.to_string(),
            "{password}" => password.to_string(),
            other => other.to_string(),
        })
        .collect()
}

pub struct PathCredentialRest {
    transport: Transport,
    details_path: Vec<String>,
}

impl PathCredentialRest {
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        Ok(Self {
            transport: Transport::new(config, headers)?,
            details_path: expand_template(TRADER_DETAILS, config.username(), config.password()),
        })
    }
}

impl LookupStrategy for PathCredentialRest {
    async fn fetch(&self, request: &LookupRequest<'_>) -> Result<Option<RawTrader>, Error> {
        let req = match request.key {
            LookupKey::MedNumber => {
                let url = self.transport.url(&self.details_path)?;
                self.transport
                    .post(url)
                    .json(&json!({ "MedNumber": request.identifier }))
            }
            LookupKey::CNumber => {
                let mut segments = self.details_path.clone();
                segments.push(request.identifier.to_string());
                let url = self.transport.url(&segments)?;
                self.transport.get(url)
            }
        };
        tracing::debug!("Looking up trader by {}", request.key);
        self.transport.send_json::<RawTrader>(req).await
    }
}
