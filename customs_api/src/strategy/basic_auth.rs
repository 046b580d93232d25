//! JSON trader API authenticated with HTTP Basic auth.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{self, HeaderMap, HeaderValue};

use super::LookupStrategy;
use crate::{
    config::ClientConfig,
    transport::Transport,
    types::{LookupKey, LookupRequest, RawTrader},
    Error,
};

/// Builds the `Authorization` value for `username:password`.
pub(crate) fn basic_auth_value(username: &str, password: &str) -> Result<HeaderValue, Error> {
    let encoded = STANDARD.encode(format!("{}:{}", username, password));
    let mut value = HeaderValue::from_str(&format!("Basic {}", encoded))
        .map_err(|e| Error::Config(format!("invalid credentials header: {}", e)))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Looks traders up by med number through the business entity endpoint and by
/// C number through the product endpoint.
///
/// The registry answers these with an exact match or a 404, so returned
/// records are not re-checked against the identifier.
pub struct BasicAuthRest {
    transport: Transport,
}

impl BasicAuthRest {
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            basic_auth_value(config.username(), config.password())?,
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        Ok(Self {
            transport: Transport::new(config, headers)?,
        })
    }
}

impl LookupStrategy for BasicAuthRest {
    async fn fetch(&self, request: &LookupRequest<'_>) -> Result<Option<RawTrader>, Error> {
        let (segments, param) = match request.key {
            LookupKey::MedNumber => (["BusinessEntities", "GetTrader"], "traderNumber"),
            LookupKey::CNumber => (["products", "GetProduct"], "productNumber"),
        };
        let mut url = self.transport.url(&segments)?;
        url.query_pairs_mut().append_pair(param, request.identifier);

        tracing::debug!("Looking up trader by {}", request.key);
        self.transport
            .send_json::<RawTrader>(self.transport.get(url))
            .await
    }

    fn verifies_identifier(&self) -> bool {
        false
    }
}
