//! The customs registry client.

use crate::{
    config::ClientConfig,
    normalize::{matches_identifier, normalize},
    strategy::{LookupStrategy, Strategy},
    types::{LookupRequest, TraderRecord},
    Error,
};

/// Looks up registered traders in the customs registry.
///
/// The client owns its configuration and a single HTTP client, and keeps no
/// per-call state, so one instance can serve concurrent lookups through a
/// shared reference.
///
/// ```no_run
/// # async fn run() -> Result<(), customs_api::Error> {
/// use customs_api::{ClientConfig, CustomsClient};
///
/// let client = CustomsClient::new(ClientConfig::new("api-user", "secret"))?;
/// if let Some(trader) = client.get_trader_by_c_number("C1234").await? {
///     println!("{:?}", trader.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct CustomsClient {
    config: ClientConfig,
    strategy: Strategy,
}

impl CustomsClient {
    /// Creates a client using the integration named by `config.strategy()`.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let strategy = Strategy::from_config(&config)?;
        Ok(Self { config, strategy })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the trader registered under `med_number`.
    ///
    /// Returns `Ok(None)` when the registry has no trader with exactly that
    /// med number.
    pub async fn get_trader_by_med_number(
        &self,
        med_number: &str,
    ) -> Result<Option<TraderRecord>, Error> {
        self.lookup(LookupRequest::med_number(med_number)).await
    }

    /// Fetches the trader registered under `c_number`.
    ///
    /// Returns `Ok(None)` when the registry has no trader with exactly that
    /// C number.
    pub async fn get_trader_by_c_number(
        &self,
        c_number: &str,
    ) -> Result<Option<TraderRecord>, Error> {
        self.lookup(LookupRequest::c_number(c_number)).await
    }

    async fn lookup(&self, request: LookupRequest<'_>) -> Result<Option<TraderRecord>, Error> {
        let Some(raw) = self.strategy.fetch(&request).await? else {
            tracing::debug!("No trader found for {} {}", request.key, request.identifier);
            return Ok(None);
        };

        if self.strategy.verifies_identifier() && !matches_identifier(&raw, &request) {
            tracing::debug!(
                "Discarding trader that does not match {} {}",
                request.key,
                request.identifier
            );
            return Ok(None);
        }

        Ok(normalize(Some(raw)))
    }
}
