//! Client for looking up registered traders in the customs registry by
//! med number or C number.
//!
//! The registry has been exposed through several integrations over time;
//! [`ClientConfig::with_strategy`] picks the one a deployment talks to.

mod client;
pub mod config;
mod errors;
pub mod normalize;
pub mod strategy;
pub mod table;
mod transport;
pub mod types;
pub mod xpath;

pub use self::client::CustomsClient;
pub use self::config::{ClientConfig, StrategyKind, TransportOptions};
pub use self::errors::Error;
pub use self::types::{LookupKey, LookupRequest, RawTrader, TraderRecord};
