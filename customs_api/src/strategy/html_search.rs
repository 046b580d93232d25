//! Company search page scraping.
//!
//! The search is fuzzy, so the response is parsed and the single row whose
//! identifier column matches exactly is extracted.

use reqwest::header::{self, HeaderMap, HeaderValue};
use scraper::Html;

use super::LookupStrategy;
use crate::{
    config::ClientConfig,
    table::{find_row, TableSchema},
    transport::Transport,
    types::{LookupRequest, RawTrader},
    Error,
};

pub struct HtmlSearch {
    transport: Transport,
}

impl HtmlSearch {
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        Ok(Self {
            transport: Transport::new(config, headers)?,
        })
    }
}

impl LookupStrategy for HtmlSearch {
    async fn fetch(&self, request: &LookupRequest<'_>) -> Result<Option<RawTrader>, Error> {
        let mut url = self.transport.url(&["eServices", "CompanySearch"])?;
        url.query_pairs_mut().append_pair("query", request.identifier);

        tracing::debug!("Searching companies by {}", request.key);
        let Some(html) = self.transport.send(self.transport.get(url)).await? else {
            return Ok(None);
        };
        Ok(extract_trader(&html, request))
    }

    /// The row was already selected by an exact, whitespace-normalized match
    /// on the identifier column.
    fn verifies_identifier(&self) -> bool {
        false
    }
}

/// Parses a company search page and maps the matching row onto a trader.
pub(crate) fn extract_trader(html: &str, request: &LookupRequest<'_>) -> Option<RawTrader> {
    let schema = TableSchema::COMPANY_LIST;
    let column = schema.column_for(request.key)?;
    let document = Html::parse_document(html);
    let cells: [String; 6] = find_row(&document, &schema, column, request.identifier)?
        .try_into()
        .ok()?;
    Some(RawTrader::from(cells))
}
