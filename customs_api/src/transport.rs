//! Shared HTTP plumbing for the lookup strategies.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{config::ClientConfig, Error};

/// A reusable HTTP client bound to the registry's base URL.
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: Url,
}

impl Transport {
    /// Builds the reqwest client from the configured transport options.
    /// `default_headers` are installed on top of the configured extra headers.
    pub(crate) fn new(config: &ClientConfig, default_headers: HeaderMap) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url())?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base url '{}' cannot carry a path",
                base_url
            )));
        }

        let options = config.transport();
        let mut headers = HeaderMap::new();
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Config(format!("invalid header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::Config(format!("invalid value for header {}: {}", name, e)))?;
            headers.insert(name, value);
        }
        headers.extend(default_headers);

        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .default_headers(headers);
        if let Some(user_agent) = &options.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    /// Appends `segments` to the base URL. Each segment is percent-encoded,
    /// so values containing `/`, `?` or `#` stay inside their segment.
    pub(crate) fn url<S: AsRef<str>>(&self, segments: &[S]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("base url '{}' cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments.iter().map(|s| s.as_ref()));
        Ok(url)
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.http.get(url)
    }

    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        self.http.post(url)
    }

    /// Sends the request and returns the body text.
    ///
    /// A 404 is reported as `Ok(None)`; every other non-success status is an
    /// [`Error::HttpStatus`] carrying a snippet of the body.
    ///
    /// Request URLs may carry credentials as path segments, so they are
    /// stripped from transport errors and never logged.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Option<String>, Error> {
        let resp = request.send().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to reach registry: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if status == StatusCode::NOT_FOUND {
            tracing::debug!("Registry returned 404");
            return Ok(None);
        }

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(Some(body))
    }

    /// Sends the request and deserializes a JSON body.
    pub(crate) async fn send_json<T>(&self, request: RequestBuilder) -> Result<Option<T>, Error>
    where
        T: DeserializeOwned,
    {
        let Some(body) = self.send(request).await? else {
            return Ok(None);
        };
        serde_json::from_str::<Option<T>>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse registry response: {} | body: {}", e, snippet);
            Error::MalformedResponse(format!("{} | body: {}", e, snippet))
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
