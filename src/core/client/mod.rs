//! Public client surface + builder.
//! Header and endpoint defaults live in `constants`.

mod constants;

use crate::core::IdxError;
use constants::{
    ACCEPT, ACCEPT_LANGUAGE, DEFAULT_BASE_ANNOUNCEMENTS, REFERER, USER_AGENT, XHR_HINTS,
};
use reqwest::Client;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use url::Url;

/// HTTP client for the IDX disclosure feed.
///
/// Every request carries the browser-like headers the endpoint requires
/// to answer with JSON instead of a bot-block page.
#[derive(Debug, Clone)]
pub struct IdxClient {
    http: Client,
    base_announcements: Url,
}

impl IdxClient {
    /// Create a new builder.
    pub fn builder() -> IdxClientBuilder {
        IdxClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_announcements(&self) -> &Url {
        &self.base_announcements
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct IdxClientBuilder {
    base_announcements: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl IdxClientBuilder {
    /// Override the announcement listing endpoint (e.g. to point at a mock server).
    #[must_use]
    pub fn base_announcements(mut self, url: Url) -> Self {
        self.base_announcements = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default endpoint fails to parse or the
    /// underlying HTTP client cannot be created.
    pub fn build(self) -> Result<IdxClient, IdxError> {
        let base_announcements = match self.base_announcements {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_ANNOUNCEMENTS)?,
        };

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE),
        );
        headers.insert(header::REFERER, HeaderValue::from_static(REFERER));
        for (name, value) in XHR_HINTS {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(IdxClient {
            http,
            base_announcements,
        })
    }
}
