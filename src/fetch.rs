// SPDX-License-Identifier: MPL-2.0
//! Remote bundle transport.
//!
//! The manager does not care how FTL source reaches it; [`BundleFetcher`] is
//! the injected capability ("fetch a resource by location, returning its body
//! or failing"). [`HttpBundleFetcher`] is the production implementation,
//! fetching `<base_url>/<language-code>.ftl`.

use crate::error::{Error, Result};
use crate::language::Language;
use std::future::Future;

/// Capability to retrieve the raw FTL source of a language's bundle.
pub trait BundleFetcher {
    fn fetch_ftl(&self, language: Language) -> impl Future<Output = Result<String>> + Send;
}

/// Fetches bundles over HTTP(S) from a fixed base location.
pub struct HttpBundleFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBundleFetcher {
    /// Creates a fetcher rooted at `base_url` (with or without a trailing
    /// slash), e.g. `https://example.org/i18n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] when the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        // Explicit redirect policy and user agent, no timeout of our own;
        // the transport's defaults apply.
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("lingoswap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    fn bundle_url(&self, language: Language) -> String {
        format!("{}/{}.ftl", self.base_url, language.code())
    }
}

impl BundleFetcher for HttpBundleFetcher {
    async fn fetch_ftl(&self, language: Language) -> Result<String> {
        let response = self.client.get(self.bundle_url(language)).send().await?;

        if !response.status().is_success() {
            return Err(Error::Fetch(format!("HTTP status: {}", response.status())));
        }

        Ok(response.text().await?)
    }
}
