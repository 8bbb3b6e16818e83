//! Fragment sources: where page markup comes from.
//!
//! The loader works against the [`FragmentSource`] trait; the shell ships
//! two implementations. [`LocalAssets`] reads through the content provider
//! (inherently uncached), [`RemoteHttp`] fetches over HTTP with caching
//! disabled on every request.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::content::ContentProvider;

/// Errors from fetching a page fragment.
#[derive(Debug, Error)]
pub enum FragmentError {
    #[error("fragment not found: {0}")]
    NotFound(String),

    #[error("fragment is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("request failed: {0}")]
    Network(String),

    #[error("server returned status {status} for {path}")]
    Status { status: u16, path: String },
}

/// A source of page fragments.
#[async_trait]
pub trait FragmentSource: Send + Sync {
    /// Fetch the fragment at `path`, bypassing any cache.
    async fn fetch(&self, path: &str) -> Result<String, FragmentError>;
}

/// Serves fragments from the bundled assets directory.
pub struct LocalAssets {
    provider: Arc<ContentProvider>,
}

impl LocalAssets {
    pub fn new(provider: Arc<ContentProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl FragmentSource for LocalAssets {
    async fn fetch(&self, path: &str) -> Result<String, FragmentError> {
        let (_mime, data) = self
            .provider
            .resolve(path)
            .ok_or_else(|| FragmentError::NotFound(path.to_string()))?;
        String::from_utf8(data.into_owned()).map_err(|e| FragmentError::Encoding(e.to_string()))
    }
}

/// Fetches fragments over HTTP with caching disabled.
pub struct RemoteHttp {
    client: reqwest::Client,
    base: String,
}

impl RemoteHttp {
    /// Build a client against `base` with the given timeouts.
    pub fn new(
        base: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, FragmentError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| FragmentError::Network(e.to_string()))?;
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Ok(Self { client, base })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl FragmentSource for RemoteHttp {
    async fn fetch(&self, path: &str) -> Result<String, FragmentError> {
        let url = self.url_for(path);
        debug!(url = %url, "fetching remote fragment");

        let response = self
            .client
            .get(&url)
            .header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| FragmentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FragmentError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FragmentError::Network(e.to_string()))
    }
}
