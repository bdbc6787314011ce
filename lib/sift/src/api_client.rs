//! Binding an HTTP client to a cluster.
//!
//! [`ApiClient`] combines any [`HttpClient`] with a base URL to form the
//! [`Transport`] that endpoint requests are sent through.

use std::future::Future;

use bytes::Bytes;
use url::Url;

use crate::{Error, HttpClient, Request, Response, Result, Transport};

/// An [`HttpClient`] bound to a cluster base URL.
///
/// The base URL may carry a path prefix (for clusters behind a reverse
/// proxy); endpoint paths are appended below it.
///
/// # Example
///
/// ```ignore
/// use sift::{ApiClient, HyperClient};
///
/// let http = HyperClient::builder().with_logging().build();
///
/// // Share one connection pool between two clusters
/// let hot = ApiClient::new(http.clone(), "http://hot-cluster:9200")?;
/// let warm = ApiClient::new(http, "https://proxy.internal/warm")?;
/// ```
#[derive(Debug)]
pub struct ApiClient<C> {
    client: C,
    base_url: Url,
}

impl<C: Clone> Clone for ApiClient<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

impl<C> ApiClient<C> {
    /// Create a new API client with the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the URL cannot be parsed.
    pub fn new(client: C, base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url.as_ref()).map_err(Error::InvalidUrl)?,
        })
    }

    /// Create a new API client with a pre-parsed URL.
    #[must_use]
    pub fn with_url(client: C, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Get a reference to the inner HTTP client.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.client
    }

    /// Consume the wrapper and return the inner HTTP client.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.client
    }
}

impl<C> Transport for ApiClient<C>
where
    C: HttpClient,
{
    fn perform(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        self.client.execute(request)
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert2::{check, let_assert};
    use http::HeaderMap;

    use super::*;
    use crate::api::cluster;

    #[derive(Default)]
    struct Recorder {
        urls: Mutex<Vec<String>>,
    }

    impl HttpClient for Recorder {
        async fn execute(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
            self.urls
                .lock()
                .expect("lock")
                .push(request.url().to_string());
            Ok(Response::new(200, HeaderMap::new(), Bytes::new()))
        }
    }

    #[test]
    fn invalid_base_url() {
        let result = ApiClient::new(Recorder::default(), "not a url");
        let_assert!(Err(Error::InvalidUrl(_)) = result);
    }

    #[tokio::test]
    async fn endpoint_paths_resolve_under_the_base_path() {
        let client = ApiClient::new(Recorder::default(), "https://proxy.internal/warm/")
            .expect("valid url");

        cluster::Health::new()
            .wait_for_status("yellow")
            .send(&client)
            .await
            .expect("response");

        let urls = client.inner().urls.lock().expect("lock").clone();
        check!(urls == vec!["https://proxy.internal/warm/_cluster/health?wait_for_status=yellow"]);
    }
}
