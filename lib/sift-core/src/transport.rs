//! Transport traits.
//!
//! - [`HttpClient`] - executes a request against an absolute URL
//! - [`Transport`] - an [`HttpClient`] bound to a cluster base URL; the only
//!   collaborator the dispatcher depends on
//!
//! Connection pooling, retries, node selection and authentication all live
//! behind these traits.

use std::future::Future;

use bytes::Bytes;
use url::Url;

use crate::{Request, Response, Result};

/// Core HTTP client trait.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// Implementations should honour [`Request::cancellation`] and fail with
    /// [`Error::Cancelled`](crate::Error::Cancelled) once the token fires.
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

/// The collaborator that performs the network exchange for an endpoint request.
///
/// # Example
///
/// ```ignore
/// use sift_core::{Request, Response, Result, Transport};
/// use bytes::Bytes;
/// use url::Url;
///
/// struct Recorded {
///     base_url: Url,
/// }
///
/// impl Transport for Recorded {
///     async fn perform(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
///         println!("{} {}", request.method(), request.url());
///         Ok(Response::new(200, Default::default(), Bytes::new()))
///     }
///
///     fn base_url(&self) -> &Url {
///         &self.base_url
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Perform the exchange.
    ///
    /// Any status code is a successful exchange; only failure to complete the
    /// exchange is an error.
    fn perform(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;

    /// Base URL that endpoint paths are resolved under.
    fn base_url(&self) -> &Url;
}
