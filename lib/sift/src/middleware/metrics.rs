//! Metrics middleware using the `metrics` crate facade.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use bytes::Bytes;
use tower::{Layer, Service};

use crate::{Error, Request, Response, Result};

const LABEL_ENDPOINT: &str = "endpoint";
const LABEL_METHOD: &str = "method";
const LABEL_STATUS: &str = "status";

const METRIC_REQUESTS_TOTAL: &str = "sift_requests_total";
const METRIC_REQUEST_DURATION: &str = "sift_request_duration_seconds";
const METRIC_REQUESTS_IN_FLIGHT: &str = "sift_requests_in_flight";

/// Layer that records per-endpoint request metrics.
///
/// - `sift_requests_total` (counter): labelled by endpoint, method and status
///   (`error` or `cancelled` when no response arrived)
/// - `sift_request_duration_seconds` (histogram): labelled by endpoint
/// - `sift_requests_in_flight` (gauge)
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsLayer {
    _private: (),
}

impl MetricsLayer {
    /// Create a new metrics layer.
    #[must_use]
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl<S> Layer<S> for MetricsLayer {
    type Service = Metrics<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Metrics { inner }
    }
}

/// Service that records request metrics.
#[derive(Debug, Clone)]
pub struct Metrics<S> {
    inner: S,
}

impl<S> Metrics<S> {
    /// Create a new metrics service wrapping the given service.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> Service<Request<Bytes>> for Metrics<S>
where
    S: Service<Request<Bytes>, Response = Response<Bytes>, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        let endpoint = request.endpoint().unwrap_or("unknown");
        let method = request.method().to_string();
        let start = Instant::now();
        let mut inner = self.inner.clone();

        metrics::gauge!(METRIC_REQUESTS_IN_FLIGHT).increment(1.0);

        Box::pin(async move {
            let result = inner.call(request).await;

            metrics::gauge!(METRIC_REQUESTS_IN_FLIGHT).decrement(1.0);
            metrics::histogram!(METRIC_REQUEST_DURATION, LABEL_ENDPOINT => endpoint)
                .record(start.elapsed().as_secs_f64());

            let status = match &result {
                Ok(response) => response.status().to_string(),
                Err(err) if err.is_cancelled() => "cancelled".to_string(),
                Err(_) => "error".to_string(),
            };
            metrics::counter!(
                METRIC_REQUESTS_TOTAL,
                LABEL_ENDPOINT => endpoint,
                LABEL_METHOD => method,
                LABEL_STATUS => status
            )
            .increment(1);

            result
        })
    }
}
