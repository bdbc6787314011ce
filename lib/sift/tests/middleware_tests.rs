//! Middleware composition tests.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use assert2::check;
use bytes::Bytes;
use sift::api::{cat, cluster};
use sift::middleware::{Layer, LoggingLayer};
use sift::{ApiClient, Error, HyperClient, Request, Response, Result};
use tower::Service;
use wiremock::{Mock, MockServer, ResponseTemplate, matchers::method};

/// Records the endpoint name of every request passing through.
#[derive(Clone, Default)]
struct RecordEndpointsLayer {
    seen: Arc<Mutex<Vec<String>>>,
}

impl<S> Layer<S> for RecordEndpointsLayer {
    type Service = RecordEndpoints<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RecordEndpoints {
            inner,
            seen: Arc::clone(&self.seen),
        }
    }
}

#[derive(Clone)]
struct RecordEndpoints<S> {
    inner: S,
    seen: Arc<Mutex<Vec<String>>>,
}

impl<S> Service<Request<Bytes>> for RecordEndpoints<S>
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
        self.seen
            .lock()
            .expect("lock")
            .push(request.endpoint().unwrap_or("-").to_string());
        let mut inner = self.inner.clone();
        Box::pin(async move { inner.call(request).await })
    }
}

#[tokio::test]
async fn layers_see_endpoint_names() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let recorder = RecordEndpointsLayer::default();
    let http = HyperClient::builder().layer(recorder.clone()).build();
    let client = ApiClient::new(http, mock_server.uri()).expect("valid url");

    cluster::Health::new().send(&client).await.expect("health");
    cat::Indices::new().v(true).send(&client).await.expect("cat");

    let seen = recorder.seen.lock().expect("lock").clone();
    check!(seen == vec!["cluster.health", "cat.indices"]);
}

#[tokio::test]
async fn logging_passes_responses_through() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&mock_server)
        .await;

    let http = HyperClient::builder()
        .with_defaults()
        .with_debug_logging()
        .layer(LoggingLayer::new())
        .build();
    let client = ApiClient::new(http, mock_server.uri()).expect("valid url");

    let response = cluster::Health::new().send(&client).await.expect("response");
    check!(response.is_server_error());
    check!(response.text().expect("utf8") == "unavailable");
}

#[tokio::test]
async fn logging_passes_cancellation_through() {
    let mock_server = MockServer::start().await;
    let http = HyperClient::builder().with_logging().build();
    let client = ApiClient::new(http, mock_server.uri()).expect("valid url");

    let token = sift::CancellationToken::new();
    token.cancel();
    let result = cluster::Health::new().cancellation(token).send(&client).await;
    check!(result.is_err_and(|err| err.is_cancelled()));
}
