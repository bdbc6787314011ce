//! Endpoint requests: configuration and dispatch.
//!
//! An [`EndpointRequest`] pairs a static [`EndpointDescriptor`] with the
//! per-call [`RequestParts`]. Setters consume and return the request, applied
//! left to right; the last value for a scalar option wins, while headers
//! accumulate.
//!
//! # Example
//!
//! ```ignore
//! let response = EndpointRequest::new(&SEARCH)
//!     .part("index", ["logs", "metrics"])
//!     .param("size", 0)
//!     .filter_path(["hits.total"])
//!     .send(&transport)
//!     .await?;
//! ```

use std::collections::BTreeMap;

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::{
    EndpointDescriptor, Error, ParamValue, PathValue, Request, Response, Result, Transport,
    encoder::{self, Encoded},
};

/// Header carrying a caller-chosen id that the service echoes in its logs and tasks.
pub const OPAQUE_ID_HEADER: &str = "x-opaque-id";

/// Per-call settings for one endpoint request.
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    path: BTreeMap<String, PathValue>,
    params: BTreeMap<String, ParamValue>,
    headers: Vec<(String, String)>,
    body: Option<Bytes>,
    cancellation: Option<CancellationToken>,
}

impl RequestParts {
    /// Path-part values by name.
    #[must_use]
    pub fn path_parts(&self) -> &BTreeMap<String, PathValue> {
        &self.path
    }

    /// Options that have been set, by wire name.
    #[must_use]
    pub fn params(&self) -> &BTreeMap<String, ParamValue> {
        &self.params
    }

    /// Caller-supplied headers, in the order they were added.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Cancellation token.
    #[must_use]
    pub const fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }
}

/// A request for one endpoint, in the configuring state until sent.
#[derive(Debug, Clone)]
pub struct EndpointRequest {
    descriptor: &'static EndpointDescriptor,
    parts: RequestParts,
}

impl EndpointRequest {
    /// Start a request for the given endpoint, with nothing set.
    #[must_use]
    pub fn new(descriptor: &'static EndpointDescriptor) -> Self {
        Self {
            descriptor,
            parts: RequestParts::default(),
        }
    }

    /// The endpoint this request targets.
    #[must_use]
    pub const fn descriptor(&self) -> &'static EndpointDescriptor {
        self.descriptor
    }

    /// Current settings.
    #[must_use]
    pub const fn parts(&self) -> &RequestParts {
        &self.parts
    }

    /// Sets a path part.
    #[must_use]
    pub fn part(mut self, name: &str, value: impl Into<PathValue>) -> Self {
        self.parts.path.insert(name.to_string(), value.into());
        self
    }

    /// Sets a query option, replacing any earlier value.
    #[must_use]
    pub fn param(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.parts.params.insert(name.to_string(), value.into());
        self
    }

    /// Sets the raw request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.parts.body = Some(body.into());
        self
    }

    /// Serializes `value` as the JSON request body.
    pub fn json<T: serde::Serialize>(self, value: &T) -> Result<Self> {
        Ok(self.body(crate::to_json(value)?))
    }

    /// Appends a header value; repeated names accumulate.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.headers.push((name.into(), value.into()));
        self
    }

    /// Appends several header values.
    #[must_use]
    pub fn headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.parts
            .headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets the `X-Opaque-Id` header, replacing an earlier id.
    #[must_use]
    pub fn opaque_id(mut self, id: impl Into<String>) -> Self {
        self.parts
            .headers
            .retain(|(name, _)| !name.eq_ignore_ascii_case(OPAQUE_ID_HEADER));
        self.parts
            .headers
            .push((OPAQUE_ID_HEADER.to_string(), id.into()));
        self
    }

    /// Forwards a cancellation token to the transport.
    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.parts.cancellation = Some(token);
        self
    }

    /// Pretty-print the response body.
    #[must_use]
    pub fn pretty(self, value: bool) -> Self {
        self.param("pretty", value)
    }

    /// Return human-readable values (sizes, times) in the response.
    #[must_use]
    pub fn human(self, value: bool) -> Self {
        self.param("human", value)
    }

    /// Include stack traces in error responses.
    #[must_use]
    pub fn error_trace(self, value: bool) -> Self {
        self.param("error_trace", value)
    }

    /// Restrict the response to the given dotted paths.
    #[must_use]
    pub fn filter_path<I, S>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.param(
            "filter_path",
            ParamValue::List(paths.into_iter().map(Into::into).collect()),
        )
    }

    /// Applies a configuration function.
    #[must_use]
    pub fn apply(self, option: impl FnOnce(Self) -> Self) -> Self {
        option(self)
    }

    /// Applies a sequence of configuration functions, left to right.
    #[must_use]
    pub fn apply_all<F>(self, options: impl IntoIterator<Item = F>) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        options.into_iter().fold(self, |request, option| option(request))
    }

    /// Encode the path and query string.
    pub fn encode(&self) -> Result<Encoded> {
        encoder::encode(self.descriptor, &self.parts)
    }

    /// Build the transport-level request under `base_url`.
    ///
    /// `Content-Type` is set from the descriptor only when a body is present.
    /// Caller headers are merged afterwards: a caller-supplied name replaces
    /// the automatic value.
    pub fn build(&self, base_url: &Url) -> Result<Request<Bytes>> {
        let Encoded { path, query } = self.encode()?;

        let mut url = base_url.clone();
        let full_path = format!("{}{path}", base_url.path().trim_end_matches('/'));
        url.set_path(&full_path);
        url.set_query(None);
        url.set_fragment(None);

        let mut headers = HeaderMap::new();
        if self.parts.body.is_some() {
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static(self.descriptor.content_type.as_str()),
            );
        }
        // HeaderMap::extend replaces existing names, then appends repeats.
        headers.extend(self.supplied_headers()?);

        let mut builder = Request::builder(self.descriptor.method.clone(), url)
            .endpoint(self.descriptor.name)
            .headers(headers)
            .query_pairs(query);
        if let Some(body) = &self.parts.body {
            builder = builder.body(body.clone());
        }
        if let Some(token) = &self.parts.cancellation {
            builder = builder.cancellation(token.clone());
        }
        Ok(builder.build())
    }

    /// Build the request and hand it to `transport`.
    ///
    /// The response is returned whatever its status. Transport failures are
    /// propagated unchanged; nothing is retried.
    pub async fn send<T: Transport>(&self, transport: &T) -> Result<Response<Bytes>> {
        let request = self.build(transport.base_url())?;
        debug!(
            endpoint = self.descriptor.name,
            method = %request.method(),
            url = %request.url(),
            "dispatching request"
        );
        transport.perform(request).await
    }

    fn supplied_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.parts.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::invalid_header(format!("`{name}`: {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| Error::invalid_header(format!("`{name}` value: {e}")))?;
            headers.append(header_name, header_value);
        }
        Ok(headers)
    }
}
