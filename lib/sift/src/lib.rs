//! Typed request builders for a document-search HTTP service.
//!
//! Every endpoint has a builder in [`api`]: required path parts go to `new`,
//! each recognized option has a typed setter, and `send` dispatches through
//! any [`Transport`]. Unset options never reach the query string, so
//! `size(0)` and no `size` at all stay distinct.
//!
//! # Example
//!
//! ```ignore
//! use sift::prelude::*;
//! use sift::api::search::Search;
//!
//! let http = HyperClient::builder().with_logging().build();
//! let client = ApiClient::new(http, "http://localhost:9200")?;
//!
//! let response = Search::new()
//!     .index(["logs", "metrics"])
//!     .size(0)
//!     .json(&serde_json::json!({"query": {"match_all": {}}}))?
//!     .send(&client)
//!     .await?;
//! if response.is_success() {
//!     let body: serde_json::Value = response.json()?;
//! }
//! ```

pub mod api;
mod api_client;
mod client;
mod config;
mod connector;
pub mod middleware;
pub mod prelude;

pub use api_client::ApiClient;
pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use sift_core::{
    CancellationToken, ContentType, Encoded, EndpointDescriptor, EndpointRequest, Error,
    HeaderMap, HttpClient, Method, ParamKind, ParamSpec, ParamValue, PathTemplate, PathValue,
    Request, RequestBuilder, Response, Result, Slices, StatusCode, Transport, encode,
    format_duration, from_json, header, to_json, to_ndjson,
};
