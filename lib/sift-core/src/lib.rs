//! Core types for the sift search-service client.
//!
//! This crate holds everything that does not touch the network:
//! - [`EndpointDescriptor`] and [`PathTemplate`] - static endpoint metadata
//! - [`ParamValue`] and [`PathValue`] - typed option and path-part values
//! - [`encode`] - path and query encoding
//! - [`EndpointRequest`] - per-call configuration and dispatch
//! - [`Request`] and [`Response`] - transport-level messages
//! - [`HttpClient`] and [`Transport`] - the seams a network client plugs into
//! - [`Error`] and [`Result`] - error handling

mod body;
mod descriptor;
pub mod encoder;
mod endpoint;
mod error;
pub mod prelude;
mod request;
mod response;
mod transport;
mod value;

pub use body::{ContentType, from_json, to_json, to_ndjson};
pub use descriptor::{
    EndpointDescriptor, ParamKind, ParamSpec, PathTemplate, Segment, UNIVERSAL_PARAMS,
};
pub use encoder::{Encoded, encode};
pub use endpoint::{EndpointRequest, OPAQUE_ID_HEADER, RequestParts};
pub use error::{Error, Result};
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use transport::{HttpClient, Transport};
pub use value::{ParamValue, PathValue, Slices, format_duration};

// Re-export http crate types for methods, status codes and headers
pub use http::{HeaderMap, Method, StatusCode, header};
pub use tokio_util::sync::CancellationToken;
