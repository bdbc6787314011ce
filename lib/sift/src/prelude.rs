//! Prelude module for convenient imports.
//!
//! ```ignore
//! use sift::prelude::*;
//! ```

pub use crate::{
    ApiClient, CancellationToken, ClientConfig, EndpointRequest, Error, HttpClient, HyperClient,
    Method, ParamValue, PathValue, Response, Result, Slices, StatusCode, Transport, from_json,
    to_json, to_ndjson,
};
pub use serde::{Deserialize, Serialize};
