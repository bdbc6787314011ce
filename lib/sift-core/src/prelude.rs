//! Prelude module for convenient imports.
//!
//! ```ignore
//! use sift_core::prelude::*;
//! ```

pub use crate::{
    CancellationToken, ContentType, EndpointDescriptor, EndpointRequest, Error, HttpClient,
    Method, ParamValue, PathValue, Request, Response, Result, Slices, Transport, from_json,
    to_json, to_ndjson,
};
