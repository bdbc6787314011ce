//! Tower middleware layers for the sift HTTP client.
//!
//! Layers wrap the [`HyperClient`](crate::HyperClient) service and see every
//! transport-level [`Request`](crate::Request), including the name of the
//! endpoint it was built for.
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `middleware-logging` | `.with_logging()` helper (on by default) |
//! | `middleware-metrics` | `.with_metrics()` helper |
//! | `middleware-full` | All middleware |
//!
//! # Example
//!
//! ```ignore
//! use sift::HyperClient;
//! use sift::middleware::LoggingLayer;
//!
//! let client = HyperClient::builder()
//!     .layer(LoggingLayer::new())
//!     .build();
//! ```

mod logging;
#[cfg(feature = "middleware-metrics")]
mod metrics;

pub use logging::{LogLevel, Logging, LoggingLayer};
#[cfg(feature = "middleware-metrics")]
pub use metrics::{Metrics, MetricsLayer};

pub use tower::{Layer, ServiceBuilder};
