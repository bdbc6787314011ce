//! Client configuration types.
//!
//! Search clusters mix quick lookups with calls that block server-side for a
//! long time (`wait_for_completion` on reindex, snapshot creation, health
//! checks with `wait_for_status`). Those calls carry their own server-side
//! `timeout`/`master_timeout` options, so the client imposes no overall
//! deadline unless asked to. Connection setup is still bounded.

use std::time::Duration;

/// Configuration for [`HyperClient`](crate::HyperClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Overall deadline for one exchange, from sending the request to the
    /// last byte of the response body. `None` waits for as long as the
    /// server takes, leaving cancellation to the caller's token.
    pub timeout: Option<Duration>,
    /// Deadline for establishing a TCP connection.
    pub connect_timeout: Duration,
    /// Maximum idle connections kept per node.
    pub pool_idle_per_host: usize,
    /// How long an idle connection stays in the pool.
    pub pool_idle_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: Duration::from_secs(10),
            pool_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`].
///
/// Unset fields fall back to [`ClientConfig::default`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    pool_idle_per_host: Option<usize>,
    pool_idle_timeout: Option<Duration>,
}

impl From<ClientConfig> for ClientConfigBuilder {
    fn from(config: ClientConfig) -> Self {
        Self {
            timeout: config.timeout,
            connect_timeout: Some(config.connect_timeout),
            pool_idle_per_host: Some(config.pool_idle_per_host),
            pool_idle_timeout: Some(config.pool_idle_timeout),
        }
    }
}

impl ClientConfigBuilder {
    /// Bound every exchange by an overall deadline.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Remove the overall deadline.
    #[must_use]
    pub const fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the maximum idle connections per node.
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.pool_idle_per_host = Some(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            timeout: self.timeout,
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            pool_idle_per_host: self
                .pool_idle_per_host
                .unwrap_or(defaults.pool_idle_per_host),
            pool_idle_timeout: self.pool_idle_timeout.unwrap_or(defaults.pool_idle_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn long_running_calls_are_not_cut_short_by_default() {
        let config = ClientConfig::default();
        check!(config.timeout.is_none());
        check!(config.connect_timeout == Duration::from_secs(10));
        check!(config.pool_idle_per_host == 32);
    }

    #[test]
    fn builder_overrides_only_what_is_set() {
        let config = ClientConfig::builder()
            .timeout(Duration::from_secs(120))
            .pool_idle_per_host(4)
            .build();

        check!(config.timeout == Some(Duration::from_secs(120)));
        check!(config.pool_idle_per_host == 4);
        check!(config.connect_timeout == Duration::from_secs(10));
    }

    #[test]
    fn deadline_can_be_lifted_again() {
        let bounded = ClientConfig::builder()
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(1))
            .build();
        let lifted = ClientConfigBuilder::from(bounded).no_timeout().build();

        check!(lifted.timeout.is_none());
        check!(lifted.connect_timeout == Duration::from_secs(1));
    }
}
