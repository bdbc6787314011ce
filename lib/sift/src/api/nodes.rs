//! Node information and statistics.

endpoints! {
    /// Returns node configuration and capabilities.
    Info(INFO) => "nodes.info", GET "/_nodes/{node_id?}/{metric?}" {
        required: [],
        optional: [node_id, metric],
        params: {
            flat_settings: Bool,
            timeout: Duration,
        },
    }

    /// Returns node statistics.
    Stats(STATS) => "nodes.stats", GET "/_nodes/{node_id?}/stats/{metric?}/{index_metric?}" {
        required: [],
        optional: [node_id, metric, index_metric],
        params: {
            completion_fields: List,
            fielddata_fields: List,
            fields: List,
            groups: Bool,
            include_segment_file_sizes: Bool,
            level: Str,
            timeout: Duration,
            types: List,
        },
    }

    /// Returns the hottest threads on each node.
    HotThreads(HOT_THREADS) => "nodes.hot_threads", GET "/_nodes/{node_id?}/hot_threads" {
        required: [],
        optional: [node_id],
        params: {
            ignore_idle_threads: Bool,
            interval: Duration,
            snapshots: Int,
            threads: Int,
            timeout: Duration,
            thread_type => "type": Str,
        },
    }

    /// Returns REST feature usage per node.
    Usage(USAGE) => "nodes.usage", GET "/_nodes/{node_id?}/usage/{metric?}" {
        required: [],
        optional: [node_id, metric],
        params: {
            timeout: Duration,
        },
    }

    /// Reloads secure settings on each node.
    ReloadSecureSettings(RELOAD_SECURE_SETTINGS) => "nodes.reload_secure_settings", POST "/_nodes/{node_id?}/reload_secure_settings" {
        required: [],
        optional: [node_id],
        params: {
            timeout: Duration,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert2::check;
    use url::Url;

    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:9200").expect("valid url")
    }

    #[test]
    fn stats_skips_every_missing_optional_part() {
        let request = Stats::new().index_metric("docs").build(&base()).expect("build");
        check!(request.url().path() == "/_nodes/stats/docs");

        let request = Stats::new()
            .node_id(["node-1", "node-2"])
            .metric(["jvm", "os"])
            .build(&base())
            .expect("build");
        check!(request.url().path() == "/_nodes/node-1,node-2/stats/jvm,os");
    }

    #[test]
    fn hot_threads_renamed_type_option() {
        let request = HotThreads::new()
            .thread_type("cpu")
            .interval(Duration::from_millis(500))
            .build(&base())
            .expect("build");
        check!(request.url().query() == Some("interval=500ms&type=cpu"));
    }
}
