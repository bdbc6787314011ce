//! Cluster-level endpoints.

endpoints! {
    /// Returns cluster health, optionally waiting for a status.
    Health(HEALTH) => "cluster.health", GET "/_cluster/health/{index?}" {
        required: [],
        optional: [index],
        params: {
            expand_wildcards: Str,
            level: Str,
            local: Bool,
            master_timeout: Duration,
            timeout: Duration,
            wait_for_active_shards: Str,
            wait_for_events: Str,
            wait_for_no_initializing_shards: Bool,
            wait_for_no_relocating_shards: Bool,
            wait_for_nodes: Str,
            wait_for_status: Str,
        },
    }

    /// Returns the cluster state.
    State(STATE) => "cluster.state", GET "/_cluster/state/{metric?}/{index?}" {
        required: [],
        optional: [metric, index],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            flat_settings: Bool,
            ignore_unavailable: Bool,
            local: Bool,
            master_timeout: Duration,
            wait_for_metadata_version: Int,
            wait_for_timeout: Duration,
        },
    }

    /// Returns cluster statistics.
    Stats(STATS) => "cluster.stats", GET "/_cluster/stats/nodes/{node_id?}" {
        required: [],
        optional: [node_id],
        params: {
            flat_settings: Bool,
            timeout: Duration,
        },
    }

    /// Returns cluster-wide settings.
    GetSettings(GET_SETTINGS) => "cluster.get_settings", GET "/_cluster/settings" {
        required: [],
        optional: [],
        params: {
            flat_settings: Bool,
            include_defaults: Bool,
            master_timeout: Duration,
            timeout: Duration,
        },
    }

    /// Updates cluster-wide settings.
    PutSettings(PUT_SETTINGS) => "cluster.put_settings", PUT "/_cluster/settings" {
        required: [],
        optional: [],
        params: {
            flat_settings: Bool,
            master_timeout: Duration,
            timeout: Duration,
        },
    }

    /// Moves or allocates shards by hand.
    Reroute(REROUTE) => "cluster.reroute", POST "/_cluster/reroute" {
        required: [],
        optional: [],
        params: {
            dry_run: Bool,
            explain: Bool,
            master_timeout: Duration,
            metric: List,
            retry_failed: Bool,
            timeout: Duration,
        },
    }

    /// Explains why a shard is or is not allocated.
    AllocationExplain(ALLOCATION_EXPLAIN) => "cluster.allocation_explain", POST "/_cluster/allocation/explain" {
        required: [],
        optional: [],
        params: {
            include_disk_info: Bool,
            include_yes_decisions: Bool,
        },
    }

    /// Lists cluster-level changes that have not executed yet.
    PendingTasks(PENDING_TASKS) => "cluster.pending_tasks", GET "/_cluster/pending_tasks" {
        required: [],
        optional: [],
        params: {
            local: Bool,
            master_timeout: Duration,
        },
    }

    /// Returns information about configured remote clusters.
    RemoteInfo(REMOTE_INFO) => "cluster.remote_info", GET "/_remote/info" {
        required: [],
        optional: [],
        params: {},
    }

    /// Creates or updates a component template.
    PutComponentTemplate(PUT_COMPONENT_TEMPLATE) => "cluster.put_component_template", PUT "/_component_template/{name}" {
        required: [name],
        optional: [],
        params: {
            create: Bool,
            master_timeout: Duration,
            timeout: Duration,
        },
    }

    /// Returns component templates.
    GetComponentTemplate(GET_COMPONENT_TEMPLATE) => "cluster.get_component_template", GET "/_component_template/{name?}" {
        required: [],
        optional: [name],
        params: {
            local: Bool,
            master_timeout: Duration,
        },
    }

    /// Deletes a component template.
    DeleteComponentTemplate(DELETE_COMPONENT_TEMPLATE) => "cluster.delete_component_template", DELETE "/_component_template/{name}" {
        required: [name],
        optional: [],
        params: {
            master_timeout: Duration,
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

    #[test]
    fn health_waits_for_status() {
        let request = Health::new()
            .index("logs")
            .wait_for_status("green")
            .timeout(Duration::from_millis(1500))
            .build(&Url::parse("http://localhost:9200").expect("valid url"))
            .expect("build");
        insta::assert_snapshot!(
            request.url().as_str(),
            @"http://localhost:9200/_cluster/health/logs?timeout=1500ms&wait_for_status=green"
        );
    }

    #[test]
    fn state_skips_missing_metric() {
        let request = State::new()
            .index("logs")
            .build(&Url::parse("http://localhost:9200").expect("valid url"))
            .expect("build");
        check!(request.url().path() == "/_cluster/state/logs");
    }

    #[test]
    fn reroute_list_option() {
        let request = Reroute::new()
            .retry_failed(true)
            .metric(["none"])
            .build(&Url::parse("http://localhost:9200").expect("valid url"))
            .expect("build");
        check!(request.url().query() == Some("metric=none&retry_failed=true"));
    }
}
