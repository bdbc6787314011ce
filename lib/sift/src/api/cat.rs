//! Compact, human-oriented `_cat` endpoints.

endpoints! {
    /// Lists indices.
    Indices(INDICES) => "cat.indices", GET "/_cat/indices/{index?}" {
        required: [],
        optional: [index],
        params: {
            bytes: Str,
            expand_wildcards: Str,
            format: Str,
            h: List,
            health: Str,
            help: Bool,
            include_unloaded_segments: Bool,
            local: Bool,
            master_timeout: Duration,
            pri: Bool,
            s: List,
            time: Str,
            v: Bool,
        },
    }

    /// Shows cluster health in one line.
    Health(HEALTH) => "cat.health", GET "/_cat/health" {
        required: [],
        optional: [],
        params: {
            format: Str,
            h: List,
            help: Bool,
            s: List,
            time: Str,
            ts: Bool,
            v: Bool,
        },
    }

    /// Lists nodes.
    Nodes(NODES) => "cat.nodes", GET "/_cat/nodes" {
        required: [],
        optional: [],
        params: {
            bytes: Str,
            format: Str,
            full_id: Bool,
            h: List,
            help: Bool,
            include_unloaded_segments: Bool,
            master_timeout: Duration,
            s: List,
            time: Str,
            v: Bool,
        },
    }

    /// Lists shards and where they live.
    Shards(SHARDS) => "cat.shards", GET "/_cat/shards/{index?}" {
        required: [],
        optional: [index],
        params: {
            bytes: Str,
            format: Str,
            h: List,
            help: Bool,
            master_timeout: Duration,
            s: List,
            time: Str,
            v: Bool,
        },
    }

    /// Lists aliases.
    Aliases(ALIASES) => "cat.aliases", GET "/_cat/aliases/{name?}" {
        required: [],
        optional: [name],
        params: {
            expand_wildcards: Str,
            format: Str,
            h: List,
            help: Bool,
            local: Bool,
            s: List,
            v: Bool,
        },
    }

    /// Shows document counts.
    Count(COUNT) => "cat.count", GET "/_cat/count/{index?}" {
        required: [],
        optional: [index],
        params: {
            format: Str,
            h: List,
            help: Bool,
            s: List,
            v: Bool,
        },
    }

    /// Shows shard allocation and disk use per node.
    Allocation(ALLOCATION) => "cat.allocation", GET "/_cat/allocation/{node_id?}" {
        required: [],
        optional: [node_id],
        params: {
            bytes: Str,
            format: Str,
            h: List,
            help: Bool,
            local: Bool,
            master_timeout: Duration,
            s: List,
            v: Bool,
        },
    }

    /// Shows the elected master node.
    Master(MASTER) => "cat.master", GET "/_cat/master" {
        required: [],
        optional: [],
        params: {
            format: Str,
            h: List,
            help: Bool,
            local: Bool,
            master_timeout: Duration,
            s: List,
            v: Bool,
        },
    }

    /// Shows thread pool statistics per node.
    ThreadPool(THREAD_POOL) => "cat.thread_pool", GET "/_cat/thread_pool/{thread_pool_patterns?}" {
        required: [],
        optional: [thread_pool_patterns],
        params: {
            format: Str,
            h: List,
            help: Bool,
            local: Bool,
            master_timeout: Duration,
            s: List,
            size: Str,
            v: Bool,
        },
    }

    /// Lists segments.
    Segments(SEGMENTS) => "cat.segments", GET "/_cat/segments/{index?}" {
        required: [],
        optional: [index],
        params: {
            bytes: Str,
            format: Str,
            h: List,
            help: Bool,
            s: List,
            v: Bool,
        },
    }

    /// Shows shard recoveries.
    Recovery(RECOVERY) => "cat.recovery", GET "/_cat/recovery/{index?}" {
        required: [],
        optional: [index],
        params: {
            active_only: Bool,
            bytes: Str,
            detailed: Bool,
            format: Str,
            h: List,
            help: Bool,
            s: List,
            time: Str,
            v: Bool,
        },
    }

    /// Lists running tasks.
    Tasks(TASKS) => "cat.tasks", GET "/_cat/tasks" {
        required: [],
        optional: [],
        params: {
            actions: List,
            detailed: Bool,
            format: Str,
            h: List,
            help: Bool,
            nodes: List,
            parent_task_id: Str,
            s: List,
            time: Str,
            v: Bool,
        },
    }

    /// Lists index templates.
    Templates(TEMPLATES) => "cat.templates", GET "/_cat/templates/{name?}" {
        required: [],
        optional: [name],
        params: {
            format: Str,
            h: List,
            help: Bool,
            local: Bool,
            master_timeout: Duration,
            s: List,
            v: Bool,
        },
    }

    /// Lists snapshots in a repository.
    Snapshots(SNAPSHOTS) => "cat.snapshots", GET "/_cat/snapshots/{repository?}" {
        required: [],
        optional: [repository],
        params: {
            format: Str,
            h: List,
            help: Bool,
            ignore_unavailable: Bool,
            master_timeout: Duration,
            s: List,
            time: Str,
            v: Bool,
        },
    }

    /// Lists snapshot repositories.
    Repositories(REPOSITORIES) => "cat.repositories", GET "/_cat/repositories" {
        required: [],
        optional: [],
        params: {
            format: Str,
            h: List,
            help: Bool,
            local: Bool,
            master_timeout: Duration,
            s: List,
            v: Bool,
        },
    }

    /// Lists installed plugins per node.
    Plugins(PLUGINS) => "cat.plugins", GET "/_cat/plugins" {
        required: [],
        optional: [],
        params: {
            format: Str,
            h: List,
            help: Bool,
            include_bootstrap: Bool,
            local: Bool,
            master_timeout: Duration,
            s: List,
            v: Bool,
        },
    }

    /// Shows fielddata memory use per node.
    Fielddata(FIELDDATA) => "cat.fielddata", GET "/_cat/fielddata/{fields?}" {
        required: [],
        optional: [fields],
        params: {
            bytes: Str,
            format: Str,
            h: List,
            help: Bool,
            s: List,
            v: Bool,
        },
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use url::Url;

    use super::*;

    #[test]
    fn cat_indices_columns() {
        let request = Indices::new()
            .index("logs-*")
            .v(true)
            .h(["index", "docs.count", "store.size"])
            .s(["store.size:desc"])
            .bytes("mb")
            .build(&Url::parse("http://localhost:9200").expect("valid url"))
            .expect("build");
        insta::assert_snapshot!(
            request.url().as_str(),
            @"http://localhost:9200/_cat/indices/logs-*?bytes=mb&h=index%2Cdocs.count%2Cstore.size&s=store.size%3Adesc&v=true"
        );
    }

    #[test]
    fn cat_endpoints_use_get() {
        for descriptor in DESCRIPTORS {
            check!(descriptor.method == http::Method::GET, "{}", descriptor.name);
            check!(descriptor.path.as_str().starts_with("/_cat/"));
        }
    }
}
