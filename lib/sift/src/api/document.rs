//! Single- and multi-document endpoints.

endpoints! {
    /// Adds a document to an index, or replaces it when `id` is given and exists.
    Index(INDEX) => "index", POST "/{index}/{type?}/_doc/{id?}" {
        required: [index],
        optional: [doc_type => "type", id],
        params: {
            if_primary_term: Int,
            if_seq_no: Int,
            op_type: Str,
            pipeline: Str,
            refresh: Str,
            require_alias: Bool,
            routing: Str,
            timeout: Duration,
            version: Int,
            version_type: Str,
            wait_for_active_shards: Str,
        },
    }

    /// Adds a document only if no document with that id exists.
    Create(CREATE) => "create", PUT "/{index}/_create/{id}" {
        required: [index, id],
        optional: [],
        params: {
            pipeline: Str,
            refresh: Str,
            routing: Str,
            timeout: Duration,
            version: Int,
            version_type: Str,
            wait_for_active_shards: Str,
        },
    }

    /// Retrieves a document by id.
    Get(GET) => "get", GET "/{index}/_doc/{id}" {
        required: [index, id],
        optional: [],
        params: {
            source => "_source": List,
            source_excludes => "_source_excludes": List,
            source_includes => "_source_includes": List,
            preference: Str,
            realtime: Bool,
            refresh: Bool,
            routing: Str,
            stored_fields: List,
            version: Int,
            version_type: Str,
        },
    }

    /// Checks whether a document exists.
    Exists(EXISTS) => "exists", HEAD "/{index}/_doc/{id}" {
        required: [index, id],
        optional: [],
        params: {
            source => "_source": List,
            source_excludes => "_source_excludes": List,
            source_includes => "_source_includes": List,
            preference: Str,
            realtime: Bool,
            refresh: Bool,
            routing: Str,
            stored_fields: List,
            version: Int,
            version_type: Str,
        },
    }

    /// Retrieves only the source of a document.
    GetSource(GET_SOURCE) => "get_source", GET "/{index}/_source/{id}" {
        required: [index, id],
        optional: [],
        params: {
            source => "_source": List,
            source_excludes => "_source_excludes": List,
            source_includes => "_source_includes": List,
            preference: Str,
            realtime: Bool,
            refresh: Bool,
            routing: Str,
            version: Int,
            version_type: Str,
        },
    }

    /// Checks whether a document source exists.
    ExistsSource(EXISTS_SOURCE) => "exists_source", HEAD "/{index}/_source/{id}" {
        required: [index, id],
        optional: [],
        params: {
            preference: Str,
            realtime: Bool,
            refresh: Bool,
            routing: Str,
        },
    }

    /// Removes a document by id.
    Delete(DELETE) => "delete", DELETE "/{index}/_doc/{id}" {
        required: [index, id],
        optional: [],
        params: {
            if_primary_term: Int,
            if_seq_no: Int,
            refresh: Str,
            routing: Str,
            timeout: Duration,
            version: Int,
            version_type: Str,
            wait_for_active_shards: Str,
        },
    }

    /// Updates a document with a script or partial document.
    Update(UPDATE) => "update", POST "/{index}/_update/{id}" {
        required: [index, id],
        optional: [],
        params: {
            source => "_source": List,
            source_excludes => "_source_excludes": List,
            source_includes => "_source_includes": List,
            if_primary_term: Int,
            if_seq_no: Int,
            lang: Str,
            refresh: Str,
            require_alias: Bool,
            retry_on_conflict: Int,
            routing: Str,
            timeout: Duration,
            wait_for_active_shards: Str,
        },
    }

    /// Retrieves several documents in one request.
    Mget(MGET) => "mget", POST "/{index?}/_mget" {
        required: [],
        optional: [index],
        params: {
            source => "_source": List,
            source_excludes => "_source_excludes": List,
            source_includes => "_source_includes": List,
            preference: Str,
            realtime: Bool,
            refresh: Bool,
            routing: Str,
            stored_fields: List,
        },
    }

    /// Performs many index, create, update and delete operations in one request.
    Bulk(BULK) => "bulk", POST "/{index?}/_bulk" as NdJson {
        required: [],
        optional: [index],
        params: {
            source => "_source": List,
            source_excludes => "_source_excludes": List,
            source_includes => "_source_includes": List,
            pipeline: Str,
            refresh: Str,
            require_alias: Bool,
            routing: Str,
            timeout: Duration,
            wait_for_active_shards: Str,
        },
    }

    /// Deletes every document matching a query.
    ///
    /// The index part is required but may be empty, which leaves an empty
    /// first path segment.
    DeleteByQuery(DELETE_BY_QUERY) => "delete_by_query", POST "/{index}/{type?}/_delete_by_query" {
        required: [index],
        optional: [doc_type => "type"],
        params: {
            source => "_source": List,
            source_excludes => "_source_excludes": List,
            source_includes => "_source_includes": List,
            allow_no_indices: Bool,
            analyze_wildcard: Bool,
            analyzer: Str,
            conflicts: Str,
            default_operator: Str,
            df: Str,
            expand_wildcards: Str,
            from: Int,
            ignore_unavailable: Bool,
            lenient: Bool,
            max_docs: Int,
            preference: Str,
            q: Str,
            refresh: Bool,
            request_cache: Bool,
            requests_per_second: Int,
            routing: List,
            scroll: Duration,
            scroll_size: Int,
            search_timeout: Duration,
            search_type: Str,
            slices: Slices,
            sort: List,
            stats: List,
            terminate_after: Int,
            timeout: Duration,
            version: Bool,
            wait_for_active_shards: Str,
            wait_for_completion: Bool,
        },
    }

    /// Updates every document matching a query.
    UpdateByQuery(UPDATE_BY_QUERY) => "update_by_query", POST "/{index}/_update_by_query" {
        required: [index],
        optional: [],
        params: {
            allow_no_indices: Bool,
            analyze_wildcard: Bool,
            analyzer: Str,
            conflicts: Str,
            default_operator: Str,
            df: Str,
            expand_wildcards: Str,
            from: Int,
            ignore_unavailable: Bool,
            lenient: Bool,
            max_docs: Int,
            pipeline: Str,
            preference: Str,
            q: Str,
            refresh: Bool,
            request_cache: Bool,
            requests_per_second: Int,
            routing: List,
            scroll: Duration,
            scroll_size: Int,
            search_timeout: Duration,
            search_type: Str,
            slices: Slices,
            sort: List,
            stats: List,
            terminate_after: Int,
            timeout: Duration,
            version: Bool,
            version_type: Bool,
            wait_for_active_shards: Str,
            wait_for_completion: Bool,
        },
    }

    /// Copies documents from one index to another.
    Reindex(REINDEX) => "reindex", POST "/_reindex" {
        required: [],
        optional: [],
        params: {
            max_docs: Int,
            refresh: Bool,
            requests_per_second: Int,
            require_alias: Bool,
            scroll: Duration,
            slices: Slices,
            timeout: Duration,
            wait_for_active_shards: Str,
            wait_for_completion: Bool,
        },
    }

    /// Changes the throttle of a running reindex task.
    ReindexRethrottle(REINDEX_RETHROTTLE) => "reindex_rethrottle", POST "/_reindex/{task_id}/_rethrottle" {
        required: [task_id],
        optional: [],
        params: {
            requests_per_second: Int,
        },
    }

    /// Changes the throttle of a running delete-by-query task.
    DeleteByQueryRethrottle(DELETE_BY_QUERY_RETHROTTLE) => "delete_by_query_rethrottle", POST "/_delete_by_query/{task_id}/_rethrottle" {
        required: [task_id],
        optional: [],
        params: {
            requests_per_second: Int,
        },
    }

    /// Changes the throttle of a running update-by-query task.
    UpdateByQueryRethrottle(UPDATE_BY_QUERY_RETHROTTLE) => "update_by_query_rethrottle", POST "/_update_by_query/{task_id}/_rethrottle" {
        required: [task_id],
        optional: [],
        params: {
            requests_per_second: Int,
        },
    }

    /// Counts the documents matching a query.
    Count(COUNT) => "count", POST "/{index?}/_count" {
        required: [],
        optional: [index],
        params: {
            allow_no_indices: Bool,
            analyze_wildcard: Bool,
            analyzer: Str,
            default_operator: Str,
            df: Str,
            expand_wildcards: Str,
            ignore_throttled: Bool,
            ignore_unavailable: Bool,
            lenient: Bool,
            min_score: Int,
            preference: Str,
            q: Str,
            routing: List,
            terminate_after: Int,
        },
    }

    /// Explains how a document scores against a query.
    Explain(EXPLAIN) => "explain", POST "/{index}/_explain/{id}" {
        required: [index, id],
        optional: [],
        params: {
            source => "_source": List,
            source_excludes => "_source_excludes": List,
            source_includes => "_source_includes": List,
            analyze_wildcard: Bool,
            analyzer: Str,
            default_operator: Str,
            df: Str,
            lenient: Bool,
            preference: Str,
            q: Str,
            routing: Str,
            stored_fields: List,
        },
    }

    /// Returns term statistics for the fields of one document.
    Termvectors(TERMVECTORS) => "termvectors", POST "/{index}/_termvectors/{id?}" {
        required: [index],
        optional: [id],
        params: {
            field_statistics: Bool,
            fields: List,
            offsets: Bool,
            payloads: Bool,
            positions: Bool,
            preference: Str,
            realtime: Bool,
            routing: Str,
            term_statistics: Bool,
            version: Int,
            version_type: Str,
        },
    }

    /// Returns term statistics for several documents.
    Mtermvectors(MTERMVECTORS) => "mtermvectors", POST "/{index?}/_mtermvectors" {
        required: [],
        optional: [index],
        params: {
            field_statistics: Bool,
            fields: List,
            ids: List,
            offsets: Bool,
            payloads: Bool,
            positions: Bool,
            preference: Str,
            realtime: Bool,
            routing: Str,
            term_statistics: Bool,
            version: Int,
            version_type: Str,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert2::{check, let_assert};
    use url::Url;

    use super::*;
    use crate::Slices;

    fn base() -> Url {
        Url::parse("http://localhost:9200").expect("valid url")
    }

    #[test]
    fn delete_by_query_with_empty_index_and_types() {
        let request = DeleteByQuery::new(Vec::<String>::new())
            .doc_type(["t1", "t2"])
            .build(&base())
            .expect("build");
        check!(request.url().path() == "//t1,t2/_delete_by_query");
    }

    #[test]
    fn delete_by_query_options() {
        let request = DeleteByQuery::new(["logs-2024", "logs-2025"])
            .conflicts("proceed")
            .slices(Slices::Auto)
            .scroll(Duration::from_secs(300))
            .wait_for_completion(false)
            .routing(Vec::<String>::new())
            .build(&base())
            .expect("build");
        insta::assert_snapshot!(
            request.url().as_str(),
            @"http://localhost:9200/logs-2024,logs-2025/_delete_by_query?conflicts=proceed&scroll=5m&slices=auto&wait_for_completion=false"
        );
    }

    #[test]
    fn index_with_and_without_id() {
        let request = Index::new("logs").build(&base()).expect("build");
        check!(request.url().path() == "/logs/_doc");

        let request = Index::new("logs")
            .id("a b")
            .refresh("wait_for")
            .build(&base())
            .expect("build");
        check!(request.url().path() == "/logs/_doc/a%20b");
        check!(request.url().query() == Some("refresh=wait_for"));
    }

    #[test]
    fn renamed_source_options() {
        let request = Get::new("logs", "1")
            .source_includes(["message", "@timestamp"])
            .source(["true"])
            .build(&base())
            .expect("build");
        check!(
            request.url().query() == Some("_source=true&_source_includes=message%2C%40timestamp")
        );
    }

    #[test]
    fn bulk_body_is_ndjson() {
        let body = sift_core::to_ndjson([
            serde_json::json!({"index": {"_index": "logs", "_id": "1"}}),
            serde_json::json!({"message": "hello"}),
        ])
        .expect("ndjson");
        let request = Bulk::new()
            .index("logs")
            .refresh("true")
            .body(body)
            .build(&base())
            .expect("build");
        check!(request.header("content-type") == Some("application/x-ndjson"));
        check!(request.url().path() == "/logs/_bulk");
    }

    #[test]
    fn dot_ids_are_rejected() {
        let_assert!(Err(err) = Delete::new("logs", "..").build(&base()));
        check!(err.is_construction());
        let_assert!(Err(err) = Get::new("logs", ".").build(&base()));
        check!(err.is_construction());

        let request = Delete::new("logs", "...").build(&base()).expect("build");
        check!(request.url().path() == "/logs/_doc/...");
    }

    #[test]
    fn exists_uses_head() {
        let request = Exists::new("logs", "1").build(&base()).expect("build");
        check!(*request.method() == http::Method::HEAD);
    }
}
