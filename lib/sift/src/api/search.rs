//! Search, scroll and query-inspection endpoints.

endpoints! {
    /// Runs a search query.
    Search(SEARCH) => "search", POST "/{index?}/{type?}/_search" {
        required: [],
        optional: [index, doc_type => "type"],
        params: {
            source => "_source": List,
            source_excludes => "_source_excludes": List,
            source_includes => "_source_includes": List,
            allow_no_indices: Bool,
            allow_partial_search_results: Bool,
            analyze_wildcard: Bool,
            analyzer: Str,
            batched_reduce_size: Int,
            ccs_minimize_roundtrips: Bool,
            default_operator: Str,
            df: Str,
            docvalue_fields: List,
            expand_wildcards: Str,
            explain: Bool,
            from: Int,
            ignore_throttled: Bool,
            ignore_unavailable: Bool,
            lenient: Bool,
            max_concurrent_shard_requests: Int,
            pre_filter_shard_size: Int,
            preference: Str,
            q: Str,
            request_cache: Bool,
            rest_total_hits_as_int: Bool,
            routing: List,
            scroll: Duration,
            search_type: Str,
            seq_no_primary_term: Bool,
            size: Int,
            sort: List,
            stats: List,
            stored_fields: List,
            suggest_field: Str,
            suggest_mode: Str,
            suggest_size: Int,
            suggest_text: Str,
            terminate_after: Int,
            timeout: Duration,
            track_scores: Bool,
            track_total_hits: Str,
            typed_keys: Bool,
            version: Bool,
        },
    }

    /// Runs several searches in one request.
    Msearch(MSEARCH) => "msearch", POST "/{index?}/_msearch" as NdJson {
        required: [],
        optional: [index],
        params: {
            ccs_minimize_roundtrips: Bool,
            max_concurrent_searches: Int,
            max_concurrent_shard_requests: Int,
            pre_filter_shard_size: Int,
            rest_total_hits_as_int: Bool,
            search_type: Str,
            typed_keys: Bool,
        },
    }

    /// Runs several templated searches in one request.
    MsearchTemplate(MSEARCH_TEMPLATE) => "msearch_template", POST "/{index?}/_msearch/template" as NdJson {
        required: [],
        optional: [index],
        params: {
            ccs_minimize_roundtrips: Bool,
            max_concurrent_searches: Int,
            rest_total_hits_as_int: Bool,
            search_type: Str,
            typed_keys: Bool,
        },
    }

    /// Fetches the next batch of a scrolled search.
    Scroll(SCROLL) => "scroll", POST "/_search/scroll" {
        required: [],
        optional: [],
        params: {
            rest_total_hits_as_int: Bool,
            scroll: Duration,
            scroll_id: Str,
        },
    }

    /// Releases the resources held by one or more scrolls.
    ClearScroll(CLEAR_SCROLL) => "clear_scroll", DELETE "/_search/scroll/{scroll_id?}" {
        required: [],
        optional: [scroll_id],
        params: {},
    }

    /// Lists the shards a search would run against.
    SearchShards(SEARCH_SHARDS) => "search_shards", GET "/{index?}/_search_shards" {
        required: [],
        optional: [index],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            ignore_unavailable: Bool,
            local: Bool,
            preference: Str,
            routing: Str,
        },
    }

    /// Runs a search from a stored or inline template.
    SearchTemplate(SEARCH_TEMPLATE) => "search_template", POST "/{index?}/_search/template" {
        required: [],
        optional: [index],
        params: {
            allow_no_indices: Bool,
            ccs_minimize_roundtrips: Bool,
            expand_wildcards: Str,
            explain: Bool,
            ignore_throttled: Bool,
            ignore_unavailable: Bool,
            preference: Str,
            profile: Bool,
            rest_total_hits_as_int: Bool,
            routing: List,
            scroll: Duration,
            search_type: Str,
            typed_keys: Bool,
        },
    }

    /// Renders a search template without running it.
    RenderSearchTemplate(RENDER_SEARCH_TEMPLATE) => "render_search_template", POST "/_render/template/{id?}" {
        required: [],
        optional: [id],
        params: {},
    }

    /// Describes the capabilities of fields across indices.
    FieldCaps(FIELD_CAPS) => "field_caps", POST "/{index?}/_field_caps" {
        required: [],
        optional: [index],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            fields: List,
            ignore_unavailable: Bool,
            include_unmapped: Bool,
        },
    }

    /// Validates a query without running it.
    ValidateQuery(VALIDATE_QUERY) => "indices.validate_query", POST "/{index?}/_validate/query" {
        required: [],
        optional: [index],
        params: {
            all_shards: Bool,
            allow_no_indices: Bool,
            analyze_wildcard: Bool,
            analyzer: Str,
            default_operator: Str,
            df: Str,
            expand_wildcards: Str,
            explain: Bool,
            ignore_unavailable: Bool,
            lenient: Bool,
            q: Str,
            rewrite: Bool,
        },
    }

    /// Evaluates ranking quality against rated documents.
    RankEval(RANK_EVAL) => "rank_eval", POST "/{index?}/_rank_eval" {
        required: [],
        optional: [index],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            ignore_unavailable: Bool,
            search_type: Str,
        },
    }

    /// Opens a point in time for consistent paging.
    OpenPointInTime(OPEN_POINT_IN_TIME) => "open_point_in_time", POST "/{index}/_pit" {
        required: [index],
        optional: [],
        params: {
            expand_wildcards: Str,
            ignore_unavailable: Bool,
            keep_alive: Duration,
            preference: Str,
            routing: Str,
        },
    }

    /// Closes a point in time.
    ClosePointInTime(CLOSE_POINT_IN_TIME) => "close_point_in_time", DELETE "/_pit" {
        required: [],
        optional: [],
        params: {},
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
    fn size_unset_versus_zero() {
        let unset = Search::new()
            .index(["a", "b"])
            .build(&base())
            .expect("build");
        check!(unset.url().as_str() == "http://localhost:9200/a,b/_search");

        let zero = Search::new()
            .index(["a", "b"])
            .size(0)
            .build(&base())
            .expect("build");
        check!(zero.url().as_str() == "http://localhost:9200/a,b/_search?size=0");
    }

    #[test]
    fn search_all_indices() {
        let request = Search::new()
            .q("status:500")
            .allow_partial_search_results(false)
            .scroll(Duration::from_secs(90))
            .build(&base())
            .expect("build");
        insta::assert_snapshot!(
            request.url().as_str(),
            @"http://localhost:9200/_search?allow_partial_search_results=false&q=status%3A500&scroll=90s"
        );
    }

    #[test]
    fn universal_options_on_every_builder() {
        let request = Scroll::new()
            .scroll(Duration::from_secs(60))
            .pretty(true)
            .filter_path(["_scroll_id", "hits.hits._id"])
            .build(&base())
            .expect("build");
        check!(
            request.url().query()
                == Some("filter_path=_scroll_id%2Chits.hits._id&pretty=true&scroll=1m")
        );
    }

    #[test]
    fn clear_scroll_by_id() {
        let request = ClearScroll::new()
            .scroll_id("DXF1ZXJ5QW5kRmV0Y2gBAAAAAAAAAD4WYm9laVYtZndUQlNsdDcwakFMNjU1QQ==")
            .build(&base())
            .expect("build");
        check!(
            request.url().path()
                == "/_search/scroll/DXF1ZXJ5QW5kRmV0Y2gBAAAAAAAAAD4WYm9laVYtZndUQlNsdDcwakFMNjU1QQ=="
        );
    }
}
