//! Index management endpoints.

endpoints! {
    /// Creates an index with optional settings and mappings.
    Create(CREATE) => "indices.create", PUT "/{index}" {
        required: [index],
        optional: [],
        params: {
            include_type_name: Bool,
            master_timeout: Duration,
            timeout: Duration,
            wait_for_active_shards: Str,
        },
    }

    /// Deletes one or more indices.
    Delete(DELETE) => "indices.delete", DELETE "/{index}" {
        required: [index],
        optional: [],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            ignore_unavailable: Bool,
            master_timeout: Duration,
            timeout: Duration,
        },
    }

    /// Checks whether indices exist.
    Exists(EXISTS) => "indices.exists", HEAD "/{index}" {
        required: [index],
        optional: [],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            flat_settings: Bool,
            ignore_unavailable: Bool,
            include_defaults: Bool,
            local: Bool,
        },
    }

    /// Returns settings, mappings and aliases of indices.
    Get(GET) => "indices.get", GET "/{index}" {
        required: [index],
        optional: [],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            flat_settings: Bool,
            ignore_unavailable: Bool,
            include_defaults: Bool,
            local: Bool,
            master_timeout: Duration,
        },
    }

    /// Returns index mappings.
    GetMapping(GET_MAPPING) => "indices.get_mapping", GET "/{index?}/_mapping" {
        required: [],
        optional: [index],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            ignore_unavailable: Bool,
            local: Bool,
            master_timeout: Duration,
        },
    }

    /// Returns the mapping of specific fields.
    GetFieldMapping(GET_FIELD_MAPPING) => "indices.get_field_mapping", GET "/{index?}/_mapping/field/{fields}" {
        required: [fields],
        optional: [index],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            ignore_unavailable: Bool,
            include_defaults: Bool,
            local: Bool,
        },
    }

    /// Adds fields to an existing mapping.
    PutMapping(PUT_MAPPING) => "indices.put_mapping", PUT "/{index}/_mapping" {
        required: [index],
        optional: [],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            ignore_unavailable: Bool,
            master_timeout: Duration,
            timeout: Duration,
            write_index_only: Bool,
        },
    }

    /// Returns index settings.
    GetSettings(GET_SETTINGS) => "indices.get_settings", GET "/{index?}/_settings/{name?}" {
        required: [],
        optional: [index, name],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            flat_settings: Bool,
            ignore_unavailable: Bool,
            include_defaults: Bool,
            local: Bool,
            master_timeout: Duration,
        },
    }

    /// Updates dynamic index settings.
    PutSettings(PUT_SETTINGS) => "indices.put_settings", PUT "/{index?}/_settings" {
        required: [],
        optional: [index],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            flat_settings: Bool,
            ignore_unavailable: Bool,
            master_timeout: Duration,
            preserve_existing: Bool,
            timeout: Duration,
        },
    }

    /// Makes recent writes visible to search.
    Refresh(REFRESH) => "indices.refresh", POST "/{index?}/_refresh" {
        required: [],
        optional: [index],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            ignore_unavailable: Bool,
        },
    }

    /// Flushes indices to durable storage.
    Flush(FLUSH) => "indices.flush", POST "/{index?}/_flush" {
        required: [],
        optional: [index],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            force: Bool,
            ignore_unavailable: Bool,
            wait_if_ongoing: Bool,
        },
    }

    /// Merges index segments.
    Forcemerge(FORCEMERGE) => "indices.forcemerge", POST "/{index?}/_forcemerge" {
        required: [],
        optional: [index],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            flush: Bool,
            ignore_unavailable: Bool,
            max_num_segments: Int,
            only_expunge_deletes: Bool,
        },
    }

    /// Opens closed indices.
    Open(OPEN) => "indices.open", POST "/{index}/_open" {
        required: [index],
        optional: [],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            ignore_unavailable: Bool,
            master_timeout: Duration,
            timeout: Duration,
            wait_for_active_shards: Str,
        },
    }

    /// Closes indices.
    Close(CLOSE) => "indices.close", POST "/{index}/_close" {
        required: [index],
        optional: [],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            ignore_unavailable: Bool,
            master_timeout: Duration,
            timeout: Duration,
            wait_for_active_shards: Str,
        },
    }

    /// Adds an alias to indices.
    PutAlias(PUT_ALIAS) => "indices.put_alias", PUT "/{index}/_alias/{name}" {
        required: [index, name],
        optional: [],
        params: {
            master_timeout: Duration,
            timeout: Duration,
        },
    }

    /// Removes an alias from indices.
    DeleteAlias(DELETE_ALIAS) => "indices.delete_alias", DELETE "/{index}/_alias/{name}" {
        required: [index, name],
        optional: [],
        params: {
            master_timeout: Duration,
            timeout: Duration,
        },
    }

    /// Returns aliases.
    GetAlias(GET_ALIAS) => "indices.get_alias", GET "/{index?}/_alias/{name?}" {
        required: [],
        optional: [index, name],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            ignore_unavailable: Bool,
            local: Bool,
        },
    }

    /// Checks whether aliases exist.
    ExistsAlias(EXISTS_ALIAS) => "indices.exists_alias", HEAD "/{index?}/_alias/{name}" {
        required: [name],
        optional: [index],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            ignore_unavailable: Bool,
            local: Bool,
        },
    }

    /// Applies several alias actions atomically.
    UpdateAliases(UPDATE_ALIASES) => "indices.update_aliases", POST "/_aliases" {
        required: [],
        optional: [],
        params: {
            master_timeout: Duration,
            timeout: Duration,
        },
    }

    /// Runs text through an analyzer.
    Analyze(ANALYZE) => "indices.analyze", POST "/{index?}/_analyze" {
        required: [],
        optional: [index],
        params: {},
    }

    /// Returns index statistics.
    Stats(STATS) => "indices.stats", GET "/{index?}/_stats/{metric?}" {
        required: [],
        optional: [index, metric],
        params: {
            completion_fields: List,
            expand_wildcards: Str,
            fielddata_fields: List,
            fields: List,
            forbid_closed_indices: Bool,
            groups: List,
            include_segment_file_sizes: Bool,
            include_unloaded_segments: Bool,
            level: Str,
        },
    }

    /// Returns low-level segment information.
    Segments(SEGMENTS) => "indices.segments", GET "/{index?}/_segments" {
        required: [],
        optional: [index],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            ignore_unavailable: Bool,
            verbose: Bool,
        },
    }

    /// Returns shard recovery progress.
    Recovery(RECOVERY) => "indices.recovery", GET "/{index?}/_recovery" {
        required: [],
        optional: [index],
        params: {
            active_only: Bool,
            detailed: Bool,
        },
    }

    /// Returns store information about shard copies.
    ShardStores(SHARD_STORES) => "indices.shard_stores", GET "/{index?}/_shard_stores" {
        required: [],
        optional: [index],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            ignore_unavailable: Bool,
            status: List,
        },
    }

    /// Rolls an alias or data stream over to a new index.
    Rollover(ROLLOVER) => "indices.rollover", POST "/{alias}/_rollover/{new_index?}" {
        required: [alias],
        optional: [new_index],
        params: {
            dry_run: Bool,
            master_timeout: Duration,
            timeout: Duration,
            wait_for_active_shards: Str,
        },
    }

    /// Shrinks an index into fewer primary shards.
    Shrink(SHRINK) => "indices.shrink", PUT "/{index}/_shrink/{target}" {
        required: [index, target],
        optional: [],
        params: {
            master_timeout: Duration,
            timeout: Duration,
            wait_for_active_shards: Str,
        },
    }

    /// Splits an index into more primary shards.
    Split(SPLIT) => "indices.split", PUT "/{index}/_split/{target}" {
        required: [index, target],
        optional: [],
        params: {
            master_timeout: Duration,
            timeout: Duration,
            wait_for_active_shards: Str,
        },
    }

    /// Clones an index.
    CloneIndex(CLONE) => "indices.clone", PUT "/{index}/_clone/{target}" {
        required: [index, target],
        optional: [],
        params: {
            master_timeout: Duration,
            timeout: Duration,
            wait_for_active_shards: Str,
        },
    }

    /// Resolves names and patterns to indices, aliases and data streams.
    ResolveIndex(RESOLVE_INDEX) => "indices.resolve_index", GET "/_resolve/index/{name}" {
        required: [name],
        optional: [],
        params: {
            expand_wildcards: Str,
        },
    }

    /// Creates or updates a composable index template.
    PutIndexTemplate(PUT_INDEX_TEMPLATE) => "indices.put_index_template", PUT "/_index_template/{name}" {
        required: [name],
        optional: [],
        params: {
            cause: Str,
            create: Bool,
            master_timeout: Duration,
        },
    }

    /// Returns composable index templates.
    GetIndexTemplate(GET_INDEX_TEMPLATE) => "indices.get_index_template", GET "/_index_template/{name?}" {
        required: [],
        optional: [name],
        params: {
            flat_settings: Bool,
            local: Bool,
            master_timeout: Duration,
        },
    }

    /// Checks whether a composable index template exists.
    ExistsIndexTemplate(EXISTS_INDEX_TEMPLATE) => "indices.exists_index_template", HEAD "/_index_template/{name}" {
        required: [name],
        optional: [],
        params: {
            flat_settings: Bool,
            local: Bool,
            master_timeout: Duration,
        },
    }

    /// Deletes a composable index template.
    DeleteIndexTemplate(DELETE_INDEX_TEMPLATE) => "indices.delete_index_template", DELETE "/_index_template/{name}" {
        required: [name],
        optional: [],
        params: {
            master_timeout: Duration,
            timeout: Duration,
        },
    }

    /// Creates or updates a legacy index template.
    PutTemplate(PUT_TEMPLATE) => "indices.put_template", PUT "/_template/{name}" {
        required: [name],
        optional: [],
        params: {
            create: Bool,
            master_timeout: Duration,
            order: Int,
        },
    }

    /// Returns legacy index templates.
    GetTemplate(GET_TEMPLATE) => "indices.get_template", GET "/_template/{name?}" {
        required: [],
        optional: [name],
        params: {
            flat_settings: Bool,
            local: Bool,
            master_timeout: Duration,
        },
    }

    /// Deletes a legacy index template.
    DeleteTemplate(DELETE_TEMPLATE) => "indices.delete_template", DELETE "/_template/{name}" {
        required: [name],
        optional: [],
        params: {
            master_timeout: Duration,
            timeout: Duration,
        },
    }

    /// Clears index caches.
    ClearCache(CLEAR_CACHE) => "indices.clear_cache", POST "/{index?}/_cache/clear" {
        required: [],
        optional: [index],
        params: {
            allow_no_indices: Bool,
            expand_wildcards: Str,
            fielddata: Bool,
            fields: List,
            ignore_unavailable: Bool,
            query_cache => "query": Bool,
            request_cache => "request": Bool,
        },
    }

    /// Creates a data stream.
    CreateDataStream(CREATE_DATA_STREAM) => "indices.create_data_stream", PUT "/_data_stream/{name}" {
        required: [name],
        optional: [],
        params: {},
    }

    /// Returns data streams.
    GetDataStream(GET_DATA_STREAM) => "indices.get_data_stream", GET "/_data_stream/{name?}" {
        required: [],
        optional: [name],
        params: {
            expand_wildcards: Str,
        },
    }

    /// Deletes data streams.
    DeleteDataStream(DELETE_DATA_STREAM) => "indices.delete_data_stream", DELETE "/_data_stream/{name}" {
        required: [name],
        optional: [],
        params: {
            expand_wildcards: Str,
        },
    }
}
