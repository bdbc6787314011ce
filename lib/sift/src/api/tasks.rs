//! Task management endpoints.

endpoints! {
    /// Lists tasks running on the cluster.
    List(LIST) => "tasks.list", GET "/_tasks" {
        required: [],
        optional: [],
        params: {
            actions: List,
            detailed: Bool,
            group_by: Str,
            nodes: List,
            parent_task_id: Str,
            timeout: Duration,
            wait_for_completion: Bool,
        },
    }

    /// Returns one task.
    Get(GET) => "tasks.get", GET "/_tasks/{task_id}" {
        required: [task_id],
        optional: [],
        params: {
            timeout: Duration,
            wait_for_completion: Bool,
        },
    }

    /// Cancels one task, or every task matching the filters.
    Cancel(CANCEL) => "tasks.cancel", POST "/_tasks/{task_id?}/_cancel" {
        required: [],
        optional: [task_id],
        params: {
            actions: List,
            nodes: List,
            parent_task_id: Str,
            wait_for_completion: Bool,
        },
    }
}
