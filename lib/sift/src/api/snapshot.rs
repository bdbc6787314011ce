//! Snapshot and restore endpoints.

endpoints! {
    /// Registers a snapshot repository.
    CreateRepository(CREATE_REPOSITORY) => "snapshot.create_repository", PUT "/_snapshot/{repository}" {
        required: [repository],
        optional: [],
        params: {
            master_timeout: Duration,
            timeout: Duration,
            verify: Bool,
        },
    }

    /// Returns snapshot repositories.
    GetRepository(GET_REPOSITORY) => "snapshot.get_repository", GET "/_snapshot/{repository?}" {
        required: [],
        optional: [repository],
        params: {
            local: Bool,
            master_timeout: Duration,
        },
    }

    /// Unregisters a snapshot repository.
    DeleteRepository(DELETE_REPOSITORY) => "snapshot.delete_repository", DELETE "/_snapshot/{repository}" {
        required: [repository],
        optional: [],
        params: {
            master_timeout: Duration,
            timeout: Duration,
        },
    }

    /// Checks that every node can reach a repository.
    VerifyRepository(VERIFY_REPOSITORY) => "snapshot.verify_repository", POST "/_snapshot/{repository}/_verify" {
        required: [repository],
        optional: [],
        params: {
            master_timeout: Duration,
            timeout: Duration,
        },
    }

    /// Removes stale data from a repository.
    CleanupRepository(CLEANUP_REPOSITORY) => "snapshot.cleanup_repository", POST "/_snapshot/{repository}/_cleanup" {
        required: [repository],
        optional: [],
        params: {
            master_timeout: Duration,
            timeout: Duration,
        },
    }

    /// Takes a snapshot.
    Create(CREATE) => "snapshot.create", PUT "/_snapshot/{repository}/{snapshot}" {
        required: [repository, snapshot],
        optional: [],
        params: {
            master_timeout: Duration,
            wait_for_completion: Bool,
        },
    }

    /// Returns snapshot information.
    Get(GET) => "snapshot.get", GET "/_snapshot/{repository}/{snapshot}" {
        required: [repository, snapshot],
        optional: [],
        params: {
            ignore_unavailable: Bool,
            include_repository: Bool,
            index_details: Bool,
            master_timeout: Duration,
            verbose: Bool,
        },
    }

    /// Returns the detailed status of running snapshots.
    Status(STATUS) => "snapshot.status", GET "/_snapshot/{repository?}/{snapshot?}/_status" {
        required: [],
        optional: [repository, snapshot],
        params: {
            ignore_unavailable: Bool,
            master_timeout: Duration,
        },
    }

    /// Restores a snapshot.
    Restore(RESTORE) => "snapshot.restore", POST "/_snapshot/{repository}/{snapshot}/_restore" {
        required: [repository, snapshot],
        optional: [],
        params: {
            master_timeout: Duration,
            wait_for_completion: Bool,
        },
    }

    /// Clones indices from one snapshot into another.
    CloneSnapshot(CLONE) => "snapshot.clone", PUT "/_snapshot/{repository}/{snapshot}/_clone/{target_snapshot}" {
        required: [repository, snapshot, target_snapshot],
        optional: [],
        params: {
            master_timeout: Duration,
        },
    }

    /// Deletes snapshots.
    Delete(DELETE) => "snapshot.delete", DELETE "/_snapshot/{repository}/{snapshot}" {
        required: [repository, snapshot],
        optional: [],
        params: {
            master_timeout: Duration,
        },
    }
}
