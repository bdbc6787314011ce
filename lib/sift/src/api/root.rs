//! Cluster identity, liveness and stored scripts.

endpoints! {
    /// Returns basic information about the cluster.
    Info(INFO) => "info", GET "/" {
        required: [],
        optional: [],
        params: {},
    }

    /// Checks that the cluster answers.
    Ping(PING) => "ping", HEAD "/" {
        required: [],
        optional: [],
        params: {},
    }

    /// Stores a script.
    PutScript(PUT_SCRIPT) => "put_script", PUT "/_scripts/{id}/{context?}" {
        required: [id],
        optional: [context],
        params: {
            master_timeout: Duration,
            timeout: Duration,
        },
    }

    /// Returns a stored script.
    GetScript(GET_SCRIPT) => "get_script", GET "/_scripts/{id}" {
        required: [id],
        optional: [],
        params: {
            master_timeout: Duration,
        },
    }

    /// Deletes a stored script.
    DeleteScript(DELETE_SCRIPT) => "delete_script", DELETE "/_scripts/{id}" {
        required: [id],
        optional: [],
        params: {
            master_timeout: Duration,
            timeout: Duration,
        },
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use url::Url;

    use super::*;

    #[test]
    fn ping_targets_the_root() {
        let request = Ping::new()
            .build(&Url::parse("http://localhost:9200").expect("valid url"))
            .expect("build");
        check!(*request.method() == http::Method::HEAD);
        check!(request.url().as_str() == "http://localhost:9200/");
    }

    #[test]
    fn root_under_a_path_prefix() {
        let request = Info::new()
            .build(&Url::parse("https://proxy.internal/es").expect("valid url"))
            .expect("build");
        check!(request.url().as_str() == "https://proxy.internal/es/");
    }
}
