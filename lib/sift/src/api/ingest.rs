//! Ingest pipeline endpoints.

endpoints! {
    /// Creates or replaces a pipeline.
    PutPipeline(PUT_PIPELINE) => "ingest.put_pipeline", PUT "/_ingest/pipeline/{id}" {
        required: [id],
        optional: [],
        params: {
            if_version: Int,
            master_timeout: Duration,
            timeout: Duration,
        },
    }

    /// Returns pipelines.
    GetPipeline(GET_PIPELINE) => "ingest.get_pipeline", GET "/_ingest/pipeline/{id?}" {
        required: [],
        optional: [id],
        params: {
            master_timeout: Duration,
            summary: Bool,
        },
    }

    /// Deletes a pipeline.
    DeletePipeline(DELETE_PIPELINE) => "ingest.delete_pipeline", DELETE "/_ingest/pipeline/{id}" {
        required: [id],
        optional: [],
        params: {
            master_timeout: Duration,
            timeout: Duration,
        },
    }

    /// Runs documents through a pipeline without indexing them.
    Simulate(SIMULATE) => "ingest.simulate", POST "/_ingest/pipeline/{id?}/_simulate" {
        required: [],
        optional: [id],
        params: {
            verbose: Bool,
        },
    }

    /// Lists the patterns known to the grok processor.
    ProcessorGrok(PROCESSOR_GROK) => "ingest.processor_grok", GET "/_ingest/processor/grok" {
        required: [],
        optional: [],
        params: {},
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use url::Url;

    use super::*;

    #[test]
    fn simulate_with_and_without_id() {
        let base = Url::parse("http://localhost:9200").expect("valid url");

        let request = Simulate::new().verbose(true).build(&base).expect("build");
        check!(request.url().as_str() == "http://localhost:9200/_ingest/pipeline/_simulate?verbose=true");

        let request = Simulate::new().id("geoip").build(&base).expect("build");
        check!(request.url().path() == "/_ingest/pipeline/geoip/_simulate");
    }
}
