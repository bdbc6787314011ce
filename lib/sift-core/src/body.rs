//! Body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Content type sent with a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    #[default]
    Json,
    /// Newline-delimited JSON (`application/x-ndjson`), used by bulk-style endpoints.
    NdJson,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::NdJson => "application/x-ndjson",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize a value to JSON bytes.
///
/// # Example
///
/// ```
/// use sift_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Query { size: u32 }
///
/// let bytes = to_json(&Query { size: 0 }).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"size":0}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Serialize a sequence of values as newline-delimited JSON.
///
/// Every line, including the last, is terminated by `\n`.
pub fn to_ndjson<T, I>(values: I) -> Result<Bytes>
where
    T: serde::Serialize,
    I: IntoIterator<Item = T>,
{
    let mut buffer = Vec::new();
    for value in values {
        serde_json::to_writer(&mut buffer, &value)?;
        buffer.push(b'\n');
    }
    Ok(Bytes::from(buffer))
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// # Example
///
/// ```
/// use sift_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Count { count: u64 }
///
/// let count: Count = from_json(br#"{"count":3}"#).expect("deserialize");
/// assert_eq!(count, Count { count: 3 });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_as_str() {
        assert_eq!(ContentType::Json.as_str(), "application/json");
        assert_eq!(ContentType::NdJson.as_str(), "application/x-ndjson");
        assert_eq!(ContentType::default(), ContentType::Json);
    }

    #[test]
    fn ndjson_lines() {
        let lines = vec![
            serde_json::json!({"index": {"_id": "1"}}),
            serde_json::json!({"title": "one"}),
        ];
        let bytes = to_ndjson(lines).expect("serialize");
        assert_eq!(
            bytes.as_ref(),
            b"{\"index\":{\"_id\":\"1\"}}\n{\"title\":\"one\"}\n"
        );
    }

    #[test]
    fn ndjson_empty() {
        let bytes = to_ndjson(Vec::<serde_json::Value>::new()).expect("serialize");
        assert!(bytes.is_empty());
    }

    #[test]
    fn from_json_reports_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Shards {
            #[allow(dead_code)]
            total: u32,
        }

        #[derive(Debug, serde::Deserialize)]
        struct Reply {
            #[allow(dead_code)]
            _shards: Shards,
        }

        let result: Result<Reply> = from_json(br#"{"_shards":{"total":"many"}}"#);
        let err = result.expect_err("should fail");
        let msg = err.to_string();
        assert!(msg.contains("_shards.total"), "unexpected message: {msg}");
    }
}
