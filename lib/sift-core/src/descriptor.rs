//! Static endpoint metadata.
//!
//! An [`EndpointDescriptor`] names one remote operation: its HTTP method, its
//! [`PathTemplate`] and the query parameters it recognizes. Descriptors are
//! declared once as `static` items and shared by every request built for them.

use std::fmt;

use http::Method;

use crate::{ContentType, Error, Result};

/// Value type of a recognized query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// `true` / `false`.
    Bool,
    /// Signed integer.
    Int,
    /// Time value with unit suffix.
    Duration,
    /// Free-form string, including enumerated tokens such as `wait_for`.
    Str,
    /// List of strings, comma-joined.
    List,
    /// Slice count: an integer or `auto`.
    Slices,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "boolean"),
            Self::Int => write!(f, "integer"),
            Self::Duration => write!(f, "duration"),
            Self::Str => write!(f, "string"),
            Self::List => write!(f, "list"),
            Self::Slices => write!(f, "slices"),
        }
    }
}

/// A recognized query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Name as sent on the wire.
    pub name: &'static str,
    /// Value type.
    pub kind: ParamKind,
}

impl ParamSpec {
    /// Declare a parameter.
    #[must_use]
    pub const fn new(name: &'static str, kind: ParamKind) -> Self {
        Self { name, kind }
    }
}

/// Parameters accepted by every endpoint.
pub static UNIVERSAL_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("error_trace", ParamKind::Bool),
    ParamSpec::new("filter_path", ParamKind::List),
    ParamSpec::new("human", ParamKind::Bool),
    ParamSpec::new("pretty", ParamKind::Bool),
];

/// One segment of a [`PathTemplate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Fixed text, written as-is.
    Literal(&'a str),
    /// A named path part.
    Part {
        /// Part name, as used on the request.
        name: &'a str,
        /// Optional parts are dropped when empty; required parts are always written.
        optional: bool,
    },
}

/// A URL path template such as `/{index}/{type?}/_delete_by_query`.
///
/// Segments are separated by `/`. `{name}` is a required part, written even
/// when its value is empty; `{name?}` is an optional part, written only when
/// non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathTemplate(&'static str);

impl PathTemplate {
    /// Create a new path template.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// Get the template string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Parse the template into segments.
    pub fn segments(&self) -> Result<Vec<Segment<'static>>> {
        self.0
            .split('/')
            .filter(|raw| !raw.is_empty())
            .map(|raw| self.parse_segment(raw))
            .collect()
    }

    /// Names of all parts the template declares.
    pub fn part_names(&self) -> Result<Vec<&'static str>> {
        Ok(self
            .segments()?
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Part { name, .. } => Some(name),
                Segment::Literal(_) => None,
            })
            .collect())
    }

    fn parse_segment(&self, raw: &'static str) -> Result<Segment<'static>> {
        let malformed = || Error::invalid_request(format!("malformed path template `{}`", self.0));

        match raw.strip_prefix('{') {
            Some(rest) => {
                let inner = rest.strip_suffix('}').ok_or_else(malformed)?;
                let (name, optional) = match inner.strip_suffix('?') {
                    Some(name) => (name, true),
                    None => (inner, false),
                };
                if name.is_empty() || name.contains(['{', '}', '?']) {
                    return Err(malformed());
                }
                Ok(Segment::Part { name, optional })
            }
            None if raw.contains(['{', '}']) => Err(malformed()),
            None => Ok(Segment::Literal(raw)),
        }
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Static metadata for one endpoint.
#[derive(Debug)]
pub struct EndpointDescriptor {
    /// Dotted operation name, e.g. `indices.put_mapping`.
    pub name: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Path template.
    pub path: PathTemplate,
    /// Endpoint-specific query parameters.
    pub params: &'static [ParamSpec],
    /// Content type sent when the request carries a body.
    pub content_type: ContentType,
}

impl EndpointDescriptor {
    /// Look up a recognized parameter, endpoint-specific first, then universal.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&'static ParamSpec> {
        self.params
            .iter()
            .chain(UNIVERSAL_PARAMS)
            .find(|spec| spec.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_and_optional_parts() {
        let template = PathTemplate::new("/{index}/{type?}/_delete_by_query");
        let segments = template.segments().expect("valid template");
        assert_eq!(
            segments,
            vec![
                Segment::Part {
                    name: "index",
                    optional: false
                },
                Segment::Part {
                    name: "type",
                    optional: true
                },
                Segment::Literal("_delete_by_query"),
            ]
        );
        assert_eq!(
            template.part_names().expect("valid template"),
            vec!["index", "type"]
        );
    }

    #[test]
    fn root_template_has_no_segments() {
        let template = PathTemplate::new("/");
        assert!(template.segments().expect("valid template").is_empty());
    }

    #[test]
    fn rejects_malformed_placeholders() {
        for raw in ["/{index", "/index}", "/{}", "/{?}", "/_doc{id}", "/{a{b}}"] {
            let template = PathTemplate::new(raw);
            let err = template.segments().expect_err(raw);
            assert!(err.is_construction(), "{raw}: {err}");
        }
    }

    #[test]
    fn param_lookup_includes_universal() {
        static PARAMS: &[ParamSpec] = &[ParamSpec::new("size", ParamKind::Int)];
        static DESCRIPTOR: EndpointDescriptor = EndpointDescriptor {
            name: "search",
            method: Method::POST,
            path: PathTemplate::new("/{index?}/_search"),
            params: PARAMS,
            content_type: ContentType::Json,
        };

        assert_eq!(
            DESCRIPTOR.param("size").map(|spec| spec.kind),
            Some(ParamKind::Int)
        );
        assert_eq!(
            DESCRIPTOR.param("filter_path").map(|spec| spec.kind),
            Some(ParamKind::List)
        );
        assert!(DESCRIPTOR.param("sizee").is_none());
    }

    #[test]
    fn param_kind_display() {
        assert_eq!(ParamKind::Bool.to_string(), "boolean");
        assert_eq!(ParamKind::Slices.to_string(), "slices");
    }
}
