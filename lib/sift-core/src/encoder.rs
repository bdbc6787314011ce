//! Parameter encoding.
//!
//! Turns a descriptor plus the caller's settings into a canonical path and a
//! sparse query map. Pure: no I/O, same inputs always give the same output.

use std::collections::{BTreeMap, BTreeSet};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::{
    EndpointDescriptor, Error, ParamValue, PathTemplate, PathValue, RequestParts, Result, Segment,
};

/// Characters escaped inside a single path segment.
///
/// Everything outside the unreserved set that could change how the path is
/// split or parsed. `,` is left alone: it separates names in list parts.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%')
    .add(b'^')
    .add(b'|')
    .add(b'[')
    .add(b']');

/// Output of [`encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Absolute path, always starting with `/`.
    pub path: String,
    /// Query parameters, keyed and ordered by name.
    pub query: BTreeMap<String, String>,
}

/// Encode the path and query string for a request.
pub fn encode(descriptor: &EndpointDescriptor, parts: &RequestParts) -> Result<Encoded> {
    Ok(Encoded {
        path: encode_path(&descriptor.path, parts.path_parts())?,
        query: encode_query(descriptor, parts.params())?,
    })
}

/// Escape one path segment.
#[must_use]
pub fn escape_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}

fn render_part(name: &str, value: &PathValue) -> Result<String> {
    let names: &[String] = match value {
        PathValue::One(value) => std::slice::from_ref(value),
        PathValue::Many(values) => values,
    };
    if let Some(dot) = names.iter().find(|segment| is_dot_segment(segment)) {
        return Err(Error::invalid_request(format!(
            "path part `{name}` cannot be `{dot}`"
        )));
    }
    Ok(names
        .iter()
        .map(|value| escape_segment(value))
        .collect::<Vec<_>>()
        .join(","))
}

// URL parsers collapse these, which would retarget the request.
fn is_dot_segment(value: &str) -> bool {
    value == "." || value == ".."
}

/// Substitute path parts into a template.
///
/// Required parts are always written, so an empty required part leaves an
/// empty segment (`//`). Optional parts are skipped when empty. A part that
/// the template does not declare is rejected, and so is a name equal to `.`
/// or `..`.
pub fn encode_path(template: &PathTemplate, parts: &BTreeMap<String, PathValue>) -> Result<String> {
    let segments = template.segments()?;

    let declared: BTreeSet<&str> = segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Part { name, .. } => Some(*name),
            Segment::Literal(_) => None,
        })
        .collect();
    if let Some(unknown) = parts.keys().find(|name| !declared.contains(name.as_str())) {
        return Err(Error::invalid_request(format!(
            "path part `{unknown}` is not used by `{template}`"
        )));
    }

    let mut path = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                path.push('/');
                path.push_str(text);
            }
            Segment::Part { name, optional } => {
                let value = parts.get(name).filter(|value| !value.is_empty());
                if optional && value.is_none() {
                    continue;
                }
                path.push('/');
                if let Some(value) = value {
                    path.push_str(&render_part(name, value)?);
                }
            }
        }
    }

    if path.is_empty() {
        path.push('/');
    }
    Ok(path)
}

/// Render the set options into a sparse query map.
///
/// Unset options never appear. An empty list is treated as unset. Every set
/// option must be recognized by the endpoint (or be universal) and hold a
/// value of the declared kind.
pub fn encode_query(
    descriptor: &EndpointDescriptor,
    params: &BTreeMap<String, ParamValue>,
) -> Result<BTreeMap<String, String>> {
    let mut query = BTreeMap::new();
    for (name, value) in params {
        let spec = descriptor.param(name).ok_or_else(|| {
            Error::invalid_request(format!(
                "unrecognized parameter `{name}` for `{}`",
                descriptor.name
            ))
        })?;
        if spec.kind != value.kind() {
            return Err(Error::invalid_request(format!(
                "parameter `{name}` of `{}` expects a value of kind {}, got {}",
                descriptor.name,
                spec.kind,
                value.kind()
            )));
        }
        if let Some(rendered) = value.render() {
            query.insert(name.clone(), rendered);
        }
    }
    Ok(query)
}
