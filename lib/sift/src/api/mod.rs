//! Typed request builders, one per endpoint.
//!
//! Each namespace module declares its endpoints in a table: the static
//! [`EndpointDescriptor`] and a builder type whose constructor takes the
//! required path parts and whose setters are typed per option.
//!
//! ```ignore
//! use sift::api::search::Search;
//!
//! let response = Search::new()
//!     .index(["logs", "metrics"])
//!     .size(0)
//!     .track_total_hits("true")
//!     .json(&query)?
//!     .send(&client)
//!     .await?;
//! ```

use sift_core::EndpointDescriptor;

/// Wire name of a part or option: the identifier itself unless renamed.
macro_rules! wire_name {
    ($ident:ident) => {
        stringify!($ident)
    };
    ($ident:ident, $wire:literal) => {
        $wire
    };
}

macro_rules! content_type {
    () => {
        $crate::ContentType::Json
    };
    ($ct:ident) => {
        $crate::ContentType::$ct
    };
}

/// Setter for an optional path part.
macro_rules! part_setter {
    ($fn:ident => $wire:literal) => {
        part_setter!(@emit $fn [$wire]);
    };
    ($fn:ident) => {
        part_setter!(@emit $fn [stringify!($fn)]);
    };
    (@emit $fn:ident [$($wire:tt)+]) => {
        #[doc = concat!("Sets the optional `", $($wire)+, "` path part.")]
        pub fn $fn(self, value: impl Into<$crate::PathValue>) -> Self {
            Self(self.0.part($($wire)+, value))
        }
    };
}

/// Typed setter for a query option.
macro_rules! param_setter {
    ($fn:ident => $wire:literal : $kind:ident) => {
        param_setter!(@emit $kind $fn [$wire]);
    };
    ($fn:ident : $kind:ident) => {
        param_setter!(@emit $kind $fn [stringify!($fn)]);
    };
    (@emit Bool $fn:ident [$($wire:tt)+]) => {
        #[doc = concat!("Sets the `", $($wire)+, "` query parameter.")]
        pub fn $fn(self, value: bool) -> Self {
            Self(self.0.param($($wire)+, value))
        }
    };
    (@emit Int $fn:ident [$($wire:tt)+]) => {
        #[doc = concat!("Sets the `", $($wire)+, "` query parameter.")]
        pub fn $fn(self, value: i64) -> Self {
            Self(self.0.param($($wire)+, value))
        }
    };
    (@emit Duration $fn:ident [$($wire:tt)+]) => {
        #[doc = concat!("Sets the `", $($wire)+, "` query parameter.")]
        pub fn $fn(self, value: std::time::Duration) -> Self {
            Self(self.0.param($($wire)+, value))
        }
    };
    (@emit Str $fn:ident [$($wire:tt)+]) => {
        #[doc = concat!("Sets the `", $($wire)+, "` query parameter.")]
        pub fn $fn(self, value: impl Into<String>) -> Self {
            Self(self.0.param($($wire)+, $crate::ParamValue::Str(value.into())))
        }
    };
    (@emit List $fn:ident [$($wire:tt)+]) => {
        #[doc = concat!("Sets the `", $($wire)+, "` query parameter. An empty list leaves it unset.")]
        pub fn $fn<I, S>(self, values: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self(self.0.param(
                $($wire)+,
                $crate::ParamValue::List(values.into_iter().map(Into::into).collect()),
            ))
        }
    };
    (@emit Slices $fn:ident [$($wire:tt)+]) => {
        #[doc = concat!("Sets the `", $($wire)+, "` query parameter.")]
        pub fn $fn(self, value: impl Into<$crate::Slices>) -> Self {
            Self(self.0.param($($wire)+, $crate::ParamValue::Slices(value.into())))
        }
    };
}

/// Declares a namespace's endpoints.
///
/// ```text
/// /// Doc comment for the builder.
/// Builder(STATIC) => "endpoint.name", METHOD "/{required}/{optional?}/_path" [as NdJson] {
///     required: [required],
///     optional: [optional, renamed => "wire"],
///     params: { flag: Bool, renamed => "_wire": Str },
/// }
/// ```
macro_rules! endpoints {
    (
        $(
            $(#[$meta:meta])*
            $ty:ident($desc:ident) => $name:literal, $method:ident $path:literal $(as $ct:ident)? {
                required: [$($req:ident),* $(,)?],
                optional: [$($part:ident $(=> $part_wire:literal)?),* $(,)?],
                params: { $($param:ident $(=> $param_wire:literal)? : $kind:ident),* $(,)? } $(,)?
            }
        )*
    ) => {
        $(
            #[doc = concat!("Descriptor for `", $name, "`.")]
            pub static $desc: $crate::EndpointDescriptor = $crate::EndpointDescriptor {
                name: $name,
                method: $crate::Method::$method,
                path: $crate::PathTemplate::new($path),
                params: &[
                    $($crate::ParamSpec::new(
                        wire_name!($param $(, $param_wire)?),
                        $crate::ParamKind::$kind,
                    )),*
                ],
                content_type: content_type!($($ct)?),
            };

            $(#[$meta])*
            #[doc = ""]
            #[doc = concat!("`", stringify!($method), " ", $path, "`")]
            #[derive(Debug, Clone)]
            #[must_use]
            pub struct $ty($crate::EndpointRequest);

            #[allow(clippy::new_without_default)]
            impl $ty {
                /// Start a request with the required path parts.
                pub fn new($($req: impl Into<$crate::PathValue>),*) -> Self {
                    Self($crate::EndpointRequest::new(&$desc)$(.part(stringify!($req), $req))*)
                }

                /// Static metadata for this endpoint.
                #[must_use]
                pub fn descriptor() -> &'static $crate::EndpointDescriptor {
                    &$desc
                }

                $(part_setter!($part $(=> $part_wire)?);)*

                $(param_setter!($param $(=> $param_wire)? : $kind);)*

                /// Sets the raw request body.
                pub fn body(self, body: impl Into<bytes::Bytes>) -> Self {
                    Self(self.0.body(body))
                }

                /// Serializes `value` as the JSON request body.
                pub fn json<T: serde::Serialize>(self, value: &T) -> $crate::Result<Self> {
                    Ok(Self(self.0.json(value)?))
                }

                /// Appends a header value.
                pub fn header(self, name: impl Into<String>, value: impl Into<String>) -> Self {
                    Self(self.0.header(name, value))
                }

                /// Sets the `X-Opaque-Id` header.
                pub fn opaque_id(self, id: impl Into<String>) -> Self {
                    Self(self.0.opaque_id(id))
                }

                /// Forwards a cancellation token to the transport.
                pub fn cancellation(self, token: $crate::CancellationToken) -> Self {
                    Self(self.0.cancellation(token))
                }

                /// Pretty-print the response body.
                pub fn pretty(self, value: bool) -> Self {
                    Self(self.0.pretty(value))
                }

                /// Return human-readable values in the response.
                pub fn human(self, value: bool) -> Self {
                    Self(self.0.human(value))
                }

                /// Include stack traces in error responses.
                pub fn error_trace(self, value: bool) -> Self {
                    Self(self.0.error_trace(value))
                }

                /// Restrict the response to the given dotted paths.
                pub fn filter_path<I, S>(self, paths: I) -> Self
                where
                    I: IntoIterator<Item = S>,
                    S: Into<String>,
                {
                    Self(self.0.filter_path(paths))
                }

                /// Applies a configuration function.
                pub fn apply(self, option: impl FnOnce(Self) -> Self) -> Self {
                    option(self)
                }

                /// The underlying endpoint request.
                #[must_use]
                pub fn request(&self) -> &$crate::EndpointRequest {
                    &self.0
                }

                /// Unwrap into the underlying endpoint request.
                #[must_use]
                pub fn into_request(self) -> $crate::EndpointRequest {
                    self.0
                }

                /// Build the transport-level request under `base_url`.
                pub fn build(&self, base_url: &url::Url) -> $crate::Result<$crate::Request> {
                    self.0.build(base_url)
                }

                /// Send the request through `transport`.
                pub async fn send<T: $crate::Transport>(
                    &self,
                    transport: &T,
                ) -> $crate::Result<$crate::Response> {
                    self.0.send(transport).await
                }
            }

            impl From<$ty> for $crate::EndpointRequest {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }
        )*

        /// Every endpoint declared in this module.
        pub static DESCRIPTORS: &[&$crate::EndpointDescriptor] = &[$(&$desc),*];
    };
}

pub mod cat;
pub mod cluster;
pub mod document;
pub mod indices;
pub mod ingest;
pub mod nodes;
pub mod root;
pub mod search;
pub mod snapshot;
pub mod tasks;

/// Every endpoint descriptor, grouped by namespace.
pub fn all() -> impl Iterator<Item = &'static EndpointDescriptor> {
    [
        root::DESCRIPTORS,
        document::DESCRIPTORS,
        search::DESCRIPTORS,
        indices::DESCRIPTORS,
        cluster::DESCRIPTORS,
        cat::DESCRIPTORS,
        nodes::DESCRIPTORS,
        tasks::DESCRIPTORS,
        snapshot::DESCRIPTORS,
        ingest::DESCRIPTORS,
    ]
    .into_iter()
    .flatten()
    .copied()
}

/// Look up an endpoint descriptor by name, e.g. `"indices.create"`.
#[must_use]
pub fn find(name: &str) -> Option<&'static EndpointDescriptor> {
    all().find(|descriptor| descriptor.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use assert2::check;
    use sift_core::UNIVERSAL_PARAMS;

    use super::*;

    #[test]
    fn endpoint_names_are_unique() {
        let mut seen = BTreeSet::new();
        for descriptor in all() {
            check!(seen.insert(descriptor.name), "duplicate endpoint {}", descriptor.name);
        }
        check!(seen.len() > 100);
    }

    #[test]
    fn every_template_parses() {
        for descriptor in all() {
            check!(
                descriptor.path.segments().is_ok(),
                "bad template for {}",
                descriptor.name
            );
        }
    }

    #[test]
    fn options_are_unique_and_never_shadow_universal_ones() {
        for descriptor in all() {
            let mut names = BTreeSet::new();
            for spec in descriptor.params {
                check!(names.insert(spec.name), "{} repeats {}", descriptor.name, spec.name);
                check!(
                    !UNIVERSAL_PARAMS.iter().any(|universal| universal.name == spec.name),
                    "{} redeclares {}",
                    descriptor.name,
                    spec.name
                );
            }
        }
    }

    #[test]
    fn find_by_name() {
        let descriptor = find("delete_by_query").expect("declared");
        check!(descriptor.path.as_str() == "/{index}/{type?}/_delete_by_query");
        check!(find("no_such_endpoint").is_none());
    }

    #[test]
    fn bulk_style_endpoints_send_ndjson() {
        for name in ["bulk", "msearch", "msearch_template"] {
            let descriptor = find(name).expect("declared");
            check!(descriptor.content_type == crate::ContentType::NdJson);
        }
    }
}
