use std::marker::PhantomData;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Method, header::HeaderMap};
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::{
    error::Error,
    request::{ApiRequest, RequestInit},
};

/// Characters escaped when substituting a value into a path segment.
/// Everything outside the RFC 3986 unreserved set is percent-encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Parameter reshaping hook applied to the merged parameter object before
/// validation (e.g. joining an id array into the comma-separated wire form).
pub type Transform = fn(&mut Map<String, Value>);

/// One entry of a parameter contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub required: bool,
}

/// A mandatory parameter: rejected at call time when absent.
pub const fn required(name: &'static str) -> Param {
    Param {
        name,
        required: true,
    }
}

/// An optional parameter: omitted from the request when absent.
pub const fn optional(name: &'static str) -> Param {
    Param {
        name,
        required: false,
    }
}

/// Declares where each parameter of an endpoint belongs on the wire.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParameterContract {
    pub path: &'static [Param],
    pub query: &'static [Param],
    pub body: &'static [Param],
}

/// Behavioural flags attached to an endpoint template.
#[derive(Clone, Copy, Debug)]
pub struct EndpointOptions {
    /// Whether the call requires a live access token.
    pub auth: bool,
    /// Whether responses may be cached by an external collaborator.
    pub cache: bool,
    /// Whether the endpoint pages through a `continuation` token.
    pub pagination: bool,
    /// API version override; falls back to the client-wide version.
    pub version: Option<&'static str>,
}

const DEFAULT_OPTIONS: EndpointOptions = EndpointOptions {
    auth: false,
    cache: false,
    pagination: false,
    version: None,
};

/// Immutable declarative descriptor of a single API call.
///
/// `P` is the serializable parameter shape, `R` the expected response shape
/// (a compile-time tag only). Templates are constructed once as static
/// configuration through the chainable `const fn` builders and consumed by
/// [`Endpoint::build`].
#[derive(Debug)]
pub struct Endpoint<P = (), R = ()> {
    pub method: Method,
    /// URL pattern relative to `{endpoint}/{version}`, with `:name` placeholders.
    pub url: &'static str,
    pub opts: EndpointOptions,
    pub params: ParameterContract,
    /// Default values merged into every call, overridable by the caller.
    pub seed: &'static [(&'static str, &'static str)],
    pub init: RequestInit,
    pub transform: Option<Transform>,
    _marker: PhantomData<fn(P) -> R>,
}

impl<P, R> Endpoint<P, R> {
    pub const fn new(method: Method, url: &'static str) -> Self {
        Self {
            method,
            url,
            opts: DEFAULT_OPTIONS,
            params: ParameterContract {
                path: &[],
                query: &[],
                body: &[],
            },
            seed: &[],
            init: RequestInit {
                redirect: crate::request::RedirectMode::Follow,
            },
            transform: None,
            _marker: PhantomData,
        }
    }

    pub const fn get(url: &'static str) -> Self {
        Self::new(Method::GET, url)
    }

    pub const fn post(url: &'static str) -> Self {
        Self::new(Method::POST, url)
    }

    pub const fn put(url: &'static str) -> Self {
        Self::new(Method::PUT, url)
    }

    pub const fn delete(url: &'static str) -> Self {
        Self::new(Method::DELETE, url)
    }

    pub const fn auth(mut self) -> Self {
        self.opts.auth = true;
        self
    }

    pub const fn cached(mut self) -> Self {
        self.opts.cache = true;
        self
    }

    pub const fn paginated(mut self) -> Self {
        self.opts.pagination = true;
        self
    }

    pub const fn version(mut self, version: &'static str) -> Self {
        self.opts.version = Some(version);
        self
    }

    pub const fn path_params(mut self, params: &'static [Param]) -> Self {
        self.params.path = params;
        self
    }

    pub const fn query_params(mut self, params: &'static [Param]) -> Self {
        self.params.query = params;
        self
    }

    pub const fn body_params(mut self, params: &'static [Param]) -> Self {
        self.params.body = params;
        self
    }

    pub const fn seeds(mut self, seed: &'static [(&'static str, &'static str)]) -> Self {
        self.seed = seed;
        self
    }

    pub const fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub const fn manual_redirect(mut self) -> Self {
        self.init = RequestInit::manual_redirect();
        self
    }
}

impl<P: Serialize, R> Endpoint<P, R> {
    /// Build a fully-formed request for this template.
    ///
    /// Merges seeds under the caller parameters, applies the transform hook,
    /// validates the contract, substitutes the URL pattern and serializes the
    /// query string and body. Fails without any I/O when a required parameter
    /// is missing, a placeholder is left unresolved, or a GET/DELETE call
    /// would carry a body.
    pub fn build(&self, params: &P, base: &Url, version: &str) -> Result<ApiRequest, Error> {
        let mut merged = self.merged_params(params)?;

        for location in [self.params.path, self.params.query, self.params.body] {
            for param in location {
                if param.required && !merged.contains_key(param.name) {
                    return Err(Error::missing_parameter(param.name));
                }
            }
        }

        let path = self.substitute_path(&mut merged)?;

        let mut query = Vec::new();
        for param in self.params.query {
            if let Some(value) = merged.remove(param.name) {
                query.push((param.name, value_to_string(param.name, &value)?));
            }
        }

        let mut body = Map::new();
        for param in self.params.body {
            if let Some(value) = merged.remove(param.name) {
                body.insert(param.name.to_owned(), value);
            }
        }
        if !body.is_empty() && (self.method == Method::GET || self.method == Method::DELETE) {
            return Err(Error::InvalidParameter(format!(
                "{} {} cannot carry a request body",
                self.method, self.url
            )));
        }

        let version = self.opts.version.unwrap_or(version);
        let target = format!("{}/{version}{path}", base.as_str().trim_end_matches('/'));
        let mut url = Url::parse(&target)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let body = if body.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&Value::Object(body))?)
        };

        Ok(ApiRequest {
            method: self.method.clone(),
            url,
            headers: HeaderMap::new(),
            body,
            init: self.init,
        })
    }

    /// Resolve the final URL for this call without performing any network I/O.
    ///
    /// Used to construct shareable URLs (e.g. the OAuth authorize link) and as
    /// the cache key for cache-flagged endpoints.
    pub fn resolve(&self, params: &P, base: &Url, version: &str) -> Result<Url, Error> {
        self.build(params, base, version).map(|request| request.url)
    }

    fn merged_params(&self, params: &P) -> Result<Map<String, Value>, Error> {
        let mut merged = match serde_json::to_value(params)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(Error::InvalidParameter(format!(
                    "parameters must serialize to an object, got {other}"
                )));
            }
        };
        merged.retain(|_, value| !value.is_null());

        for (key, value) in self.seed {
            merged
                .entry((*key).to_owned())
                .or_insert_with(|| Value::String((*value).to_owned()));
        }

        if let Some(transform) = self.transform {
            transform(&mut merged);
        }
        Ok(merged)
    }

    fn substitute_path(&self, merged: &mut Map<String, Value>) -> Result<String, Error> {
        let mut resolved = String::with_capacity(self.url.len());
        for (index, segment) in self.url.split('/').enumerate() {
            if index > 0 {
                resolved.push('/');
            }
            match segment.strip_prefix(':') {
                Some(name) => match merged.remove(name) {
                    Some(value) => {
                        let value = value_to_string(name, &value)?;
                        resolved.push_str(&utf8_percent_encode(&value, PATH_SEGMENT).to_string());
                    }
                    // Left in place so the unresolved check below reports it.
                    None => resolved.push_str(segment),
                },
                None => resolved.push_str(segment),
            }
        }
        if let Some(placeholder) = resolved.split('/').find(|segment| segment.starts_with(':')) {
            return Err(Error::InvalidParameter(format!(
                "unresolved placeholder `{placeholder}` in `{}`",
                self.url
            )));
        }
        Ok(resolved)
    }
}

/// Coerce a JSON parameter value into its query/path string form.
///
/// Arrays are comma-joined, matching the wire format for id lists.
fn value_to_string(name: &str, value: &Value) -> Result<String, Error> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(|item| value_to_string(name, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(parts.join(","))
        }
        _ => Err(Error::InvalidParameter(format!(
            "parameter `{name}` cannot be encoded as a string"
        ))),
    }
}

/// Replace an array value with its comma-joined string form, in place.
/// Scalar values are left untouched.
pub fn join_csv(params: &mut Map<String, Value>, key: &str) {
    if let Some(Value::Array(items)) = params.get(key) {
        let joined = items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(",");
        params.insert(key.to_owned(), Value::String(joined));
    }
}
