//! Request descriptors and the transport seam.
//!
//! A [`TransportRequest`] is plain data: method, path, parameters and raw
//! headers. It knows how its parameters are placed on the wire (query string
//! for `GET`/`DELETE`, form body for `POST`/`PUT`) but never performs I/O.
//! Implementors of [`Transport`] execute descriptors against the network.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::error;
use url::form_urlencoded;

use crate::ClientError;

/// HTTP verbs supported by the transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Uppercase verb as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` when parameters travel in the query string rather than the body.
    pub fn carries_query(self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ClientError;

    /// Parses a verb case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        [Self::Get, Self::Post, Self::Put, Self::Delete]
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ClientError::InvalidMethod(value.to_owned()))
    }
}

/// A primitive request parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(number) => write!(f, "{number}"),
            Self::Float(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Request parameters keyed by name.
///
/// A sorted map keeps the encoded form deterministic.
pub type Params = BTreeMap<String, ParamValue>;

/// Form-urlencodes parameters as `key=value&key=value`.
pub fn encode_params(params: &Params) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, &value.to_string());
    }
    serializer.finish()
}

/// One HTTP request described as plain data.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportRequest {
    method: HttpMethod,
    path: String,
    params: Params,
    headers: Vec<String>,
}

impl TransportRequest {
    /// Creates a request without parameters or headers.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Params::new(),
            headers: Vec::new(),
        }
    }

    /// Replaces the parameter set.
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Adds or overwrites a single parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Appends raw `Name: value` headers, keeping their order.
    #[must_use]
    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers.extend(headers.into_iter().map(Into::into));
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Encoded parameters, empty when there are none.
    pub fn query_string(&self) -> String {
        encode_params(&self.params)
    }

    /// Path plus `?query` for `GET`/`DELETE` requests that carry parameters.
    pub fn target(&self) -> Result<String, ClientError> {
        if !self.path.starts_with('/') {
            return Err(ClientError::InvalidPath(self.path.clone()));
        }

        if self.method.carries_query() && !self.params.is_empty() {
            Ok(format!("{}?{}", self.path, self.query_string()))
        } else {
            Ok(self.path.clone())
        }
    }

    /// Full request URL: base URL concatenated with [`Self::target`].
    pub fn url(&self, base_url: &str) -> Result<String, ClientError> {
        Ok(format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            self.target()?
        ))
    }

    /// Form body for `POST`/`PUT`; an empty string when there are no parameters.
    pub fn body(&self) -> Option<String> {
        if self.method.carries_query() {
            None
        } else {
            Some(self.query_string())
        }
    }

    /// Splits every raw header into a trimmed `(name, value)` pair.
    pub fn header_pairs(&self) -> Result<Vec<(&str, &str)>, ClientError> {
        self.headers.iter().map(|raw| split_header(raw)).collect()
    }
}

fn split_header(raw: &str) -> Result<(&str, &str), ClientError> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| ClientError::InvalidHeader(raw.to_owned()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ClientError::InvalidHeader(raw.to_owned()));
    }
    Ok((name, value.trim()))
}

/// Executes request descriptors.
///
/// [`Transport::send`] is the only required method and the injection point
/// for tests. The provided methods report failures as diagnostics and collapse
/// them into `None`, mirroring how the API layer consumes the transport.
pub trait Transport {
    /// Sends one request and returns the raw body, whatever the HTTP status.
    fn send(&self, request: &TransportRequest) -> Result<String, ClientError>;

    /// Sends one request, logging a transport failure and returning `None`.
    fn request(&self, request: &TransportRequest) -> Option<String> {
        match self.send(request) {
            Ok(body) => Some(body),
            Err(err) => {
                error!("{} {} failed: {err}", request.method(), request.path());
                None
            }
        }
    }

    fn get(&self, path: &str, params: Params, headers: &[&str]) -> Option<String> {
        self.request(&build(HttpMethod::Get, path, params, headers))
    }

    fn post(&self, path: &str, params: Params, headers: &[&str]) -> Option<String> {
        self.request(&build(HttpMethod::Post, path, params, headers))
    }

    fn put(&self, path: &str, params: Params, headers: &[&str]) -> Option<String> {
        self.request(&build(HttpMethod::Put, path, params, headers))
    }

    fn delete(&self, path: &str, params: Params, headers: &[&str]) -> Option<String> {
        self.request(&build(HttpMethod::Delete, path, params, headers))
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &TransportRequest) -> Result<String, ClientError> {
        (**self).send(request)
    }

    fn request(&self, request: &TransportRequest) -> Option<String> {
        (**self).request(request)
    }
}

fn build(method: HttpMethod, path: &str, params: Params, headers: &[&str]) -> TransportRequest {
    TransportRequest::new(method, path)
        .with_params(params)
        .with_headers(headers.iter().copied())
}
