//! Blocking HTTP execution of request descriptors over `reqwest`.

use log::debug;
use reqwest::Url;
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};

use crate::ClientError;
use crate::transport::{HttpMethod, Transport, TransportRequest};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Blocking [`Transport`] backed by [`reqwest::blocking::Client`].
///
/// The HTTP handle is created once and reused for every request; it carries
/// connection pooling and client options only. No timeout is configured here,
/// inject a pre-built client with [`Self::with_http_client`] when one is needed.
#[derive(Clone, Debug)]
pub struct BlockingTransport {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl BlockingTransport {
    /// Creates a transport rooted at the given base URL.
    ///
    /// Request paths are appended verbatim, so any trailing slash on the base
    /// URL is dropped.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        let base_url = base_url.as_ref();
        Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_owned()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: reqwest::blocking::Client::new(),
        })
    }

    /// Returns a new transport that sends through the given client.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::blocking::Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for BlockingTransport {
    fn send(&self, request: &TransportRequest) -> Result<String, ClientError> {
        let url = request.url(&self.base_url)?;
        debug!("{} {url}", request.method());

        let headers = request.header_pairs()?;
        let mut builder = self.http.request(request.method().into(), url.as_str());

        if let Some(body) = request.body() {
            // A caller-supplied content type replaces the form default.
            let typed = headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));
            if !typed {
                builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
            }
            builder = builder.body(body);
        }

        for (name, value) in headers {
            let invalid = || ClientError::InvalidHeader(format!("{name}: {value}"));
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            builder = builder.header(name, value);
        }

        let response = builder.send()?;
        debug!("{} {url} -> {}", request.method(), response.status());
        Ok(response.text()?)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use super::BlockingTransport;
    use crate::ClientError;
    use crate::transport::{HttpMethod, Transport, TransportRequest};

    #[test]
    fn rejects_relative_base_url() {
        let error = BlockingTransport::new("data.fcc.gov").expect_err("relative url");
        assert!(matches!(error, ClientError::InvalidBaseUrl(url) if url == "data.fcc.gov"));
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let transport = BlockingTransport::new("http://data.fcc.gov/").expect("valid url");
        assert_eq!(transport.base_url(), "http://data.fcc.gov");
    }

    #[test]
    fn invalid_path_fails_before_any_network_call() {
        let transport = BlockingTransport::new("http://127.0.0.1:9").expect("valid url");
        let request = TransportRequest::new(HttpMethod::Get, "no-leading-slash");
        assert!(matches!(
            transport.send(&request),
            Err(ClientError::InvalidPath(_))
        ));
    }

    #[test]
    fn malformed_header_fails_before_any_network_call() {
        let transport = BlockingTransport::new("http://127.0.0.1:9").expect("valid url");
        let request = TransportRequest::new(HttpMethod::Get, "/").with_headers(["Bad Header: x"]);
        assert!(matches!(
            transport.send(&request),
            Err(ClientError::InvalidHeader(_))
        ));
    }

    #[test]
    fn maps_methods_to_reqwest() {
        assert_eq!(Method::from(HttpMethod::Get), Method::GET);
        assert_eq!(Method::from(HttpMethod::Post), Method::POST);
        assert_eq!(Method::from(HttpMethod::Put), Method::PUT);
        assert_eq!(Method::from(HttpMethod::Delete), Method::DELETE);
    }
}
