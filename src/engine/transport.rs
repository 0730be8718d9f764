//! HTTP transport capability and its `reqwest` implementation.

use crate::config::settings::Settings;
use crate::constants;
use crate::error::Error;
use crate::logging;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};
use std::time::{Duration, Instant};

/// A request relative to the configured API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// A bodiless GET, as issued for list endpoints.
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self {
            method: constants::HTTP_METHOD_GET.to_string(),
            path: path.to_string(),
            query: Vec::new(),
            body: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status < 400
    }
}

/// Sends HTTP requests. Failures below HTTP (connect, timeout, I/O) are
/// errors; any received status, including 4xx/5xx, is a response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, Error>;
}

/// Transport backed by `reqwest`, adding auth and content headers.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    org_id: String,
}

fn install_crypto_provider() {
    // Fails harmlessly when a provider is already installed.
    #[cfg(not(windows))]
    let _ = rustls::crypto::ring::default_provider().install_default();
    #[cfg(windows)]
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}

impl HttpTransport {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(settings: &Settings) -> Result<Self, Error> {
        install_crypto_provider();
        let client = reqwest::Client::builder()
            .user_agent(constants::USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            token: settings.api_token.clone(),
            org_id: settings.org_id.clone(),
        })
    }

    fn build_url(&self, request: &HttpRequest) -> Result<Url, Error> {
        let path = if request.path.starts_with('/') {
            request.path.clone()
        } else {
            format!("/{}", request.path)
        };
        let mut url = Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|e| Error::Config(format!("invalid API URL '{}': {e}", self.base_url)))?;
        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn build_headers(&self, has_body: bool) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        insert_header(&mut headers, constants::HEADER_ACCEPT, constants::CONTENT_TYPE_JSON)?;
        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            let value = if token.to_ascii_lowercase().starts_with("bearer ") {
                token.to_string()
            } else {
                format!("{} {token}", constants::HEADER_BEARER)
            };
            insert_header(&mut headers, constants::HEADER_AUTHORIZATION, &value)?;
        }
        if !self.org_id.is_empty() {
            insert_header(&mut headers, constants::HEADER_ORG_ID, &self.org_id)?;
        }
        if has_body {
            insert_header(
                &mut headers,
                constants::HEADER_CONTENT_TYPE,
                constants::CONTENT_TYPE_JSON,
            )?;
        }
        Ok(headers)
    }
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<(), Error> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| Error::Config(format!("invalid header name '{name}': {e}")))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|e| Error::Config(format!("invalid value for header '{name}': {e}")))?;
    headers.insert(header_name, header_value);
    Ok(())
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| Error::Config(format!("invalid HTTP method '{}'", request.method)))?;
        let url = self.build_url(request)?;
        let headers = self.build_headers(request.body.is_some())?;

        logging::log_request(method.as_str(), url.as_str(), &headers, request.body.as_deref());
        let start = Instant::now();

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        let resp = builder.send().await?;

        let status = resp.status().as_u16();
        let response_headers = resp.headers().clone();
        let body = resp.text().await?;

        logging::log_response(
            status,
            start.elapsed().as_millis(),
            &response_headers,
            &body,
            logging::get_max_body_len(),
        );

        Ok(HttpResponse {
            status,
            headers: response_headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
                .collect(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(api_url: &str, token: Option<&str>, org_id: &str) -> HttpTransport {
        let settings = Settings {
            api_url: api_url.to_string(),
            api_token: token.map(str::to_string),
            org_id: org_id.to_string(),
            ..Settings::default()
        };
        HttpTransport::new(&settings).unwrap()
    }

    #[test]
    fn test_build_url_joins_base_and_query() {
        let t = transport("https://api.example.com/", None, "");
        let mut request = HttpRequest::get("v1/apps");
        request.query.push(("limit".to_string(), "5".to_string()));
        let url = t.build_url(&request).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/apps?limit=5");
    }

    #[test]
    fn test_build_headers_adds_auth_and_org() {
        let t = transport("https://api.example.com", Some("tok"), "org-1");
        let headers = t.build_headers(true).unwrap();
        assert_eq!(headers["authorization"], "Bearer tok");
        assert_eq!(headers["x-org-id"], "org-1");
        assert_eq!(headers["content-type"], constants::CONTENT_TYPE_JSON);
    }

    #[test]
    fn test_build_headers_without_credentials() {
        let t = transport("https://api.example.com", None, "");
        let headers = t.build_headers(false).unwrap();
        assert!(headers.get("authorization").is_none());
        assert!(headers.get("content-type").is_none());
        assert_eq!(headers["accept"], constants::CONTENT_TYPE_JSON);
    }
}
