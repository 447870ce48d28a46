//! Builder pattern with a director.
//!
//! [`HttpRequest`] can only be obtained from [`HttpRequestBuilder::build`],
//! so every request in circulation has passed validation.
//! [`RequestDirector`] bundles the common recipes.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("URL cannot be empty")]
    MissingUrl,

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unknown HTTP method '{0}'")]
    UnknownMethod(String),

    #[error("Failed to serialize request body: {0}")]
    Body(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            _ => Err(RequestError::UnknownMethod(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpRequest {
    url: String,
    method: Method,
    headers: BTreeMap<String, String>,
    query_params: BTreeMap<String, String>,
    body: String,
    timeout_secs: u32,
}

impl HttpRequest {
    pub fn builder() -> HttpRequestBuilder {
        HttpRequestBuilder::new()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn query_params(&self) -> &BTreeMap<String, String> {
        &self.query_params
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn timeout_secs(&self) -> u32 {
        self.timeout_secs
    }

    /// Renders what executing the request would print. Nothing goes on the wire.
    pub fn execute(&self) -> Vec<String> {
        tracing::info!(method = %self.method, url = %self.url, "executing request");

        let mut lines = vec![format!("Executing {} request to {}", self.method, self.url)];

        if !self.query_params.is_empty() {
            lines.push("Query Parameters:".to_string());
            lines.extend(self.query_params.iter().map(|(k, v)| format!("  {k}={v}")));
        }

        lines.push("Headers:".to_string());
        lines.extend(self.headers.iter().map(|(k, v)| format!("  {k}: {v}")));

        if !self.body.is_empty() {
            lines.push(format!("Body: {}", self.body));
        }

        lines.push(format!("Timeout: {} seconds", self.timeout_secs));
        lines.push("Request executed successfully!".to_string());
        lines
    }
}

/// Consuming builder; `build` validates the URL.
#[derive(Debug, Default)]
pub struct HttpRequestBuilder {
    url: Option<String>,
    method: Method,
    headers: BTreeMap<String, String>,
    query_params: BTreeMap<String, String>,
    body: String,
    timeout_secs: u32,
}

impl HttpRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Later values for the same key replace earlier ones.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn timeout(mut self, secs: u32) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn build(self) -> Result<HttpRequest, RequestError> {
        let url = match self.url {
            Some(url) if !url.trim().is_empty() => url,
            _ => return Err(RequestError::MissingUrl),
        };
        if let Err(source) = Url::parse(&url) {
            return Err(RequestError::InvalidUrl { url, source });
        }

        Ok(HttpRequest {
            url,
            method: self.method,
            headers: self.headers,
            query_params: self.query_params,
            body: self.body,
            timeout_secs: self.timeout_secs,
        })
    }
}

/// Named recipes over [`HttpRequestBuilder`].
pub struct RequestDirector;

impl RequestDirector {
    pub fn get(url: impl Into<String>) -> Result<HttpRequest, RequestError> {
        HttpRequestBuilder::new().url(url).method(Method::Get).build()
    }

    /// POST with JSON headers. `json_body` is stored exactly as given.
    pub fn json_post(
        url: impl Into<String>,
        json_body: impl Into<String>,
    ) -> Result<HttpRequest, RequestError> {
        HttpRequestBuilder::new()
            .url(url)
            .method(Method::Post)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(json_body)
            .build()
    }

    /// Serializes `body` with serde_json, then behaves like [`Self::json_post`].
    pub fn json_post_value<T: Serialize + ?Sized>(
        url: impl Into<String>,
        body: &T,
    ) -> Result<HttpRequest, RequestError> {
        let json_body = serde_json::to_string(body)?;
        Self::json_post(url, json_body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_request_renders_every_section() {
        let request = HttpRequest::builder()
            .url("https://api.example.com")
            .method(Method::Post)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .query_param("key", "12345")
            .body(r#"{"name": "Aditya"}"#)
            .timeout(60)
            .build()
            .unwrap();

        assert_eq!(
            request.execute(),
            vec![
                "Executing POST request to https://api.example.com",
                "Query Parameters:",
                "  key=12345",
                "Headers:",
                "  Accept: application/json",
                "  Content-Type: application/json",
                r#"Body: {"name": "Aditya"}"#,
                "Timeout: 60 seconds",
                "Request executed successfully!",
            ]
        );
    }

    #[test]
    fn test_minimal_request_uses_defaults() {
        let request = HttpRequest::builder().url("https://example.com").build().unwrap();
        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.timeout_secs(), 0);
        assert!(request.body().is_empty());

        let lines = request.execute();
        assert!(!lines.iter().any(|l| l == "Query Parameters:"));
        assert!(!lines.iter().any(|l| l.starts_with("Body:")));
        assert_eq!(lines[1], "Headers:");
        assert_eq!(lines[2], "Timeout: 0 seconds");
    }

    #[test]
    fn test_missing_or_empty_url_rejected() {
        assert!(matches!(
            HttpRequestBuilder::new().build(),
            Err(RequestError::MissingUrl)
        ));
        assert!(matches!(
            HttpRequestBuilder::new().url("   ").build(),
            Err(RequestError::MissingUrl)
        ));
    }

    #[test]
    fn test_unparseable_url_rejected() {
        let err = HttpRequestBuilder::new().url("not a url").build().unwrap_err();
        assert!(matches!(err, RequestError::InvalidUrl { ref url, .. } if url == "not a url"));
    }

    #[test]
    fn test_repeated_header_keeps_last_value() {
        let request = HttpRequest::builder()
            .url("https://example.com")
            .header("Accept", "text/plain")
            .header("Accept", "application/json")
            .build()
            .unwrap();
        assert_eq!(request.headers().len(), 1);
        assert_eq!(request.headers()["Accept"], "application/json");
    }

    #[test]
    fn test_director_get() {
        let request = RequestDirector::get("https://api.example.com/users").unwrap();
        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.url(), "https://api.example.com/users");
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_director_json_post_keeps_body_verbatim() {
        let raw = r#"{"name": "Aditya", "email": "aditya@example.com"}"#;
        let request = RequestDirector::json_post("https://api.example.com/users", raw).unwrap();

        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.body(), raw);
        assert_eq!(request.headers()["Content-Type"], "application/json");
        assert!(request.execute().contains(&format!("Body: {raw}")));
    }

    #[test]
    fn test_director_json_post_value_serializes() {
        let request = RequestDirector::json_post_value(
            "https://api.example.com/users",
            &json!({"name": "Aditya", "email": "aditya@example.com"}),
        )
        .unwrap();

        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.headers()["Content-Type"], "application/json");
        assert_eq!(request.headers()["Accept"], "application/json");
        let body: serde_json::Value = serde_json::from_str(request.body()).unwrap();
        assert_eq!(body["email"], "aditya@example.com");
    }

    #[test]
    fn test_director_propagates_url_errors() {
        assert!(matches!(RequestDirector::get(""), Err(RequestError::MissingUrl)));
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("post".parse::<Method>().unwrap(), Method::Post);
        assert_eq!(Method::Delete.to_string(), "DELETE");
        assert!(matches!(
            "FETCH".parse::<Method>(),
            Err(RequestError::UnknownMethod(m)) if m == "FETCH"
        ));
    }

    #[test]
    fn test_request_serializes() {
        let request = RequestDirector::get("https://example.com/").unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["method"], "GET");
        assert_eq!(value["timeout_secs"], 0);
    }
}
