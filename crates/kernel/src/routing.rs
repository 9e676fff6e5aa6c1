//! Endpoint table and URL resolution.
//!
//! Endpoints are named `owner.handler` (e.g., "deposit.index") and map to a
//! URL pattern with `:name` parameter segments (e.g., "/deposit/:deposition_type").
//! Menu entries reference endpoints by name and resolve them through a
//! [`UrlResolver`] at render time.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;
use tracing::debug;

/// Arguments merged into URL construction, keyed by parameter name.
pub type UrlArgs = BTreeMap<String, String>;

/// URL resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("endpoint {endpoint} requires parameter {parameter}")]
    MissingParameter { endpoint: String, parameter: String },
}

/// Resolves an endpoint name plus arguments into a navigable URL.
pub trait UrlResolver {
    fn resolve_url(&self, endpoint: &str, args: &UrlArgs) -> Result<String, UrlError>;
}

/// Table of named endpoints and their URL patterns.
#[derive(Debug, Clone, Default)]
pub struct EndpointTable {
    patterns: HashMap<String, String>,
}

impl EndpointTable {
    /// Create an empty endpoint table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an endpoint.
    pub fn add(&mut self, endpoint: impl Into<String>, pattern: impl Into<String>) -> &mut Self {
        let endpoint = endpoint.into();
        let pattern = pattern.into();
        debug!(endpoint = %endpoint, pattern = %pattern, "registered endpoint");
        self.patterns.insert(endpoint, pattern);
        self
    }

    /// Get the pattern for an endpoint.
    pub fn pattern(&self, endpoint: &str) -> Option<&str> {
        self.patterns.get(endpoint).map(String::as_str)
    }

    /// Number of registered endpoints.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl UrlResolver for EndpointTable {
    fn resolve_url(&self, endpoint: &str, args: &UrlArgs) -> Result<String, UrlError> {
        let pattern = self
            .pattern(endpoint)
            .ok_or_else(|| UrlError::UnknownEndpoint(endpoint.to_string()))?;

        let mut consumed = Vec::new();
        let mut segments = Vec::new();
        for segment in pattern.split('/') {
            match segment.strip_prefix(':') {
                Some(param) => {
                    let value = args.get(param).ok_or_else(|| UrlError::MissingParameter {
                        endpoint: endpoint.to_string(),
                        parameter: param.to_string(),
                    })?;
                    segments.push(urlencoding::encode(value).into_owned());
                    consumed.push(param);
                }
                None => segments.push(segment.to_string()),
            }
        }

        let mut url = segments.join("/");
        let query: Vec<String> = args
            .iter()
            .filter(|(key, _)| !consumed.contains(&key.as_str()))
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }

        Ok(url)
    }
}

/// Convert a `:name` pattern to axum's `{name}` route syntax.
pub fn axum_path(pattern: &str) -> String {
    pattern
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(param) => format!("{{{param}}}"),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}
