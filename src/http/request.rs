//! The structured result of parsing a raw request.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Decoded JSON-object body.
pub type Params = Map<String, Value>;

/// A parsed request: target URL, headers and the optional JSON-object body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedRequest {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) params: Option<Params>,
}

impl ParsedRequest {
    /// The second token of the request line, verbatim.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Look up a header by its exact (case-sensitive) name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Decoded body, `None` when the request carried no body.
    #[must_use]
    pub fn params(&self) -> Option<&Params> {
        self.params.as_ref()
    }

    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.as_ref()?.get(name)
    }

    /// Split the request into its owned parts.
    #[must_use]
    pub fn into_parts(self) -> (String, HashMap<String, String>, Option<Params>) {
        (self.url, self.headers, self.params)
    }
}
