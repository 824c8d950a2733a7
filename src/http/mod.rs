//! HTTP request parsing.
//!
//! This module turns raw request text into a [`ParsedRequest`]: the request-line
//! URL, the colon-delimited headers and an optional JSON-object body.

mod parser;
mod request;

pub use parser::{RequestParser, parse_request};
pub use request::{Params, ParsedRequest};
