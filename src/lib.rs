#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Minimal textual HTTP request parser.
//!
//! Extracts the request-line URL, colon-delimited headers and an optional
//! JSON-object body from raw request text.
//!
//! ```
//! use request_parser_lib::parse_request;
//!
//! let req = parse_request("GET /foo HTTP/1.1\nHost: example.com\n\n{\"a\":1}").unwrap();
//! assert_eq!(req.url(), "/foo");
//! assert_eq!(req.header("Host"), Some("example.com"));
//! assert_eq!(req.param("a"), Some(&serde_json::json!(1)));
//! ```

mod error;
mod http;

pub use error::ParseError;
pub use http::{Params, ParsedRequest, RequestParser, parse_request};
