//! HTTP request parsing functions.
//!
//! Lines are split on `\n` only; a request line needs at least three tokens
//! separated by single spaces, and headers end at the first empty line.
//! Everything after that line is decoded as a JSON object; a body of `null`
//! counts as no body. Bodies nested deeper than serde_json's recursion limit
//! (128 levels) are rejected as decode errors.

use crate::error::ParseError;
use crate::http::{Params, ParsedRequest};
use core::str::FromStr;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Parser over a borrowed raw request.
#[derive(Debug, Clone, Copy)]
pub struct RequestParser<'a> {
    raw: &'a str,
}

impl<'a> RequestParser<'a> {
    #[must_use]
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// Parse the request text into a [`ParsedRequest`].
    ///
    /// # Errors
    ///
    /// - [`ParseError::MalformedRequest`] if the input has fewer than two lines.
    /// - [`ParseError::MalformedRequestLine`] if the request line has fewer
    ///   than three tokens.
    /// - [`ParseError::MalformedHeader`] if a header line has no colon.
    /// - [`ParseError::BodyDecodeError`] if the body is not a JSON object.
    pub fn parse(&self) -> Result<ParsedRequest, ParseError> {
        let lines: Vec<&str> = self.raw.split('\n').collect();
        if lines.len() < 2 {
            return Err(ParseError::MalformedRequest);
        }

        let mut parts = lines[0].split(' ');
        let (Some(_method), Some(url), Some(_proto)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseError::MalformedRequestLine);
        };

        // The blank line that ends the headers also marks where the body starts
        let mut headers = HashMap::new();
        let mut body_start = None;
        for (i, line) in lines.iter().enumerate().skip(1) {
            if line.is_empty() {
                body_start = Some(i + 1);
                break;
            }
            let (key, value) = line.split_once(':').ok_or(ParseError::MalformedHeader)?;
            headers.insert(key.trim().to_owned(), value.trim().to_owned());
        }

        let body = body_start
            .and_then(|start| lines.get(start..))
            .map(|rest| rest.join("\n"))
            .filter(|body| !body.is_empty());

        let params = match body {
            Some(body) => {
                trace!(body_len = body.len(), "Decoding request body");
                serde_json::from_str::<Option<Params>>(&body)?
            }
            None => None,
        };

        debug!(
            url = %url,
            headers = headers.len(),
            has_params = params.is_some(),
            "Parsed HTTP request"
        );

        Ok(ParsedRequest {
            url: url.to_owned(),
            headers,
            params,
        })
    }
}

/// Parse a raw request in one call.
///
/// # Errors
///
/// See [`RequestParser::parse`].
pub fn parse_request(raw: &str) -> Result<ParsedRequest, ParseError> {
    RequestParser::new(raw).parse()
}

impl FromStr for ParsedRequest {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_request(s)
    }
}
