use core::fmt::Debug;
use core::fmt::Display;

/// Reasons a raw request can be rejected. Parsing is all-or-nothing, so any
/// of these means no part of the request is returned.
pub enum ParseError {
    /// Fewer than two lines in the input.
    MalformedRequest,
    /// Request line has fewer than three space-separated tokens.
    MalformedRequestLine,
    /// A header line before the blank separator has no colon.
    MalformedHeader,
    /// The body is non-empty but is not a JSON object.
    BodyDecodeError(serde_json::Error),
}

impl core::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ParseError::BodyDecodeError(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::MalformedRequest => write!(f, "invalid HTTP request"),
            ParseError::MalformedRequestLine => write!(f, "invalid request line"),
            ParseError::MalformedHeader => write!(f, "invalid header format"),
            ParseError::BodyDecodeError(e) => write!(f, "failed to parse body: {e}"),
        }
    }
}

impl Debug for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::MalformedRequest => write!(f, "MalformedRequest"),
            ParseError::MalformedRequestLine => write!(f, "MalformedRequestLine"),
            ParseError::MalformedHeader => write!(f, "MalformedHeader"),
            ParseError::BodyDecodeError(e) => write!(f, "BodyDecodeError({e:?})"),
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::BodyDecodeError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::error::Error;

    #[test]
    fn test_display_messages() {
        assert_eq!(ParseError::MalformedRequest.to_string(), "invalid HTTP request");
        assert_eq!(
            ParseError::MalformedRequestLine.to_string(),
            "invalid request line"
        );
        assert_eq!(
            ParseError::MalformedHeader.to_string(),
            "invalid header format"
        );
    }

    #[test]
    fn test_body_decode_error_wraps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let msg = json_err.to_string();
        let err = ParseError::from(json_err);

        assert_eq!(err.to_string(), format!("failed to parse body: {msg}"));
        assert!(err.source().is_some());
        assert!(ParseError::MalformedHeader.source().is_none());
    }
}
