//! Classification of failed catalog operations into renderable errors.
//!
//! Any error coming out of a fetch is mapped to an [`ErrorDetails`] record
//! that tells the UI what happened, whether the product-dependent subtree
//! must be replaced with a blocking fallback (`should_stop_rendering`), and
//! whether retrying is worthwhile. Classification inspects the error's
//! message text through an ordered rule table; the first matching rule wins,
//! and an unmatched message always lands in [`ErrorKind::Unknown`] - the
//! classifier itself cannot fail.

use std::sync::LazyLock;

use regex::Regex;

/// Category of a failed catalog operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The catalog service could not be reached at all.
    Connection,
    /// The service answered with a 5xx-class failure.
    Server,
    /// The requested resource does not exist.
    NotFound,
    /// The request was rejected as invalid.
    Validation,
    /// The caller is not authenticated (401).
    Authentication,
    /// The caller is authenticated but not allowed (403).
    Authorization,
    /// The response body could not be decoded.
    DataFormat,
    /// The request ran out of time.
    Timeout,
    /// Anything else.
    Unknown,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connection => "connection",
            Self::Server => "server",
            Self::NotFound => "not_found",
            Self::Validation => "validation",
            Self::Authentication => "authentication",
            Self::Authorization => "authorization",
            Self::DataFormat => "data_format",
            Self::Timeout => "timeout",
            Self::Unknown => "unknown",
        }
    }
}

/// Structured description of a failed catalog operation.
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub kind: ErrorKind,
    /// User-facing message.
    pub message: String,
    /// When true, the product-dependent UI subtree is expected to be
    /// replaced with a blocking error view offering only a full reload.
    pub should_stop_rendering: bool,
    /// Whether retrying the operation may succeed.
    pub retryable: bool,
    /// HTTP status, when one could be determined.
    pub status_code: Option<u16>,
    /// Raw error text, kept for logging only.
    pub original: String,
}

/// One entry of the classification table: a predicate over the raw message
/// and the builder applied when it matches.
struct Rule {
    matches: fn(&str) -> bool,
    build: fn(&str) -> ErrorDetails,
}

/// Classification rules, evaluated top to bottom; first match wins. The
/// order is load-bearing: a message carrying both "404" and "500" is a
/// server error, not a missing resource.
const RULES: &[Rule] = &[
    Rule {
        matches: is_connection_error,
        build: |raw| ErrorDetails {
            kind: ErrorKind::Connection,
            message: "Failed to connect to the catalog service. Please check if the server is running."
                .to_string(),
            should_stop_rendering: true,
            retryable: true,
            status_code: None,
            original: raw.to_string(),
        },
    },
    Rule {
        matches: is_server_error,
        build: |raw| ErrorDetails {
            kind: ErrorKind::Server,
            message: "The server encountered an internal error. Please try again later.".to_string(),
            should_stop_rendering: true,
            retryable: true,
            status_code: extract_status_code(raw),
            original: raw.to_string(),
        },
    },
    Rule {
        matches: is_not_found_error,
        build: |raw| ErrorDetails {
            kind: ErrorKind::NotFound,
            message: "The requested resource was not found.".to_string(),
            should_stop_rendering: false,
            retryable: false,
            status_code: Some(404),
            original: raw.to_string(),
        },
    },
    Rule {
        matches: is_authentication_error,
        build: |raw| ErrorDetails {
            kind: ErrorKind::Authentication,
            message: "Authentication required. Please log in to continue.".to_string(),
            should_stop_rendering: true,
            retryable: false,
            status_code: Some(401),
            original: raw.to_string(),
        },
    },
    Rule {
        matches: is_authorization_error,
        build: |raw| ErrorDetails {
            kind: ErrorKind::Authorization,
            message: "You don't have permission to access this resource.".to_string(),
            should_stop_rendering: false,
            retryable: false,
            status_code: Some(403),
            original: raw.to_string(),
        },
    },
    Rule {
        matches: is_validation_error,
        build: |raw| ErrorDetails {
            kind: ErrorKind::Validation,
            message: raw.to_string(),
            should_stop_rendering: false,
            retryable: false,
            status_code: None,
            original: raw.to_string(),
        },
    },
    Rule {
        matches: is_data_format_error,
        build: |raw| ErrorDetails {
            kind: ErrorKind::DataFormat,
            message: "The data received was in an invalid format.".to_string(),
            should_stop_rendering: false,
            retryable: false,
            status_code: None,
            original: raw.to_string(),
        },
    },
    Rule {
        matches: is_timeout_error,
        build: |raw| ErrorDetails {
            kind: ErrorKind::Timeout,
            message: "The request timed out. Please try again.".to_string(),
            should_stop_rendering: false,
            retryable: true,
            status_code: None,
            original: raw.to_string(),
        },
    },
];

/// Classify an arbitrary error into an [`ErrorDetails`].
///
/// Works on the error's display text, so it accepts anything printable and
/// never fails; unmatched messages fall through to [`ErrorKind::Unknown`].
pub fn classify<E: std::fmt::Display + ?Sized>(err: &E) -> ErrorDetails {
    let raw = err.to_string();
    for rule in RULES {
        if (rule.matches)(&raw) {
            return (rule.build)(&raw);
        }
    }
    ErrorDetails {
        kind: ErrorKind::Unknown,
        message: raw.clone(),
        should_stop_rendering: false,
        retryable: true,
        status_code: extract_status_code(&raw),
        original: raw,
    }
}

// Predicates are substring tests, case-sensitive unless noted.

fn is_connection_error(msg: &str) -> bool {
    msg.contains("Failed to fetch")
        || msg.contains("Network request failed")
        || msg.contains("ERR_CONNECTION_REFUSED")
        || msg.contains("network error")
}

fn is_server_error(msg: &str) -> bool {
    msg.contains("500")
        || msg.contains("502")
        || msg.contains("503")
        || msg.contains("504")
        || msg.contains("Internal Server Error")
}

fn is_not_found_error(msg: &str) -> bool {
    msg.contains("404") || msg.contains("Not Found") || msg.to_lowercase().contains("not found")
}

fn is_authentication_error(msg: &str) -> bool {
    msg.contains("401") || msg.contains("Unauthorized") || msg.contains("Authentication required")
}

fn is_authorization_error(msg: &str) -> bool {
    msg.contains("403") || msg.contains("Forbidden") || msg.contains("not authorized")
}

fn is_validation_error(msg: &str) -> bool {
    msg.contains("validation") || msg.contains("required") || msg.contains("invalid input")
}

fn is_data_format_error(msg: &str) -> bool {
    msg.contains("parse") || msg.contains("syntax") || msg.contains("unexpected token")
}

fn is_timeout_error(msg: &str) -> bool {
    msg.contains("timeout") || msg.contains("timed out")
}

static STATUS_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{3})").expect("static status-code pattern"));

/// Best-effort extraction of an HTTP status: first 3-digit run in the text.
fn extract_status_code(msg: &str) -> Option<u16> {
    STATUS_CODE
        .captures(msg)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u16>().ok())
}
