//! Error type for URL construction.

use thiserror::Error;

/// The input string could not be decomposed into URL components.
///
/// Carries the offending input so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to parse malformed url: {url}")]
pub struct MalformedUrlError {
    pub url: String,
    #[source]
    pub source: Option<url::ParseError>,
}

impl MalformedUrlError {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            source: None,
        }
    }

    pub(crate) fn with_source(url: impl Into<String>, source: url::ParseError) -> Self {
        Self {
            url: url.into(),
            source: Some(source),
        }
    }
}
