//! Decomposition of a raw string into URL components.

use super::path::{decode_path, raw_path};
use crate::error::MalformedUrlError;

/// Base URL that scheme-less references such as `//bucket/key` are joined
/// onto. Its scheme is never reported back to the caller.
const RESOLVE_BASE: &str = "s3:///";

/// Components of a parsed URL. `None` means the input did not carry the part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UrlParts {
    /// Parse `raw` into its components using the `url` crate.
    ///
    /// Absolute URLs (`scheme://...`) are accepted as-is. References without a
    /// scheme are accepted only when they start with `/` (`/key`,
    /// `//bucket/key`); their scheme is left unset. Opaque URLs such as
    /// `s3:bucket` have no authority or hierarchical path and are rejected.
    ///
    /// Empty components (for example the host of `s3:///key`) are reported
    /// as absent. The path is taken from `raw` as written, so dot segments
    /// survive (`a/../b` is its own key), and is then percent-decoded; a path
    /// that does not decode to UTF-8 is malformed.
    pub fn parse(raw: &str) -> Result<Self, MalformedUrlError> {
        let (parsed, has_scheme) = match url::Url::parse(raw) {
            Ok(u) => (u, true),
            Err(url::ParseError::RelativeUrlWithoutBase) if raw.starts_with('/') => {
                let base = url::Url::parse(RESOLVE_BASE)
                    .map_err(|e| MalformedUrlError::with_source(raw, e))?;
                let joined = base
                    .join(raw)
                    .map_err(|e| MalformedUrlError::with_source(raw, e))?;
                (joined, false)
            }
            Err(e) => return Err(MalformedUrlError::with_source(raw, e)),
        };

        if parsed.cannot_be_a_base() {
            return Err(MalformedUrlError::new(raw));
        }

        let path = decode_path(raw_path(raw, has_scheme))
            .ok_or_else(|| MalformedUrlError::new(raw))?;

        Ok(Self {
            scheme: has_scheme.then(|| parsed.scheme().to_string()),
            host: non_empty(parsed.host_str()),
            user: non_empty(Some(parsed.username())),
            password: non_empty(parsed.password()),
            port: parsed.port(),
            path: non_empty(Some(&path)),
            query: non_empty(parsed.query()),
            fragment: non_empty(parsed.fragment()),
        })
    }

    /// Fill every absent component from `defaults`. Parsed values win.
    pub fn or(self, defaults: UrlParts) -> Self {
        Self {
            scheme: self.scheme.or(defaults.scheme),
            host: self.host.or(defaults.host),
            user: self.user.or(defaults.user),
            password: self.password.or(defaults.password),
            port: self.port.or(defaults.port),
            path: self.path.or(defaults.path),
            query: self.query.or(defaults.query),
            fragment: self.fragment.or(defaults.fragment),
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_string)
}
