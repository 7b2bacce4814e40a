//! Path extraction and percent-encoding.

use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Bytes escaped when a path is written out. `/` is kept as the separator.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode a decoded path for display.
pub(crate) fn encode_path(path: &str) -> impl fmt::Display + '_ {
    utf8_percent_encode(path, PATH)
}

/// Decode `%XX` escapes. `None` when the result is not valid UTF-8.
pub(crate) fn decode_path(path: &str) -> Option<String> {
    percent_decode_str(path)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// The path of `raw` exactly as written: after the scheme and authority,
/// up to the query or fragment.
///
/// Dot segments are kept, so `s3://b/a/../k` yields `/a/../k`.
pub(crate) fn raw_path(raw: &str, has_scheme: bool) -> &str {
    let mut rest = raw.trim_matches(|c: char| c <= ' ');
    if has_scheme {
        if let Some((_, after)) = rest.split_once(':') {
            rest = after;
        }
    }
    if let Some(authority_and_path) = rest.strip_prefix("//") {
        let end = authority_and_path
            .find(|c: char| matches!(c, '/' | '?' | '#'))
            .unwrap_or(authority_and_path.len());
        rest = &authority_and_path[end..];
    }
    let end = rest.find(|c: char| matches!(c, '?' | '#')).unwrap_or(rest.len());
    &rest[..end]
}
