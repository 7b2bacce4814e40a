//! `s3://bucket/key` identifiers.
//!
//! [`BucketUrl`] embeds a generic [`Url`] and reads its host as the bucket and
//! its path (minus the leading `/`) as the object key. [`BucketUrl::factory`]
//! parses a raw string and fills a missing bucket from a [`BucketDefault`].

mod default;
mod http;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MalformedUrlError;
use crate::url_model::{QueryString, Url, UrlParts};

pub use default::BucketDefault;
pub use http::HttpEndpoint;

/// Scheme given to URLs that do not carry one.
pub const DEFAULT_SCHEME: &str = "s3";

const SEPARATOR: char = '/';

/// Object-storage URL: bucket is the host, key is the path without its leading `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketUrl {
    url: Url,
}

impl BucketUrl {
    /// `s3://{bucket}/{key}`.
    pub fn new(bucket: impl Into<String>, key: &str) -> Self {
        let mut url = Url::default();
        url.set_scheme(DEFAULT_SCHEME);
        let mut this = Self { url };
        this.set_bucket(bucket);
        this.set_key(key);
        this
    }

    /// Parse `raw`, filling absent components from defaults.
    ///
    /// Defaults are scheme `s3` and the bucket from `default`; every other part
    /// stays empty. Components present in `raw` always win, so
    /// `s3://explicit/key` ignores the default bucket. A non-empty query is
    /// decoded into a [`QueryString`].
    pub fn factory(raw: &str, default: &BucketDefault) -> Result<Self, MalformedUrlError> {
        let defaults = UrlParts {
            scheme: Some(DEFAULT_SCHEME.to_string()),
            host: default.bucket().map(str::to_string),
            ..UrlParts::default()
        };

        let parsed = UrlParts::parse(raw).map_err(|e| {
            tracing::warn!("rejecting malformed url {:?}", raw);
            e
        })?;
        if parsed.host.is_none() {
            if let Some(bucket) = default.bucket() {
                tracing::debug!("no bucket in {:?}, using default {}", raw, bucket);
            }
        }

        Ok(Self {
            url: Url::from_parts(parsed.or(defaults)),
        })
    }

    /// Bucket name, i.e. the host. Empty when none is set.
    pub fn bucket(&self) -> &str {
        self.url.host().unwrap_or("")
    }

    /// Overwrite the host. No bucket-name validation is done.
    pub fn set_bucket(&mut self, bucket: impl Into<String>) {
        self.url.set_host(bucket);
    }

    /// Object key: the path with one leading `/` removed. Empty when no path is set.
    pub fn key(&self) -> &str {
        let path = self.url.path();
        path.strip_prefix(SEPARATOR).unwrap_or(path)
    }

    /// Store `/` followed by `key`.
    ///
    /// One leading `/` on `key` is dropped first, so `set_key("/a")` and
    /// `set_key("a")` both store `/a`.
    pub fn set_key(&mut self, key: &str) {
        let key = key.strip_prefix(SEPARATOR).unwrap_or(key);
        let mut path = String::with_capacity(key.len() + 1);
        path.push(SEPARATOR);
        path.push_str(key);
        self.url.set_path(path);
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme().unwrap_or(DEFAULT_SCHEME)
    }

    pub fn query(&self) -> &QueryString {
        self.url.query()
    }

    pub fn query_mut(&mut self) -> &mut QueryString {
        self.url.query_mut()
    }

    /// The embedded generic URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn url_mut(&mut self) -> &mut Url {
        &mut self.url
    }

    pub fn into_url(self) -> Url {
        self.url
    }
}

impl From<Url> for BucketUrl {
    fn from(url: Url) -> Self {
        Self { url }
    }
}

impl fmt::Display for BucketUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.url, f)
    }
}

/// Parses with no default bucket.
impl FromStr for BucketUrl {
    type Err = MalformedUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::factory(s, &BucketDefault::None)
    }
}

impl Serialize for BucketUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BucketUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests;
