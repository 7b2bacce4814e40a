//! HTTP(S) location of a bucket object.

use serde::{Deserialize, Serialize};

use super::BucketUrl;
use crate::error::MalformedUrlError;
use crate::url_model::encode_path;

/// Endpoint used to turn an `s3://` identifier into an HTTP URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpEndpoint {
    /// Service hostname, e.g. `s3.amazonaws.com` or `minio.local:9000`.
    pub hostname: String,
    /// Use `https` (default) or plain `http`.
    pub https: bool,
    /// Path-style (`host/bucket/key`) instead of virtual-hosted (`bucket.host/key`).
    pub path_style: bool,
}

impl Default for HttpEndpoint {
    fn default() -> Self {
        Self {
            hostname: "s3.amazonaws.com".to_string(),
            https: true,
            path_style: false,
        }
    }
}

impl HttpEndpoint {
    fn scheme(&self) -> &'static str {
        if self.https {
            "https"
        } else {
            "http"
        }
    }
}

impl BucketUrl {
    /// Render the object's HTTP location for `endpoint`, keeping the query string.
    ///
    /// Fails when no bucket is set or the result is not a valid HTTP URL.
    pub fn http_url(&self, endpoint: &HttpEndpoint) -> Result<url::Url, MalformedUrlError> {
        let bucket = self.bucket();
        if bucket.is_empty() {
            return Err(MalformedUrlError::new(self.to_string()));
        }

        let key = encode_path(self.key());
        let mut rendered = if endpoint.path_style {
            format!("{}://{}/{}/{}", endpoint.scheme(), endpoint.hostname, bucket, key)
        } else {
            format!("{}://{}.{}/{}", endpoint.scheme(), bucket, endpoint.hostname, key)
        };
        if !self.query().is_empty() {
            rendered.push('?');
            rendered.push_str(&self.query().to_string());
        }

        url::Url::parse(&rendered).map_err(|e| MalformedUrlError::with_source(rendered, e))
    }
}
