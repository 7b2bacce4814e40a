//! CLI command handlers.

mod completions;
mod config;
mod http_url;
mod parse;

use s3url_core::config::S3UrlConfig;
use s3url_core::BucketDefault;

pub use completions::{run_completions, run_man};
pub use config::run_config;
pub use http_url::run_http_url;
pub use parse::run_parse;

/// `--bucket` wins over the configured default.
pub fn resolve_default(flag: Option<String>, cfg: &S3UrlConfig) -> BucketDefault {
    match BucketDefault::from(flag) {
        BucketDefault::None => cfg.bucket_default(),
        explicit => explicit,
    }
}
