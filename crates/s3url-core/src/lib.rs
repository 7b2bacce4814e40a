pub mod config;
pub mod logging;

pub mod bucket_url;
pub mod error;
pub mod url_model;

pub use bucket_url::{BucketDefault, BucketUrl, HttpEndpoint};
pub use error::MalformedUrlError;
