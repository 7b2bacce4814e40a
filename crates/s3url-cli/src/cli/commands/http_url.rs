//! `s3url http-url <url>` – print the HTTP location of an object.

use anyhow::Result;
use s3url_core::{BucketDefault, BucketUrl, HttpEndpoint};

pub fn run_http_url(raw: &str, default: &BucketDefault, endpoint: &HttpEndpoint) -> Result<()> {
    let url = BucketUrl::factory(raw, default)?;
    println!("{}", url.http_url(endpoint)?);
    Ok(())
}
