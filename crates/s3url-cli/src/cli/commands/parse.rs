//! `s3url parse <url>` – print the parts of a URL.

use anyhow::Result;
use s3url_core::{BucketDefault, BucketUrl};
use serde_json::{json, Value};

pub fn run_parse(raw: &str, default: &BucketDefault, as_json: bool) -> Result<()> {
    let url = BucketUrl::factory(raw, default)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&describe(&url))?);
        return Ok(());
    }

    println!("{:<8} {}", "scheme", url.scheme());
    println!("{:<8} {}", "bucket", url.bucket());
    println!("{:<8} {}", "key", url.key());
    for (k, v) in url.query().iter() {
        println!("{:<8} {}={}", "query", k, v);
    }
    Ok(())
}

fn describe(url: &BucketUrl) -> Value {
    let query: Vec<Value> = url.query().iter().map(|(k, v)| json!([k, v])).collect();
    json!({
        "url": url.to_string(),
        "scheme": url.scheme(),
        "bucket": url.bucket(),
        "key": url.key(),
        "user": url.url().user(),
        "port": url.url().port(),
        "query": query,
        "fragment": url.url().fragment(),
    })
}
