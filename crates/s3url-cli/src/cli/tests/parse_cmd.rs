//! Tests for parse and http-url.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_parse() {
    match parse(&["s3url", "parse", "s3://bucket/key"]) {
        CliCommand::Parse { url, bucket, json } => {
            assert_eq!(url, "s3://bucket/key");
            assert!(bucket.is_none());
            assert!(!json);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_with_bucket_and_json() {
    match parse(&["s3url", "parse", "s3:///key", "--bucket", "media", "--json"]) {
        CliCommand::Parse { url, bucket, json } => {
            assert_eq!(url, "s3:///key");
            assert_eq!(bucket.as_deref(), Some("media"));
            assert!(json);
        }
        _ => panic!("expected Parse with --bucket --json"),
    }
}

#[test]
fn cli_parse_http_url() {
    match parse(&["s3url", "http-url", "s3://b/k", "--path-style"]) {
        CliCommand::HttpUrl {
            url,
            bucket,
            path_style,
        } => {
            assert_eq!(url, "s3://b/k");
            assert!(bucket.is_none());
            assert!(path_style);
        }
        _ => panic!("expected HttpUrl"),
    }
}

#[test]
fn cli_parse_requires_url() {
    assert!(Cli::try_parse_from(["s3url", "parse"]).is_err());
}
