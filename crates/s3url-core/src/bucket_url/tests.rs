//! Tests for bucket/key accessors and the factory.

use super::{BucketDefault, BucketUrl};

fn parse(raw: &str) -> BucketUrl {
    BucketUrl::factory(raw, &BucketDefault::None).unwrap()
}

#[test]
fn bucket_and_key_from_full_url() {
    let url = parse("s3://mybucket/path/to/object.txt");
    assert_eq!(url.bucket(), "mybucket");
    assert_eq!(url.key(), "path/to/object.txt");
    assert_eq!(url.scheme(), "s3");
}

#[test]
fn default_bucket_fills_missing_host() {
    let default = BucketDefault::from("default-bucket");
    let url = BucketUrl::factory("s3:///path/to/object.txt", &default).unwrap();
    assert_eq!(url.bucket(), "default-bucket");
    assert_eq!(url.key(), "path/to/object.txt");
}

#[test]
fn explicit_bucket_overrides_default() {
    let default = BucketDefault::from("default-bucket");
    let url = BucketUrl::factory("s3://explicit-bucket/path/to/object.txt", &default).unwrap();
    assert_eq!(url.bucket(), "explicit-bucket");
}

#[test]
fn scheme_defaults_for_path_reference() {
    let default = BucketDefault::from("media");
    let url = BucketUrl::factory("/img/cat.png", &default).unwrap();
    assert_eq!(url.scheme(), "s3");
    assert_eq!(url.url().scheme(), Some("s3"));
    assert_eq!(url.bucket(), "media");
    assert_eq!(url.key(), "img/cat.png");
    assert_eq!(url.to_string(), "s3://media/img/cat.png");
}

#[test]
fn other_scheme_is_kept() {
    let url = parse("gs://bucket/key");
    assert_eq!(url.scheme(), "gs");
}

#[test]
fn query_is_structured_in_order() {
    let url = parse("s3://bucket/key?a=1&b=2");
    let pairs: Vec<_> = url.query().iter().collect();
    assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    assert_eq!(url.key(), "key");
}

#[test]
fn no_query_is_empty() {
    assert!(parse("s3://bucket/key").query().is_empty());
    assert!(parse("s3://bucket/key?").query().is_empty());
}

#[test]
fn malformed_input_fails() {
    let err = BucketUrl::factory("not a valid ::: url", &BucketDefault::None).unwrap_err();
    assert_eq!(err.url, "not a valid ::: url");
}

#[test]
fn set_bucket_roundtrip() {
    let mut url = parse("s3://a/key");
    for b in ["other", "", "Not A Valid Bucket!", "b.with.dots"] {
        url.set_bucket(b);
        assert_eq!(url.bucket(), b);
    }
    assert_eq!(url.key(), "key");
}

#[test]
fn set_key_roundtrip() {
    let mut url = parse("s3://bucket");
    for k in ["a", "dir/sub/file.bin", "", "trailing/", "spaces in name"] {
        url.set_key(k);
        assert_eq!(url.key(), k);
        assert_eq!(url.url().path(), format!("/{k}"));
    }
}

#[test]
fn set_key_strips_one_leading_separator() {
    let mut url = BucketUrl::default();
    url.set_key("/already/rooted");
    assert_eq!(url.url().path(), "/already/rooted");
    assert_eq!(url.key(), "already/rooted");
}

#[test]
fn key_of_missing_path_is_empty() {
    let url = parse("s3://bucket");
    assert_eq!(url.key(), "");
    assert_eq!(BucketUrl::default().key(), "");
    assert_eq!(BucketUrl::default().bucket(), "");
}

#[test]
fn accessors_are_stable() {
    let url = parse("s3://bucket/a/b");
    assert_eq!(url.bucket(), url.bucket());
    assert_eq!(url.key(), url.key());
}

#[test]
fn new_builds_s3_url() {
    let url = BucketUrl::new("logs", "2024/01/app.log");
    assert_eq!(url.to_string(), "s3://logs/2024/01/app.log");
}

#[test]
fn display_roundtrip_through_from_str() {
    let raw = "s3://user:pw@bucket:9000/k?x=1#f";
    let url: BucketUrl = raw.parse().unwrap();
    assert_eq!(url.to_string(), raw);
    assert_eq!(url.url().port(), Some(9000));
    assert_eq!(url.url().fragment(), Some("f"));
}

#[test]
fn key_from_factory_is_decoded() {
    assert_eq!(parse("s3://bucket/my file.txt").key(), "my file.txt");
    assert_eq!(parse("s3://bucket/my%20file.txt").key(), "my file.txt");
    assert_eq!(parse("s3://bucket/café.txt").key(), "café.txt");
}

#[test]
fn key_keeps_dot_segments() {
    assert_eq!(parse("s3://bucket/a/../b.txt").key(), "a/../b.txt");
    assert_eq!(parse("s3://bucket/./x").key(), "./x");
}

#[test]
fn invalid_utf8_escape_is_malformed() {
    assert!(BucketUrl::factory("s3://bucket/%C3%28", &BucketDefault::None).is_err());
}

#[test]
fn string_form_roundtrips_awkward_keys() {
    for key in ["a?b", "x#y", "my file.txt", "100%", "café/naïve.txt", "a/../b", "q=1&r"] {
        let url = BucketUrl::new("bucket", key);
        let back: BucketUrl = url.to_string().parse().unwrap();
        assert_eq!(back.key(), key, "via {url}");
        assert_eq!(back, url);

        let json = serde_json::to_string(&url).unwrap();
        let back: BucketUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(back, url);
    }
}

#[test]
fn serde_as_string() {
    let url = parse("s3://bucket/a.txt");
    let json = serde_json::to_string(&url).unwrap();
    assert_eq!(json, "\"s3://bucket/a.txt\"");
    let back: BucketUrl = serde_json::from_str(&json).unwrap();
    assert_eq!(back, url);

    let bad = serde_json::from_str::<BucketUrl>("\"not a valid ::: url\"");
    assert!(bad.is_err());
}
