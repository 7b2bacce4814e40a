//! `s3url config` – show config path and effective settings.

use anyhow::Result;
use s3url_core::config::S3UrlConfig;
use std::path::Path;

pub fn run_config(cfg: &S3UrlConfig, path: &Path) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
