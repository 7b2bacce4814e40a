use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::bucket_url::{BucketDefault, HttpEndpoint};

/// Global configuration loaded from `~/.config/s3url/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3UrlConfig {
    /// Bucket used when a URL omits one (`s3:///key`). Empty or missing = no default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// HTTP endpoint for rendering object locations.
    #[serde(default)]
    pub endpoint: HttpEndpoint,
}

impl S3UrlConfig {
    pub fn bucket_default(&self) -> BucketDefault {
        self.bucket.clone().into()
    }

    pub fn http_endpoint(&self) -> &HttpEndpoint {
        &self.endpoint
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("s3url")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<S3UrlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = S3UrlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<S3UrlConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: S3UrlConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
