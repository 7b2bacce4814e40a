//! Default bucket supplied to the factory.

/// Bucket used when a parsed URL has no host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BucketDefault {
    #[default]
    None,
    Bucket(String),
}

impl BucketDefault {
    pub fn bucket(&self) -> Option<&str> {
        match self {
            BucketDefault::None => None,
            BucketDefault::Bucket(b) => Some(b.as_str()),
        }
    }
}

/// An empty bucket name counts as no default.
impl From<Option<String>> for BucketDefault {
    fn from(bucket: Option<String>) -> Self {
        match bucket {
            Some(b) if !b.is_empty() => BucketDefault::Bucket(b),
            _ => BucketDefault::None,
        }
    }
}

impl From<&str> for BucketDefault {
    fn from(bucket: &str) -> Self {
        Some(bucket.to_string()).into()
    }
}
