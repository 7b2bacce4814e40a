//! Generic URL value.
//!
//! [`Url`] is a plain record of URL components with accessors for each. It
//! does not validate what is stored in it; parsing is done by [`UrlParts`],
//! which delegates to the `url` crate.
//!
//! The path is held decoded and percent-encoded again by `Display`, so
//! parsing the displayed form yields the same path.

mod parts;
mod path;
mod query;

use std::fmt;

pub use parts::UrlParts;
pub use query::QueryString;

pub(crate) use path::encode_path;

/// Mutable URL value: scheme, host, credentials, port, path, query, fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Url {
    scheme: Option<String>,
    host: Option<String>,
    user: Option<String>,
    password: Option<String>,
    port: Option<u16>,
    path: Option<String>,
    query: QueryString,
    fragment: Option<String>,
}

impl Url {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        scheme: Option<String>,
        host: Option<String>,
        user: Option<String>,
        password: Option<String>,
        port: Option<u16>,
        path: Option<String>,
        query: QueryString,
        fragment: Option<String>,
    ) -> Self {
        Self {
            scheme,
            host,
            user,
            password,
            port,
            path,
            query,
            fragment,
        }
    }

    /// Build from parsed components; a non-empty query is decoded into a [`QueryString`].
    pub fn from_parts(parts: UrlParts) -> Self {
        let query = parts
            .query
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(QueryString::parse)
            .unwrap_or_default();
        Self::new(
            parts.scheme,
            parts.host,
            parts.user,
            parts.password,
            parts.port,
            parts.path,
            query,
            parts.fragment,
        )
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.scheme = Some(scheme.into());
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = Some(host.into());
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Set or clear credentials. A password without a user is dropped.
    pub fn set_credentials(&mut self, user: Option<String>, password: Option<String>) {
        self.password = user.as_ref().and(password);
        self.user = user;
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    /// Decoded path; empty when none was set.
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or("")
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = Some(path.into());
    }

    pub fn query(&self) -> &QueryString {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut QueryString {
        &mut self.query
    }

    pub fn set_query(&mut self, query: QueryString) {
        self.query = query;
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn set_fragment(&mut self, fragment: Option<String>) {
        self.fragment = fragment;
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{}:", scheme)?;
        }
        if self.scheme.is_some() || self.host.is_some() {
            f.write_str("//")?;
        }
        if let Some(user) = &self.user {
            f.write_str(user)?;
            if let Some(password) = &self.password {
                write!(f, ":{}", password)?;
            }
            f.write_str("@")?;
        }
        if let Some(host) = &self.host {
            f.write_str(host)?;
        }
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        write!(f, "{}", encode_path(self.path()))?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}
