//! Endpoint resolution
//!
//! A single server host yields three URLs: the log stream, the directive
//! stream, and the REST API base. Loopback hosts use plain `ws`/`http`;
//! anything else uses `wss`/`https` unless the caller forces a scheme.

use std::borrow::Cow;
use std::net::{IpAddr, Ipv6Addr};

use sentinel_core::prelude::*;
use url::{Host, Url};

/// Default path of the log stream endpoint
pub const DEFAULT_LOGS_PATH: &str = "/ws/logs";

/// Default path of the directive stream endpoint
pub const DEFAULT_DIRECTIVES_PATH: &str = "/ws/directives";

/// Scheme selection policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransportSecurity {
    /// Plain schemes for loopback hosts, secure schemes otherwise
    #[default]
    Auto,
    /// Always `wss`/`https`
    Secure,
    /// Always `ws`/`http`
    Insecure,
}

/// Resolved server URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub logs: Url,
    pub directives: Url,
    pub api_base: Url,
}

impl Endpoints {
    /// Resolve endpoints for `host` (`name[:port]`, no scheme).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Endpoint`] if `host` carries a scheme, a path, or is
    /// not a valid host.
    pub fn resolve(
        host: &str,
        logs_path: &str,
        directives_path: &str,
        security: TransportSecurity,
    ) -> Result<Self> {
        let host = host.trim();
        if host.is_empty() {
            return Err(Error::endpoint("host is empty"));
        }
        if host.contains("://") || host.contains('/') {
            return Err(Error::endpoint(format!(
                "expected host[:port] without scheme or path, got {host:?}"
            )));
        }

        let host = bracket_ipv6(host);
        let host = host.as_ref();

        let secure = match security {
            TransportSecurity::Secure => true,
            TransportSecurity::Insecure => false,
            TransportSecurity::Auto => !is_loopback_host(host),
        };
        let (ws_scheme, http_scheme) = if secure {
            ("wss", "https")
        } else {
            ("ws", "http")
        };

        let ws_base = parse_base(ws_scheme, host)?;
        let api_base = parse_base(http_scheme, host)?;

        let logs = join_path(&ws_base, logs_path)?;
        let directives = join_path(&ws_base, directives_path)?;

        debug!(
            "Resolved endpoints: logs={} directives={} api={}",
            logs, directives, api_base
        );

        Ok(Self {
            logs,
            directives,
            api_base,
        })
    }

    /// Resolve with the default stream paths.
    pub fn for_host(host: &str, security: TransportSecurity) -> Result<Self> {
        Self::resolve(host, DEFAULT_LOGS_PATH, DEFAULT_DIRECTIVES_PATH, security)
    }

    pub fn is_secure(&self) -> bool {
        self.api_base.scheme() == "https"
    }
}

/// Return `true` if `host` (`name[:port]`) names the local machine.
///
/// Matches `localhost`, any IPv4 loopback address, and `::1`.
pub fn is_loopback_host(host: &str) -> bool {
    let Ok(url) = Url::parse(&format!("http://{}/", bracket_ipv6(host))) else {
        return false;
    };
    match url.host() {
        Some(Host::Domain(name)) => name.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
        Some(Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
        None => false,
    }
}

/// Wrap a bare IPv6 literal (`::1`) in brackets so it can sit in a URL
/// authority. Anything else is returned unchanged.
fn bracket_ipv6(host: &str) -> Cow<'_, str> {
    if host.parse::<Ipv6Addr>().is_ok() {
        Cow::Owned(format!("[{host}]"))
    } else {
        Cow::Borrowed(host)
    }
}

fn parse_base(scheme: &str, host: &str) -> Result<Url> {
    let url = Url::parse(&format!("{scheme}://{host}/"))
        .map_err(|e| Error::endpoint(format!("invalid host {host:?}: {e}")))?;
    if url.host().is_none() {
        return Err(Error::endpoint(format!("invalid host {host:?}")));
    }
    Ok(url)
}

fn join_path(base: &Url, path: &str) -> Result<Url> {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    base.join(&path)
        .map_err(|e| Error::endpoint(format!("invalid path {path:?}: {e}")))
}
