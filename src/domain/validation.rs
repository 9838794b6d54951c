//! Input validators for operator answers.
//!
//! Predicates return `bool`; parsers return [`ValidationFailure`] so the
//! prompt loop can show the reason and ask again.

use std::fmt;
use std::net::IpAddr;

use url::{Host, Url};

use crate::ports::HostResolver;

/// Length of a CIF API token.
pub const TOKEN_LENGTH: usize = 80;

/// Recoverable rejection of a single answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure(String);

impl ValidationFailure {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host and optional port extracted from a bare hostname or a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkLocation {
    pub host: String,
    pub port: Option<u16>,
}

impl NetworkLocation {
    /// Extract the network location from `example.org`, `example.org:8443`,
    /// `https://example.org/path`, or an IP literal.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Ok(ip) = input.trim_start_matches('[').trim_end_matches(']').parse::<IpAddr>() {
            return Some(Self { host: ip.to_string(), port: None });
        }

        let url = if input.contains("://") {
            Url::parse(input).ok()?
        } else {
            Url::parse(&format!("http://{}", input)).ok()?
        };

        let host = match url.host()? {
            Host::Domain(domain) => domain.to_string(),
            Host::Ipv4(addr) => addr.to_string(),
            Host::Ipv6(addr) => addr.to_string(),
        };
        if host.is_empty() {
            return None;
        }

        Some(Self { host, port: url.port() })
    }

    /// `host[:port]`, bracketing IPv6 literals.
    pub fn authority(&self) -> String {
        let host =
            if self.host.contains(':') { format!("[{}]", self.host) } else { self.host.clone() };
        match self.port {
            Some(port) => format!("{}:{}", host, port),
            None => host,
        }
    }
}

/// True when the host part of `input` resolves.
pub fn resolvable<R: HostResolver + ?Sized>(resolver: &R, input: &str) -> bool {
    match NetworkLocation::parse(input) {
        Some(location) => resolver.resolves(&location.host),
        None => false,
    }
}

/// True for absolute URLs that carry both a scheme and a host.
pub fn well_formed_url(input: &str) -> bool {
    match Url::parse(input.trim()) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// True for exactly 80 lowercase ASCII letters or digits, ignoring a trailing newline.
pub fn token_pattern(input: &str) -> bool {
    let token = input.trim_end_matches(['\r', '\n']);
    token.len() == TOKEN_LENGTH
        && token.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
}

/// True for non-empty strings of ASCII letters, digits, `-` and `_`.
pub fn identifier_pattern(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Parse a strictly positive integer.
pub fn positive_integer(input: &str) -> Result<u32, ValidationFailure> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(0) => Err(ValidationFailure::new(format!("{} must be greater than zero", trimmed))),
        Ok(value) => Ok(value),
        Err(_) => {
            Err(ValidationFailure::new(format!("{} is not a positive whole number", trimmed)))
        }
    }
}

/// Parse a yes/no answer; an empty answer takes `default`.
pub fn yes_no(input: &str, default: bool) -> Result<bool, ValidationFailure> {
    match input.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(ValidationFailure::new(format!("{} is not a yes/no answer", other))),
    }
}
