use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::Serialize;

use super::choice::Choice;
use super::validation::NetworkLocation;

/// How the CHN server obtains its TLS certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CertificateStrategy {
    /// Issued by an ACME provider such as LetsEncrypt.
    #[serde(rename = "CERTBOT")]
    Certbot,
    /// Operator supplies an already signed certificate.
    #[serde(rename = "BYO")]
    BringYourOwn,
    /// Generated self-signed certificate.
    #[serde(rename = "SELFSIGNED")]
    SelfSigned,
}

impl CertificateStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateStrategy::Certbot => "CERTBOT",
            CertificateStrategy::BringYourOwn => "BYO",
            CertificateStrategy::SelfSigned => "SELFSIGNED",
        }
    }
}

impl Choice for CertificateStrategy {
    const ALL: &'static [Self] = &[
        CertificateStrategy::Certbot,
        CertificateStrategy::BringYourOwn,
        CertificateStrategy::SelfSigned,
    ];

    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn description(&self) -> &'static str {
        match self {
            CertificateStrategy::Certbot => {
                "Signed certificate by an ACME provider such as LetsEncrypt. Most folks will want \
                 to use this. You must ensure your URL is accessible from the ACME hosts for \
                 verification here"
            }
            CertificateStrategy::BringYourOwn => {
                "Bring Your Own. Use this if you already have a signed cert, or if you want a \
                 real certificate without CertBot"
            }
            CertificateStrategy::SelfSigned => "Generate a simple self-signed certificate",
        }
    }
}

impl fmt::Display for CertificateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CertificateStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CertificateStrategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("'{}' is not one of {}", s, CertificateStrategy::names().join(", "))
            })
    }
}

/// Downgrade ACME issuance to self-signed for hosts ACME cannot validate.
///
/// IP literals and names starting with `localhost` never get an ACME
/// certificate. `BringYourOwn` and `SelfSigned` pass through.
pub fn normalize_cert_strategy(strategy: CertificateStrategy, host: &str) -> CertificateStrategy {
    if strategy != CertificateStrategy::Certbot {
        return strategy;
    }

    let host =
        NetworkLocation::parse(host).map(|loc| loc.host).unwrap_or_else(|| host.to_string());
    if host.parse::<IpAddr>().is_ok() || host.starts_with("localhost") {
        CertificateStrategy::SelfSigned
    } else {
        strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certbot_on_ip_literal_downgrades() {
        assert_eq!(
            normalize_cert_strategy(CertificateStrategy::Certbot, "127.0.0.1"),
            CertificateStrategy::SelfSigned
        );
        assert_eq!(
            normalize_cert_strategy(CertificateStrategy::Certbot, "::1"),
            CertificateStrategy::SelfSigned
        );
    }

    #[test]
    fn certbot_on_localhost_downgrades() {
        assert_eq!(
            normalize_cert_strategy(CertificateStrategy::Certbot, "localhost"),
            CertificateStrategy::SelfSigned
        );
        assert_eq!(
            normalize_cert_strategy(CertificateStrategy::Certbot, "localhost.localdomain"),
            CertificateStrategy::SelfSigned
        );
    }

    #[test]
    fn certbot_on_public_name_is_kept() {
        assert_eq!(
            normalize_cert_strategy(CertificateStrategy::Certbot, "example.org"),
            CertificateStrategy::Certbot
        );
        assert_eq!(
            normalize_cert_strategy(CertificateStrategy::Certbot, "https://example.org/"),
            CertificateStrategy::Certbot
        );
    }

    #[test]
    fn other_strategies_pass_through() {
        assert_eq!(
            normalize_cert_strategy(CertificateStrategy::BringYourOwn, "127.0.0.1"),
            CertificateStrategy::BringYourOwn
        );
        assert_eq!(
            normalize_cert_strategy(CertificateStrategy::SelfSigned, "example.org"),
            CertificateStrategy::SelfSigned
        );
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("byo".parse::<CertificateStrategy>(), Ok(CertificateStrategy::BringYourOwn));
        assert_eq!(
            "SELFSIGNED".parse::<CertificateStrategy>(),
            Ok(CertificateStrategy::SelfSigned)
        );
        assert!("LETSENCRYPT".parse::<CertificateStrategy>().is_err());
    }
}
