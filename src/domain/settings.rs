//! Typed field sets for each module.
//!
//! Field names are the placeholders of the matching template under
//! `src/assets/templates/`.

use serde::Serialize;

use super::certificate::CertificateStrategy;
use super::choice::TrafficLightProtocol;
use super::module::Module;
use super::secret;

const SECONDS_PER_DAY: u64 = 86_400;

/// Values rendered into a module's artifact.
pub trait ModuleSettings: Serialize {
    const MODULE: Module;
}

/// `chnserver.env`.
#[derive(Debug, Clone, Serialize)]
pub struct ServerSettings {
    pub server_base_url: String,
    pub certificate_strategy: CertificateStrategy,
    pub superuser_password: String,
}

impl ServerSettings {
    /// Settings with a freshly generated superuser password.
    pub fn new(server_base_url: impl Into<String>, certificate_strategy: CertificateStrategy) -> Self {
        Self {
            server_base_url: server_base_url.into(),
            certificate_strategy,
            superuser_password: secret::generate_password(),
        }
    }
}

impl ModuleSettings for ServerSettings {
    const MODULE: Module = Module::ChnServer;
}

/// `mnemosyne.env`.
#[derive(Debug, Clone, Serialize)]
pub struct RetentionSettings {
    pub retention_days: u32,
    pub retention_seconds: u64,
}

impl RetentionSettings {
    pub fn new(retention_days: u32) -> Self {
        Self { retention_days, retention_seconds: u64::from(retention_days) * SECONDS_PER_DAY }
    }
}

impl ModuleSettings for RetentionSettings {
    const MODULE: Module = Module::Mnemosyne;
}

/// `hpfeeds-cif.env`.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundFeedSettings {
    pub cif_host: String,
    pub cif_token: String,
    pub cif_provider: String,
    pub cif_tlp: TrafficLightProtocol,
    pub ident: String,
    pub secret: String,
}

impl OutboundFeedSettings {
    /// Settings with a generated hpfeeds ident and secret.
    pub fn new(
        cif_host: impl Into<String>,
        cif_token: impl Into<String>,
        cif_provider: impl Into<String>,
        cif_tlp: TrafficLightProtocol,
    ) -> Self {
        Self {
            cif_host: cif_host.into(),
            cif_token: cif_token.into(),
            cif_provider: cif_provider.into(),
            cif_tlp,
            ident: secret::generate_ident(Module::HpfeedsCif.name()),
            secret: secret::generate_password(),
        }
    }
}

impl ModuleSettings for OutboundFeedSettings {
    const MODULE: Module = Module::HpfeedsCif;
}

/// `cif-hpfeeds.env`.
#[derive(Debug, Clone, Serialize)]
pub struct InboundFeedSettings {
    pub cif_host: String,
    pub cif_token: String,
    pub poll_interval_minutes: u32,
    pub ident: String,
    pub secret: String,
}

impl InboundFeedSettings {
    /// Settings with a generated hpfeeds ident and secret.
    pub fn new(
        cif_host: impl Into<String>,
        cif_token: impl Into<String>,
        poll_interval_minutes: u32,
    ) -> Self {
        Self {
            cif_host: cif_host.into(),
            cif_token: cif_token.into(),
            poll_interval_minutes,
            ident: secret::generate_ident(Module::CifHpfeeds.name()),
            secret: secret::generate_password(),
        }
    }
}

impl ModuleSettings for InboundFeedSettings {
    const MODULE: Module = Module::CifHpfeeds;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retention_converts_days_to_seconds() {
        let settings = RetentionSettings::new(30);
        assert_eq!(settings.retention_seconds, 2_592_000);
    }

    #[test]
    fn feeds_get_distinct_generated_credentials() {
        let outbound = OutboundFeedSettings::new(
            "https://cif.example.org",
            "t".repeat(80),
            "my-org",
            TrafficLightProtocol::Green,
        );
        let inbound = InboundFeedSettings::new("https://cif.example.org", "t".repeat(80), 10);

        assert!(outbound.ident.starts_with("hpfeeds-cif-"));
        assert!(inbound.ident.starts_with("cif-hpfeeds-"));
        assert_ne!(outbound.secret, inbound.secret);
        assert_eq!(outbound.secret.len(), secret::PASSWORD_LENGTH);
    }

    #[test]
    fn server_settings_generate_password() {
        let settings = ServerSettings::new("https://chn.example.org", CertificateStrategy::Certbot);
        assert_eq!(settings.superuser_password.len(), secret::PASSWORD_LENGTH);
    }
}
