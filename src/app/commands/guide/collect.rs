//! Field collection for each module.

use crate::app::prompt::PromptLoop;
use crate::domain::validation::{self, NetworkLocation, ValidationFailure};
use crate::domain::{
    AppError, CertificateStrategy, InboundFeedSettings, ModuleSettings, OutboundFeedSettings,
    RetentionSettings, ServerSettings, TrafficLightProtocol, normalize_cert_strategy,
};
use crate::ports::{Console, HostResolver, NoticeLevel};

/// A module field set that can be gathered from the operator.
pub trait Collect: ModuleSettings + Sized {
    fn collect<C, R>(prompts: &mut PromptLoop<'_, C, R>) -> Result<Self, AppError>
    where
        C: Console + ?Sized,
        R: HostResolver + ?Sized;
}

impl Collect for ServerSettings {
    fn collect<C, R>(prompts: &mut PromptLoop<'_, C, R>) -> Result<Self, AppError>
    where
        C: Console + ?Sized,
        R: HostResolver + ?Sized,
    {
        let resolver = prompts.resolver();
        prompts.notice(
            NoticeLevel::Heading,
            "Please enter the domain for your CHN Instance. Note that this must be a resolvable domain.",
        );
        let location = prompts.ask("Domain", |answer| resolvable_location(resolver, answer))?;

        let requested: CertificateStrategy = prompts.choose(
            "Please enter a Certificate Strategy. This should be one of:",
            "Certificate Strategy",
        )?;
        let strategy = normalize_cert_strategy(requested, &location.host);
        if strategy != requested {
            prompts.notice(
                NoticeLevel::Info,
                &format!(
                    "{} cannot issue certificates for {}; using {} instead",
                    requested, location.host, strategy
                ),
            );
        }

        Ok(ServerSettings::new(format!("https://{}", location.authority()), strategy))
    }
}

impl Collect for RetentionSettings {
    fn collect<C, R>(prompts: &mut PromptLoop<'_, C, R>) -> Result<Self, AppError>
    where
        C: Console + ?Sized,
        R: HostResolver + ?Sized,
    {
        let days = prompts.ask(
            "How many days of honeypot data should be kept in the database",
            validation::positive_integer,
        )?;
        Ok(RetentionSettings::new(days))
    }
}

impl Collect for OutboundFeedSettings {
    fn collect<C, R>(prompts: &mut PromptLoop<'_, C, R>) -> Result<Self, AppError>
    where
        C: Console + ?Sized,
        R: HostResolver + ?Sized,
    {
        let resolver = prompts.resolver();
        let host = prompts.ask("CIF server URL", |answer| cif_url(resolver, answer))?;
        let token = prompts.ask("CIF API token (write access)", api_token)?;
        let provider = prompts.ask("CIF provider (your organization identifier)", organization)?;
        let tlp: TrafficLightProtocol = prompts.choose(
            "Please choose the TLP level for shared indicators:",
            "TLP",
        )?;
        Ok(OutboundFeedSettings::new(host, token, provider, tlp))
    }
}

impl Collect for InboundFeedSettings {
    fn collect<C, R>(prompts: &mut PromptLoop<'_, C, R>) -> Result<Self, AppError>
    where
        C: Console + ?Sized,
        R: HostResolver + ?Sized,
    {
        let resolver = prompts.resolver();
        let host = prompts.ask("CIF server URL", |answer| cif_url(resolver, answer))?;
        let token = prompts.ask("CIF API token (read access)", api_token)?;
        let interval = prompts.ask(
            "How often, in minutes, should CIF be polled for new indicators",
            validation::positive_integer,
        )?;
        Ok(InboundFeedSettings::new(host, token, interval))
    }
}

fn resolvable_location<R: HostResolver + ?Sized>(
    resolver: &R,
    answer: &str,
) -> Result<NetworkLocation, ValidationFailure> {
    let not_active = || ValidationFailure::new(format!("{} is not an active domain name", answer));
    if !validation::resolvable(resolver, answer) {
        return Err(not_active());
    }
    NetworkLocation::parse(answer).ok_or_else(not_active)
}

fn cif_url<R: HostResolver + ?Sized>(resolver: &R, answer: &str) -> Result<String, ValidationFailure> {
    if !validation::well_formed_url(answer) {
        return Err(ValidationFailure::new(format!(
            "{} is not a valid URL, for example https://cif.example.org",
            answer
        )));
    }
    if !validation::resolvable(resolver, answer) {
        return Err(ValidationFailure::new(format!("{} does not resolve", answer)));
    }
    Ok(answer.to_string())
}

fn api_token(answer: &str) -> Result<String, ValidationFailure> {
    if validation::token_pattern(answer) {
        Ok(answer.to_string())
    } else {
        Err(ValidationFailure::new(format!(
            "API tokens are exactly {} lowercase letters and digits",
            validation::TOKEN_LENGTH
        )))
    }
}

fn organization(answer: &str) -> Result<String, ValidationFailure> {
    if validation::identifier_pattern(answer) {
        Ok(answer.to_string())
    } else {
        Err(ValidationFailure::new(format!(
            "{} is not a valid identifier (letters, digits, '-' and '_' only)",
            answer
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ScriptedConsole, StaticResolver};

    fn token() -> String {
        "abc123".chars().cycle().take(validation::TOKEN_LENGTH).collect()
    }

    #[test]
    fn server_retries_unresolvable_domain() {
        let mut console = ScriptedConsole::new(["nowhere.invalid", "chn.example.org", "CERTBOT"]);
        let resolver = StaticResolver::new(["chn.example.org"]);
        let settings =
            ServerSettings::collect(&mut PromptLoop::new(&mut console, &resolver)).unwrap();

        assert_eq!(settings.server_base_url, "https://chn.example.org");
        assert_eq!(settings.certificate_strategy, CertificateStrategy::Certbot);
        assert_eq!(
            console.messages(NoticeLevel::Failure),
            vec!["nowhere.invalid is not an active domain name"]
        );
    }

    #[test]
    fn server_on_ip_downgrades_certbot_with_notice() {
        let mut console = ScriptedConsole::new(["127.0.0.1", "certbot"]);
        let resolver = StaticResolver::default();
        let settings =
            ServerSettings::collect(&mut PromptLoop::new(&mut console, &resolver)).unwrap();

        assert_eq!(settings.server_base_url, "https://127.0.0.1");
        assert_eq!(settings.certificate_strategy, CertificateStrategy::SelfSigned);
        assert_eq!(console.messages(NoticeLevel::Info).len(), 1);
    }

    #[test]
    fn server_accepts_url_and_keeps_port() {
        let mut console = ScriptedConsole::new(["https://chn.example.org:8443/", "BYO"]);
        let resolver = StaticResolver::new(["chn.example.org"]);
        let settings =
            ServerSettings::collect(&mut PromptLoop::new(&mut console, &resolver)).unwrap();
        assert_eq!(settings.server_base_url, "https://chn.example.org:8443");
    }

    #[test]
    fn outbound_feed_validates_each_field() {
        let mut console = ScriptedConsole::new([
            "cif.example.org".to_string(),
            "https://cif.example.org".to_string(),
            "TOKEN".to_string(),
            token(),
            "my org".to_string(),
            "my-org".to_string(),
            "green".to_string(),
        ]);
        let resolver = StaticResolver::new(["cif.example.org"]);
        let settings =
            OutboundFeedSettings::collect(&mut PromptLoop::new(&mut console, &resolver)).unwrap();

        assert_eq!(settings.cif_host, "https://cif.example.org");
        assert_eq!(settings.cif_token, token());
        assert_eq!(settings.cif_provider, "my-org");
        assert_eq!(settings.cif_tlp, TrafficLightProtocol::Green);
        assert_eq!(console.messages(NoticeLevel::Failure).len(), 3);
    }

    #[test]
    fn inbound_feed_rejects_unresolvable_cif_host() {
        let mut console = ScriptedConsole::new([
            "https://gone.example.org".to_string(),
            "https://cif.example.org".to_string(),
            token(),
            "0".to_string(),
            "5".to_string(),
        ]);
        let resolver = StaticResolver::new(["cif.example.org"]);
        let settings =
            InboundFeedSettings::collect(&mut PromptLoop::new(&mut console, &resolver)).unwrap();

        assert_eq!(settings.poll_interval_minutes, 5);
        assert_eq!(
            console.messages(NoticeLevel::Failure)[0],
            "https://gone.example.org does not resolve"
        );
    }
}
