//! Sysconfig command implementation.

use crate::app::api::{RenderOutcome, SysconfigOptions};
use crate::domain::{AppError, CertificateStrategy, validation};

pub fn run_sysconfig(options: SysconfigOptions) -> Result<(), AppError> {
    match crate::app::api::sysconfig(&options)? {
        RenderOutcome::Written(path) => println!("Wrote file to {}", path),
        RenderOutcome::Skipped(_) => eprintln!("Not writing file, add -f to override"),
    }
    Ok(())
}

pub(super) fn parse_server_base_url(value: &str) -> Result<String, String> {
    if validation::well_formed_url(value) {
        Ok(value.to_string())
    } else {
        Err(format!("{} is an invalid url", value))
    }
}

pub(super) fn parse_certificate_strategy(value: &str) -> Result<CertificateStrategy, String> {
    value.parse()
}
