//! chn-quickstart: guided configuration of a CHN server deployment.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, ModuleReport, ModuleStatus, RenderOutcome, RunSummary, SysconfigOptions, guide,
    guide_at, guide_with, status, status_at, sysconfig, sysconfig_at,
};
pub use domain::{CertificateStrategy, Module, ModuleState};
