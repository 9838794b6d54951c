pub mod certificate;
pub mod choice;
pub mod config;
pub mod error;
pub mod module;
pub mod secret;
pub mod settings;
pub mod validation;

pub use certificate::{CertificateStrategy, normalize_cert_strategy};
pub use choice::{Choice, TrafficLightProtocol};
pub use config::WizardConfig;
pub use error::AppError;
pub use module::{ArtifactState, Module, ModuleState};
pub use settings::{
    InboundFeedSettings, ModuleSettings, OutboundFeedSettings, RetentionSettings, ServerSettings,
};
pub use validation::{NetworkLocation, ValidationFailure};
