use std::io;

use thiserror::Error;

/// Library-wide error type for quickstart operations.
///
/// Everything here aborts the run. Operator input that fails validation is
/// a [`ValidationFailure`](super::ValidationFailure) instead and never leaves
/// the prompt loop.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure without path context.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A file could not be read or written.
    #[error("Failed to access '{path}': {source}")]
    Resource {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A template or manifest fragment is missing from the asset set.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// A template references a placeholder the module does not supply.
    #[error("Template '{template}' does not match its module settings: {reason}")]
    TemplateMismatch { template: String, reason: String },

    /// A template contains block or comment syntax.
    #[error("Template '{template}' uses disallowed syntax '{token}'")]
    TemplateSyntaxNotAllowed { template: String, token: String },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// `quickstart.toml` could not be parsed.
    #[error("Invalid quickstart.toml: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Input ended before a required answer was given.
    #[error("Input closed before configuration was complete")]
    InputClosed,

    /// The terminal prompt itself failed.
    #[error("{0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Attach the offending path to an I/O error.
    pub fn resource<P: Into<String>>(path: P, source: io::Error) -> Self {
        AppError::Resource { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind` view for callers that branch on it.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Resource { source, .. } => source.kind(),
            AppError::AssetNotFound(_) => io::ErrorKind::NotFound,
            AppError::TemplateMismatch { .. }
            | AppError::TemplateSyntaxNotAllowed { .. }
            | AppError::Configuration(_)
            | AppError::TomlParse(_) => io::ErrorKind::InvalidData,
            AppError::InputClosed => io::ErrorKind::UnexpectedEof,
            AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_error_keeps_source_kind() {
        let err = AppError::resource(
            "config/sysconfig/chnserver.env",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(err.to_string().contains("config/sysconfig/chnserver.env"));
    }

    #[test]
    fn template_mismatch_is_invalid_data() {
        let err = AppError::TemplateMismatch {
            template: "templates/mnemosyne.env.tmpl".into(),
            reason: "undefined value".into(),
        };
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn input_closed_is_unexpected_eof() {
        assert_eq!(AppError::InputClosed.kind(), io::ErrorKind::UnexpectedEof);
    }
}
