use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Guest secret verification failed")]
    VerificationFailed,

    #[error("Verification service unavailable: {0}")]
    VerificationUnavailable(#[source] anyhow::Error),

    #[error("No guest verification is being prompted")]
    NotPrompting,

    #[error("No secret has been entered")]
    MissingSecretInput,

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
