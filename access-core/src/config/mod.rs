use serde::Deserialize;

use crate::services::ServiceError;

/// Collaborator endpoint settings for guest secret verification.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyServiceSettings {
    /// Base URL of the posts API (e.g. http://localhost:9010).
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub verify_service: VerifyServiceSettings,
}

impl Settings {
    pub fn load() -> Result<Self, ServiceError> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
