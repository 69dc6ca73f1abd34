//! Guest secret verification client.
//!
//! The collaborator posts API holds the secret set at creation time; this
//! module only relays the actor's input and reports the verdict.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

use crate::config::VerifyServiceSettings;
use crate::services::ServiceError;

/// Collaborator check of a guest secret against the server-held value.
#[async_trait]
pub trait GuestVerifier: Send + Sync {
    /// `Ok(true)` when the collaborator accepts the secret for the resource,
    /// `Ok(false)` when it rejects it (wrong secret or any non-2xx reply),
    /// and an error only when the service cannot be reached.
    async fn verify(
        &self,
        resource_id: &str,
        secret: &Secret<String>,
    ) -> Result<bool, ServiceError>;
}

/// HTTP implementation talking to the posts API.
pub struct HttpGuestVerifier {
    client: reqwest::Client,
    settings: VerifyServiceSettings,
}

impl HttpGuestVerifier {
    pub fn new(settings: VerifyServiceSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    fn verify_url(&self, resource_id: &str) -> String {
        format!("{}/posts/qna/{}/verify", self.settings.url, resource_id)
    }
}

#[async_trait]
impl GuestVerifier for HttpGuestVerifier {
    async fn verify(
        &self,
        resource_id: &str,
        secret: &Secret<String>,
    ) -> Result<bool, ServiceError> {
        let url = self.verify_url(resource_id);

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "secret": secret.expose_secret() }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send verification request to {}: {}", url, e);
                ServiceError::VerificationUnavailable(anyhow::anyhow!(
                    "HTTP request failed: {}",
                    e
                ))
            })?;

        Ok(response.status().is_success())
    }
}

/// Scripted verifier for tests: accepts one fixed secret and records the
/// resource ids it was asked about.
pub struct MockGuestVerifier {
    accepted_secret: String,
    unreachable: bool,
    pub requests: std::sync::Mutex<Vec<String>>,
}

impl MockGuestVerifier {
    pub fn accepting(secret: &str) -> Self {
        Self {
            accepted_secret: secret.to_string(),
            unreachable: false,
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// A verifier whose endpoint can never be reached.
    pub fn unreachable() -> Self {
        Self {
            accepted_secret: String::new(),
            unreachable: true,
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GuestVerifier for MockGuestVerifier {
    async fn verify(
        &self,
        resource_id: &str,
        secret: &Secret<String>,
    ) -> Result<bool, ServiceError> {
        if self.unreachable {
            return Err(ServiceError::VerificationUnavailable(anyhow::anyhow!(
                "mock verifier unreachable"
            )));
        }

        self.requests
            .lock()
            .map_err(|e| {
                ServiceError::VerificationUnavailable(anyhow::anyhow!(
                    "Mock verifier mutex poisoned: {}",
                    e
                ))
            })?
            .push(resource_id.to_string());

        Ok(secret.expose_secret() == &self.accepted_secret)
    }
}
