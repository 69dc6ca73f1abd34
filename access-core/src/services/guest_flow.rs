//! Guest verification flow - prompt, verify, resume.
//!
//! Entered only for qna items the evaluator marked as requiring guest
//! verification. The flow is scoped to a single screen interaction and
//! dropped afterwards; nothing it holds outlives the interaction.

use std::sync::Arc;

use secrecy::Secret;

use crate::models::Action;
use crate::services::{GuestVerifier, ServiceError};

/// Where the flow stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    /// Waiting for the actor to type and submit the secret.
    Prompting,
    /// One verification request is in flight; a second submit is not
    /// reachable until this one resolves.
    Verifying,
    /// Verification succeeded and the pending action was handed back.
    Resumed,
    /// The last attempt was rejected; acknowledging returns to prompting.
    Failed,
}

/// What the caller must do after a successful verification.
#[derive(Debug)]
pub enum ResumedAction {
    /// Navigate to the edit screen for the resource. No proof is carried
    /// forward; the edit screen is guarded server-side.
    OpenEditor { resource_id: String },
    /// Re-invoke deletion with the verified secret attached. Deletion has no
    /// separate armed state, so it chains directly off verification within
    /// the same user gesture.
    DeleteWithSecret {
        resource_id: String,
        secret: Secret<String>,
    },
}

#[derive(Debug, Clone)]
struct PendingMutation {
    action: Action,
    resource_id: String,
}

/// Short-lived state machine driving the guest-secret prompt.
///
/// The typed secret is consumed exactly once per submit: it is moved out of
/// the flow before the request is sent and either rides along with the
/// resumed delete or is dropped. It never survives a verification outcome
/// inside state used for rendering.
pub struct GuestVerificationFlow {
    verifier: Arc<dyn GuestVerifier>,
    state: FlowState,
    pending: Option<PendingMutation>,
    secret_input: Option<Secret<String>>,
}

impl GuestVerificationFlow {
    pub fn new(verifier: Arc<dyn GuestVerifier>) -> Self {
        Self {
            verifier,
            state: FlowState::Idle,
            pending: None,
            secret_input: None,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Start prompting for the secret guarding `resource_id`.
    ///
    /// Records the pending action and clears any stale secret input left
    /// over from a previous prompt.
    pub fn begin(&mut self, action: Action, resource_id: impl Into<String>) {
        self.pending = Some(PendingMutation {
            action,
            resource_id: resource_id.into(),
        });
        self.secret_input = None;
        self.state = FlowState::Prompting;
    }

    /// Record the typed secret, replacing any previous input. Typing again
    /// after a failed attempt implicitly returns the flow to prompting.
    pub fn input_secret(&mut self, secret: impl Into<String>) -> Result<(), ServiceError> {
        match self.state {
            FlowState::Prompting | FlowState::Failed => {
                self.secret_input = Some(Secret::new(secret.into()));
                self.state = FlowState::Prompting;
                Ok(())
            }
            _ => Err(ServiceError::NotPrompting),
        }
    }

    /// Acknowledge a failed attempt and return to the prompt for a retry.
    /// There is no retry counter or lockout client-side.
    pub fn acknowledge_failure(&mut self) {
        if self.state == FlowState::Failed {
            self.state = FlowState::Prompting;
        }
    }

    /// Submit the entered secret to the collaborator and, on success, resume
    /// the pending action.
    ///
    /// The secret is consumed by this call whatever the outcome; a failed
    /// attempt leaves the input empty and the actor may type and retry.
    /// Holding `&mut self` across the round trip keeps a second submission
    /// unreachable while one is outstanding.
    pub async fn submit(&mut self) -> Result<ResumedAction, ServiceError> {
        if self.state != FlowState::Prompting {
            return Err(ServiceError::NotPrompting);
        }
        let pending = self.pending.clone().ok_or(ServiceError::NotPrompting)?;
        let secret = self
            .secret_input
            .take()
            .ok_or(ServiceError::MissingSecretInput)?;

        self.state = FlowState::Verifying;
        let verified = match self.verifier.verify(&pending.resource_id, &secret).await {
            Ok(verified) => verified,
            Err(err) => {
                self.state = FlowState::Failed;
                return Err(err);
            }
        };

        if !verified {
            self.state = FlowState::Failed;
            return Err(ServiceError::VerificationFailed);
        }

        self.state = FlowState::Resumed;
        self.pending = None;
        tracing::debug!(
            resource_id = %pending.resource_id,
            action = pending.action.as_str(),
            "guest verification succeeded, resuming action"
        );

        Ok(match pending.action {
            Action::Edit => ResumedAction::OpenEditor {
                resource_id: pending.resource_id,
            },
            Action::Delete => ResumedAction::DeleteWithSecret {
                resource_id: pending.resource_id,
                secret,
            },
        })
    }

    /// Abandon the prompt without acting; clears the pending action and any
    /// typed secret.
    pub fn cancel(&mut self) {
        self.secret_input = None;
        self.pending = None;
        self.state = FlowState::Idle;
    }

    #[cfg(test)]
    fn has_secret_input(&self) -> bool {
        self.secret_input.is_some()
    }
}
