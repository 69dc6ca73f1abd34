//! access-core: ownership and access policy core for the academy web front end.
//!
//! The front end renders six post categories (board, notice, skill, news,
//! qna, sponsor) alongside branch and store screens. This crate is the one
//! place that decides, for a given actor and content item, whether edit and
//! delete may proceed - including the guest path where an unauthenticated
//! author proves ownership of a qna post with the secret chosen at creation
//! time.
//!
//! The decision itself is pure ([`services::decide`]); identity comes from a
//! [`services::SessionCache`] snapshot and the guest path runs through
//! [`services::GuestVerificationFlow`] against a [`services::GuestVerifier`].
//! Decisions gate what the UI renders and which submits go out; the server
//! remains the system of record for access control.

pub mod config;
pub mod models;
pub mod observability;
pub mod services;

use std::sync::Arc;

use models::{Action, Decision, ResourceDescriptor};
use services::{
    GuestVerificationFlow, GuestVerifier, IdentityReader, ResourceControls, SessionCache,
};

/// Shared handle bundling the identity reader and the verification client,
/// so screens hold one value instead of wiring both everywhere.
#[derive(Clone)]
pub struct AccessContext {
    pub identity: IdentityReader,
    pub verifier: Arc<dyn GuestVerifier>,
}

impl AccessContext {
    pub fn new(cache: Arc<dyn SessionCache>, verifier: Arc<dyn GuestVerifier>) -> Self {
        Self {
            identity: IdentityReader::new(cache),
            verifier,
        }
    }

    /// Affordances for one content item under the current session identity.
    pub fn controls(&self, resource: &ResourceDescriptor) -> ResourceControls {
        ResourceControls::evaluate(&self.identity.snapshot(), resource)
    }

    /// Re-validate at the moment a control is actually invoked; the identity
    /// is snapshotted afresh so a logout since render is respected.
    pub fn decide(&self, resource: &ResourceDescriptor, action: Action) -> Decision {
        services::decide(&self.identity.snapshot(), resource, action)
    }

    /// A fresh guest verification flow bound to the configured verifier.
    pub fn guest_flow(&self) -> GuestVerificationFlow {
        GuestVerificationFlow::new(Arc::clone(&self.verifier))
    }
}
