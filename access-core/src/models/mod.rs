//! Domain models for access decisions.

pub mod actor;
pub mod decision;
pub mod profile;
pub mod resource;

pub use actor::{ActorIdentity, BranchMembership, BranchRole};
pub use decision::{Action, Decision, DecisionReason};
pub use profile::CachedProfile;
pub use resource::{ResourceDescriptor, ResourceKind};
