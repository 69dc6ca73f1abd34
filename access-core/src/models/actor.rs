//! Actor identity model - who is asking, as reconstructed from the session.

use serde::{Deserialize, Serialize};

use super::resource::ResourceDescriptor;

/// Membership tier within a single branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchRole {
    User,
    Coach,
    Owner,
    Pending,
}

impl BranchRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchRole::User => "user",
            BranchRole::Coach => "coach",
            BranchRole::Owner => "owner",
            BranchRole::Pending => "pending",
        }
    }
}

/// A (branch, role) pair held by an actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchMembership {
    pub branch_id: String,
    pub role: BranchRole,
}

/// The calling actor, derived from cached session state.
///
/// Re-derived on every policy check and never mutated in place, so a login
/// or logout in another tab is observed on the next read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorIdentity {
    /// Present iff the actor is authenticated.
    pub user_id: Option<String>,
    pub is_admin: bool,
    /// Membership is a set keyed by branch id; one actor may hold roles in
    /// several branches at once.
    pub branch_roles: Vec<BranchMembership>,
}

impl ActorIdentity {
    /// The unauthenticated identity: no id, no admin flag, no memberships.
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            is_admin: false,
            branch_roles: Vec::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Role held in the given branch, if any.
    pub fn role_in(&self, branch_id: &str) -> Option<BranchRole> {
        self.branch_roles
            .iter()
            .find(|m| m.branch_id == branch_id)
            .map(|m| m.role)
    }

    /// Whether the actor holds the Owner tier for the given branch.
    pub fn owns_branch(&self, branch_id: &str) -> bool {
        matches!(self.role_in(branch_id), Some(BranchRole::Owner))
    }

    /// Whether the actor holds the Owner tier in any branch at all.
    pub fn owns_any_branch(&self) -> bool {
        self.branch_roles.iter().any(|m| m.role == BranchRole::Owner)
    }

    /// Whether the actor is the recorded author of the item. False whenever
    /// either side has no id, so guest-authored items never match.
    pub fn is_author_of(&self, resource: &ResourceDescriptor) -> bool {
        match (&self.user_id, &resource.author_id) {
            (Some(user_id), Some(author_id)) => user_id == author_id,
            _ => false,
        }
    }
}
