//! Access decision types - allow/deny outcome plus a machine-readable reason.

use serde::{Deserialize, Serialize};

/// Mutating action a screen may attempt on a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Edit,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Edit => "edit",
            Action::Delete => "delete",
        }
    }
}

/// Why a decision came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    Ok,
    NotAuthenticated,
    NotAuthor,
    NotAdmin,
    NotBranchOwner,
    NotResourceOwner,
    RequiresGuestVerification,
}

impl DecisionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionReason::Ok => "ok",
            DecisionReason::NotAuthenticated => "not_authenticated",
            DecisionReason::NotAuthor => "not_author",
            DecisionReason::NotAdmin => "not_admin",
            DecisionReason::NotBranchOwner => "not_branch_owner",
            DecisionReason::NotResourceOwner => "not_resource_owner",
            DecisionReason::RequiresGuestVerification => "requires_guest_verification",
        }
    }
}

/// Output of the policy evaluator; consumed immediately by the caller.
///
/// A denial is advisory data, never an error value: it suppresses a UI
/// affordance or blocks a submit call on the triggering screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub allowed: bool,
    pub reason: DecisionReason,
}

impl Decision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: DecisionReason::Ok,
        }
    }

    pub fn deny(reason: DecisionReason) -> Self {
        Self {
            allowed: false,
            reason,
        }
    }

    /// Not a direct allow: the caller must route through the guest
    /// verification flow before the action may proceed.
    pub fn guest_verification() -> Self {
        Self {
            allowed: false,
            reason: DecisionReason::RequiresGuestVerification,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn needs_guest_verification(&self) -> bool {
        self.reason == DecisionReason::RequiresGuestVerification
    }
}
