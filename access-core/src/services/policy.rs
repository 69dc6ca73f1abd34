//! Access policy evaluation.
//!
//! One pure function decides whether an actor may edit or delete a content
//! item. Every screen consults it - once to choose which controls to render,
//! and again when a control is actually invoked - instead of re-deriving
//! ownership rules from the cached profile.

use crate::models::{
    Action, ActorIdentity, Decision, DecisionReason, ResourceDescriptor, ResourceKind,
};

/// Decide whether `actor` may perform `action` on `resource`.
///
/// Rules are evaluated per kind in precedence order; the first match wins.
/// Admin short-circuits every ownership and branch check: it is a superset
/// capability that must never be blocked by an unmet lower-tier condition.
/// Edit and delete share one rule table; the action only matters for logging
/// and for which flow resumes after guest verification.
pub fn decide(actor: &ActorIdentity, resource: &ResourceDescriptor, action: Action) -> Decision {
    let decision = match resource.kind {
        ResourceKind::Board => decide_board(actor, resource),
        ResourceKind::Notice => decide_notice(actor, resource),
        ResourceKind::Skill => decide_skill(actor, resource),
        ResourceKind::News => decide_news(actor, resource),
        ResourceKind::Sponsor => decide_sponsor(actor, resource),
        ResourceKind::Qna => decide_qna(actor, resource),
    };

    tracing::debug!(
        kind = resource.kind.as_str(),
        action = action.as_str(),
        allowed = decision.allowed,
        reason = decision.reason.as_str(),
        "access decision"
    );

    decision
}

fn decide_board(actor: &ActorIdentity, resource: &ResourceDescriptor) -> Decision {
    if actor.is_admin {
        return Decision::allow();
    }
    if actor.is_author_of(resource) {
        return Decision::allow();
    }
    Decision::deny(DecisionReason::NotAuthor)
}

fn decide_notice(actor: &ActorIdentity, resource: &ResourceDescriptor) -> Decision {
    if actor.is_admin {
        return Decision::allow();
    }
    if actor.is_author_of(resource) {
        return Decision::allow();
    }
    // Branch owners may curate their own branch's notices.
    let owns_resource_branch = resource
        .branch_id
        .as_deref()
        .is_some_and(|branch_id| actor.owns_branch(branch_id));
    if actor.is_authenticated() && owns_resource_branch {
        return Decision::allow();
    }
    Decision::deny(DecisionReason::NotBranchOwner)
}

fn decide_skill(actor: &ActorIdentity, resource: &ResourceDescriptor) -> Decision {
    if actor.is_admin {
        return Decision::allow();
    }
    if actor.is_author_of(resource) {
        return Decision::allow();
    }
    // Skill content is global; owning *a* branch stands in as a credential
    // for instructional authority, not a claim over this specific item.
    if actor.is_authenticated() && actor.owns_any_branch() {
        return Decision::allow();
    }
    Decision::deny(DecisionReason::NotResourceOwner)
}

fn decide_news(actor: &ActorIdentity, resource: &ResourceDescriptor) -> Decision {
    if actor.is_admin {
        return Decision::allow();
    }
    // In practice news authors are always admins; author-match is accepted
    // for symmetry with the other kinds.
    if actor.is_author_of(resource) {
        return Decision::allow();
    }
    Decision::deny(DecisionReason::NotAdmin)
}

fn decide_sponsor(actor: &ActorIdentity, resource: &ResourceDescriptor) -> Decision {
    if actor.is_admin {
        return Decision::allow();
    }
    // Never true for this kind; checked so a mislabeled record still resolves.
    if actor.is_author_of(resource) {
        return Decision::allow();
    }
    Decision::deny(DecisionReason::NotAdmin)
}

fn decide_qna(actor: &ActorIdentity, resource: &ResourceDescriptor) -> Decision {
    if actor.is_admin {
        return Decision::allow();
    }
    if resource.is_guest_authored {
        // Authorship cannot be matched for a guest post, so even an
        // authenticated actor goes through secret verification.
        return Decision::guest_verification();
    }
    if actor.is_author_of(resource) {
        return Decision::allow();
    }
    if actor.is_authenticated() {
        return Decision::deny(DecisionReason::NotAuthor);
    }
    // Unauthenticated and not guest-authored: unreachable for well-formed
    // descriptors, kept as the defensive tail.
    Decision::deny(DecisionReason::NotAuthenticated)
}

/// UI affordances for one content item under one identity.
///
/// Guest-protected items keep their controls visible; invoking one routes
/// into the verification prompt instead of the action itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceControls {
    pub show_edit: bool,
    pub show_delete: bool,
    pub needs_guest_prompt: bool,
}

impl ResourceControls {
    /// Compute which mutation controls a screen should render.
    pub fn evaluate(actor: &ActorIdentity, resource: &ResourceDescriptor) -> Self {
        let edit = decide(actor, resource, Action::Edit);
        let delete = decide(actor, resource, Action::Delete);

        Self {
            show_edit: edit.is_allowed() || edit.needs_guest_verification(),
            show_delete: delete.is_allowed() || delete.needs_guest_verification(),
            needs_guest_prompt: edit.needs_guest_verification()
                || delete.needs_guest_verification(),
        }
    }
}
