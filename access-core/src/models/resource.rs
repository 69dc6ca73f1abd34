//! Content item descriptor - the minimal shape needed for an access decision.

use serde::{Deserialize, Serialize};

/// Post category of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Board,
    Notice,
    Skill,
    News,
    Qna,
    Sponsor,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Board => "board",
            ResourceKind::Notice => "notice",
            ResourceKind::Skill => "skill",
            ResourceKind::News => "news",
            ResourceKind::Qna => "qna",
            ResourceKind::Sponsor => "sponsor",
        }
    }
}

/// Minimal view of a content item for authorization purposes.
///
/// Constructed fresh from the fetched record each time a detail or edit
/// screen loads; read-only afterwards.
///
/// Invariant: for qna, exactly one of `author_id` set or `is_guest_authored`
/// true; every other kind always has `is_guest_authored == false`. The
/// per-kind constructors keep descriptors inside that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub kind: ResourceKind,
    /// Owning branch; present for board and notice posts only.
    pub branch_id: Option<String>,
    /// Absent for guest-authored qna.
    pub author_id: Option<String>,
    /// True only for qna created without authentication.
    pub is_guest_authored: bool,
}

impl ResourceDescriptor {
    /// Branch board post, owned by its branch.
    pub fn board(branch_id: impl Into<String>, author_id: impl Into<String>) -> Self {
        Self {
            kind: ResourceKind::Board,
            branch_id: Some(branch_id.into()),
            author_id: Some(author_id.into()),
            is_guest_authored: false,
        }
    }

    /// Branch notice, owned by its branch.
    pub fn notice(branch_id: impl Into<String>, author_id: impl Into<String>) -> Self {
        Self {
            kind: ResourceKind::Notice,
            branch_id: Some(branch_id.into()),
            author_id: Some(author_id.into()),
            is_guest_authored: false,
        }
    }

    /// Skill article; global content with no branch affiliation.
    pub fn skill(author_id: impl Into<String>) -> Self {
        Self {
            kind: ResourceKind::Skill,
            branch_id: None,
            author_id: Some(author_id.into()),
            is_guest_authored: false,
        }
    }

    /// News article.
    pub fn news(author_id: impl Into<String>) -> Self {
        Self {
            kind: ResourceKind::News,
            branch_id: None,
            author_id: Some(author_id.into()),
            is_guest_authored: false,
        }
    }

    /// Sponsor entry.
    pub fn sponsor(author_id: impl Into<String>) -> Self {
        Self {
            kind: ResourceKind::Sponsor,
            branch_id: None,
            author_id: Some(author_id.into()),
            is_guest_authored: false,
        }
    }

    /// Question posted by an authenticated member.
    pub fn qna(author_id: impl Into<String>) -> Self {
        Self {
            kind: ResourceKind::Qna,
            branch_id: None,
            author_id: Some(author_id.into()),
            is_guest_authored: false,
        }
    }

    /// Question created without authentication, protected by a shared secret
    /// chosen at creation time instead of a session.
    pub fn guest_qna() -> Self {
        Self {
            kind: ResourceKind::Qna,
            branch_id: None,
            author_id: None,
            is_guest_authored: true,
        }
    }
}
