//! Session profile payload - the serialized shape the identity snapshot reads.

use serde::{Deserialize, Serialize};

use super::actor::{ActorIdentity, BranchMembership};

/// Profile as written into the session cache at login.
///
/// The conversion into [`ActorIdentity`] is total: whatever the cache held,
/// the result is a usable identity value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedProfile {
    pub id: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub branch_roles: Vec<BranchMembership>,
}

impl From<CachedProfile> for ActorIdentity {
    fn from(profile: CachedProfile) -> Self {
        ActorIdentity {
            user_id: Some(profile.id),
            is_admin: profile.is_admin,
            branch_roles: profile.branch_roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BranchRole;

    #[test]
    fn test_profile_round_trip_into_identity() {
        let raw = r#"{"id":"u1","is_admin":false,"branch_roles":[{"branch_id":"b1","role":"owner"}]}"#;
        let profile: CachedProfile = serde_json::from_str(raw).unwrap();
        let actor: ActorIdentity = profile.into();

        assert_eq!(actor.user_id.as_deref(), Some("u1"));
        assert!(!actor.is_admin);
        assert_eq!(actor.role_in("b1"), Some(BranchRole::Owner));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let profile: CachedProfile = serde_json::from_str(r#"{"id":"u2"}"#).unwrap();
        let actor: ActorIdentity = profile.into();

        assert!(actor.is_authenticated());
        assert!(!actor.is_admin);
        assert!(actor.branch_roles.is_empty());
    }
}
