use serde::{Deserialize, Serialize};

use crate::{IdentityType, RoleName, RoleSource};

/// One grant of a role to one identity at one scope, joined with the
/// identity's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Opaque identity id, stable per user or group.
    pub identity_id: String,
    /// Whether the identity is a user or a group.
    pub identity_type: IdentityType,
    /// Display name. Not guaranteed to be unique.
    pub name: String,
    /// Granted role.
    pub role_name: RoleName,
    /// Scope the role was granted on.
    pub role_source: RoleSource,
}

/// A `(scope, role)` pair shown next to an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleBadge {
    /// Scope the role was granted on.
    pub role_source: RoleSource,
    /// Granted role.
    pub role_name: RoleName,
}

/// Per-identity view derived from all of its role assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRow {
    /// Identity id shared by the source assignments.
    pub id: String,
    /// Identity type of the first source assignment.
    pub identity_type: IdentityType,
    /// Display name of the first source assignment.
    pub name: String,
    /// Role granted on the silo, if any.
    pub silo_role: Option<RoleName>,
    /// Role granted on the project, if any.
    pub project_role: Option<RoleName>,
    /// Strongest role across all scopes.
    pub effective_role: RoleName,
    /// Present assignments, strongest first.
    pub role_badges: Vec<RoleBadge>,
}

/// Role assignment as stored in a resource policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRoleAssignment {
    /// Identity the role is granted to.
    pub identity_id: String,
    /// Whether the identity is a user or a group.
    pub identity_type: IdentityType,
    /// Granted role.
    pub role_name: RoleName,
}

/// Role assignments attached to one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Assignments in policy order.
    pub role_assignments: Vec<PolicyRoleAssignment>,
}

impl Policy {
    /// Creates a policy from its assignments.
    #[must_use]
    pub fn new(role_assignments: Vec<PolicyRoleAssignment>) -> Self {
        Self { role_assignments }
    }

    /// Returns a policy where `assignment` replaces any existing role for the
    /// same identity. The new assignment is appended at the end.
    #[must_use]
    pub fn with_role(&self, assignment: PolicyRoleAssignment) -> Self {
        let mut role_assignments: Vec<_> = self
            .role_assignments
            .iter()
            .filter(|existing| existing.identity_id != assignment.identity_id)
            .cloned()
            .collect();
        role_assignments.push(assignment);

        Self { role_assignments }
    }

    /// Returns a policy without any role for `identity_id`.
    #[must_use]
    pub fn without_identity(&self, identity_id: &str) -> Self {
        Self {
            role_assignments: self
                .role_assignments
                .iter()
                .filter(|existing| existing.identity_id != identity_id)
                .cloned()
                .collect(),
        }
    }

    /// Returns the role directly granted to `identity_id`, if any.
    #[must_use]
    pub fn role_for(&self, identity_id: &str) -> Option<RoleName> {
        self.role_assignments
            .iter()
            .find(|assignment| assignment.identity_id == identity_id)
            .map(|assignment| assignment.role_name)
    }
}

#[cfg(test)]
mod tests {
    use super::{Policy, PolicyRoleAssignment};
    use crate::{IdentityType, RoleName};

    fn abc(role_name: RoleName) -> PolicyRoleAssignment {
        PolicyRoleAssignment {
            identity_id: "abc".to_owned(),
            identity_type: IdentityType::SiloUser,
            role_name,
        }
    }

    #[test]
    fn with_role_adds_a_user() {
        let policy = Policy::default().with_role(abc(RoleName::Admin));
        assert_eq!(policy, Policy::new(vec![abc(RoleName::Admin)]));
    }

    #[test]
    fn with_role_overrides_an_existing_user() {
        let policy = Policy::new(vec![abc(RoleName::Admin)]).with_role(abc(RoleName::Viewer));
        assert_eq!(policy, Policy::new(vec![abc(RoleName::Viewer)]));
        assert_eq!(policy.role_for("abc"), Some(RoleName::Viewer));
    }

    #[test]
    fn without_identity_deletes_by_id() {
        let policy = Policy::new(vec![abc(RoleName::Viewer)]).without_identity("abc");
        assert_eq!(policy, Policy::default());
        assert_eq!(policy.role_for("abc"), None);
    }

    #[test]
    fn policy_deserializes_from_api_shape() {
        let json = r#"{"role_assignments":[{"identity_id":"g1","identity_type":"silo_group","role_name":"collaborator"}]}"#;
        let policy: Result<Policy, _> = serde_json::from_str(json);
        assert_eq!(
            policy.ok().and_then(|value| value.role_for("g1")),
            Some(RoleName::Collaborator)
        );
    }
}
