use console_access_core::AppResult;
use console_access_domain::{
    AccessRow, IdentityFilter, IdentityType, Policy, PolicyRoleAssignment, RoleAssignment,
    RoleBadge, RoleName, RoleSource,
};

use super::types::{
    AccessRowResponse, PolicyRequest, PolicyRoleAssignmentRequest, RoleAssignmentRequest,
    RoleBadgeResponse,
};

impl RoleAssignmentRequest {
    /// Validates transport values into a domain assignment.
    pub fn into_domain(self) -> AppResult<RoleAssignment> {
        Ok(RoleAssignment {
            identity_type: self.identity_type.parse::<IdentityType>()?,
            role_name: RoleName::from_transport(self.role_name.as_str())?,
            role_source: self.role_source.parse::<RoleSource>()?,
            identity_id: self.identity_id,
            name: self.name,
        })
    }

    /// Validates a batch of assignments, failing on the first invalid one.
    pub fn into_domain_all(requests: Vec<Self>) -> AppResult<Vec<RoleAssignment>> {
        requests.into_iter().map(Self::into_domain).collect()
    }
}

impl PolicyRequest {
    /// Validates transport values into a domain policy.
    pub fn into_domain(self) -> AppResult<Policy> {
        self.role_assignments
            .into_iter()
            .map(PolicyRoleAssignmentRequest::into_domain)
            .collect::<AppResult<Vec<_>>>()
            .map(Policy::new)
    }
}

impl PolicyRoleAssignmentRequest {
    fn into_domain(self) -> AppResult<PolicyRoleAssignment> {
        Ok(PolicyRoleAssignment {
            identity_type: self.identity_type.parse::<IdentityType>()?,
            role_name: RoleName::from_transport(self.role_name.as_str())?,
            identity_id: self.identity_id,
        })
    }
}

/// Parses an optional identity filter, defaulting to all identities.
pub fn identity_filter_from_transport(value: Option<&str>) -> AppResult<IdentityFilter> {
    value.map_or(Ok(IdentityFilter::All), str::parse)
}

impl From<RoleBadge> for RoleBadgeResponse {
    fn from(value: RoleBadge) -> Self {
        Self {
            role_source: value.role_source.as_str().to_owned(),
            role_name: value.role_name.as_str().to_owned(),
            color: value.role_name.badge_color().as_str().to_owned(),
        }
    }
}

impl From<AccessRow> for AccessRowResponse {
    fn from(value: AccessRow) -> Self {
        Self {
            id: value.id,
            identity_type: value.identity_type.as_str().to_owned(),
            identity_type_label: value.identity_type.label().to_owned(),
            name: value.name,
            silo_role: value.silo_role.map(|role| role.as_str().to_owned()),
            project_role: value.project_role.map(|role| role.as_str().to_owned()),
            effective_role: value.effective_role.as_str().to_owned(),
            role_badges: value
                .role_badges
                .into_iter()
                .map(RoleBadgeResponse::from)
                .collect(),
        }
    }
}
