use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One role assignment joined with the identity's display name.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-assignment-request.ts"
)]
pub struct RoleAssignmentRequest {
    pub identity_id: String,
    pub identity_type: String,
    pub name: String,
    pub role_name: String,
    pub role_source: String,
}

/// Incoming payload for effective role resolution.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/effective-role-request.ts"
)]
pub struct EffectiveRoleRequest {
    pub roles: Vec<String>,
}

/// Strongest role among the requested ones.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/effective-role-response.ts"
)]
pub struct EffectiveRoleResponse {
    pub effective_role: Option<String>,
}

/// Incoming payload for the silo access table.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/silo-access-rows-request.ts"
)]
pub struct SiloAccessRowsRequest {
    pub assignments: Vec<RoleAssignmentRequest>,
    /// One of `all`, `users` or `groups`. Defaults to `all`.
    pub filter: Option<String>,
}

/// Incoming payload for the project access table.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/project-access-rows-request.ts"
)]
pub struct ProjectAccessRowsRequest {
    pub silo_assignments: Vec<RoleAssignmentRequest>,
    pub project_assignments: Vec<RoleAssignmentRequest>,
    /// One of `all`, `users` or `groups`. Defaults to `all`.
    pub filter: Option<String>,
}

/// API representation of one `(scope, role)` badge.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-badge-response.ts"
)]
pub struct RoleBadgeResponse {
    pub role_source: String,
    pub role_name: String,
    pub color: String,
}

/// API representation of an access table row.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-row-response.ts"
)]
pub struct AccessRowResponse {
    pub id: String,
    pub identity_type: String,
    pub identity_type_label: String,
    pub name: String,
    pub silo_role: Option<String>,
    pub project_role: Option<String>,
    pub effective_role: String,
    pub role_badges: Vec<RoleBadgeResponse>,
}

/// Role assignment as stored in a policy.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/policy-role-assignment-request.ts"
)]
pub struct PolicyRoleAssignmentRequest {
    pub identity_id: String,
    pub identity_type: String,
    pub role_name: String,
}

/// Policy attached to one resource.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/policy-request.ts"
)]
pub struct PolicyRequest {
    pub role_assignments: Vec<PolicyRoleAssignmentRequest>,
}

/// Incoming payload for resolving a user's own role.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-role-request.ts"
)]
pub struct UserRoleRequest {
    pub user_id: String,
    pub group_ids: Vec<String>,
    pub policies: Vec<PolicyRequest>,
}

/// Strongest role the user holds, directly or through groups.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-role-response.ts"
)]
pub struct UserRoleResponse {
    pub role: Option<String>,
}
