use axum::Json;
use console_access_application::{
    effective_role, project_access_rows, silo_access_rows, user_role_from_policies,
};
use console_access_domain::{AccessRow, RoleName};
use tracing::debug;

use crate::dto::{
    AccessRowResponse, EffectiveRoleRequest, EffectiveRoleResponse, PolicyRequest,
    ProjectAccessRowsRequest, RoleAssignmentRequest, SiloAccessRowsRequest, UserRoleRequest,
    UserRoleResponse, identity_filter_from_transport,
};
use crate::error::ApiResult;

pub async fn effective_role_handler(
    Json(payload): Json<EffectiveRoleRequest>,
) -> ApiResult<Json<EffectiveRoleResponse>> {
    let roles = payload
        .roles
        .iter()
        .map(|value| RoleName::from_transport(value.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(EffectiveRoleResponse {
        effective_role: effective_role(&roles).map(|role| role.as_str().to_owned()),
    }))
}

pub async fn silo_access_rows_handler(
    Json(payload): Json<SiloAccessRowsRequest>,
) -> ApiResult<Json<Vec<AccessRowResponse>>> {
    let filter = identity_filter_from_transport(payload.filter.as_deref())?;
    let assignments = RoleAssignmentRequest::into_domain_all(payload.assignments)?;

    let rows = silo_access_rows(&assignments, filter);
    debug!(
        assignment_count = assignments.len(),
        row_count = rows.len(),
        "aggregated silo access rows"
    );

    Ok(Json(into_responses(rows)))
}

pub async fn project_access_rows_handler(
    Json(payload): Json<ProjectAccessRowsRequest>,
) -> ApiResult<Json<Vec<AccessRowResponse>>> {
    let filter = identity_filter_from_transport(payload.filter.as_deref())?;
    let silo_assignments = RoleAssignmentRequest::into_domain_all(payload.silo_assignments)?;
    let project_assignments = RoleAssignmentRequest::into_domain_all(payload.project_assignments)?;

    let rows = project_access_rows(&silo_assignments, &project_assignments, filter);
    debug!(
        silo_assignment_count = silo_assignments.len(),
        project_assignment_count = project_assignments.len(),
        row_count = rows.len(),
        "aggregated project access rows"
    );

    Ok(Json(into_responses(rows)))
}

pub async fn user_role_handler(
    Json(payload): Json<UserRoleRequest>,
) -> ApiResult<Json<UserRoleResponse>> {
    let policies = payload
        .policies
        .into_iter()
        .map(PolicyRequest::into_domain)
        .collect::<Result<Vec<_>, _>>()?;

    let role = user_role_from_policies(&payload.user_id, &payload.group_ids, &policies);

    Ok(Json(UserRoleResponse {
        role: role.map(|value| value.as_str().to_owned()),
    }))
}

fn into_responses(rows: Vec<AccessRow>) -> Vec<AccessRowResponse> {
    rows.into_iter().map(AccessRowResponse::from).collect()
}
