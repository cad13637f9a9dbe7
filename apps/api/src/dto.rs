mod access;
mod common;
mod errors;

pub use access::{
    AccessRowResponse, EffectiveRoleRequest, EffectiveRoleResponse, PolicyRequest,
    ProjectAccessRowsRequest, RoleAssignmentRequest, SiloAccessRowsRequest, UserRoleRequest,
    UserRoleResponse, identity_filter_from_transport,
};
pub use common::HealthResponse;
pub use errors::{ProcessErrorRequest, ProcessedErrorResponse};
