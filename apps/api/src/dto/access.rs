mod conversions;
mod types;

pub use conversions::identity_filter_from_transport;
pub use types::{
    AccessRowResponse, EffectiveRoleRequest, EffectiveRoleResponse, PolicyRequest,
    ProjectAccessRowsRequest, RoleAssignmentRequest, SiloAccessRowsRequest, UserRoleRequest,
    UserRoleResponse,
};
