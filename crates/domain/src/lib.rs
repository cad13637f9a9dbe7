//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod access;
mod role;
mod server_error;

pub use access::{AccessRow, Policy, PolicyRoleAssignment, RoleAssignment, RoleBadge};
pub use role::{BadgeColor, IdentityFilter, IdentityType, ROLE_ORDER, RoleName, RoleSource};
pub use server_error::{ClientReadError, ProcessedError, ServerError, StructuredError};
