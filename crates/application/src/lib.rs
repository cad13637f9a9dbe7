//! Application logic behind the console's access and error screens.

#![forbid(unsafe_code)]

mod error_classifier;
mod role_resolution;

pub use error_classifier::{
    CLIENT_READ_MESSAGE, CodeTemplate, ErrorCatalog, UNKNOWN_ERROR_MESSAGE, get_parse_error,
    get_resource_name, process_server_error,
};
pub use role_resolution::{
    aggregate_access_rows, assignments_from_policy, by_group_then_name, delete_role,
    effective_role, project_access_rows, silo_access_rows, update_role, user_role_from_policies,
};
