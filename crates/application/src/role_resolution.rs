//! Effective-role resolution and access-row aggregation.
//!
//! Rows are derived fresh from role assignments on every call. Nothing here
//! is stored or mutated in place.

use std::cmp::Ordering;
use std::collections::HashMap;

use console_access_domain::{
    AccessRow, IdentityFilter, IdentityType, Policy, PolicyRoleAssignment, RoleAssignment,
    RoleBadge, RoleName, RoleSource,
};
use tracing::debug;


/// Returns the strongest role in `roles`, or `None` when it is empty.
#[must_use]
pub fn effective_role(roles: &[RoleName]) -> Option<RoleName> {
    roles.iter().copied().min_by_key(RoleName::rank)
}

/// Aggregates assignments into one row per identity.
///
/// Assignments granted on a scope outside `scopes` are ignored. When an
/// identity has several assignments on the same scope, or its assignments
/// disagree on name or identity type, the first one encountered wins.
#[must_use]
pub fn aggregate_access_rows(
    assignments: &[RoleAssignment],
    scopes: &[RoleSource],
    filter: IdentityFilter,
) -> Vec<AccessRow> {
    let mut rows: Vec<AccessRow> = group_by_identity(assignments, scopes)
        .iter()
        .filter_map(|group| access_row_from_group(group))
        .filter(|row| filter.matches(row.identity_type))
        .collect();

    rows.sort_by(by_group_then_name);
    rows
}

/// Rows for a silo access table. Only silo assignments are considered.
#[must_use]
pub fn silo_access_rows(assignments: &[RoleAssignment], filter: IdentityFilter) -> Vec<AccessRow> {
    aggregate_access_rows(assignments, &[RoleSource::Silo], filter)
}

/// Rows for a project access table, combining roles inherited from the silo
/// with roles granted on the project.
#[must_use]
pub fn project_access_rows(
    silo_assignments: &[RoleAssignment],
    project_assignments: &[RoleAssignment],
    filter: IdentityFilter,
) -> Vec<AccessRow> {
    let combined: Vec<RoleAssignment> = silo_assignments
        .iter()
        .chain(project_assignments)
        .cloned()
        .collect();

    aggregate_access_rows(&combined, &[RoleSource::Silo, RoleSource::Project], filter)
}

/// Orders groups before users, then by name (byte order, case-sensitive).
#[must_use]
pub fn by_group_then_name(left: &AccessRow, right: &AccessRow) -> Ordering {
    identity_type_rank(left.identity_type)
        .cmp(&identity_type_rank(right.identity_type))
        .then_with(|| left.name.cmp(&right.name))
}

/// Strongest role a user holds across `policies`, either directly or through
/// membership in one of `group_ids`.
#[must_use]
pub fn user_role_from_policies(
    user_id: &str,
    group_ids: &[String],
    policies: &[Policy],
) -> Option<RoleName> {
    let roles: Vec<RoleName> = policies
        .iter()
        .flat_map(|policy| policy.role_assignments.iter())
        .filter(|assignment| {
            assignment.identity_id == user_id
                || group_ids.iter().any(|group_id| *group_id == assignment.identity_id)
        })
        .map(|assignment| assignment.role_name)
        .collect();

    effective_role(&roles)
}

/// Returns `policy` with `assignment` replacing any role held by the same
/// identity.
#[must_use]
pub fn update_role(assignment: PolicyRoleAssignment, policy: &Policy) -> Policy {
    policy.with_role(assignment)
}

/// Returns `policy` without any role for `identity_id`.
#[must_use]
pub fn delete_role(identity_id: &str, policy: &Policy) -> Policy {
    policy.without_identity(identity_id)
}

/// Joins a policy with display names to produce assignments for `source`.
///
/// Identities missing from `names` are labelled with their id.
#[must_use]
pub fn assignments_from_policy(
    policy: &Policy,
    source: RoleSource,
    names: &HashMap<String, String>,
) -> Vec<RoleAssignment> {
    policy
        .role_assignments
        .iter()
        .map(|assignment| RoleAssignment {
            identity_id: assignment.identity_id.clone(),
            identity_type: assignment.identity_type,
            name: names
                .get(&assignment.identity_id)
                .cloned()
                .unwrap_or_else(|| assignment.identity_id.clone()),
            role_name: assignment.role_name,
            role_source: source,
        })
        .collect()
}

fn identity_type_rank(identity_type: IdentityType) -> u8 {
    match identity_type {
        IdentityType::SiloGroup => 0,
        IdentityType::SiloUser => 1,
    }
}

/// Groups in-scope assignments by identity, keeping first-seen order both
/// across and within groups.
fn group_by_identity<'a>(
    assignments: &'a [RoleAssignment],
    scopes: &[RoleSource],
) -> Vec<Vec<&'a RoleAssignment>> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Vec<&RoleAssignment>> = Vec::new();

    for assignment in assignments
        .iter()
        .filter(|assignment| scopes.contains(&assignment.role_source))
    {
        match positions.get(assignment.identity_id.as_str()) {
            Some(&position) => groups[position].push(assignment),
            None => {
                positions.insert(assignment.identity_id.as_str(), groups.len());
                groups.push(vec![assignment]);
            }
        }
    }

    groups
}

fn access_row_from_group(group: &[&RoleAssignment]) -> Option<AccessRow> {
    let first = group.first()?;

    let mut present: Vec<&RoleAssignment> = Vec::with_capacity(group.len());
    for &assignment in group {
        if assignment.name != first.name || assignment.identity_type != first.identity_type {
            debug!(
                identity_id = %first.identity_id,
                "identity metadata differs across scopes, keeping first assignment"
            );
        }

        if present
            .iter()
            .any(|kept| kept.role_source == assignment.role_source)
        {
            debug!(
                identity_id = %first.identity_id,
                role_source = assignment.role_source.as_str(),
                "duplicate assignment for scope ignored"
            );
            continue;
        }

        present.push(assignment);
    }

    let role_at = |source: RoleSource| {
        present
            .iter()
            .find(|assignment| assignment.role_source == source)
            .map(|assignment| assignment.role_name)
    };

    let roles: Vec<RoleName> = present.iter().map(|assignment| assignment.role_name).collect();

    // sort_by_key is stable, so equal roles keep encounter order
    let mut role_badges: Vec<RoleBadge> = present
        .iter()
        .map(|assignment| RoleBadge {
            role_source: assignment.role_source,
            role_name: assignment.role_name,
        })
        .collect();
    role_badges.sort_by_key(|badge| badge.role_name.rank());

    Some(AccessRow {
        id: first.identity_id.clone(),
        identity_type: first.identity_type,
        name: first.name.clone(),
        silo_role: role_at(RoleSource::Silo),
        project_role: role_at(RoleSource::Project),
        effective_role: effective_role(&roles)?,
        role_badges,
    })
}
