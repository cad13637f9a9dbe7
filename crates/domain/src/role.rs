use std::str::FromStr;

use console_access_core::AppError;
use serde::{Deserialize, Serialize};

/// Roles that can be granted on a silo or project, strongest first.
pub const ROLE_ORDER: [RoleName; 3] = [RoleName::Admin, RoleName::Collaborator, RoleName::Viewer];

/// Role granted to an identity on one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleName {
    /// Full control over the resource, including its policy.
    Admin,
    /// Can create and modify child resources.
    Collaborator,
    /// Read-only access.
    Viewer,
}

impl RoleName {
    /// Returns the stable transport value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Collaborator => "collaborator",
            Self::Viewer => "viewer",
        }
    }

    /// Returns all known roles, strongest first.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &ROLE_ORDER
    }

    /// Position of this role in [`ROLE_ORDER`]. Lower is stronger.
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Self::Admin => 0,
            Self::Collaborator => 1,
            Self::Viewer => 2,
        }
    }

    /// Returns whether this role confers at least the powers of `other`.
    #[must_use]
    pub fn is_at_least(&self, other: Self) -> bool {
        self.rank() <= other.rank()
    }

    /// Roles (including this one) that confer at least the powers of this role.
    #[must_use]
    pub fn or_stronger(&self) -> &'static [Self] {
        match self {
            Self::Viewer => &[Self::Viewer, Self::Collaborator, Self::Admin],
            Self::Collaborator => &[Self::Collaborator, Self::Admin],
            Self::Admin => &[Self::Admin],
        }
    }

    /// Badge color used when this role is displayed.
    #[must_use]
    pub fn badge_color(&self) -> BadgeColor {
        match self {
            Self::Admin => BadgeColor::Default,
            Self::Collaborator => BadgeColor::Purple,
            Self::Viewer => BadgeColor::Blue,
        }
    }

    /// Parses a transport value into a role.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for RoleName {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "collaborator" => Ok(Self::Collaborator),
            "viewer" => Ok(Self::Viewer),
            _ => Err(AppError::Validation(format!("unknown role '{value}'"))),
        }
    }
}

/// Scope at which a role was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleSource {
    /// Granted on the silo that contains the project.
    Silo,
    /// Granted directly on the project.
    Project,
}

impl RoleSource {
    /// Returns the stable transport value for this scope.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Silo => "silo",
            Self::Project => "project",
        }
    }
}

impl FromStr for RoleSource {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "silo" => Ok(Self::Silo),
            "project" => Ok(Self::Project),
            _ => Err(AppError::Validation(format!("unknown role source '{value}'"))),
        }
    }
}

/// Kind of identity a role is granted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityType {
    /// A single user.
    SiloUser,
    /// A group of users.
    SiloGroup,
}

impl IdentityType {
    /// Returns the stable transport value for this identity type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SiloUser => "silo_user",
            Self::SiloGroup => "silo_group",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SiloUser => "User",
            Self::SiloGroup => "Group",
        }
    }
}

impl FromStr for IdentityType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "silo_user" => Ok(Self::SiloUser),
            "silo_group" => Ok(Self::SiloGroup),
            _ => Err(AppError::Validation(format!("unknown identity type '{value}'"))),
        }
    }
}

/// Identity filter applied to access tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityFilter {
    /// Users and groups.
    #[default]
    All,
    /// Users only.
    Users,
    /// Groups only.
    Groups,
}

impl IdentityFilter {
    /// Returns whether an identity of the given type passes this filter.
    #[must_use]
    pub fn matches(&self, identity_type: IdentityType) -> bool {
        match self {
            Self::All => true,
            Self::Users => identity_type == IdentityType::SiloUser,
            Self::Groups => identity_type == IdentityType::SiloGroup,
        }
    }

    /// Noun used in prompts such as "Add user or group".
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "user or group",
            Self::Users => "user",
            Self::Groups => "group",
        }
    }
}

impl FromStr for IdentityFilter {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(Self::All),
            "users" => Ok(Self::Users),
            "groups" => Ok(Self::Groups),
            _ => Err(AppError::Validation(format!(
                "identity filter must be 'all', 'users' or 'groups', got '{value}'"
            ))),
        }
    }
}

/// Badge palette entries used for roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
    /// Neutral badge.
    Default,
    /// Purple badge.
    Purple,
    /// Blue badge.
    Blue,
}

impl BadgeColor {
    /// Returns the stable transport value for this color.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Purple => "purple",
            Self::Blue => "blue",
        }
    }
}
