use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Closed set of console roles. Adding a role forces every visibility `match` to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "admin")]
    Administrator,
    Analyst,
    Viewer,
    Enterprise,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Administrator, Role::Analyst, Role::Viewer, Role::Enterprise];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Analyst => "analyst",
            Role::Viewer => "viewer",
            Role::Enterprise => "enterprise",
        }
    }

    /// Exact, case-sensitive label lookup. Unknown labels yield `None`, which every
    /// consumer treats as "sees nothing".
    pub fn parse(label: &str) -> Option<Role> {
        match label {
            "administrator" | "admin" => Some(Role::Administrator),
            "analyst" => Some(Role::Analyst),
            "viewer" => Some(Role::Viewer),
            "enterprise" => Some(Role::Enterprise),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| AppError::user("unknown_role", format!("unknown role '{}'", s)))
    }
}

/// The signed-in actor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

impl Identity {
    pub fn new(id: &str, email: &str, name: &str, role: Role, organization: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
            organization: organization.map(str::to_string),
        }
    }
}
