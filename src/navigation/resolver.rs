//! Role-scoped navigation.
//!
//! Every role maps to exactly one `Visibility` rule through an exhaustive `match`, so a
//! new role does not compile until its rule is chosen. Paths are compared in their full
//! leading-slash form, exact and case-sensitive, for both exclude and allow lists.

use super::catalog::NavigationEntry;
use crate::identity::Role;

const ENTERPRISE_HIDDEN: &[&str] = &["/fim", "/yara"];
const ANALYST_HIDDEN: &[&str] = &["/settings"];
const VIEWER_ALLOWED: &[&str] = &["/", "/alerts", "/logs", "/ai"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    All,
    /// Everything except these paths, catalog order kept.
    Exclude(&'static [&'static str]),
    /// Only these paths, in the listed order.
    AllowOnly(&'static [&'static str]),
}

impl Visibility {
    pub fn permits(&self, path: &str) -> bool {
        match self {
            Visibility::All => true,
            Visibility::Exclude(hidden) => !hidden.contains(&path),
            Visibility::AllowOnly(allowed) => allowed.contains(&path),
        }
    }

    pub fn apply<'a>(&self, catalog: &'a [NavigationEntry]) -> Vec<&'a NavigationEntry> {
        match self {
            Visibility::All => catalog.iter().collect(),
            Visibility::Exclude(hidden) => catalog.iter().filter(|e| !hidden.contains(&e.path)).collect(),
            Visibility::AllowOnly(allowed) => allowed
                .iter()
                .filter_map(|p| catalog.iter().find(|e| e.path == *p))
                .collect(),
        }
    }
}

pub fn visibility_for(role: Role) -> Visibility {
    match role {
        Role::Administrator => Visibility::All,
        Role::Enterprise => Visibility::Exclude(ENTERPRISE_HIDDEN),
        Role::Analyst => Visibility::Exclude(ANALYST_HIDDEN),
        Role::Viewer => Visibility::AllowOnly(VIEWER_ALLOWED),
    }
}

/// Entries of the primary catalog visible to `role`. No role sees nothing.
pub fn resolve_primary(role: Option<Role>, catalog: &[NavigationEntry]) -> Vec<&NavigationEntry> {
    match role {
        Some(r) => visibility_for(r).apply(catalog),
        None => Vec::new(),
    }
}

/// Same as `resolve_primary` for a raw role label; labels outside the closed set see nothing.
pub fn resolve_primary_for_label<'a>(label: &str, catalog: &'a [NavigationEntry]) -> Vec<&'a NavigationEntry> {
    resolve_primary(Role::parse(label), catalog)
}

pub fn resolve_system_group_visible(role: Option<Role>) -> bool {
    match role {
        Some(Role::Administrator) | Some(Role::Enterprise) => true,
        Some(Role::Analyst) | Some(Role::Viewer) | None => false,
    }
}

/// System entries for `role`: empty unless the group is visible, then filtered by the role's rule.
pub fn resolve_system(role: Option<Role>, catalog: &[NavigationEntry]) -> Vec<&NavigationEntry> {
    if !resolve_system_group_visible(role) {
        return Vec::new();
    }
    resolve_primary(role, catalog)
}
