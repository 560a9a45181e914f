//! Static navigation catalogs. Paths are unique across both catalogs and always carry
//! their leading slash; every comparison elsewhere is against this exact form.

use serde::Serialize;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NavigationEntry {
    pub title: &'static str,
    pub path: &'static str,
    /// Icon key understood by the rendering layer.
    pub icon: &'static str,
}

const fn entry(title: &'static str, path: &'static str, icon: &'static str) -> NavigationEntry {
    NavigationEntry { title, path, icon }
}

/// Primary "monitoring" group, in display order.
pub static PRIMARY_CATALOG: &[NavigationEntry] = &[
    entry("Dashboard", "/", "layout-dashboard"),
    entry("Alerts", "/alerts", "bell"),
    entry("Incidents", "/incidents", "siren"),
    entry("Log Explorer", "/logs", "scroll-text"),
    entry("AI Analyst", "/ai", "brain"),
    entry("Threat Hunting", "/threat-hunting", "crosshair"),
    entry("Threat Intel", "/threat-intel", "radar"),
    entry("Threat Map", "/threat-map", "globe"),
    entry("Network Monitor", "/network", "network"),
    entry("Endpoints", "/endpoints", "monitor"),
    entry("Assets", "/assets", "server"),
    entry("Vulnerabilities", "/vulnerabilities", "bug"),
    entry("File Integrity", "/fim", "file-check"),
    entry("YARA Scanner", "/yara", "scan-search"),
    entry("Detection Rules", "/rules", "list-checks"),
    entry("Baselines", "/baselines", "activity"),
    entry("MITRE ATT&CK", "/mitre", "grid"),
    entry("Compliance", "/compliance", "shield-check"),
    entry("Reports", "/reports", "file-bar-chart"),
];

/// Secondary "system" group.
pub static SYSTEM_CATALOG: &[NavigationEntry] = &[
    entry("User Management", "/users", "users"),
    entry("Notifications", "/notifications", "bell-ring"),
    entry("Settings", "/settings", "settings"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogGroup { Primary, System }

/// Locate a path in either catalog.
pub fn find(path: &str) -> Option<(CatalogGroup, &'static NavigationEntry)> {
    PRIMARY_CATALOG
        .iter()
        .find(|e| e.path == path)
        .map(|e| (CatalogGroup::Primary, e))
        .or_else(|| SYSTEM_CATALOG.iter().find(|e| e.path == path).map(|e| (CatalogGroup::System, e)))
}

/// Check the static-data invariants: leading slash, non-empty title, no duplicate paths
/// within or across the given catalogs.
pub fn validate_catalogs(catalogs: &[&[NavigationEntry]]) -> AppResult<()> {
    let mut seen = std::collections::HashSet::new();
    for e in catalogs.iter().flat_map(|c| c.iter()) {
        if !e.path.starts_with('/') {
            return Err(AppError::internal("catalog_path", format!("path '{}' lacks a leading slash", e.path)));
        }
        if e.title.trim().is_empty() {
            return Err(AppError::internal("catalog_title", format!("entry '{}' has an empty title", e.path)));
        }
        if !seen.insert(e.path) {
            return Err(AppError::internal("catalog_duplicate", format!("duplicate path '{}'", e.path)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalogs_are_valid() {
        validate_catalogs(&[PRIMARY_CATALOG, SYSTEM_CATALOG]).unwrap();
        assert_eq!(PRIMARY_CATALOG.len(), 19);
        assert_eq!(SYSTEM_CATALOG.len(), 3);
    }

    #[test]
    fn duplicate_across_catalogs_detected() {
        let a = [entry("A", "/a", "x")];
        let b = [entry("Also A", "/a", "y")];
        let err = validate_catalogs(&[&a[..], &b[..]]).unwrap_err();
        assert_eq!(err.code_str(), "catalog_duplicate");
    }

    #[test]
    fn missing_slash_detected() {
        let a = [entry("A", "alerts", "x")];
        assert_eq!(validate_catalogs(&[&a[..]]).unwrap_err().code_str(), "catalog_path");
    }

    #[test]
    fn find_reports_group() {
        assert_eq!(find("/fim").map(|(g, _)| g), Some(CatalogGroup::Primary));
        assert_eq!(find("/settings").map(|(g, e)| (g, e.title)), Some((CatalogGroup::System, "Settings")));
        assert!(find("/Settings").is_none());
        assert!(find("settings").is_none());
    }
}
