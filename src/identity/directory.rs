//! Compiled-in directory of the four console identities used for sign-in matching.

use once_cell::sync::Lazy;

use super::principal::{Identity, Role};

static DIRECTORY: Lazy<Vec<Identity>> = Lazy::new(|| {
    vec![
        Identity::new("1", "admin@sentinel.ai", "Admin User", Role::Administrator, Some("SentinelAI Corp")),
        Identity::new("2", "analyst@sentinel.ai", "Security Analyst", Role::Analyst, Some("SentinelAI Corp")),
        Identity::new("3", "viewer@sentinel.ai", "Read-Only Viewer", Role::Viewer, None),
        Identity::new("4", "enterprise@acme.com", "Enterprise Admin", Role::Enterprise, Some("Acme Corporation")),
    ]
});

pub fn entries() -> &'static [Identity] { DIRECTORY.as_slice() }

/// Exact email match.
pub fn lookup(email: &str) -> Option<&'static Identity> {
    DIRECTORY.iter().find(|i| i.email == email)
}
