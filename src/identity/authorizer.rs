use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::navigation::{self, CatalogGroup};

use super::principal::{Identity, Role};

/// Whether `path` is reachable for `role` under the same policy that drives navigation.
/// System paths additionally need the system group to be visible; unknown paths are never visible.
pub fn route_visible(role: Option<Role>, path: &str) -> bool {
    let Some(r) = role else { return false; };
    match navigation::find(path) {
        Some((CatalogGroup::Primary, _)) => navigation::visibility_for(r).permits(path),
        Some((CatalogGroup::System, _)) => {
            navigation::resolve_system_group_visible(role) && navigation::visibility_for(r).permits(path)
        }
        None => false,
    }
}

/// Route-level gate for consumers that want hidden entries to be unreachable too.
/// The navigation resolver itself only hides entries.
pub fn authorize_route(identity: Option<&Identity>, path: &str) -> AppResult<()> {
    let Some((_, entry)) = navigation::find(path) else {
        return Err(AppError::not_found("unknown_route", format!("no route '{}'", path)));
    };
    let Some(id) = identity else {
        return Err(AppError::auth("unauthenticated", format!("sign in to open '{}'", entry.title)));
    };
    if !route_visible(Some(id.role), path) {
        debug!(target: "sentinel::authz", "route.deny user={} role={} path={}", id.email, id.role, path);
        return Err(AppError::forbidden(
            "route_hidden",
            format!("'{}' is not available to the {} role", entry.title, id.role),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::directory;

    #[test]
    fn unauthenticated_sees_no_routes() {
        assert!(!route_visible(None, "/"));
        let err = authorize_route(None, "/alerts").unwrap_err();
        assert_eq!(err.http_status(), 401);
    }

    #[test]
    fn unknown_path_is_not_found_before_auth() {
        let err = authorize_route(None, "/does-not-exist").unwrap_err();
        assert_eq!(err.code_str(), "unknown_route");
    }

    #[test]
    fn enterprise_blocked_from_fim_and_yara_only() {
        let ent = directory::lookup("enterprise@acme.com").unwrap();
        assert_eq!(authorize_route(Some(ent), "/fim").unwrap_err().http_status(), 403);
        assert_eq!(authorize_route(Some(ent), "/yara").unwrap_err().http_status(), 403);
        authorize_route(Some(ent), "/network").unwrap();
        authorize_route(Some(ent), "/settings").unwrap();
    }

    #[test]
    fn analyst_cannot_reach_system_routes() {
        let analyst = directory::lookup("analyst@sentinel.ai").unwrap();
        authorize_route(Some(analyst), "/yara").unwrap();
        for p in ["/users", "/notifications", "/settings"] {
            assert_eq!(authorize_route(Some(analyst), p).unwrap_err().code_str(), "route_hidden");
        }
    }

    #[test]
    fn viewer_limited_to_allow_list() {
        let viewer = directory::lookup("viewer@sentinel.ai").unwrap();
        authorize_route(Some(viewer), "/ai").unwrap();
        assert!(authorize_route(Some(viewer), "/incidents").is_err());
        assert!(!route_visible(Some(Role::Viewer), "/users"));
    }

    #[test]
    fn admin_reaches_everything() {
        let admin = directory::lookup("admin@sentinel.ai").unwrap();
        for e in navigation::PRIMARY_CATALOG.iter().chain(navigation::SYSTEM_CATALOG.iter()) {
            authorize_route(Some(admin), e.path).unwrap();
        }
    }
}
