// Keep provider request/response plain Rust structs; the directory is the only backend today.
use tracing::debug;

use super::directory;
use super::principal::Identity;

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub credential: String,
}

impl LoginRequest {
    pub fn new(email: &str, credential: &str) -> Self {
        Self { email: email.to_string(), credential: credential.to_string() }
    }
}

/// Backend that turns a login request into an identity. A networked provider can
/// replace the directory without touching the session provider or the resolver.
pub trait AuthProvider: Send + Sync {
    /// `None` covers both "unknown user" and "bad credential"; callers cannot tell them apart.
    fn authenticate(&self, req: &LoginRequest) -> Option<Identity>;
}

/// Matches against the compiled-in directory. Any non-empty credential is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryAuthProvider;

impl AuthProvider for DirectoryAuthProvider {
    fn authenticate(&self, req: &LoginRequest) -> Option<Identity> {
        if req.credential.is_empty() {
            debug!(target: "sentinel::auth", "auth.reject reason=empty_credential");
            return None;
        }
        let found = directory::lookup(&req.email).cloned();
        if found.is_none() {
            debug!(target: "sentinel::auth", "auth.reject reason=unknown_email");
        }
        found
    }
}
