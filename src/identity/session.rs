use std::time::Duration;
use parking_lot::RwLock;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::config::ConsoleConfig;
use crate::storage::IdentityStore;

use super::principal::{Identity, Role};
use super::provider::{AuthProvider, DirectoryAuthProvider, LoginRequest};

#[derive(Debug)]
struct SessionState {
    identity: Option<Identity>,
    initializing: bool,
    pending_sign_ins: usize,
}

/// Holder of the current identity for the lifetime of the console process.
///
/// Construct one at start-up, share it behind an `Arc`, drop it at shutdown. The
/// provider is the only writer of its identity slot. In-memory state sits behind a
/// lock that is never held across an `.await`, so readers can observe
/// `is_signing_in()` while a sign-in is suspended.
pub struct SessionProvider {
    store: Box<dyn IdentityStore>,
    auth: Box<dyn AuthProvider>,
    latency: Duration,
    state: RwLock<SessionState>,
    restored: OnceCell<()>,
}

/// Marks a sign-in as in flight until dropped, including when the future is dropped mid-delay.
struct PendingSignIn<'a> {
    state: &'a RwLock<SessionState>,
}

impl<'a> PendingSignIn<'a> {
    fn begin(state: &'a RwLock<SessionState>) -> Self {
        state.write().pending_sign_ins += 1;
        Self { state }
    }
}

impl Drop for PendingSignIn<'_> {
    fn drop(&mut self) {
        let mut st = self.state.write();
        st.pending_sign_ins = st.pending_sign_ins.saturating_sub(1);
    }
}

impl SessionProvider {
    /// Provider backed by the compiled-in directory. Starts in the initializing state.
    pub fn new(store: impl IdentityStore + 'static, latency: Duration) -> Self {
        Self::with_auth(store, DirectoryAuthProvider, latency)
    }

    pub fn with_auth(store: impl IdentityStore + 'static, auth: impl AuthProvider + 'static, latency: Duration) -> Self {
        Self {
            store: Box::new(store),
            auth: Box::new(auth),
            latency,
            state: RwLock::new(SessionState { identity: None, initializing: true, pending_sign_ins: 0 }),
            restored: OnceCell::new(),
        }
    }

    pub fn from_config(store: impl IdentityStore + 'static, cfg: &ConsoleConfig) -> Self {
        Self::new(store, cfg.sign_in_latency)
    }

    /// Construct and run the one-time restore.
    pub async fn start(store: impl IdentityStore + 'static, latency: Duration) -> Self {
        let provider = Self::new(store, latency);
        provider.initialize().await;
        provider
    }

    /// Restore a previously persisted identity. Runs once per provider; later calls return immediately.
    pub async fn initialize(&self) {
        self.restored.get_or_init(|| async { self.restore() }).await;
    }

    fn restore(&self) {
        let restored = match self.store.load() {
            Ok(Some(identity)) => {
                info!(target: "sentinel::session", "session.restore user={} role={}", identity.email, identity.role);
                Some(identity)
            }
            Ok(None) => {
                debug!(target: "sentinel::session", "session.restore empty slot");
                None
            }
            Err(e) if e.is_malformed() => {
                warn!(target: "sentinel::session", "session.restore discarding slot: {}", e);
                if let Err(ce) = self.store.clear() {
                    warn!(target: "sentinel::session", "session.restore could not clear slot: {}", ce);
                }
                None
            }
            Err(e) => {
                warn!(target: "sentinel::session", "session.restore slot unreadable, starting signed out: {}", e);
                None
            }
        };
        let mut st = self.state.write();
        // A sign-in that finished before the restore keeps its identity.
        if st.identity.is_none() {
            st.identity = restored;
        }
        st.initializing = false;
    }

    /// Suspends for the configured latency, then matches `email` against the directory.
    /// Returns `false` and leaves state untouched for an unknown email or an empty credential.
    pub async fn sign_in(&self, email: &str, credential: &str) -> bool {
        let _pending = PendingSignIn::begin(&self.state);
        debug!(target: "sentinel::session", "session.sign_in wait_ms={}", self.latency.as_millis());
        tokio::time::sleep(self.latency).await;

        let Some(identity) = self.auth.authenticate(&LoginRequest::new(email, credential)) else {
            debug!(target: "sentinel::session", "session.sign_in rejected");
            return false;
        };
        // The slot is best-effort: a failed write still signs the user in for this process.
        if let Err(e) = self.store.save(&identity) {
            warn!(target: "sentinel::session", "session.sign_in could not persist identity: {}", e);
        }
        info!(target: "sentinel::session", "session.sign_in user={} role={}", identity.email, identity.role);
        self.state.write().identity = Some(identity);
        true
    }

    /// Clear the current identity and the persisted slot. Never fails.
    pub fn sign_out(&self) {
        let previous = self.state.write().identity.take();
        if let Err(e) = self.store.clear() {
            warn!(target: "sentinel::session", "session.sign_out could not clear slot: {}", e);
        }
        match previous {
            Some(p) => info!(target: "sentinel::session", "session.sign_out user={}", p.email),
            None => debug!(target: "sentinel::session", "session.sign_out with no identity"),
        }
    }

    pub fn current_identity(&self) -> Option<Identity> { self.state.read().identity.clone() }

    pub fn role(&self) -> Option<Role> { self.state.read().identity.as_ref().map(|i| i.role) }

    pub fn is_authenticated(&self) -> bool { self.state.read().identity.is_some() }

    pub fn is_initializing(&self) -> bool { self.state.read().initializing }

    pub fn is_signing_in(&self) -> bool { self.state.read().pending_sign_ins > 0 }
}
