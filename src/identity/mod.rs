//! Identity and session management for the console.
//! Keep the public surface thin and split implementation across sub-modules.

mod principal;
mod session;
mod provider;
mod authorizer;
pub mod directory;

pub use principal::{Identity, Role};
pub use session::SessionProvider;
pub use provider::{AuthProvider, DirectoryAuthProvider, LoginRequest};
pub use authorizer::{authorize_route, route_visible};
