//!
//! sentinel console front end
//! --------------------------
//! Argument parsing and command execution for the `sentinel_console` binary. Commands
//! build a `SessionProvider` over the file-backed slot, so a `login` in one invocation is
//! restored by the next one, the way a browser tab restores its stored session.

pub mod outputformatter;

use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::config::ConsoleConfig;
use crate::error::{AppError, AppResult};
use crate::identity::{self, SessionProvider};
use crate::navigation::{self, PRIMARY_CATALOG, SYSTEM_CATALOG};
use crate::storage::FileSlotStore;

use outputformatter::{navigation_rows, render_table};

pub const USAGE: &str = "sentinel console\n\nUSAGE:\n  sentinel_console [--state-dir PATH] [--latency-ms N] <COMMAND>\n\nCOMMANDS:\n  login <email> <credential>   Sign in against the built-in directory\n  logout                       Sign out and clear the stored session\n  whoami                       Show the signed-in identity as JSON\n  nav                          Navigation visible to the signed-in role\n  routes                       Every route with its visibility for the signed-in role\n  check <path>                 Exit non-zero unless <path> is reachable\n\nOPTIONS:\n  --state-dir PATH    Folder holding the stored session (env: SENTINEL_STATE_DIR, default .sentinel)\n  --latency-ms N      Sign-in delay in milliseconds (env: SENTINEL_SIGNIN_LATENCY_MS, default 1000)\n  -h, --help          Print this help\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { email: String, credential: String },
    Logout,
    WhoAmI,
    Nav,
    Routes,
    Check { path: String },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub config: ConsoleConfig,
    pub command: Command,
}

fn usage_err(msg: impl Into<String>) -> AppError { AppError::user("usage", msg) }

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> AppResult<&'a str> {
    args.get(i + 1)
        .map(|s| s.as_str())
        .ok_or_else(|| usage_err(format!("{} expects a value", flag)))
}

/// Parse process arguments (without the program name) on top of `base`.
pub fn parse_args(args: &[String], base: ConsoleConfig) -> AppResult<Invocation> {
    let mut config = base;
    let mut positional: Vec<String> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        let a = args[i].as_str();
        match a {
            "-h" | "--help" => return Ok(Invocation { config, command: Command::Help }),
            "--state-dir" => {
                config.state_dir = PathBuf::from(flag_value(args, i, a)?);
                i += 2;
            }
            "--latency-ms" => {
                let raw = flag_value(args, i, a)?;
                let ms = raw.parse::<u64>().map_err(|_| usage_err(format!("--latency-ms: '{}' is not a number", raw)))?;
                config.sign_in_latency = Duration::from_millis(ms);
                i += 2;
            }
            _ if a.starts_with("--") => return Err(usage_err(format!("unknown option '{}'", a))),
            _ => {
                positional.push(args[i].clone());
                i += 1;
            }
        }
    }

    let mut it = positional.into_iter();
    let Some(name) = it.next() else { return Ok(Invocation { config, command: Command::Help }); };
    let rest: Vec<String> = it.collect();
    let expect = |n: usize| -> AppResult<()> {
        if rest.len() == n { Ok(()) } else { Err(usage_err(format!("'{}' takes {} argument(s), got {}", name, n, rest.len()))) }
    };
    let command = match name.as_str() {
        "login" => {
            expect(2)?;
            Command::Login { email: rest[0].clone(), credential: rest[1].clone() }
        }
        "logout" => { expect(0)?; Command::Logout }
        "whoami" => { expect(0)?; Command::WhoAmI }
        "nav" => { expect(0)?; Command::Nav }
        "routes" => { expect(0)?; Command::Routes }
        "check" => {
            expect(1)?;
            Command::Check { path: rest[0].clone() }
        }
        "help" => Command::Help,
        other => return Err(usage_err(format!("unknown command '{}'", other))),
    };
    Ok(Invocation { config, command })
}

/// Run one command and return what should be printed on stdout.
pub async fn execute(inv: &Invocation) -> AppResult<String> {
    if inv.command == Command::Help {
        return Ok(USAGE.to_string());
    }
    navigation::validate_catalogs(&[PRIMARY_CATALOG, SYSTEM_CATALOG])?;
    let store = FileSlotStore::new(&inv.config.state_dir);
    debug!(target: "sentinel::cli", "slot at '{}'", store.path().display());
    let session = SessionProvider::from_config(store, &inv.config);
    session.initialize().await;

    match &inv.command {
        Command::Login { email, credential } => {
            if !session.sign_in(email, credential).await {
                return Err(AppError::auth("invalid_credentials", "invalid email or credential"));
            }
            let id = session
                .current_identity()
                .ok_or_else(|| AppError::internal("session_lost", "identity missing after sign-in"))?;
            Ok(format!("signed in as {} <{}> ({})", id.name, id.email, id.role))
        }
        Command::Logout => {
            let was = session.current_identity();
            session.sign_out();
            Ok(match was {
                Some(id) => format!("signed out {}", id.email),
                None => "not signed in".to_string(),
            })
        }
        Command::WhoAmI => match session.current_identity() {
            Some(id) => serde_json::to_string_pretty(&id).map_err(|e| AppError::internal("encode", e.to_string())),
            None => Ok("not signed in".to_string()),
        },
        Command::Nav => {
            let role = session.role();
            let mut rows = navigation_rows("monitoring", &navigation::resolve_primary(role, PRIMARY_CATALOG));
            rows.extend(navigation_rows("system", &navigation::resolve_system(role, SYSTEM_CATALOG)));
            if rows.is_empty() {
                return Ok("no navigation available (not signed in)".to_string());
            }
            Ok(render_table(&["group", "title", "path", "icon"], &rows))
        }
        Command::Routes => {
            let role = session.role();
            let rows: Vec<Vec<String>> = PRIMARY_CATALOG
                .iter()
                .map(|e| ("monitoring", e))
                .chain(SYSTEM_CATALOG.iter().map(|e| ("system", e)))
                .map(|(g, e)| {
                    let visible = if identity::route_visible(role, e.path) { "yes" } else { "no" };
                    vec![g.to_string(), e.path.to_string(), e.title.to_string(), visible.to_string()]
                })
                .collect();
            Ok(render_table(&["group", "path", "title", "visible"], &rows))
        }
        Command::Check { path } => {
            identity::authorize_route(session.current_identity().as_ref(), path)?;
            Ok(format!("{} allowed", path))
        }
        Command::Help => Ok(USAGE.to_string()),
    }
}
