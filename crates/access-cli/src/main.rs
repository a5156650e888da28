mod session_file;

use std::path::PathBuf;
use std::sync::Arc;

use access_core::{AccessCatalog, AccessContext, ProtectOptions, SessionStore};
use access_shared::telemetry::init_telemetry;
use access_shared::AccessConfig;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::info;

use session_file::FileSessionSource;

#[derive(Parser, Debug)]
#[command(
    name = "access-inspect",
    version,
    about = "Inspect access decisions for a session payload"
)]
struct Cli {
    /// Directory holding `default` and per-environment config files
    #[arg(long, global = true, default_value = "config")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the menu tree the session may navigate
    Menu {
        #[arg(long)]
        session: PathBuf,
    },
    /// Print the guard decision for a path
    Route {
        #[arg(long)]
        session: PathBuf,
        path: String,
        /// Redirect target on denial instead of the configured default
        #[arg(long)]
        redirect_to: Option<String>,
    },
    /// Check a module, or a submodule when one is given
    Module {
        #[arg(long)]
        session: PathBuf,
        module: String,
        sub_module: Option<String>,
    },
    /// List usable POS options, or check a single button
    Pos {
        #[arg(long)]
        session: PathBuf,
        #[arg(long)]
        button: Option<String>,
    },
}

impl Commands {
    fn session(&self) -> &PathBuf {
        match self {
            Commands::Menu { session }
            | Commands::Route { session, .. }
            | Commands::Module { session, .. }
            | Commands::Pos { session, .. } => session,
        }
    }
}

/// Decision for one navigation plus what the guard would render. The path
/// is evaluated once, so a denial is logged once.
fn route_report(ctx: &AccessContext, path: &str, options: &ProtectOptions) -> Value {
    let decision = ctx.decide_route(path, options);
    let rendered = if decision.is_allowed() { "children" } else { "fallback" };
    json!({
        "path": path,
        "rendered": rendered,
        "navigatedTo": decision.redirect_to(),
        "decision": decision,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AccessConfig::load_from(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    init_telemetry(&config.telemetry)?;

    let catalog = Arc::new(
        AccessCatalog::from_settings(&config.catalog).context("Failed to load access catalog")?,
    );

    let store = SessionStore::new();
    let state = store
        .refresh(&FileSessionSource::new(cli.command.session()))
        .await;
    info!(
        authenticated = state.is_authenticated(),
        role = ?state.role(),
        "Session resolved"
    );

    let ctx = AccessContext::new(state, catalog, config.guard.clone());
    let output = match &cli.command {
        Commands::Menu { .. } => json!({
            "role": ctx.user_role(),
            "isAdmin": ctx.is_admin(),
            "items": ctx.accessible_menu_items(),
        }),
        Commands::Route {
            path, redirect_to, ..
        } => {
            let options = ProtectOptions {
                redirect_to: redirect_to.clone(),
            };
            route_report(&ctx, path, &options)
        }
        Commands::Module {
            module, sub_module, ..
        } => {
            let allowed = match sub_module {
                Some(sub) => ctx.has_access_to_sub_module(module, sub),
                None => ctx.has_access_to_module(module),
            };
            json!({
                "module": module,
                "subModule": sub_module,
                "allowed": allowed,
                "anyAccess": ctx.has_any_access_to_module(module),
            })
        }
        Commands::Pos { button, .. } => match button {
            Some(key) => json!({
                "button": key,
                "allowed": ctx.has_access_to_pos_button(key),
            }),
            None => json!({
                "posAccess": ctx.has_pos_access(),
                "options": ctx.accessible_pos_options(),
            }),
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
