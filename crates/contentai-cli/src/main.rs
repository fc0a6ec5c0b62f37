use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use contentai_application::bootstrap;
use contentai_core::admin::PlanFilter;
use contentai_core::history::HistoryKind;

mod commands;

#[derive(Parser)]
#[command(name = "contentai")]
#[command(about = "ContentAI CLI - generate content ideas and short video scripts", long_about = None)]
struct Cli {
    /// Backend base URL (overrides config.toml and CONTENTAI_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory holding config.toml, session.json and history.json
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and remember the session
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and log in
    Register {
        email: String,
        name: String,
        #[arg(long)]
        password: String,
        /// Must match --password; checked before anything is sent
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Forget the current session
    Logout,
    /// Show the logged in user
    Whoami,
    /// Generate content ideas for a niche and audience
    Ideas {
        niche: String,
        audience: String,
        #[arg(short, long)]
        count: Option<u32>,
    },
    /// Generate a video script for an idea
    Script { idea: String },
    /// List past generations, newest first
    History {
        /// ideas | script
        #[arg(long)]
        kind: Option<HistoryKind>,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Admin tools
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// List users
    Users {
        /// Substring of email or name
        #[arg(short, long)]
        query: Option<String>,
        /// all | premium | free
        #[arg(long, default_value = "all")]
        plan: PlanFilter,
        #[arg(long)]
        admins: bool,
    },
    /// Show usage statistics
    Dashboard,
    /// Grant or revoke premium
    SetPremium {
        user_id: i64,
        /// Revoke instead of grant
        #[arg(long)]
        revoke: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (dispatcher, _config) = bootstrap(cli.config_dir.as_deref(), cli.api_url.as_deref())?;
    dispatcher.session().initialize().await;

    let command = commands::build(cli.command);
    let outcome = dispatcher.dispatch(command).await?;
    commands::render::print(&outcome);

    Ok(())
}
