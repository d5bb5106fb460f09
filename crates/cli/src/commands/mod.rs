//! Command handlers

pub mod docs;
pub mod insights;
pub mod offline;
pub mod projects;
pub mod resources;

use crate::cli::{Cli, Command};
use crate::output::Printer;
use crate::settings::Settings;
use anyhow::{Result, anyhow};
use postapi_app::{AppError, Session};
use postapi_client::{Gateway, GatewayError};

/// Everything an online command needs
pub struct Context {
    pub settings: Settings,
    pub printer: Printer,
    pub session: Session,
    pub gateway: Gateway,
}

impl Context {
    /// Build a signed-in context from resolved settings
    pub fn signed_in(settings: Settings) -> Result<Self> {
        let session = settings.session()?;
        let gateway = session.gateway(&settings.client_config())?;
        Ok(Self {
            printer: Printer::new(session.theme()),
            settings,
            session,
            gateway,
        })
    }

    pub fn api_base(&self) -> &str {
        self.settings.api_base()
    }
}

/// Run a parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    let Cli { global, command } = cli;

    if !command.needs_backend() {
        let printer = Printer::new(Settings::default().resolved_theme());
        return offline::run(command, &printer);
    }

    let settings = Settings::load(&global)?;
    tracing::debug!(api = %settings.api_base(), "using backend");

    match command {
        Command::Docs {
            slug,
            styles,
            all_styles,
        } => docs::run(&settings, &slug, &styles, all_styles).await,
        command => {
            let ctx = Context::signed_in(settings)?;
            let result = match command {
                Command::Projects { command } => projects::run(&ctx, command).await,
                Command::Resources { command } => resources::run(&ctx, command).await,
                Command::Usage { project } => insights::usage(&ctx, &project).await,
                Command::Analytics { project } => insights::analytics(&ctx, &project).await,
                _ => Err(anyhow!("command does not use a session")),
            };
            ctx.session.sign_out();
            result
        }
    }
}

/// Error to show for a failed page action
///
/// Gateway causes were logged where they happened; the user sees the
/// generic message.
pub fn user_facing(err: AppError) -> anyhow::Error {
    anyhow!(err.user_message())
}

pub fn gateway_facing(err: GatewayError) -> anyhow::Error {
    anyhow!(err.user_message())
}
