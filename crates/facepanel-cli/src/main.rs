use anyhow::Result;
use clap::{Parser, Subcommand};
use facepanel_api::FacesClient;
use facepanel_core::{AdminPanel, ConfirmPrompt, HtmlPage, PanelOutcome};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod config;
mod console;
mod output;

use config::Config;
use output::{AssumeYes, ConsoleStatus, ConsoleTable, TermConfirm};

#[derive(Parser)]
#[command(name = "facepanel", about = "Admin console for the face recognition service")]
struct Cli {
    /// Base URL of the face service API (overrides FACEPANEL_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered faces with their dataset image counts
    List {
        /// Emit the table as an HTML fragment instead of text
        #[arg(long)]
        html: bool,
    },
    /// Rebuild the service's face index and report the indexed count
    Resync,
    /// Permanently delete a registered face
    Delete {
        /// Face name, as shown by `list`
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show today's attendance log
    Attendance {
        /// Emit the table as an HTML fragment instead of text
        #[arg(long)]
        html: bool,
    },
    /// Clear today's attendance log
    ResetLogs {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Interactive admin console
    Console,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    let client = FacesClient::new(&config.api_url, Duration::from_secs(config.timeout_secs))?;

    let outcome = match cli.command {
        Commands::List { html: false } => {
            terminal_panel(client, Arc::new(AssumeYes)).refresh().await
        }
        Commands::List { html: true } => {
            let page = Arc::new(HtmlPage::default());
            let panel = AdminPanel::new(client, page.clone(), page.clone(), Arc::new(AssumeYes));
            let outcome = panel.refresh().await;
            println!("{}", page.snapshot());
            outcome
        }
        Commands::Resync => terminal_panel(client, Arc::new(AssumeYes)).resync().await,
        Commands::Delete { name, yes } => {
            terminal_panel(client, confirm_for(yes)).delete(&name).await
        }
        Commands::Attendance { html: false } => {
            terminal_panel(client, Arc::new(AssumeYes)).attendance().await
        }
        Commands::Attendance { html: true } => {
            let page = Arc::new(HtmlPage::default());
            let panel = AdminPanel::new(client, page.clone(), page.clone(), Arc::new(AssumeYes));
            let outcome = panel.attendance().await;
            println!("{}", page.snapshot());
            outcome
        }
        Commands::ResetLogs { yes } => {
            terminal_panel(client, confirm_for(yes)).reset_attendance().await
        }
        Commands::Console => {
            let panel = terminal_panel(client, Arc::new(TermConfirm));
            console::run(&panel).await?;
            PanelOutcome::Completed
        }
    };

    if outcome == PanelOutcome::Failed {
        std::process::exit(1);
    }
    Ok(())
}

fn terminal_panel(client: FacesClient, confirm: Arc<dyn ConfirmPrompt>) -> AdminPanel<FacesClient> {
    AdminPanel::new(client, Arc::new(ConsoleStatus), Arc::new(ConsoleTable), confirm)
}

fn confirm_for(assume_yes: bool) -> Arc<dyn ConfirmPrompt> {
    if assume_yes {
        Arc::new(AssumeYes)
    } else {
        Arc::new(TermConfirm)
    }
}
