use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::process::ExitCode;
use std::str::FromStr;

use triage::commands::{
    ApplyOptions, SubmitOptions, cmd_apply, cmd_config_get, cmd_config_set, cmd_config_show,
    cmd_doctor, cmd_ls, cmd_status, cmd_submit, cmd_suggest, cmd_view,
};
use triage::types::{TicketPriority, TicketStatus, VALID_PRIORITIES, VALID_STATUSES};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "AI-assisted support ticket client")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive shell (form + dashboard)
    #[command(visible_alias = "v")]
    View,

    /// Submit a ticket: request AI suggestions, merge, and create
    #[command(visible_alias = "s")]
    Submit {
        /// Ticket title
        #[arg(short, long)]
        title: String,

        /// Problem description
        #[arg(short, long)]
        description: String,

        /// Submitter email
        #[arg(short, long)]
        email: String,

        /// Priority (low, medium, high); omit to let the AI decide
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<TicketPriority>,

        /// Department (free text)
        #[arg(long)]
        department: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Preview the AI suggestion for a title/description pair
    Suggest {
        /// Ticket title
        #[arg(short, long)]
        title: String,

        /// Problem description
        #[arg(short, long)]
        description: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-apply edited suggestion fields to an existing ticket
    Apply {
        /// Ticket ID
        id: String,

        /// Category override
        #[arg(long)]
        category: Option<String>,

        /// Comma-separated tag list
        #[arg(long)]
        tags: Option<String>,

        /// Priority (low, medium, high)
        #[arg(long, value_parser = parse_priority)]
        priority: Option<TicketPriority>,

        /// Suggested response text
        #[arg(long)]
        response: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List tickets with optional client-side filters
    Ls {
        /// Only tickets in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only tickets with this status (new, in_progress, resolved)
        #[arg(short, long, value_parser = parse_status)]
        status: Option<TicketStatus>,

        /// Only tickets carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a ticket's status
    Status {
        /// Ticket ID
        id: String,

        /// New status (new, in_progress, resolved)
        #[arg(value_parser = parse_status)]
        status: TicketStatus,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the backend is reachable
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value (e.g. api.url)
    Get {
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value (e.g. api.url)
    Set {
        key: String,
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_priority(s: &str) -> Result<TicketPriority, String> {
    TicketPriority::from_str(s).map_err(|_| {
        format!(
            "invalid priority '{}' (expected one of: {})",
            s,
            VALID_PRIORITIES.join(", ")
        )
    })
}

fn parse_status(s: &str) -> Result<TicketStatus, String> {
    TicketStatus::from_str(s).map_err(|_| {
        format!(
            "invalid status '{}' (expected one of: {})",
            s,
            VALID_STATUSES.join(", ")
        )
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::View => cmd_view().await,

        Commands::Submit {
            title,
            description,
            email,
            priority,
            department,
            json,
        } => {
            cmd_submit(
                SubmitOptions {
                    title,
                    description,
                    email,
                    priority,
                    department,
                },
                json,
            )
            .await
        }

        Commands::Suggest {
            title,
            description,
            json,
        } => cmd_suggest(&title, &description, json).await,

        Commands::Apply {
            id,
            category,
            tags,
            priority,
            response,
            json,
        } => {
            cmd_apply(
                ApplyOptions {
                    id,
                    category,
                    tags,
                    priority,
                    response,
                },
                json,
            )
            .await
        }

        Commands::Ls {
            category,
            status,
            tag,
            json,
        } => cmd_ls(category.as_deref(), status, tag.as_deref(), json).await,

        Commands::Status { id, status, json } => cmd_status(&id, status, json).await,

        Commands::Doctor { json } => cmd_doctor(json).await,

        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
        },

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
