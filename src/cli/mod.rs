pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use client::ApiClient;

#[derive(Parser)]
#[command(name = "cognicare")]
#[command(about = "CogniCare CLI - Command-line client for the CogniCare API")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "COGNICARE_URL",
        default_value = "http://localhost:3000",
        help = "Base URL of the API server"
    )]
    pub url: String,

    #[arg(long, global = true, env = "COGNICARE_TOKEN", hide_env_values = true, help = "Bearer token")]
    pub token: Option<String>,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Server information and health")]
    Server {
        #[command(subcommand)]
        cmd: commands::server::ServerCommands,
    },

    #[command(about = "Login and identity")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Browse students and their progress")]
    Students {
        #[command(subcommand)]
        cmd: commands::students::StudentCommands,
    },

    #[command(about = "Variable assignments")]
    Assignments {
        #[command(subcommand)]
        cmd: commands::assignments::AssignmentCommands,
    },

    #[command(about = "Run training sessions")]
    Sessions {
        #[command(subcommand)]
        cmd: commands::sessions::SessionCommands,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = ApiClient::new(&cli.url, cli.token.clone())?;

    match cli.command {
        Commands::Server { cmd } => commands::server::handle(cmd, &client, output_format).await,
        Commands::Auth { cmd } => commands::auth::handle(cmd, &client, output_format).await,
        Commands::Students { cmd } => commands::students::handle(cmd, &client, output_format).await,
        Commands::Assignments { cmd } => commands::assignments::handle(cmd, &client, output_format).await,
        Commands::Sessions { cmd } => commands::sessions::handle(cmd, &client, output_format).await,
    }
}
