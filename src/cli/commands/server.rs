use clap::Subcommand;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_record, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Check server and database health from the /health endpoint")]
    Health,

    #[command(about = "Show server information from the API root endpoint")]
    Info,
}

pub async fn handle(cmd: ServerCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Health => {
            let data = client.get("/health").await?;
            output_success(output_format, &format!("{} is healthy", client.base_url()), Some(data))
        }
        ServerCommands::Info => {
            let data = client.get("/").await?;
            output_record(output_format, &data)
        }
    }
}
