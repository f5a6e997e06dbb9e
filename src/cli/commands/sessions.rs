use clap::Subcommand;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_record, output_success, output_table};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum SessionCommands {
    #[command(about = "Sessions of an assignment, by number")]
    List {
        #[arg(help = "Assignment id")]
        assignment_id: i32,
    },

    #[command(about = "Show one session")]
    Show { id: i32 },

    #[command(about = "Start a pending session")]
    Start { id: i32 },

    #[command(about = "Finish a session in progress with its score")]
    Finish {
        id: i32,
        #[arg(long, help = "Score between 0 and 100")]
        score: f64,
        #[arg(long)]
        observations: Option<String>,
    },

    #[command(about = "Abandon a session that has not finished")]
    Abandon {
        id: i32,
        #[arg(long)]
        reason: String,
    },
}

pub async fn handle(cmd: SessionCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        SessionCommands::List { assignment_id } => {
            let data = client
                .get(&format!("/api/assignments/{}/sessions", assignment_id))
                .await?;
            output_table(
                output_format,
                &data,
                &[
                    ("id", "ID"),
                    ("number", "#"),
                    ("scheduled_date", "SCHEDULED"),
                    ("status", "STATUS"),
                    ("score", "SCORE"),
                ],
                "No sessions found",
            )
        }
        SessionCommands::Show { id } => {
            let data = client.get(&format!("/api/sessions/{}", id)).await?;
            output_record(output_format, &data)
        }
        SessionCommands::Start { id } => {
            let data = client
                .post::<()>(&format!("/api/sessions/{}/start", id), None)
                .await?;
            report(output_format, data)
        }
        SessionCommands::Finish {
            id,
            score,
            observations,
        } => {
            let body = json!({ "score": score, "observations": observations });
            let data = client
                .post(&format!("/api/sessions/{}/finish", id), Some(&body))
                .await?;
            report(output_format, data)
        }
        SessionCommands::Abandon { id, reason } => {
            let body = json!({ "reason": reason });
            let data = client
                .post(&format!("/api/sessions/{}/abandon", id), Some(&body))
                .await?;
            report(output_format, data)
        }
    }
}

/// Mutations answer `{ message }`; echo the database's own wording
fn report(output_format: OutputFormat, data: serde_json::Value) -> anyhow::Result<()> {
    let message = data["message"].as_str().unwrap_or("Done").to_string();
    output_success(output_format, &message, Some(data))
}
