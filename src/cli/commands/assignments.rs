use clap::Subcommand;
use url::form_urlencoded;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_record, output_table};
use crate::cli::OutputFormat;

pub const ASSIGNMENT_COLUMNS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("student", "STUDENT"),
    ("variable", "VARIABLE"),
    ("trainer", "TRAINER"),
    ("completed_sessions", "DONE"),
    ("planned_sessions", "PLANNED"),
    ("status", "STATUS"),
];

#[derive(Subcommand)]
pub enum AssignmentCommands {
    #[command(about = "Assignments of the calling trainer")]
    Mine {
        #[arg(long, help = "En Progreso, Finalizado or Abandono")]
        status: Option<String>,
    },

    #[command(about = "Show one assignment")]
    Show { id: i32 },
}

pub async fn handle(cmd: AssignmentCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AssignmentCommands::Mine { status } => {
            let path = match status {
                Some(status) => {
                    let query: String = form_urlencoded::Serializer::new(String::new())
                        .append_pair("status", &status)
                        .finish();
                    format!("/api/trainer/assignments?{}", query)
                }
                None => "/api/trainer/assignments".to_string(),
            };
            let data = client.get(&path).await?;
            output_table(output_format, &data, ASSIGNMENT_COLUMNS, "No assignments found")
        }
        AssignmentCommands::Show { id } => {
            let data = client.get(&format!("/api/assignments/{}", id)).await?;
            output_record(output_format, &data)
        }
    }
}
