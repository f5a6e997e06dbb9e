use clap::Subcommand;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_record, output_table};
use crate::cli::OutputFormat;

const STUDENT_COLUMNS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("national_id", "CEDULA"),
    ("last_names", "LAST NAMES"),
    ("first_names", "FIRST NAMES"),
    ("faculty", "FACULTY"),
    ("semester", "SEM"),
    ("active", "ACTIVE"),
];

#[derive(Subcommand)]
pub enum StudentCommands {
    #[command(about = "List students (trainers see their own with --mine)")]
    List {
        #[arg(long, help = "Only students of this faculty")]
        faculty_id: Option<i32>,
        #[arg(long, help = "Filter by active flag")]
        active: Option<bool>,
        #[arg(long, help = "Only students assigned to the calling trainer")]
        mine: bool,
    },

    #[command(about = "Show one student")]
    Show { id: i32 },

    #[command(about = "Per-variable progress of a student")]
    Progress { id: i32 },
}

pub async fn handle(cmd: StudentCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        StudentCommands::List {
            faculty_id,
            active,
            mine,
        } => {
            let path = if mine {
                "/api/trainer/students".to_string()
            } else {
                let mut query = Vec::new();
                if let Some(faculty_id) = faculty_id {
                    query.push(format!("faculty_id={}", faculty_id));
                }
                if let Some(active) = active {
                    query.push(format!("active={}", active));
                }
                if query.is_empty() {
                    "/api/students".to_string()
                } else {
                    format!("/api/students?{}", query.join("&"))
                }
            };
            let data = client.get(&path).await?;
            output_table(output_format, &data, STUDENT_COLUMNS, "No students found")
        }
        StudentCommands::Show { id } => {
            let data = client.get(&format!("/api/students/{}", id)).await?;
            output_record(output_format, &data)
        }
        StudentCommands::Progress { id } => {
            let data = client.get(&format!("/api/students/{}/progress", id)).await?;
            output_table(
                output_format,
                &data,
                &[
                    ("variable", "VARIABLE"),
                    ("completed_sessions", "DONE"),
                    ("planned_sessions", "PLANNED"),
                    ("abandoned_sessions", "ABANDONED"),
                    ("average_score", "AVG"),
                    ("status", "STATUS"),
                ],
                "No assignments yet",
            )
        }
    }
}
