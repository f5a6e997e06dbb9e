use clap::Subcommand;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::utils::output_record;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Login and print a token for COGNICARE_TOKEN")]
    Login {
        #[arg(help = "Account email")]
        email: String,
        #[arg(long, env = "COGNICARE_PASSWORD", hide_env_values = true, help = "Account password")]
        password: String,
    },

    #[command(about = "Show the identity of the current token")]
    Whoami,
}

pub async fn handle(cmd: AuthCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { email, password } => {
            let body = json!({ "email": email, "password": password });
            let data = client.post("/api/auth/login", Some(&body)).await?;
            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
                OutputFormat::Text => {
                    let token = data["token"].as_str().unwrap_or_default();
                    eprintln!(
                        "✓ Logged in as {} ({})",
                        data["user"]["name"].as_str().unwrap_or(&email),
                        data["user"]["role"].as_str().unwrap_or("?")
                    );
                    println!("export COGNICARE_TOKEN={}", token);
                }
            }
            Ok(())
        }
        AuthCommands::Whoami => {
            let data = client.get("/api/auth/me").await?;
            output_record(output_format, &data)
        }
    }
}
