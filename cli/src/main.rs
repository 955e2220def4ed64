use std::process::ExitCode;

use clap::{Parser, Subcommand};
use shadowscan::{
    ApiClient, ApiError, ClientConfig, ClientTimeouts, DEFAULT_API_BASE_URL, FeedbackRequest, LoginRequest, RegisterRequest,
    ScanRequest,
};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing token; pass --token or set SHADOWSCAN_TOKEN")]
    MissingToken,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("output render failed: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "shadowscan-cli", about = "ShadowScan privacy-scan API CLI")]
struct Cli {
    #[arg(long, env = "SHADOWSCAN_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "SHADOWSCAN_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the API is reachable.
    Health,
    /// Exchange credentials for a bearer token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and receive a bearer token.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Start a privacy scan for an email address.
    Scan { email_to_scan: String },
    /// List scans and findings for a user.
    Results {
        user_id: Uuid,
        /// Decode into typed reports instead of echoing raw JSON.
        #[arg(long, default_value_t = false)]
        typed: bool,
    },
    /// Send feedback, optionally flagging a finding as a false positive.
    Feedback {
        #[arg(long)]
        message: String,
        #[arg(long, default_value_t = false)]
        false_positive: bool,
        #[arg(long)]
        result_id: Option<Uuid>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // clap already resolved --base-url against SHADOWSCAN_API_BASE_URL.
    let config = ClientConfig::new(&cli.base_url)?.with_timeouts(ClientTimeouts::from_env());
    let client = ApiClient::new(config)?;
    tracing::debug!(base_url = client.base_url(), "api client ready");
    let token = cli.token.as_deref();

    match cli.command {
        Command::Health => print_json(&client.health_check().await?),
        Command::Login { email, password } => {
            print_json(&client.login(&LoginRequest::new(email, password)).await?)
        }
        Command::Register {
            username,
            email,
            password,
        } => print_json(
            &client
                .register(&RegisterRequest::new(username, email, password))
                .await?,
        ),
        Command::Scan { email_to_scan } => {
            let token = require_token(token)?;
            print_json(
                &client
                    .start_scan(&ScanRequest::new(email_to_scan), Some(token))
                    .await?,
            )
        }
        Command::Results { user_id, typed } => {
            let token = require_token(token)?;
            if typed {
                print_json(&client.get_scan_reports(user_id, Some(token)).await?)
            } else {
                print_json(&client.get_scan_results(user_id, Some(token)).await?)
            }
        }
        Command::Feedback {
            message,
            false_positive,
            result_id,
        } => {
            let mut feedback = FeedbackRequest::new(message, false_positive);
            if let Some(id) = result_id {
                feedback = feedback.related_to(id);
            }
            print_json(&client.submit_feedback(&feedback).await?)
        }
    }
}

fn failure_message(err: &CliError) -> String {
    let status = match err {
        CliError::Api(api) => api.status(),
        _ => None,
    };
    match status {
        Some(status) => format!("error (HTTP {status}): {err}"),
        None => format!("error: {err}"),
    }
}

fn require_token(token: Option<&str>) -> Result<&str, CliError> {
    token.filter(|t| !t.is_empty()).ok_or(CliError::MissingToken)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
