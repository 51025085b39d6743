use clap::{Parser, Subcommand};

use enroll_core::{validate, Submission};

mod api_client;

use api_client::{ApiClient, SubmitOutcome};

const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Parser)]
#[command(name = "enroll-cli", about = "Register a person with a supervisor")]
struct Opts {
    /// Base URL of the enroll API (falls back to ENROLL_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available supervisors
    Supervisors,
    /// Validate a registration locally, then submit it
    Submit {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone_number: Option<String>,
        #[arg(long)]
        supervisor: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let opts = Opts::parse();
    let api_url = opts
        .api_url
        .or_else(|| std::env::var("ENROLL_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let client = ApiClient::new(&api_url)?;

    match opts.command {
        Command::Supervisors => {
            let supervisors = client.get_supervisors().await?;
            if supervisors.is_empty() {
                println!("No supervisors available.");
            }
            for supervisor in supervisors {
                println!("{supervisor}");
            }
        }
        Command::Submit {
            first_name,
            last_name,
            email,
            phone_number,
            supervisor,
        } => {
            let submission = Submission {
                first_name,
                last_name,
                email,
                phone_number,
                supervisor,
            };

            // Advisory pre-check; the server re-validates regardless
            if let Err(errors) = validate(&submission) {
                eprintln!("Submission is invalid:");
                for error in errors.iter() {
                    eprintln!("  {}: {}", error.field, error.message);
                }
                std::process::exit(1);
            }

            match client.submit(&submission).await? {
                SubmitOutcome::Accepted(message) => println!("{message}"),
                SubmitOutcome::Rejected(error) => {
                    eprintln!("Rejected by server: {error}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
