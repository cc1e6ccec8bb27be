//! ```sh
//! USERAUTH_PASSWORD=qwerty cargo r -p userauth-client -F binary -- admin
//! ```

use clap::Parser;
use std::process::ExitCode;
use userauth_api_types::request::AuthRequest;
use userauth_api_types::response::AuthOutcome;
use userauth_client::{Client, DEFAULT_ENDPOINT};

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Server root URL (`http://127.0.0.1:8000`)
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    username: String,
    #[arg(env = "USERAUTH_PASSWORD", hide_env_values = true)]
    password: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let client = Client::new(&args.endpoint)?;
    let response = client
        .authenticate(&AuthRequest::new(args.username, args.password))
        .await?;

    println!("{}", response.status_code);

    Ok(match response.outcome() {
        AuthOutcome::Accepted => ExitCode::SUCCESS,
        AuthOutcome::Rejected | AuthOutcome::Unexpected(_) => ExitCode::FAILURE,
    })
}
