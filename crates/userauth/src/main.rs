use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = userauth::cli::UserauthArgs::parse();

    userauth::start_listening(args).await?.await
}
