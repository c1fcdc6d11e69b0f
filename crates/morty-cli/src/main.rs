//! `morty` -- browse the Rick & Morty API from the terminal.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use morty_cli::{run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "morty_cli=info,morty_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = run(cli, &mut stdout).await {
        tracing::error!(error = %e, "command failed");
        return Err(e);
    }
    Ok(())
}
