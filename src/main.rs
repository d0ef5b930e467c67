use tasklist::commands::Cli;
use tasklist::libs::messages::macros::DEBUG_ENV_VAR;

fn main() -> anyhow::Result<()> {
    if std::env::var(DEBUG_ENV_VAR).is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tasklist=debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    Cli::menu()
}
