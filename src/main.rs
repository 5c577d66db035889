use clap::Parser;
use themefilter::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("themefilter debug log started");
    }

    let output = cli::run(&cli)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
