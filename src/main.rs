use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use classifier_performance::cli::Cli;
use classifier_performance::ctx::Ctx;
use classifier_performance::pipeline::Pipeline;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut ctx = Ctx::new(
        cli.predictions.clone(),
        cli.target.into(),
        cli.output_options(),
        env!("CARGO_PKG_VERSION"),
    );

    Pipeline::standard().run(&mut ctx)?;
    Ok(())
}
