use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use revostay_cli::config::constants::{sleep_duration_millis, RUNTIME_SHUTDOWN_GRACE_PERIOD_MS};
use revostay_cli::errors::ErrorHandler;
use revostay_cli::structs::cli::Cli;
use revostay_cli::workers::command_runner::CommandRunner;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    // One thread: polling and user actions interleave only at request boundaries.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let result = runtime.block_on(async { CommandRunner::new().run_command(cli.command).await });

    // A pending stdin read must not hold the process open after `watch` ends.
    runtime.shutdown_timeout(sleep_duration_millis(RUNTIME_SHUTDOWN_GRACE_PERIOD_MS));

    if let Err(error) = result {
        ErrorHandler::handle_error(&error);
        std::process::exit(1);
    }

    Ok(())
}
