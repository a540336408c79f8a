//! WiseTalk CLI entry point.
//!
//! Binary name: `wisetalk`
//!
//! Parses CLI arguments, sets up tracing, opens the local store, then
//! dispatches to the chat loop or a one-shot command.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use wisetalk_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "wisetalk", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.overrides()).await?;

    let result = match cli.command {
        Commands::Chat => cli::chat::loop_runner::run_chat_loop(&state).await,
        Commands::Quote => cli::quote::quote(&state, cli.json).await,
        Commands::Seen { action } => cli::seen::handle_seen_command(action, &state, cli.json).await,
        Commands::Status => cli::status::status(&state, cli.json).await,
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}
