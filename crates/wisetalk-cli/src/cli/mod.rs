//! CLI command definitions for the `wisetalk` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod quote;
pub mod seen;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use wisetalk_infra::config::ConfigOverrides;

/// Quotes from the great minds, without the repeats.
#[derive(Parser)]
#[command(name = "wisetalk", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log errors only. Quotes and command output are still printed.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Seen-quote history to use.
    #[arg(long, env = "WISETALK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Webhook URL serving the quote of the day.
    #[arg(long, env = "WISETALK_ENDPOINT", hide_env_values = true, global = true)]
    pub endpoint: Option<String>,

    /// Extra fetches allowed when the webhook repeats a seen quote.
    #[arg(long, global = true)]
    pub max_retries: Option<u32>,

    /// Export tracing spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            profile: self.profile.clone(),
            max_retries: self.max_retries,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat (Enter asks for a quote).
    Chat,

    /// Fetch one unseen quote and exit.
    Quote,

    /// Manage the seen-quote history.
    Seen {
        #[command(subcommand)]
        action: seen::SeenCommand,
    },

    /// Show configuration and history status.
    Status,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "wisetalk",
            "quote",
            "--json",
            "--profile",
            "work",
            "--max-retries",
            "2",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Quote));

        let overrides = cli.overrides();
        assert_eq!(overrides.profile.as_deref(), Some("work"));
        assert_eq!(overrides.max_retries, Some(2));
    }

    #[test]
    fn test_quiet_flag_describes_log_filter() {
        let cmd = Cli::command();
        let quiet = cmd
            .get_arguments()
            .find(|a| a.get_id() == "quiet")
            .unwrap();
        let help = quiet.get_help().unwrap().to_string();
        assert!(help.starts_with("Log errors only"));
        assert!(!help.contains("all output"));

        let cli = Cli::try_parse_from(["wisetalk", "status", "--quiet"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(
            wisetalk_observe::tracing_setup::filter_for_verbosity(cli.verbose, cli.quiet),
            "error"
        );
    }

    #[test]
    fn test_parse_seen_clear_force() {
        let cli = Cli::try_parse_from(["wisetalk", "seen", "clear", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Seen {
                action: seen::SeenCommand::Clear { force: true }
            }
        ));
    }
}
