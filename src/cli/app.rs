use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::logging::LogLevel;

/// compat-base: compare GraphQL implementations against the reference
#[derive(Parser, Debug)]
#[command(name = "compat-base")]
#[command(version = "0.1.0")]
#[command(about = "Interactive compatibility report for GraphQL implementations")]
#[command(
    long_about = "compat-base walks through a short terminal wizard: pick an implementation, then review its compatibility report against the reference implementation."
)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive wizard
    Run {
        /// Configuration file path (defaults to the user config directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the resolved configuration
    Show {
        /// Configuration file path (defaults to the user config directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: OutputFormat,
    },
}

/// Output formats for `show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Run { .. } => "run",
            Commands::Show { .. } => "show",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = Cli::parse_from(["compat-base", "run", "--config", "wizard.yaml"]);
        match cli.command {
            Commands::Run { config } => assert_eq!(config, Some(PathBuf::from("wizard.yaml"))),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_parse_show_with_format() {
        let cli = Cli::parse_from(["compat-base", "--log-level", "debug", "show", "-f", "json"]);
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.command.name(), "show");
        assert!(matches!(
            cli.command,
            Commands::Show { format: OutputFormat::Json, config: None }
        ));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
