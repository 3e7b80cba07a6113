use clap::Parser;
use compat_base::{
    cli::commands::{run::RunCommand, show::ShowCommand, CommandHandler},
    cli::{Cli, Commands},
    config::ConfigLoader,
    logging::{default_log_file, initialize_tracing, LogTarget},
    Result,
};
use tracing::{debug, error};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // the wizard owns the terminal, so its logs go to a file
    let (handler, target): (Box<dyn CommandHandler>, LogTarget) = match cli.command {
        Commands::Run { config } => {
            let config = ConfigLoader::new().load(config.as_deref())?;
            let log_file = config.log_file.clone().unwrap_or_else(default_log_file);
            (Box::new(RunCommand::new(config)), LogTarget::File(log_file))
        }
        Commands::Show { config, format } => {
            (Box::new(ShowCommand::new(config, format)), LogTarget::Stderr)
        }
    };
    initialize_tracing(cli.log_level, &target)?;

    debug!(command = handler.name(), "Executing command");
    handler.execute().map_err(|e| {
        error!(command = handler.name(), error = %e, "Command failed");
        e
    })
}
