use std::path::PathBuf;

use super::CommandHandler;
use crate::cli::app::OutputFormat;
use crate::config::ConfigLoader;
use crate::Result;

/// Handler for the `show` command
pub struct ShowCommand {
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
}

impl CommandHandler for ShowCommand {
    fn execute(&self) -> Result<()> {
        let config = ConfigLoader::new().load(self.config.as_deref())?;

        let rendered = match self.format {
            OutputFormat::Yaml => serde_yaml_ng::to_string(&config)?,
            OutputFormat::Json => serde_json::to_string_pretty(&config)?,
        };
        println!("{}", rendered.trim_end());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "show"
    }
}

impl ShowCommand {
    /// Create new show command
    pub fn new(config: Option<PathBuf>, format: OutputFormat) -> Self {
        Self { config, format }
    }
}
