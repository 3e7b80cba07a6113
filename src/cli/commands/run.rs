use tracing::{error, info};

use super::CommandHandler;
use crate::cli::tui::{
    self,
    wizard::{
        report::compat_table, BaseStyle, ChoiceStep, ChoiceStepParams, Orchestrator, Step,
        StepSequence,
    },
};
use crate::config::{Config, IMPLEMENTATION_PREFIX, REF_IMPLEMENTATION_PREFIX};
use crate::Result;

/// Handler for the `run` command
pub struct RunCommand {
    pub config: Config,
}

impl CommandHandler for RunCommand {
    fn execute(&self) -> Result<()> {
        let orchestrator = build_orchestrator(&self.config)?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let bundle = runtime.block_on(tui::run_wizard(orchestrator)).map_err(|e| {
            error!(error = %e, "Wizard run failed");
            e
        })?;

        info!(choice = ?bundle.choice(), "Wizard finished");
        println!("{}", serde_json::to_string_pretty(&bundle)?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "run"
    }
}

impl RunCommand {
    /// Create a run command over an already resolved configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// Header of the specification column
pub fn spec_header(config: &Config) -> String {
    format!("Spec: {}", config.reference.url)
}

/// Default header of the implementation column, before anything is chosen
pub fn default_impl_header(config: &Config) -> String {
    config
        .implementations
        .first()
        .map(|repo| repo.label(IMPLEMENTATION_PREFIX))
        .unwrap_or_else(|| format!("{}: -", IMPLEMENTATION_PREFIX))
}

/// Wizard with an implementation picker followed by the compatibility report.
///
/// Confirming an implementation rebuilds the report with it as the
/// implementation column.
pub fn build_orchestrator(config: &Config) -> Result<Orchestrator> {
    let spec = spec_header(config);

    let choices = ChoiceStep::new(ChoiceStepParams {
        order: 1,
        options: config.implementation_urls(),
        header: config.reference.label(REF_IMPLEMENTATION_PREFIX),
        ..Default::default()
    });
    let report = compat_table(&config.report, &spec, &default_impl_header(config));

    let steps: Vec<Box<dyn Step>> = vec![Box::new(choices), Box::new(report)];
    let orchestrator = Orchestrator::new(steps, BaseStyle::new(&config.style))?;

    let report_config = config.report.clone();
    Ok(orchestrator.on_transition(move |result, sequence: &mut StepSequence| {
        let Some(choice) = result.choice() else {
            return Ok(());
        };

        let table = compat_table(&report_config, &spec, choice);
        sequence.replace(Box::new(table)).map_err(|e| {
            error!(error = %e, "Failed to update table step");
            anyhow::Error::new(e)
        })?;
        Ok(())
    }))
}
