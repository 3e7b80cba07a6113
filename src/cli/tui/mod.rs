/// Terminal User Interface module for interactive commands
pub mod wizard;

use crate::Result;
use wizard::{app::App, Orchestrator, ResultBundle};

/// Run the interactive step wizard
pub async fn run_wizard(orchestrator: Orchestrator) -> Result<ResultBundle> {
    let bundle = App::new(orchestrator).run().await?;
    Ok(bundle)
}
