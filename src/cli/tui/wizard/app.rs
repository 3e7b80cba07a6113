//! Terminal render loop driving an [`Orchestrator`]

use std::time::Duration;

use ratatui::{
    crossterm::event::{self, Event, KeyEventKind},
    layout::Rect,
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc;
use tokio::time;
use tracing::{debug, error};

use super::error::WizardError;
use super::events::WizardEvent;
use super::orchestrator::{Command, Orchestrator};
use super::result::ResultBundle;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Owns the terminal while the wizard runs
pub struct App {
    orchestrator: Orchestrator,
}

impl App {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self { orchestrator }
    }

    /// Run until a step asks to quit, then return the final results
    pub async fn run(mut self) -> Result<ResultBundle, WizardError> {
        let mut terminal = ratatui::try_init().map_err(WizardError::RunFailure)?;

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let reader = tokio::task::spawn_blocking(move || read_input(event_tx));

        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // closing the channel stops the reader on its next poll
        drop(event_rx);
        ratatui::restore();
        if let Err(e) = reader.await {
            error!(error = %e, "Input reader stopped abnormally");
        }

        result?;
        self.orchestrator.finish()
    }

    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut mpsc::UnboundedReceiver<std::io::Result<WizardEvent>>,
    ) -> Result<(), WizardError> {
        let mut command = self.orchestrator.init();

        while command != Command::Quit {
            terminal
                .draw(|frame| draw(frame, &self.orchestrator))
                .map_err(WizardError::RunFailure)?;

            let event = match time::timeout(POLL_INTERVAL, event_rx.recv()).await {
                Ok(Some(event)) => event.map_err(WizardError::RunFailure)?,
                Ok(None) => {
                    debug!("Input channel closed");
                    break;
                }
                Err(_) => WizardEvent::Tick,
            };

            command = self.orchestrator.update(event);
        }

        Ok(())
    }
}

/// Blocking crossterm reader; stops once the receiving side is gone
fn read_input(tx: mpsc::UnboundedSender<std::io::Result<WizardEvent>>) {
    while !tx.is_closed() {
        let event = match event::poll(POLL_INTERVAL) {
            Ok(false) => continue,
            Ok(true) => event::read(),
            Err(e) => Err(e),
        };

        let event = match event {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Ok(WizardEvent::Key(key)),
            Ok(Event::Resize(width, height)) => Ok(WizardEvent::Resize(width, height)),
            Ok(_) => continue,
            Err(e) => Err(e),
        };

        let failed = event.is_err();
        if tx.send(event).is_err() || failed {
            break;
        }
    }
}

/// Draw the active step, no wider than the base style allows
pub fn draw(frame: &mut Frame, orchestrator: &Orchestrator) {
    let area = frame.area();
    let width = orchestrator.base_style().width.min(area.width);
    let target = Rect { width, ..area };

    frame.render_widget(orchestrator.widget(), target);
}
