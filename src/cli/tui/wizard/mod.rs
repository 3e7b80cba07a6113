//! Step wizard: ordered steps, input dispatch and result broadcasting
pub mod app;
pub mod choice;
pub mod error;
pub mod events;
pub mod orchestrator;
pub mod report;
pub mod result;
pub mod sequence;
pub mod step;
pub mod table;
pub mod theme;

pub use choice::{ChoiceStep, ChoiceStepParams};
pub use error::{ErrorChain, WizardError};
pub use events::{KeyAction, WizardEvent};
pub use orchestrator::{BroadcastFn, Command, Orchestrator};
pub use result::{aggregate, ResultBundle};
pub use sequence::StepSequence;
pub use step::{ChoiceResult, Step, StepKind, StepResult, StepSignal, TableResult};
pub use table::{TableColumn, TableStep, TableStepParams};
pub use theme::BaseStyle;
