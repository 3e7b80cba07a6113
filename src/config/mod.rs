//! Configuration for the wizard: repositories, report layout and style
pub mod loader;
pub mod types;

pub use loader::{validate, ConfigLoader};
pub use types::*;
