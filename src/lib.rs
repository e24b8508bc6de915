//! Read a personal projects index and present it: as a formatted listing, or
//! as a single-keystroke menu that prints the chosen project's directory.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod keys;
pub mod logging;
pub mod project;
pub mod selector;
pub mod utils;

pub use config::Config;
pub use project::{ProjectRecord, ProjectStatus};
pub use selector::{Outcome, Selector};
