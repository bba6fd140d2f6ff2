//! contacts-core - Shared functionality for the contacts tool
//!
//! Standard on-disk locations and the user configuration file.

pub mod config;
pub mod paths;

pub use config::{Config, LeapDayPolicy};
pub use paths::Paths;
