//! Configuration module for purposeviz
//!
//! The first source found is loaded:
//! 1. Directory config (`<DIR>/purposeviz.toml`)
//! 2. User config (`~/.config/purposeviz/config.toml`)
//! 3. Built-in defaults
//!
//! Environment variables (`PURPOSEVIZ_*`) are then applied on top.

mod loader;
mod types;

pub use loader::{ConfigWarning, DIRECTORY_CONFIG_FILE, USER_CONFIG_FILE};
pub use types::{Config, ReportConfig, REPORT_FILE_NAME};
