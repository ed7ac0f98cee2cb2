#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use settings::{
    BrowserKind, BrowserSettings, Credentials, Environment, RunSettings, Settings, Timeouts,
    Urls, ViewportSize,
};
pub use toml_config::SettingsFile;
