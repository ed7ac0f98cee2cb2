pub mod config;
pub mod core;
#[cfg(feature = "ui")]
pub mod pages;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::{Credentials, Environment, Settings};

pub use core::{api_case, skip, ApiContext, Marker, MarkerExpr, Suite, TestCase};
#[cfg(feature = "ui")]
pub use core::{base_page::BasePage, ui_case, UiContext};

pub use utils::api_client::{ApiResponse, BlogApiClient};
pub use utils::error::{E2eError, Result};
