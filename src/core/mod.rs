#[cfg(feature = "ui")]
pub mod base_page;
#[cfg(feature = "ui")]
pub mod browser_factory;
pub mod fixtures;
pub mod harness;
pub mod markers;
pub mod report;

pub use crate::utils::error::Result;
pub use harness::{api_case, skip, ApiContext, Suite, TestCase};
#[cfg(feature = "ui")]
pub use harness::{ui_case, UiContext};
pub use markers::{Marker, MarkerExpr};
