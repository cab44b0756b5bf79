pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::rates_file::RatesFileConfig;

pub use adapters::{ScriptedConsole, StdConsole};
pub use core::session::Session;
pub use domain::model::{ConversionRequest, RateTable};
pub use utils::error::{FxError, Result};
