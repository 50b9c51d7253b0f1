pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, toml_config::ReportConfig};

pub use crate::core::cipher::{decode, encode, transform, ShiftCipher};
pub use crate::core::report::{ReportBuilder, ReportOutcome, ReportWriter};
pub use crate::core::session::{Session, SessionSummary};
pub use crate::domain::model::{MenuChoice, Report, ReportFormat, Sample};
pub use crate::domain::ports::{Cipher, Storage};
pub use crate::utils::error::{CipherError, Result};
