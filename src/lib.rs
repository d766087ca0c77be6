pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use adapters::LocalStorage;
pub use config::ShellConfig;
pub use crate::core::{
    cipher::{decrypt, encrypt},
    file_adapter::{FileAdapter, FileOutcome},
    shell::{Console, SessionSummary, Shell},
};
pub use domain::model::{Mode, Shift, Source};
pub use utils::error::{CipherError, Result};
