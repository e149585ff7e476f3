pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{file_config::FileConfig, KindSelection, OutputFormat, Settings};
pub use crate::core::{
    cnpj::{is_cnpj, CnpjValidator},
    cpf::{is_cpf, CpfValidator},
    engine::ValidationEngine,
    normalize::normalize,
};
pub use crate::domain::model::{CheckOutcome, DocumentKind};
pub use crate::domain::ports::DocumentValidator;
pub use crate::utils::error::{BrdocError, Result};
