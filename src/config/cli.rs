use crate::config::{KindSelection, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "brdoc")]
#[command(about = "Validate Brazilian CPF and CNPJ numbers")]
pub struct CliConfig {
    /// CPF/CNPJ numbers to check, with or without punctuation
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Document kind; auto picks by digit count
    #[arg(short, long, value_enum)]
    pub kind: Option<KindSelection>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let config = CliConfig::try_parse_from([
            "brdoc",
            "--kind",
            "cnpj",
            "--format",
            "json",
            "11.222.333/0001-81",
        ])
        .unwrap();

        assert_eq!(config.kind, Some(KindSelection::Cnpj));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.inputs, vec!["11.222.333/0001-81"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_requires_input() {
        assert!(CliConfig::try_parse_from(["brdoc"]).is_err());
    }

    #[test]
    fn test_rejects_empty_config_path() {
        let config = CliConfig::try_parse_from(["brdoc", "--config", "", "52998224725"]).unwrap();
        assert!(config.validate().is_err());
    }
}
