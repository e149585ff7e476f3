use crate::config::{KindSelection, OutputFormat};
use crate::utils::error::{BrdocError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub check: Option<CheckConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub pretty: Option<bool>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置並驗證
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: FileConfig = toml::from_str(&processed_content)?;
        config.validate()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${BRDOC_FORMAT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BrdocError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn kind(&self) -> Option<KindSelection> {
        self.check
            .as_ref()
            .and_then(|c| c.kind.as_deref())
            .and_then(KindSelection::from_name)
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .and_then(OutputFormat::from_name)
    }

    pub fn pretty(&self) -> bool {
        self.output.as_ref().and_then(|o| o.pretty).unwrap_or(false)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(kind) = self.check.as_ref().and_then(|c| c.kind.as_deref()) {
            validate_one_of("check.kind", kind, &KindSelection::NAMES)?;
        }

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }

        Ok(())
    }
}
