#[cfg(feature = "cli")]
pub mod cli;
pub mod file_config;

use serde::{Deserialize, Serialize};

/// 要用哪個驗證器：自動判斷或指定種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum KindSelection {
    #[default]
    Auto,
    Cpf,
    Cnpj,
}

impl KindSelection {
    pub const NAMES: [&'static str; 3] = ["auto", "cpf", "cnpj"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(KindSelection::Auto),
            "cpf" => Some(KindSelection::Cpf),
            "cnpj" => Some(KindSelection::Cnpj),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// 合併命令列與設定檔後的最終設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub kind: KindSelection,
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Settings {
    /// 命令列優先，其次設定檔，最後預設值
    pub fn resolve(
        kind: Option<KindSelection>,
        format: Option<OutputFormat>,
        file: Option<&file_config::FileConfig>,
    ) -> Self {
        let file_kind = file.and_then(|f| f.kind());
        let file_format = file.and_then(|f| f.format());
        let pretty = file.map(|f| f.pretty()).unwrap_or(false);

        Self {
            kind: kind.or(file_kind).unwrap_or_default(),
            format: format.or(file_format).unwrap_or_default(),
            pretty,
        }
    }
}
