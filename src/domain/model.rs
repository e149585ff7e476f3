use serde::{Deserialize, Serialize};
use std::fmt;

pub const CPF_LENGTH: usize = DocumentKind::Cpf.digit_count();
pub const CNPJ_LENGTH: usize = DocumentKind::Cnpj.digit_count();

/// 巴西稅號種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// 個人稅號 (Cadastro de Pessoas Físicas)
    Cpf,
    /// 法人稅號 (Cadastro Nacional da Pessoa Jurídica)
    Cnpj,
}

impl DocumentKind {
    /// 正規化後應有的位數 (含兩位檢查碼)
    pub const fn digit_count(self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }

    /// 依照位數推斷種類
    pub fn from_digit_count(count: usize) -> Option<Self> {
        match count {
            CPF_LENGTH => Some(DocumentKind::Cpf),
            CNPJ_LENGTH => Some(DocumentKind::Cnpj),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub input: String,
    pub kind: Option<DocumentKind>,
    pub normalized: String,
    pub valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_counts() {
        assert_eq!(DocumentKind::Cpf.digit_count(), 11);
        assert_eq!(DocumentKind::Cnpj.digit_count(), 14);
        assert_eq!(DocumentKind::from_digit_count(11), Some(DocumentKind::Cpf));
        assert_eq!(DocumentKind::from_digit_count(14), Some(DocumentKind::Cnpj));
        assert_eq!(DocumentKind::from_digit_count(12), None);
        assert_eq!(CPF_LENGTH, DocumentKind::Cpf.digit_count());
        assert_eq!(CNPJ_LENGTH, DocumentKind::Cnpj.digit_count());
    }

    #[test]
    fn test_outcome_serializes_lowercase_kind() {
        let outcome = CheckOutcome {
            input: "529.982.247-25".to_string(),
            kind: Some(DocumentKind::Cpf),
            normalized: "52998224725".to_string(),
            valid: true,
        };

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "cpf");
        assert_eq!(json["valid"], true);
        assert_eq!(DocumentKind::Cnpj.to_string(), "CNPJ");
    }
}
