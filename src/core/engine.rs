use crate::core::cnpj::CnpjValidator;
use crate::core::cpf::CpfValidator;
use crate::core::normalize::normalize;
use crate::core::{CheckOutcome, DocumentKind, DocumentValidator};

/// 組合 CPF 與 CNPJ 驗證器，提供依種類或自動判斷的檢查
pub struct ValidationEngine {
    cpf: Box<dyn DocumentValidator>,
    cnpj: Box<dyn DocumentValidator>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self::with_validators(Box::new(CpfValidator), Box::new(CnpjValidator))
    }

    pub fn with_validators(
        cpf: Box<dyn DocumentValidator>,
        cnpj: Box<dyn DocumentValidator>,
    ) -> Self {
        Self { cpf, cnpj }
    }

    fn validator(&self, kind: DocumentKind) -> &dyn DocumentValidator {
        match kind {
            DocumentKind::Cpf => self.cpf.as_ref(),
            DocumentKind::Cnpj => self.cnpj.as_ref(),
        }
    }

    /// 依正規化後的位數推斷種類 (11 → CPF, 14 → CNPJ)
    pub fn detect(&self, input: &str) -> Option<DocumentKind> {
        DocumentKind::from_digit_count(normalize(input).len())
    }

    pub fn check(&self, kind: DocumentKind, input: &str) -> CheckOutcome {
        let valid = self.validator(kind).is_valid(input);
        tracing::debug!("Checked {}: valid={}", kind, valid);

        CheckOutcome {
            input: input.to_string(),
            kind: Some(kind),
            normalized: normalize(input),
            valid,
        }
    }

    pub fn check_auto(&self, input: &str) -> CheckOutcome {
        match self.detect(input) {
            Some(kind) => self.check(kind, input),
            None => {
                let normalized = normalize(input);
                tracing::debug!(
                    "Could not detect document kind ({} digits)",
                    normalized.len()
                );
                CheckOutcome {
                    input: input.to_string(),
                    kind: None,
                    normalized,
                    valid: false,
                }
            }
        }
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
