// Application layer: wires settings, the validation engine and output rendering together.

pub mod report;

use crate::config::{KindSelection, Settings};
use crate::core::engine::ValidationEngine;
use crate::core::{CheckOutcome, DocumentKind};

/// 依設定逐一檢查輸入
pub fn check_all(
    engine: &ValidationEngine,
    settings: &Settings,
    inputs: &[String],
) -> Vec<CheckOutcome> {
    inputs
        .iter()
        .map(|input| match settings.kind {
            KindSelection::Auto => engine.check_auto(input),
            KindSelection::Cpf => engine.check(DocumentKind::Cpf, input),
            KindSelection::Cnpj => engine.check(DocumentKind::Cnpj, input),
        })
        .collect()
}
