use crate::core::checksum::{mod11_digit, weighted_sum};
use crate::core::normalize::{normalize, to_digits};
use crate::domain::model::DocumentKind;
use crate::domain::ports::DocumentValidator;

pub use crate::domain::model::CNPJ_LENGTH;

const FIRST_DIGIT_WEIGHTS: [u32; 12] = [6, 7, 8, 9, 2, 3, 4, 5, 6, 7, 8, 9];
const SECOND_DIGIT_WEIGHTS: [u32; 13] = [5, 6, 7, 8, 9, 2, 3, 4, 5, 6, 7, 8, 9];

pub const INVALID_CNPJS: [&str; 10] = [
    "00000000000000",
    "11111111111111",
    "22222222222222",
    "33333333333333",
    "44444444444444",
    "55555555555555",
    "66666666666666",
    "77777777777777",
    "88888888888888",
    "99999999999999",
];

/// 驗證 CNPJ。任何輸入都只回傳 true/false，不會 panic。
pub fn is_cnpj(input: &str) -> bool {
    let cnpj = normalize(input);

    if cnpj.len() != CNPJ_LENGTH {
        tracing::debug!(len = cnpj.len(), "CNPJ rejected: wrong length");
        return false;
    }

    if INVALID_CNPJS.contains(&cnpj.as_str()) {
        tracing::debug!("CNPJ rejected: repeated digits");
        return false;
    }

    let digits = to_digits(&cnpj);
    let (base, declared) = digits.split_at(CNPJ_LENGTH - 2);

    let digit1 = mod11_digit(weighted_sum(base, FIRST_DIGIT_WEIGHTS));
    if digit1 != declared[0] {
        tracing::debug!(
            expected = digit1,
            found = declared[0],
            "CNPJ rejected: first check digit"
        );
        return false;
    }

    let mut extended = base.to_vec();
    extended.push(digit1);
    let digit2 = mod11_digit(weighted_sum(&extended, SECOND_DIGIT_WEIGHTS));
    if digit2 != declared[1] {
        tracing::debug!(
            expected = digit2,
            found = declared[1],
            "CNPJ rejected: second check digit"
        );
        return false;
    }

    true
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CnpjValidator;

impl DocumentValidator for CnpjValidator {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Cnpj
    }

    fn is_valid(&self, input: &str) -> bool {
        is_cnpj(input)
    }
}
