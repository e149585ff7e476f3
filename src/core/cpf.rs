use crate::core::checksum::{mod11_digit, weighted_sum};
use crate::core::normalize::{normalize, to_digits};
use crate::domain::model::DocumentKind;
use crate::domain::ports::DocumentValidator;

pub use crate::domain::model::CPF_LENGTH;

/// 校驗碼會通過但已知無效的重複數字 CPF
pub const INVALID_CPFS: [&str; 10] = [
    "00000000000",
    "11111111111",
    "22222222222",
    "33333333333",
    "44444444444",
    "55555555555",
    "66666666666",
    "77777777777",
    "88888888888",
    "99999999999",
];

/// 驗證 CPF。任何輸入都只回傳 true/false，不會 panic。
pub fn is_cpf(input: &str) -> bool {
    let cpf = normalize(input);

    if cpf.len() != CPF_LENGTH {
        tracing::debug!(len = cpf.len(), "CPF rejected: wrong length");
        return false;
    }

    if INVALID_CPFS.contains(&cpf.as_str()) {
        tracing::debug!("CPF rejected: repeated digits");
        return false;
    }

    let digits = to_digits(&cpf);
    let (base, declared) = digits.split_at(CPF_LENGTH - 2);

    let digit1 = first_check_digit(base);
    if digit1 != declared[0] {
        tracing::debug!(
            expected = digit1,
            found = declared[0],
            "CPF rejected: first check digit"
        );
        return false;
    }

    let mut extended = base.to_vec();
    extended.push(digit1);
    let digit2 = second_check_digit(&extended);
    if digit2 != declared[1] {
        tracing::debug!(
            expected = digit2,
            found = declared[1],
            "CPF rejected: second check digit"
        );
        return false;
    }

    true
}

/// 權重 1..=9
fn first_check_digit(base: &[u32]) -> u32 {
    mod11_digit(weighted_sum(base, 1..))
}

/// 權重 0..=9，第一位權重為 0 (不參與計算)
fn second_check_digit(base_with_digit1: &[u32]) -> u32 {
    mod11_digit(weighted_sum(base_with_digit1, 0..))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CpfValidator;

impl DocumentValidator for CpfValidator {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Cpf
    }

    fn is_valid(&self, input: &str) -> bool {
        is_cpf(input)
    }
}
