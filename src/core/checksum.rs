//! Mod-11 check digit arithmetic shared by the CPF and CNPJ validators.

/// 加權總和，權重依位置對應；長度不同時以較短者為準
pub fn weighted_sum<I>(digits: &[u32], weights: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// 總和 mod 11，餘數大於 9 時視為 0
pub fn mod11_digit(sum: u32) -> u32 {
    match sum % 11 {
        r if r > 9 => 0,
        r => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_sum_positional() {
        assert_eq!(weighted_sum(&[1, 2, 3], [3, 2, 1]), 10);
        assert_eq!(weighted_sum(&[1, 2, 3], 0..), 8);
        assert_eq!(weighted_sum(&[], [1, 2]), 0);
    }

    #[test]
    fn test_mod11_coerces_ten_to_zero() {
        assert_eq!(mod11_digit(0), 0);
        assert_eq!(mod11_digit(233), 2);
        assert_eq!(mod11_digit(21), 0);
        assert_eq!(mod11_digit(32), 0);
        assert_eq!(mod11_digit(20), 9);
    }
}
