/// 移除所有非 0-9 的字元，保留順序
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// 是否為同一數字重複 (例如 "11111111111")
pub fn is_repeated_digit(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    }
}

/// 將已正規化的字串轉為數值序列
pub(crate) fn to_digits(normalized: &str) -> Vec<u32> {
    normalized.bytes().map(|b| u32::from(b - b'0')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_formatting() {
        assert_eq!(normalize("529.982.247-25"), "52998224725");
        assert_eq!(normalize("11.222.333/0001-81"), "11222333000181");
        assert_eq!(normalize(" 1a2b3 "), "123");
    }

    #[test]
    fn test_normalize_empty_and_letters() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("abcdef"), "");
    }

    #[test]
    fn test_normalize_ignores_non_ascii_digits() {
        // 阿拉伯-印度數字不算 0-9
        assert_eq!(normalize("١٢٣4"), "4");
    }

    #[test]
    fn test_is_repeated_digit() {
        assert!(is_repeated_digit("00000000000"));
        assert!(is_repeated_digit("99999999999999"));
        assert!(!is_repeated_digit("52998224725"));
        assert!(!is_repeated_digit(""));
    }
}
