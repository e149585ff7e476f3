use crate::domain::model::DocumentKind;

/// 稅號驗證器介面。實作必須是純函數：同樣輸入永遠得到同樣結果。
pub trait DocumentValidator: Send + Sync {
    fn kind(&self) -> DocumentKind;
    fn is_valid(&self, input: &str) -> bool;
}
