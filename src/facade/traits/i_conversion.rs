use crate::models::conversion::{ConversionRequest, ConversionResult};

// Facade 接口，負責協調單一 PDF 的轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 執行 PDF 至 Markdown 的轉換
    /// # 參數
    /// - request: 輸入與輸出路徑
    /// # 回傳
    /// - 轉換結果；所有錯誤皆已在內部回報，不會向外傳遞
    fn convert(&self, request: &ConversionRequest) -> ConversionResult;
}
