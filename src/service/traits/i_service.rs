use std::io;
use std::path::Path;
use crate::utils::error::ConverterError;

// 文件轉換服務接口，負責將 PDF 轉換為 Markdown 文字
pub trait DocumentConverter: Send + Sync {
    /// 將指定路徑的 PDF 轉換為 Markdown
    /// # 參數
    /// - path: PDF 檔案路徑
    /// # 回傳
    /// - 成功時返回完整的 Markdown 文字，失敗時返回轉換錯誤
    fn to_markdown(&self, path: &Path) -> Result<String, ConverterError>;
}

// 檔案系統服務接口，負責轉換前後的檢查與寫入
pub trait FileServiceTrait: Send + Sync {
    /// 路徑是否存在（檔案或目錄）
    fn exists(&self, path: &Path) -> bool;

    /// 路徑是否為既有的一般檔案
    fn is_file(&self, path: &Path) -> bool;

    /// 目錄是否可寫入
    fn is_writable_dir(&self, dir: &Path) -> bool;

    /// 遞迴建立目錄
    fn create_dir_all(&self, dir: &Path) -> io::Result<()>;

    /// 將位元組寫入檔案
    fn write_bytes(&self, path: &Path, data: &[u8]) -> io::Result<()>;
}
