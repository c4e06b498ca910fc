use std::any::Any;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

// 轉換器錯誤，包裝外部 PDF 解析函式庫回報的失敗
#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("無法解析 PDF {}：{message}", path.display())]
    Extraction { path: PathBuf, message: String },

    #[error("解析 PDF {} 時發生異常：{message}", path.display())]
    Panicked { path: PathBuf, message: String },

    #[error("讀取 PDF 失敗：{0}")]
    Io(#[from] io::Error),
}

/// 取出 panic 攜帶的訊息
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "未知的異常".to_string()
    }
}

// 轉換流程中每一種失敗情況，皆在本地處理並回報
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("沒有權限建立目錄：{}", dir.display())]
    OutputDirectoryPermission { dir: PathBuf },

    #[error("建立目錄時發生錯誤：{source}")]
    OutputDirectoryCreate {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("輸出目錄沒有寫入權限：{}", dir.display())]
    OutputDirectoryNotWritable { dir: PathBuf },

    #[error("輸出資料夾中已存在檔案：{}", path.display())]
    OutputAlreadyExists { path: PathBuf },

    #[error("輸入檔案不存在：{}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("PDF 轉換期間發生錯誤：{0}")]
    Conversion(#[from] ConverterError),

    #[error("沒有權限寫入檔案：{}", path.display())]
    OutputWritePermission { path: PathBuf },

    #[error("儲存檔案時發生錯誤：{source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// 將建立目錄的 IO 錯誤分類為權限錯誤或一般錯誤
    pub fn from_create_dir(dir: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            ConvertError::OutputDirectoryPermission { dir }
        } else {
            ConvertError::OutputDirectoryCreate { dir, source }
        }
    }

    pub fn from_write(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            ConvertError::OutputWritePermission { path }
        } else {
            ConvertError::OutputWrite { path, source }
        }
    }

    /// 已存在輸出檔案屬於略過策略，並非真正的錯誤
    pub fn is_skip(&self) -> bool {
        matches!(self, ConvertError::OutputAlreadyExists { .. })
    }

    /// 權限相關錯誤附帶的建議處理方式
    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            ConvertError::OutputDirectoryPermission { .. } => &[
                "以系統管理員權限執行本程式",
                "選擇一個您具有寫入權限的輸出目錄",
                "確認輸出目錄沒有被其他程序佔用",
            ],
            ConvertError::OutputDirectoryNotWritable { .. }
            | ConvertError::OutputWritePermission { .. } => &[
                "以系統管理員權限執行本程式",
                "選擇一個您具有寫入權限的輸出目錄",
            ],
            _ => &[],
        }
    }
}
