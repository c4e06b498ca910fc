use std::io;
use std::path::PathBuf;
use crate::models::conversion::ConversionResult;

// 應用配置結構體
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub log_level: String,
    pub no_progress: bool,
    pub show_config: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionResult>;
}
