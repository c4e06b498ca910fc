use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "pdf2md",
    about = "將 PDF 檔案轉換為 Markdown",
    long_about = "將單一 PDF 檔案轉換為 Markdown 檔案，轉換期間顯示進度動畫，寫入時顯示進度條。\n輸出檔案已存在時會略過轉換以避免覆寫。不帶任何參數執行時進入互動模式。\n使用 `--help` 查看詳細用法。",
    arg_required_else_help = true
)]
pub struct Cli {
    /// 要轉換的 PDF 檔案路徑
    pub input: PathBuf,
    /// 輸出的 Markdown 檔案路徑
    pub output: PathBuf,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

pub fn validate_path_arg(name: &str, value: &Path) -> io::Result<()> {
    if value.to_string_lossy().trim().is_empty() {
        log::error!("{} 路徑為空", name);
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} 路徑不可為空", name),
        ));
    }
    Ok(())
}
