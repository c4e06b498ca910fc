use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use pdf2md::action::cli::process_args;
use pdf2md::utils::utils::format_elapsed;

fn main() -> io::Result<ExitCode> {
    let args: Vec<OsString> = std::env::args_os().collect();
    let result = process_args(args)?;
    if result.success {
        log::info!(
            "程式執行完成，輸出檔案：{}，耗時 {} 秒",
            result.output_path.display(),
            format_elapsed(result.elapsed)
        );
        Ok(ExitCode::SUCCESS)
    } else {
        log::warn!("轉換未完成：{}", result.error.as_deref().unwrap_or("未知原因"));
        Ok(ExitCode::FAILURE)
    }
}
