use dialoguer::{Confirm, Input, Select};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::facade::conversion_facade::ConversionAdapter;
use crate::models::conversion::ConversionResult;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::file::default_output_path;
use crate::utils::utils::setup_logging;

pub const LOG_LEVELS: [&str; 4] = ["info", "warn", "error", "debug"];

pub fn process_interactive_mode() -> io::Result<ConversionResult> {
    println!("=== 歡迎使用 PDF 轉 Markdown 互動模式 ===");
    let use_default_config = get_default_config_option()?;
    let input = get_input_path()?;
    let output = get_output_path(&input)?;

    let config_port: Box<dyn ConfigPort> = if use_default_config {
        println!("使用預設配置：顯示進度，日誌等級 info");
        Box::new(DefaultConfigAdapter::new(PathBuf::from(input), PathBuf::from(output)))
    } else {
        Box::new(InteractiveConfigAdapter::new(PathBuf::from(input), PathBuf::from(output)))
    };

    let config = ConfigService::new(config_port).get_config()?;
    setup_logging(&config.log_level)?;

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    conversion_port.execute(config)
}

pub fn get_default_config_option() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("是否使用預設配置？（僅需指定輸入和輸出路徑）")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("預設配置選擇失敗: {}", e)))
}

pub fn get_input_path() -> io::Result<String> {
    Input::new()
        .with_prompt("請輸入 PDF 檔案路徑（例如：./document.pdf）")
        .validate_with(|input: &String| -> Result<(), String> {
            if Path::new(input).is_file() { Ok(()) } else { Err(format!("檔案 '{}' 不存在", input)) }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_output_path(input: &str) -> io::Result<String> {
    let default_output = default_output_path(Path::new(input)).to_string_lossy().to_string();
    Input::new()
        .with_prompt(format!("輸入 Markdown 輸出路徑（預設為 {}）", default_output))
        .default(default_output)
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_no_progress_option() -> io::Result<bool> {
    let show_progress = Confirm::new()
        .with_prompt("是否顯示進度動畫與進度條？")
        .default(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("進度選項輸入失敗: {}", e)))?;
    Ok(!show_progress)
}

pub fn get_log_level_option() -> io::Result<String> {
    let index = Select::new()
        .with_prompt("選擇日誌等級（使用方向鍵選擇，按 Enter 確認）")
        .items(&LOG_LEVELS)
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌等級選擇失敗: {}", e)))?;
    Ok(LOG_LEVELS[index].to_string())
}

// 交互配置適配器
pub struct InteractiveConfigAdapter {
    input: PathBuf,
    output: PathBuf,
}

impl InteractiveConfigAdapter {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        InteractiveConfigAdapter { input, output }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let no_progress = get_no_progress_option()?;
        let log_level = get_log_level_option()?;

        Ok(AppConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            log_level,
            no_progress,
            show_config: false,
        })
    }
}
