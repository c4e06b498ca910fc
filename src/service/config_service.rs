use std::io;
use std::path::PathBuf;
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責從選定的配置適配器取得配置
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器，只需輸入與輸出路徑
pub struct DefaultConfigAdapter {
    input: PathBuf,
    output: PathBuf,
}

impl DefaultConfigAdapter {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        DefaultConfigAdapter { input, output }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            log_level: "info".to_string(),
            no_progress: false,
            show_config: false,
        })
    }
}
