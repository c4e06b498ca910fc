use std::ffi::OsString;
use std::io;
use clap::Parser;
use crate::action::interactive::process_interactive_mode;
use crate::config::config::{validate_path_arg, Cli};
use crate::config::ports::{AppConfig, ConfigPort, ConversionPort};
use crate::facade::conversion_facade::ConversionAdapter;
use crate::models::conversion::ConversionResult;
use crate::service::config_service::ConfigService;
use crate::utils::utils::setup_logging;

pub fn process_args(args: Vec<OsString>) -> io::Result<ConversionResult> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode(args)
    }
}

pub fn process_cli_mode(args: Vec<OsString>) -> io::Result<ConversionResult> {
    let cli = Cli::parse_from(args);
    setup_logging(&cli.log_level)?;

    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli)));
    let config = config_service.get_config()?;

    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    let result = conversion_port.execute(config.clone())?;

    // 若啟用 --show-config，在轉換後顯示配置
    if config.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    Ok(result)
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        validate_path_arg("輸入", &self.cli.input)?;
        validate_path_arg("輸出", &self.cli.output)?;

        Ok(AppConfig {
            input: self.cli.input.clone(),
            output: self.cli.output.clone(),
            log_level: self.cli.log_level.clone(),
            no_progress: self.cli.no_progress,
            show_config: self.cli.show_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn adapter_copies_cli_options() {
        let adapter = CliConfigAdapter::new(cli(&["pdf2md", "doc.pdf", "out/doc.md", "--no-progress", "--show-config"]));
        let config = adapter.get_config().unwrap();
        assert_eq!(
            config,
            AppConfig {
                input: PathBuf::from("doc.pdf"),
                output: PathBuf::from("out/doc.md"),
                log_level: "info".to_string(),
                no_progress: true,
                show_config: true,
            }
        );
    }

    #[test]
    fn adapter_rejects_blank_paths() {
        let adapter = CliConfigAdapter::new(cli(&["pdf2md", "doc.pdf", " "]));
        let err = adapter.get_config().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
