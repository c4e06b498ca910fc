use std::io;
use std::time::Duration;
use log;

pub fn parse_log_level(log_level: &str) -> log::LevelFilter {
    match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    }
}

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    // 互動模式與 CLI 模式可能各自初始化，重複初始化時忽略
    if env_logger::Builder::new()
        .filter_level(parse_log_level(log_level))
        .try_init()
        .is_err()
    {
        log::debug!("日誌系統已初始化");
    }
    Ok(())
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64())
}
