use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::time::Instant;
use log::{debug, error, info, warn};
use crate::config::ports::{AppConfig, ConversionPort};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionRequest, ConversionResult};
use crate::service::converter::PdfMarkdownConverter;
use crate::service::file::FileService;
use crate::service::traits::i_service::{DocumentConverter, FileServiceTrait};
use crate::utils::error::{panic_message, ConvertError, ConverterError};
use crate::utils::file::output_dir_of;
use crate::utils::progress::{SpinnerTask, WriteProgress, WRITE_PAUSES, WRITE_STEPS};
use crate::utils::utils::format_elapsed;

pub struct ConversionFacade {
    converter: Box<dyn DocumentConverter>,
    file_service: Box<dyn FileServiceTrait>,
    pace: bool,
}

impl ConversionFacade {
    pub fn new(converter: Box<dyn DocumentConverter>, file_service: Box<dyn FileServiceTrait>) -> Self {
        ConversionFacade {
            converter,
            file_service,
            pace: true,
        }
    }

    /// 關閉寫入階段的視覺停頓
    pub fn with_pacing(mut self, pace: bool) -> Self {
        self.pace = pace;
        self
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        let start = Instant::now();
        match self.run(request) {
            Ok(()) => {
                let elapsed = start.elapsed();
                info!("轉換完成：{} -> {}", request.input_path.display(), request.output_path.display());
                println!("轉換成功完成，耗時 {} 秒", format_elapsed(elapsed));
                println!("輸出檔案：{}", request.output_path.display());
                ConversionResult::succeeded(request.output_path.clone(), elapsed)
            }
            Err(e) => {
                report_error(&e);
                ConversionResult::failed(request.output_path.clone(), start.elapsed(), e.to_string())
            }
        }
    }
}

impl ConversionFacade {
    fn run(&self, request: &ConversionRequest) -> Result<(), ConvertError> {
        self.prepare_output(&request.output_path)?;

        if !self.file_service.is_file(&request.input_path) {
            return Err(ConvertError::InputNotFound {
                path: request.input_path.clone(),
            });
        }

        println!("開始轉換：{}", request.input_path.display());
        let markdown = self.convert_with_spinner(request)?;
        self.write_with_progress(request, &markdown)
    }

    fn prepare_output(&self, output_path: &Path) -> Result<(), ConvertError> {
        if let Some(dir) = output_dir_of(output_path) {
            if !self.file_service.exists(dir) {
                println!("建立輸出目錄：{}", dir.display());
                info!("建立輸出目錄：{}", dir.display());
                self.file_service
                    .create_dir_all(dir)
                    .map_err(|e| ConvertError::from_create_dir(dir.to_path_buf(), e))?;
            }

            if self.file_service.exists(dir) && !self.file_service.is_writable_dir(dir) {
                return Err(ConvertError::OutputDirectoryNotWritable {
                    dir: dir.to_path_buf(),
                });
            }
        }

        if self.file_service.is_file(output_path) {
            return Err(ConvertError::OutputAlreadyExists {
                path: output_path.to_path_buf(),
            });
        }
        Ok(())
    }

    // 轉換器呼叫是唯一的長時間阻塞操作，成功或失敗都先停止動畫再繼續
    fn convert_with_spinner(&self, request: &ConversionRequest) -> Result<String, ConvertError> {
        let spinner = SpinnerTask::start("分析 PDF 並準備轉換", request.no_progress);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.converter.to_markdown(&request.input_path)
        }))
        .unwrap_or_else(|payload| {
            Err(ConverterError::Panicked {
                path: request.input_path.clone(),
                message: panic_message(payload.as_ref()),
            })
        });
        let frames = spinner.stop();
        debug!("進度動畫已停止，共繪製 {} 個影格", frames);

        let markdown = result?;
        info!("PDF 轉換完成，Markdown 大小：{} 位元組", markdown.len());
        Ok(markdown)
    }

    fn write_with_progress(&self, request: &ConversionRequest, markdown: &str) -> Result<(), ConvertError> {
        let progress = WriteProgress::new(
            "完成轉換",
            request.no_progress,
            self.pace && !request.no_progress,
        );
        progress.advance(WRITE_STEPS[0]);
        progress.pause(WRITE_PAUSES[0]);

        if let Err(e) = self.file_service.write_bytes(&request.output_path, markdown.as_bytes()) {
            progress.abandon();
            return Err(ConvertError::from_write(request.output_path.clone(), e));
        }

        progress.advance(WRITE_STEPS[1]);
        progress.pause(WRITE_PAUSES[1]);
        progress.advance(WRITE_STEPS[2]);
        progress.finish();
        Ok(())
    }
}

fn report_error(err: &ConvertError) {
    if err.is_skip() {
        warn!("{}，略過轉換", err);
        println!("{}", err);
        println!("略過轉換以避免覆寫。");
        return;
    }

    error!("{}", err);
    println!("\n錯誤：{}", err);
    let suggestions = err.suggestions();
    if !suggestions.is_empty() {
        println!("建議：");
        for (i, suggestion) in suggestions.iter().enumerate() {
            println!("{}. {}", i + 1, suggestion);
        }
    }
}

// 以實際的 PDF 轉換器與本機檔案系統執行轉換
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionResult> {
        let facade: Box<dyn ConversionFacadeTrait> = Box::new(ConversionFacade::new(
            Box::new(PdfMarkdownConverter::new()),
            Box::new(FileService::new()),
        ));
        let request = ConversionRequest::new(&config.input, &config.output)
            .with_no_progress(config.no_progress);
        Ok(facade.convert(&request))
    }
}
