use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use gag::Gag;
use log::{debug, info};
use pdf_extract::extract_text_by_pages;
use crate::service::traits::i_service::DocumentConverter;
use crate::utils::error::{panic_message, ConverterError};
use crate::utils::markdown::MarkdownRenderer;

// 以 pdf-extract 逐頁抽取文字並整理為 Markdown 的轉換器
pub struct PdfMarkdownConverter {
    renderer: MarkdownRenderer,
}

impl PdfMarkdownConverter {
    pub fn new() -> Self {
        PdfMarkdownConverter {
            renderer: MarkdownRenderer::new(),
        }
    }
}

impl Default for PdfMarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentConverter for PdfMarkdownConverter {
    fn to_markdown(&self, path: &Path) -> Result<String, ConverterError> {
        let pages = {
            // pdf-extract 解析時會直接輸出到 stdout
            let _gag_out = Gag::stdout().ok();
            // 缺少 /Resources 或字型資訊的 PDF 會讓 pdf-extract 直接 panic
            panic::catch_unwind(AssertUnwindSafe(|| extract_text_by_pages(path)))
                .map_err(|payload| ConverterError::Panicked {
                    path: path.to_path_buf(),
                    message: panic_message(payload.as_ref()),
                })?
                .map_err(|e| ConverterError::Extraction {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?
        };
        info!("從 {} 抽取 {} 頁文字", path.display(), pages.len());

        let markdown = self.renderer.render_pages(&pages);
        debug!("產生 Markdown，大小：{} 位元組", markdown.len());
        Ok(markdown)
    }
}
