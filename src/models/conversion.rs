use std::path::PathBuf;
use std::time::Duration;

// 單次轉換請求，在執行期間不可變
#[derive(Clone, Debug)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub no_progress: bool,
}

impl ConversionRequest {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        ConversionRequest {
            input_path: input_path.into(),
            output_path: output_path.into(),
            no_progress: false,
        }
    }

    pub fn with_no_progress(mut self, no_progress: bool) -> Self {
        self.no_progress = no_progress;
        self
    }
}

#[derive(Debug)]
pub struct ConversionResult {
    pub success: bool,
    pub elapsed: Duration,
    pub output_path: PathBuf,
    pub error: Option<String>,
}

impl ConversionResult {
    pub fn succeeded(output_path: PathBuf, elapsed: Duration) -> Self {
        ConversionResult {
            success: true,
            elapsed,
            output_path,
            error: None,
        }
    }

    pub fn failed(output_path: PathBuf, elapsed: Duration, error: String) -> Self {
        ConversionResult {
            success: false,
            elapsed,
            output_path,
            error: Some(error),
        }
    }
}
