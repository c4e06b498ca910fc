#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use pdf2md::facade::conversion_facade::ConversionFacade;
use pdf2md::service::traits::i_service::{DocumentConverter, FileServiceTrait};
use pdf2md::utils::error::ConverterError;

#[derive(Default)]
pub struct FsState {
    pub files: HashMap<PathBuf, Vec<u8>>,
    pub dirs: HashSet<PathBuf>,
    pub readonly_dirs: HashSet<PathBuf>,
    pub create_dir_error: Option<io::ErrorKind>,
    pub write_error: Option<io::ErrorKind>,
    pub created_dirs: Vec<PathBuf>,
    pub writes: Vec<PathBuf>,
}

// 記憶體內的檔案系統，可注入建立目錄或寫入失敗
#[derive(Clone, Default)]
pub struct FakeFileSystem {
    pub state: Arc<Mutex<FsState>>,
}

impl FakeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &[u8]) -> Self {
        self.state.lock().unwrap().files.insert(PathBuf::from(path), content.to_vec());
        self
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.state.lock().unwrap().dirs.insert(PathBuf::from(path));
        self
    }

    pub fn with_readonly_dir(self, path: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.dirs.insert(PathBuf::from(path));
            state.readonly_dirs.insert(PathBuf::from(path));
        }
        self
    }

    pub fn failing_create_dir(self, kind: io::ErrorKind) -> Self {
        self.state.lock().unwrap().create_dir_error = Some(kind);
        self
    }

    pub fn failing_write(self, kind: io::ErrorKind) -> Self {
        self.state.lock().unwrap().write_error = Some(kind);
        self
    }

    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.state.lock().unwrap().files.get(Path::new(path)).cloned()
    }

    pub fn writes(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().writes.clone()
    }

    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().created_dirs.clone()
    }
}

impl FileServiceTrait for FakeFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.state.lock().unwrap().files.contains_key(path)
    }

    fn is_writable_dir(&self, dir: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.dirs.contains(dir) && !state.readonly_dirs.contains(dir)
    }

    fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(kind) = state.create_dir_error {
            return Err(io::Error::new(kind, "injected create_dir failure"));
        }
        for ancestor in dir.ancestors().filter(|p| !p.as_os_str().is_empty()) {
            state.dirs.insert(ancestor.to_path_buf());
        }
        state.created_dirs.push(dir.to_path_buf());
        Ok(())
    }

    fn write_bytes(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(kind) = state.write_error {
            return Err(io::Error::new(kind, "injected write failure"));
        }
        state.writes.push(path.to_path_buf());
        state.files.insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }
}

// 返回固定結果並記錄每次呼叫的轉換器
#[derive(Clone)]
pub struct FakeConverter {
    output: Result<String, String>,
    pub calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl FakeConverter {
    pub fn returning(markdown: &str) -> Self {
        FakeConverter {
            output: Ok(markdown.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        FakeConverter {
            output: Err(message.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl DocumentConverter for FakeConverter {
    fn to_markdown(&self, path: &Path) -> Result<String, ConverterError> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        match &self.output {
            Ok(markdown) => Ok(markdown.clone()),
            Err(message) => Err(ConverterError::Extraction {
                path: path.to_path_buf(),
                message: message.clone(),
            }),
        }
    }
}

// 轉換期間直接 panic 的轉換器
pub struct PanickingConverter {
    pub message: &'static str,
}

impl DocumentConverter for PanickingConverter {
    fn to_markdown(&self, _path: &Path) -> Result<String, ConverterError> {
        panic!("{}", self.message)
    }
}

/// 產生單頁 PDF；`page_extra` 附加在頁面字典中，例如 /Resources
pub fn minimal_pdf(page_extra: &str, content: &str) -> Vec<u8> {
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] {} /Contents 4 0 R >>",
            page_extra
        ),
        format!("<< /Length {} >>\nstream\n{}\nendstream", content.len(), content),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::new();
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_offset = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
    for offset in offsets {
        pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    pdf
}

pub const HELVETICA_RESOURCES: &str =
    "/Resources << /Font << /F1 << /Type /Font /Subtype /Type1 /BaseFont /Helvetica >> >> >>";
pub const HELLO_CONTENT: &str = "BT /F1 12 Tf 72 720 Td (Hello World) Tj ET";

pub fn facade(converter: &FakeConverter, fs: &FakeFileSystem) -> ConversionFacade {
    ConversionFacade::new(Box::new(converter.clone()), Box::new(fs.clone())).with_pacing(false)
}
