use std::fs;
use std::io;
use std::path::Path;
use log::debug;
use crate::service::traits::i_service::FileServiceTrait;

// 本機檔案系統服務
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    // 以目前程序的身分檢查寫入權限，不建立任何檔案
    fn is_writable_dir(&self, dir: &Path) -> bool {
        match fs::metadata(dir) {
            Ok(metadata) => metadata.is_dir() && can_write(dir, &metadata),
            Err(e) => {
                debug!("無法讀取目錄資訊 {}：{}", dir.display(), e);
                false
            }
        }
    }

    fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)
    }

    fn write_bytes(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        fs::write(path, data)
    }
}

#[cfg(unix)]
fn can_write(dir: &Path, _metadata: &fs::Metadata) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(dir.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path 為有效的 NUL 結尾字串，access 不會保留指標
    unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 }
}

#[cfg(not(unix))]
fn can_write(_dir: &Path, metadata: &fs::Metadata) -> bool {
    !metadata.permissions().readonly()
}
