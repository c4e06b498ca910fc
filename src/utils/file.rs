use std::path::{Path, PathBuf};

/// 取得輸出檔案所在的目錄；路徑僅含檔名時返回 None
pub fn output_dir_of(output_path: &Path) -> Option<&Path> {
    output_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
}

/// 依輸入檔名推導預設輸出路徑（副檔名改為 .md）
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("md")
}
