//! IO helper: whole-file text read/write for the structure JSON and item catalog

use std::{fs, path::Path};

use crate::model::data_core::AppError;

/// 以 UTF-8 读取整个文件
pub fn read_text_file(p: &Path) -> Result<String, AppError> {
    Ok(fs::read_to_string(p)?)
}

/// 整体写出文本文件（覆盖）
pub fn write_text_file(p: &Path, text: &str) -> Result<(), AppError> {
    fs::write(p, text.as_bytes())?;
    Ok(())
}
