//! 文件选择服务
//!
//! 弹出系统文件选择框，用户取消时返回 [`AppError::Cancelled`]

use crate::error::{AppError, AppResult};
use std::path::PathBuf;
use tracing::debug;

/// 文件选择服务
#[derive(Debug, Clone)]
pub struct FilePicker {
    title: String,
    extensions: Vec<String>,
}

impl FilePicker {
    pub fn new() -> Self {
        Self {
            title: "Выберите файл с вариантом".to_string(),
            extensions: vec!["md".to_string(), "markdown".to_string(), "txt".to_string()],
        }
    }

    /// 弹出选择框并等待用户选择
    pub async fn pick(&self) -> AppResult<PathBuf> {
        debug!("打开文件选择框: {}", self.title);

        rfd::AsyncFileDialog::new()
            .set_title(&self.title)
            .add_filter("Markdown", self.extensions.as_slice())
            .pick_file()
            .await
            .map(|handle| handle.path().to_path_buf())
            .ok_or(AppError::Cancelled)
    }
}

impl Default for FilePicker {
    fn default() -> Self {
        Self::new()
    }
}
