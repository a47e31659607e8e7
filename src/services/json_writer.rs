//! JSON 导出服务
//!
//! 把题目记录额外保存为 JSON，字段顺序与表格列一致

use crate::error::{AppError, AppResult, ExportError};
use crate::models::QuestionRecord;
use std::path::PathBuf;
use tracing::info;

/// JSON 写入服务
#[derive(Debug, Clone)]
pub struct JsonWriter {
    path: PathBuf,
}

impl JsonWriter {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 序列化为带缩进的 JSON
    pub fn render(records: &[QuestionRecord]) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(records)?)
    }

    pub async fn write(&self, records: &[QuestionRecord]) -> AppResult<()> {
        let json = Self::render(records)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| AppError::file_write_failed(&self.path, e))?;

        info!("✓ JSON 已写入: {}", self.path.display());
        Ok(())
    }
}
