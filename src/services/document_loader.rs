//! 文档读取

use crate::error::{AppError, AppResult};
use std::path::Path;
use tracing::info;

/// 读取整篇文档（UTF-8），去掉开头的 BOM
pub async fn load_document(path: &Path) -> AppResult<String> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path, e))?;

    let content = match content.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    };

    info!("已读取文档: {} ({} 字节)", path.display(), content.len());
    Ok(content)
}
