//! 表格写入服务
//!
//! 只负责把题目记录写成 xlsx，不关心解析

use crate::error::{AppError, AppResult, ExportError};
use crate::models::QuestionRecord;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;
use tracing::{debug, info};

/// 列标题，顺序固定
pub const COLUMN_HEADERS: [&str; 4] = ["Часть", "Номер вопроса", "Вопрос", "Рисунок"];

/// 各列宽度
const COLUMN_WIDTHS: [f64; 4] = [8.0, 16.0, 80.0, 40.0];

/// xlsx 写入服务
#[derive(Debug, Clone)]
pub struct SheetWriter {
    sheet_name: String,
}

impl SheetWriter {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }

    /// 一条记录对应的一行，缺失的字段为 `None`
    pub fn row(record: &QuestionRecord) -> [Option<&str>; 4] {
        [
            Some(record.part.as_str()),
            record.number.as_deref(),
            record.text.as_deref(),
            record.image.as_deref(),
        ]
    }

    /// 生成 xlsx 文件内容
    pub fn build(&self, records: &[QuestionRecord]) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let cell_format = Format::new().set_text_wrap();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        for (col, (header, width)) in COLUMN_HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
            let col = u16::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)?;
            worksheet.write_string_with_format(0, col, *header, &header_format)?;
            worksheet.set_column_width(col, width)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        for (index, record) in records.iter().enumerate() {
            let row = u32::try_from(index + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
            for (col, value) in (0u16..).zip(Self::row(record)) {
                // 缺失的字段留空
                if let Some(value) = value {
                    worksheet.write_string_with_format(row, col, value, &cell_format)?;
                }
            }
        }

        debug!("工作表 {} 共写入 {} 行", self.sheet_name, records.len());
        Ok(workbook.save_to_buffer()?)
    }

    /// 写入 xlsx 文件，已存在的文件会被覆盖
    pub async fn write(&self, path: &Path, records: &[QuestionRecord]) -> AppResult<()> {
        let buffer = self.build(records)?;
        tokio::fs::write(path, buffer)
            .await
            .map_err(|e| AppError::file_write_failed(path, e))?;

        info!("✓ 表格已写入: {}", path.display());
        Ok(())
    }
}

impl Default for SheetWriter {
    fn default() -> Self {
        Self::new("Вопросы")
    }
}
