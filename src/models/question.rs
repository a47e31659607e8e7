use crate::utils::logging::truncate_text;
use serde::Serialize;

/// 表格中的一行：一道题
///
/// 缺失的字段保留为 `None`，导出时写成空单元格，保证每一行的列都一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    /// 所属部分编号
    pub part: String,
    /// 题号，例如 "В1"；部分开头没有题号时为 `None`
    pub number: Option<String>,
    /// 题干，多行之间用空行分隔
    pub text: Option<String>,
    /// 图片链接
    pub image: Option<String>,
}

impl QuestionRecord {
    /// 创建只有部分编号的空记录
    pub fn for_part(part: impl Into<String>) -> Self {
        Self {
            part: part.into(),
            number: None,
            text: None,
            image: None,
        }
    }
}

impl std::fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let preview = truncate_text(self.text.as_deref().unwrap_or_default(), 60);

        write!(
            f,
            "[部分 {} | 题号 {}] {}",
            self.part,
            self.number.as_deref().unwrap_or("—"),
            preview.replace('\n', " ")
        )?;

        if self.image.is_some() {
            write!(f, " [含图片]")?;
        }
        Ok(())
    }
}
