use serde::Serialize;

/// 文档中的一个部分（由 `\section*{ЧАСТЬ N}` 之类的标记开头）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    /// 标记中的数字，例如 "1"
    pub part: String,
    /// 到下一个标记为止的原始文本（已去除首尾空白）
    pub body: String,
}

impl Part {
    pub fn new(part: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            part: part.into(),
            body: body.into(),
        }
    }
}
