//! # Exam MD to XLSX
//!
//! 把 Markdown 格式的试卷（带部分标记、题号、图片和图注）转换成每行一道题的 xlsx 表格
//!
//! ## 架构设计
//!
//! ### ① 解析层（Parser）
//! - `parser/part_splitter` - 按 `\section*{ЧАСТЬ N}` 之类的标记切分部分
//! - `parser/line_kind` - 行分类：题号 / 图片 / 图注 / 内容 / 空行
//! - `parser/question_parser` - 在部分内把行归到题目记录
//!
//! ### ② 服务层（Services）
//! - `FilePicker` - 文件选择框
//! - `load_document` - 读取文档
//! - `SheetWriter` - 写 xlsx
//! - `JsonWriter` - 写 JSON
//!
//! ### ③ 应用层（App）
//! - `App` - 选择文件 → 解析 → 导出
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::{convert, App, RunSummary};
pub use config::Config;
pub use error::{AppError, AppResult, ParseError};
pub use models::{Part, QuestionRecord};
pub use parser::{parse_questions, split_parts, DocumentParser, ParsedDocument};
