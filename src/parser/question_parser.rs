//! 题目解析
//!
//! 逐行处理每个部分的正文，把行归到对应的题目记录中。
//! 处理过程是对分类结果的一次 fold：每一步消费旧状态、返回新状态，
//! 当前行是最后一行或下一行是题号行时，关闭当前记录。

use super::line_kind::{LineClassifier, LineKind, DEFAULT_CAPTION_PREFIX};
use crate::error::ParseError;
use crate::models::{Part, QuestionRecord};
use serde::Deserialize;
use std::str::FromStr;
use tracing::{debug, warn};

/// 多行题干之间的分隔符
const TEXT_SEPARATOR: &str = "\n\n";

/// 部分开头出现没有题号的内容时的处理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadingContentPolicy {
    /// 保留内容，题号留空
    #[default]
    Tolerate,
    /// 直接报错
    Reject,
}

impl FromStr for LeadingContentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tolerate" => Ok(LeadingContentPolicy::Tolerate),
            "reject" => Ok(LeadingContentPolicy::Reject),
            other => Err(format!("未知的处理方式: {other}")),
        }
    }
}

/// 题目解析器
#[derive(Debug, Clone)]
pub struct QuestionParser {
    classifier: LineClassifier,
    policy: LeadingContentPolicy,
}

impl QuestionParser {
    pub fn new(caption_prefix: &str, policy: LeadingContentPolicy) -> Self {
        Self {
            classifier: LineClassifier::new(caption_prefix),
            policy,
        }
    }

    /// 解析所有部分，按部分顺序返回题目记录
    pub fn parse_questions(&self, parts: &[Part]) -> Result<Vec<QuestionRecord>, ParseError> {
        let mut records = Vec::new();
        for part in parts {
            let part_records = self.parse_part(part)?;
            debug!("第 {} 部分解析出 {} 道题", part.part, part_records.len());
            records.extend(part_records);
        }
        Ok(records)
    }

    /// 解析单个部分
    ///
    /// 正文为空时仍然返回一条只有部分编号的记录。
    pub fn parse_part(&self, part: &Part) -> Result<Vec<QuestionRecord>, ParseError> {
        let lines: Vec<LineKind<'_>> = part
            .body
            .lines()
            .map(|line| self.classifier.classify(line))
            .collect();

        if lines.is_empty() {
            return Ok(vec![QuestionRecord::for_part(&part.part)]);
        }

        let state = lines.iter().enumerate().try_fold(
            PartState::start(&part.part),
            |state, (index, line)| {
                let state = state.apply(line, self.policy)?;
                let closes = lines.get(index + 1).is_none_or(|next| next.is_identifier());
                Ok::<_, ParseError>(if closes { state.close() } else { state })
            },
        )?;

        Ok(state.records)
    }
}

impl Default for QuestionParser {
    fn default() -> Self {
        Self::new(DEFAULT_CAPTION_PREFIX, LeadingContentPolicy::default())
    }
}

/// 使用默认设置解析所有部分
pub fn parse_questions(parts: &[Part]) -> Result<Vec<QuestionRecord>, ParseError> {
    QuestionParser::default().parse_questions(parts)
}

/// fold 的状态：已关闭的记录 + 正在累积的记录
#[derive(Debug)]
struct PartState<'a> {
    part: &'a str,
    current: QuestionRecord,
    records: Vec<QuestionRecord>,
}

impl<'a> PartState<'a> {
    fn start(part: &'a str) -> Self {
        Self {
            part,
            current: QuestionRecord::for_part(part),
            records: Vec::new(),
        }
    }

    fn apply(self, line: &LineKind<'_>, policy: LeadingContentPolicy) -> Result<Self, ParseError> {
        match *line {
            LineKind::Identifier { number, rest } => Ok(self.with_current(|record| QuestionRecord {
                number: Some(number.to_string()),
                text: (!rest.is_empty()).then(|| rest.to_string()),
                ..record
            })),
            LineKind::Image { url } => {
                let state = self.check_identified(url, policy)?;
                Ok(state.with_current(|record| QuestionRecord {
                    image: Some(join(record.image, url, "\n")),
                    ..record
                }))
            }
            LineKind::Caption(text) | LineKind::Content(text) => {
                let state = self.check_identified(text, policy)?;
                Ok(state.with_current(|record| QuestionRecord {
                    text: Some(join(record.text, text, TEXT_SEPARATOR)),
                    ..record
                }))
            }
            LineKind::Blank => Ok(self),
        }
    }

    /// 关闭当前记录，开始新的记录
    fn close(self) -> Self {
        let mut records = self.records;
        records.push(self.current);
        Self {
            part: self.part,
            current: QuestionRecord::for_part(self.part),
            records,
        }
    }

    fn with_current(self, update: impl FnOnce(QuestionRecord) -> QuestionRecord) -> Self {
        Self {
            current: update(self.current),
            ..self
        }
    }

    fn check_identified(self, line: &str, policy: LeadingContentPolicy) -> Result<Self, ParseError> {
        if self.current.number.is_some() {
            return Ok(self);
        }
        match policy {
            LeadingContentPolicy::Tolerate => {
                warn!("第 {} 部分在题号之前出现内容: {}", self.part, line);
                Ok(self)
            }
            LeadingContentPolicy::Reject => Err(ParseError::UnidentifiedLeadingContent {
                part: self.part.to_string(),
                line: line.to_string(),
            }),
        }
    }
}

fn join(existing: Option<String>, line: &str, separator: &str) -> String {
    match existing {
        Some(mut text) => {
            text.push_str(separator);
            text.push_str(line);
            text
        }
        None => line.to_string(),
    }
}
