//! 文档解析
//!
//! 两步：先按部分标记切分（`part_splitter`），再在每个部分内按题号切分（`question_parser`）。

pub mod line_kind;
pub mod part_splitter;
pub mod question_parser;

pub use line_kind::{LineClassifier, LineKind};
pub use part_splitter::{compile_marker, split_parts, PartMarker};
pub use question_parser::{parse_questions, LeadingContentPolicy, QuestionParser};

use crate::config::Config;
use crate::error::ParseError;
use crate::models::{Part, QuestionRecord};

/// 解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub parts: Vec<Part>,
    pub records: Vec<QuestionRecord>,
}

/// 整篇文档的解析器：部分标记 + 题目解析器
#[derive(Debug, Clone)]
pub struct DocumentParser {
    marker: PartMarker,
    questions: QuestionParser,
}

impl DocumentParser {
    pub fn new(marker_pattern: &str, questions: QuestionParser) -> Result<Self, ParseError> {
        Ok(Self {
            marker: compile_marker(marker_pattern)?,
            questions,
        })
    }

    /// 根据配置创建解析器
    pub fn from_config(config: &Config) -> Result<Self, ParseError> {
        Self::new(
            &config.part_marker_pattern,
            QuestionParser::new(&config.caption_prefix, config.leading_content),
        )
    }

    pub fn parse(&self, document: &str) -> Result<ParsedDocument, ParseError> {
        let parts = split_parts(document, &self.marker)?;
        let records = self.questions.parse_questions(&parts)?;
        Ok(ParsedDocument { parts, records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_is_deterministic() {
        let parser = DocumentParser::from_config(&Config::default()).unwrap();
        let doc = "\\section*{ЧАСТЬ 1}\nА1 Вопрос\n![](http://img/a.png)\nРис. 1\n\\section*{ЧАСТЬ 2}\nБ1 Ещё";

        let first = parser.parse(doc).unwrap();
        let second = parser.parse(doc).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.parts.len(), 2);
        assert_eq!(first.records.len(), 2);
    }

    #[test]
    fn test_zero_markers_is_not_an_error() {
        let parser = DocumentParser::from_config(&Config::default()).unwrap();
        let parsed = parser.parse("А1 Вопрос без частей").unwrap();

        assert!(parsed.parts.is_empty());
        assert!(parsed.records.is_empty());
    }
}
