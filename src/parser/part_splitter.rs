//! 部分切分
//!
//! 在整篇文档中依次查找部分标记，把相邻两个标记之间的文本切成一个 [`Part`]。
//! 第一个标记之前的内容直接丢弃。

use crate::error::ParseError;
use crate::models::Part;
use regex::{Match, Regex, RegexBuilder};
use std::sync::LazyLock;
use tracing::debug;

static PART_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("部分编号正则无效"));

/// 部分标记正则，只能通过 [`compile_marker`] 创建，保证忽略大小写
#[derive(Debug, Clone)]
pub struct PartMarker(Regex);

/// 编译部分标记正则（忽略大小写）
///
/// # 错误
/// - 正则语法错误返回 [`ParseError::InvalidPattern`]
/// - 能匹配空字符串的正则返回 [`ParseError::EmptyMarkerMatch`]
pub fn compile_marker(pattern: &str) -> Result<PartMarker, ParseError> {
    let marker = RegexBuilder::new(pattern).case_insensitive(true).build()?;

    if marker.is_match("") {
        return Err(ParseError::EmptyMarkerMatch {
            pattern: pattern.to_string(),
        });
    }

    Ok(PartMarker(marker))
}

/// 按部分标记切分文档
///
/// # 参数
/// - `document`: 整篇文档文本
/// - `marker`: 部分标记，由 [`compile_marker`] 编译，匹配时忽略大小写
///
/// # 返回
/// 按文档顺序排列的部分列表，每个标记对应一个部分。没有标记时返回空列表。
pub fn split_parts(document: &str, marker: &PartMarker) -> Result<Vec<Part>, ParseError> {
    let PartMarker(marker) = marker;
    let mut parts = Vec::new();
    let mut current = marker.find(document);

    while let Some(found) = current {
        if found.is_empty() {
            return Err(ParseError::EmptyMarkerMatch {
                pattern: marker.as_str().to_string(),
            });
        }

        let part = part_number(&found)?;
        let next = marker.find_at(document, found.end());
        let body_end = next.map_or(document.len(), |m| m.start());
        let body = document[found.end()..body_end].trim();

        debug!("找到第 {} 部分: 位置 {}, 正文 {} 字节", part, found.start(), body.len());
        parts.push(Part::new(part, body));

        current = next;
    }

    Ok(parts)
}

/// 从标记文本中取出部分编号
fn part_number(found: &Match<'_>) -> Result<String, ParseError> {
    PART_NUMBER
        .find(found.as_str())
        .map(|digits| digits.as_str().to_string())
        .ok_or_else(|| ParseError::MalformedMarker {
            marker: found.as_str().to_string(),
            offset: found.start(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PART_MARKER;
    use pretty_assertions::assert_eq;

    fn default_marker() -> PartMarker {
        compile_marker(DEFAULT_PART_MARKER).unwrap()
    }

    #[test]
    fn test_split_two_parts() {
        let doc = "\\section*{ЧАСТЬ 1}\nВ1 Текст вопроса\n![](http://img/1.png)\n\\section*{ЧАСТЬ 2}\nВ2 Другой вопрос";
        let parts = split_parts(doc, &default_marker()).unwrap();

        assert_eq!(
            parts,
            vec![
                Part::new("1", "В1 Текст вопроса\n![](http://img/1.png)"),
                Part::new("2", "В2 Другой вопрос"),
            ]
        );
    }

    #[test]
    fn test_no_markers_yields_no_parts() {
        let parts = split_parts("В1 просто текст\nбез разделов", &default_marker()).unwrap();
        assert!(parts.is_empty());
    }

    #[test]
    fn test_leading_text_is_discarded() {
        let doc = "Вариант 7\nИнструкция\n\\section*{ЧАСТЬ 1}\nА1 Вопрос";
        let parts = split_parts(doc, &default_marker()).unwrap();

        assert_eq!(parts, vec![Part::new("1", "А1 Вопрос")]);
    }

    #[test]
    fn test_adjacent_markers_give_empty_body() {
        let doc = "\\section*{ЧАСТЬ 1}\n\\section*{ЧАСТЬ 2}\nВ1 Вопрос";
        let parts = split_parts(doc, &default_marker()).unwrap();

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], Part::new("1", ""));
        assert_eq!(parts[1], Part::new("2", "В1 Вопрос"));
    }

    #[test]
    fn test_marker_is_case_insensitive_and_multi_digit() {
        let doc = "\\Section*{часть 12}\nА1 Вопрос\n\\SUBSECTION{Часть 3}\nА2 Ещё";
        let parts = split_parts(doc, &default_marker()).unwrap();

        let ids: Vec<&str> = parts.iter().map(|p| p.part.as_str()).collect();
        assert_eq!(ids, vec!["12", "3"]);
    }

    #[test]
    fn test_custom_marker_is_case_insensitive() {
        let marker = compile_marker(r"\\section\*\{part \d+\}").unwrap();
        let doc = "\\SECTION*{PART 1}\nA1 One\n\\section*{Part 2}\nA2 Two";

        let parts = split_parts(doc, &marker).unwrap();
        assert_eq!(
            parts,
            vec![Part::new("1", "A1 One"), Part::new("2", "A2 Two")]
        );
    }

    #[test]
    fn test_marker_without_digits_fails() {
        let marker = compile_marker(r"\\section\*\{[^}]*\}").unwrap();
        let doc = "\\section*{ЧАСТЬ 1}\nА1 Вопрос\n\\section*{ЧАСТЬ}\nА2 Вопрос";

        let err = split_parts(doc, &marker).unwrap_err();
        match err {
            ParseError::MalformedMarker { marker, offset } => {
                assert_eq!(marker, "\\section*{ЧАСТЬ}");
                assert_eq!(offset, doc.find("\\section*{ЧАСТЬ}").unwrap());
            }
            other => panic!("意外的错误: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = compile_marker(r"\\section*{ЧАСТЬ (").unwrap_err();
        assert!(matches!(err, ParseError::InvalidPattern(_)));
    }

    #[test]
    fn test_empty_matching_pattern_is_rejected() {
        let err = compile_marker(r"(ЧАСТЬ \d)?").unwrap_err();
        assert!(matches!(err, ParseError::EmptyMarkerMatch { .. }));
    }

    #[test]
    fn test_part_count_and_coverage() {
        let doc = "шапка\n\\section*{ЧАСТЬ 1}\n  А1 раз\n\\section*{ЧАСТЬ 2}\nБ1 два\n\n\\section*{ЧАСТЬ 3}\nВ1 три  \n";
        let marker = default_marker();
        let parts = split_parts(doc, &marker).unwrap();

        assert_eq!(parts.len(), marker.0.find_iter(doc).count());

        // 每个部分正文都来自两个标记之间，且互不重叠
        let mut search_from = 0;
        for part in &parts {
            let at = doc[search_from..].find(&part.body).unwrap() + search_from;
            search_from = at + part.body.len();
        }
        let bodies: Vec<&str> = parts.iter().map(|p| p.body.as_str()).collect();
        assert_eq!(bodies, vec!["А1 раз", "Б1 два", "В1 три"]);
    }
}
