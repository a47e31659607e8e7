//! 行分类
//!
//! 每一行只分类一次，后续处理只看分类结果。

use regex::Regex;
use std::sync::LazyLock;

/// 题号：一个大写拉丁或西里尔字母（含 Ё）紧跟数字，然后是一个空白字符
static QUESTION_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-ZА-ЯЁ]\d+)\s").expect("题号正则无效"));

/// 空 alt 的 markdown 图片前缀
const IMAGE_PREFIX: &str = "![](";

/// 默认图注前缀
pub const DEFAULT_CAPTION_PREFIX: &str = "Рис.";

/// 一行文本的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// 题号行，`rest` 是题号后面的题干
    Identifier { number: &'a str, rest: &'a str },
    /// 图片行 `![](url)`
    Image { url: &'a str },
    /// 图注行，例如 "Рис. 2 — ..."
    Caption(&'a str),
    /// 其他有内容的行
    Content(&'a str),
    /// 空行（只有空白的行算作内容）
    Blank,
}

impl LineKind<'_> {
    pub fn is_identifier(&self) -> bool {
        matches!(self, LineKind::Identifier { .. })
    }
}

/// 行分类器
#[derive(Debug, Clone)]
pub struct LineClassifier {
    caption_prefix: String,
    caption_len: usize,
}

impl LineClassifier {
    pub fn new(caption_prefix: &str) -> Self {
        Self {
            caption_prefix: caption_prefix.to_lowercase(),
            caption_len: caption_prefix.chars().count(),
        }
    }

    /// 按 题号 → 图片 → 图注 → 内容 → 空行 的顺序分类
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if let Some(caps) = QUESTION_NUMBER.captures(line) {
            let prefix_end = caps.get(0).map_or(0, |m| m.end());
            let number = caps.get(1).map_or("", |m| m.as_str());
            return LineKind::Identifier {
                number,
                rest: &line[prefix_end..],
            };
        }

        if let Some(url) = image_url(line) {
            return LineKind::Image { url };
        }

        if line.is_empty() {
            return LineKind::Blank;
        }

        if self.is_caption(line) {
            return LineKind::Caption(line);
        }

        LineKind::Content(line)
    }

    fn is_caption(&self, line: &str) -> bool {
        self.caption_len > 0
            && line
                .chars()
                .take(self.caption_len)
                .collect::<String>()
                .to_lowercase()
                == self.caption_prefix
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPTION_PREFIX)
    }
}

/// 取出 `![](url)` 中的 url
fn image_url(line: &str) -> Option<&str> {
    line.strip_prefix(IMAGE_PREFIX)?.trim_end().strip_suffix(')')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_cyrillic_and_latin() {
        let classifier = LineClassifier::default();

        assert_eq!(
            classifier.classify("В1 Текст вопроса"),
            LineKind::Identifier {
                number: "В1",
                rest: "Текст вопроса"
            }
        );
        assert_eq!(
            classifier.classify("Ё12\tВопрос"),
            LineKind::Identifier {
                number: "Ё12",
                rest: "Вопрос"
            }
        );
        assert_eq!(
            classifier.classify("A3 Question"),
            LineKind::Identifier {
                number: "A3",
                rest: "Question"
            }
        );
    }

    #[test]
    fn test_identifier_consumes_single_whitespace() {
        let classifier = LineClassifier::default();

        assert_eq!(
            classifier.classify("А1  Вопрос"),
            LineKind::Identifier {
                number: "А1",
                rest: " Вопрос"
            }
        );
        assert_eq!(
            classifier.classify("А1 "),
            LineKind::Identifier {
                number: "А1",
                rest: ""
            }
        );
    }

    #[test]
    fn test_identifier_requires_whitespace_and_uppercase() {
        let classifier = LineClassifier::default();

        assert_eq!(classifier.classify("В1"), LineKind::Content("В1"));
        assert_eq!(classifier.classify("В1.Текст"), LineKind::Content("В1.Текст"));
        assert_eq!(classifier.classify("в1 текст"), LineKind::Content("в1 текст"));
        assert_eq!(classifier.classify("ВВ1 текст"), LineKind::Content("ВВ1 текст"));
    }

    #[test]
    fn test_image_line() {
        let classifier = LineClassifier::default();

        assert_eq!(
            classifier.classify("![](http://img/1.png)"),
            LineKind::Image {
                url: "http://img/1.png"
            }
        );
        assert_eq!(
            classifier.classify("![](https://cdn/x_(1).jpg)  "),
            LineKind::Image {
                url: "https://cdn/x_(1).jpg"
            }
        );
        // 带 alt 文本的图片不算图片行
        assert_eq!(
            classifier.classify("![схема](http://img/2.png)"),
            LineKind::Content("![схема](http://img/2.png)")
        );
        assert_eq!(
            classifier.classify("![](http://img/3.png) и текст"),
            LineKind::Content("![](http://img/3.png) и текст")
        );
    }

    #[test]
    fn test_caption_is_case_insensitive() {
        let classifier = LineClassifier::default();

        assert_eq!(
            classifier.classify("Рис. 2 — описание"),
            LineKind::Caption("Рис. 2 — описание")
        );
        assert_eq!(classifier.classify("РИС. 3"), LineKind::Caption("РИС. 3"));
        assert_eq!(classifier.classify("Рисунок 3"), LineKind::Content("Рисунок 3"));
    }

    #[test]
    fn test_custom_caption_prefix() {
        let classifier = LineClassifier::new("Fig.");
        assert_eq!(classifier.classify("fig. 1"), LineKind::Caption("fig. 1"));
        assert_eq!(classifier.classify("Рис. 1"), LineKind::Content("Рис. 1"));
    }

    #[test]
    fn test_blank_lines() {
        let classifier = LineClassifier::default();
        assert_eq!(classifier.classify(""), LineKind::Blank);
        assert_eq!(classifier.classify("   \t"), LineKind::Content("   \t"));
    }
}
