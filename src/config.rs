use crate::error::ConfigError;
use crate::parser::line_kind::DEFAULT_CAPTION_PREFIX;
use crate::parser::LeadingContentPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// 默认部分标记，例如 `\section*{ЧАСТЬ 1}`
pub const DEFAULT_PART_MARKER: &str = r"\\[a-z]+.*\{\s*ЧАСТЬ\s*(\d)+\s*\}";

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "md2xlsx.toml";

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// 输入文件；为空时弹出文件选择框
    pub input_path: Option<PathBuf>,
    /// 输出的 xlsx 文件
    pub output_path: PathBuf,
    /// 额外输出的 JSON 文件
    pub json_output: Option<PathBuf>,
    /// 工作表名称
    pub sheet_name: String,
    /// 部分标记正则
    pub part_marker_pattern: String,
    /// 图注前缀
    pub caption_prefix: String,
    /// 部分开头没有题号的内容怎么处理
    pub leading_content: LeadingContentPolicy,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: PathBuf::from("output.xlsx"),
            json_output: None,
            sheet_name: "Вопросы".to_string(),
            part_marker_pattern: DEFAULT_PART_MARKER.to_string(),
            caption_prefix: DEFAULT_CAPTION_PREFIX.to_string(),
            leading_content: LeadingContentPolicy::default(),
            verbose_logging: false,
        }
    }
}

/// 配置文件内容，所有字段都可以省略
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    json_output: Option<PathBuf>,
    sheet_name: Option<String>,
    part_marker_pattern: Option<String>,
    caption_prefix: Option<String>,
    leading_content: Option<LeadingContentPolicy>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// 加载配置：默认值 → 配置文件（存在时）→ 环境变量
    ///
    /// 配置文件路径可以用 `MD2XLSX_CONFIG` 指定，默认是当前目录下的 `md2xlsx.toml`。
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("MD2XLSX_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_vars(|name| std::env::var(name).ok())
    }

    /// 从 TOML 文件加载，未填写的字段使用默认值
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        let default = Self::default();
        Ok(Self {
            input_path: file.input_path.or(default.input_path),
            output_path: file.output_path.unwrap_or(default.output_path),
            json_output: file.json_output.or(default.json_output),
            sheet_name: file.sheet_name.unwrap_or(default.sheet_name),
            part_marker_pattern: file.part_marker_pattern.unwrap_or(default.part_marker_pattern),
            caption_prefix: file.caption_prefix.unwrap_or(default.caption_prefix),
            leading_content: file.leading_content.unwrap_or(default.leading_content),
            verbose_logging: file.verbose_logging.unwrap_or(default.verbose_logging),
        })
    }

    /// 用环境变量覆盖配置
    fn apply_vars(self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            input_path: lookup("INPUT_PATH").map(PathBuf::from).or(self.input_path),
            output_path: lookup("OUTPUT_PATH").map(PathBuf::from).unwrap_or(self.output_path),
            json_output: lookup("JSON_OUTPUT").map(PathBuf::from).or(self.json_output),
            sheet_name: lookup("SHEET_NAME").unwrap_or(self.sheet_name),
            part_marker_pattern: lookup("PART_MARKER_PATTERN").unwrap_or(self.part_marker_pattern),
            caption_prefix: lookup("CAPTION_PREFIX").unwrap_or(self.caption_prefix),
            leading_content: parse_var(&lookup, "LEADING_CONTENT", "tolerate|reject")?
                .unwrap_or(self.leading_content),
            verbose_logging: parse_var(&lookup, "VERBOSE_LOGGING", "bool")?
                .unwrap_or(self.verbose_logging),
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var_name: &str,
    expected_type: &str,
) -> Result<Option<T>, ConfigError> {
    lookup(var_name)
        .map(|value| {
            value.parse().map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value: value.clone(),
                expected_type: expected_type.to_string(),
            })
        })
        .transpose()
}
