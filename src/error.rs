use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 用户取消了文件选择
    #[error("文件选择已取消")]
    Cancelled,
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 文档解析错误
    #[error("解析错误: {0}")]
    Parse(#[from] ParseError),
    /// 表格导出错误
    #[error("导出错误: {0}")]
    Export(#[from] ExportError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文档解析错误
#[derive(Debug, Error)]
pub enum ParseError {
    /// 部分标记中找不到数字
    #[error("部分标记格式错误 (位置 {offset}): '{marker}' 中没有数字")]
    MalformedMarker { marker: String, offset: usize },
    /// 标记正则表达式无效
    #[error("部分标记正则无效: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// 标记正则可以匹配空字符串
    #[error("部分标记正则会匹配空字符串: {pattern}")]
    EmptyMarkerMatch { pattern: String },
    /// 部分开头出现了没有题号的内容
    #[error("第 {part} 部分在第一个题号之前出现内容: '{line}'")]
    UnidentifiedLeadingContent { part: String, line: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({}): {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({}): {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 表格导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    /// xlsx 生成失败
    #[error("xlsx 生成失败: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    /// JSON 序列化失败
    #[error("JSON 序列化失败: {0}")]
    Json(#[from] serde_json::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件读取失败
    #[error("无法读取配置文件 ({}): {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("配置文件解析失败 ({}): {source}", .path.display())]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 是否为用户主动取消
    pub fn is_cancelled(&self) -> bool {
        matches!(self, AppError::Cancelled)
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
