use crate::config::Config;
use crate::error::AppResult;
use crate::parser::{DocumentParser, ParsedDocument};
use crate::services::{load_document, FilePicker, JsonWriter, SheetWriter};
use crate::utils::logging;
use std::path::PathBuf;
use tracing::info;

/// 应用主结构
#[derive(Debug)]
pub struct App {
    config: Config,
}

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub parts: usize,
    pub records: usize,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        logging::log_startup(&config.output_path);
        Self { config }
    }

    /// 运行应用主逻辑：选择文件 → 读取 → 解析 → 写表格
    pub async fn run(&self) -> AppResult<RunSummary> {
        let input_path = self.resolve_input().await?;
        println!("Выбранный файл: {}", input_path.display());

        let document = load_document(&input_path).await?;
        let parsed = convert(&document, &self.config)?;

        SheetWriter::new(&self.config.sheet_name)
            .write(&self.config.output_path, &parsed.records)
            .await?;

        if let Some(json_path) = &self.config.json_output {
            JsonWriter::with_path(json_path).write(&parsed.records).await?;
        }

        logging::print_final_stats(parsed.parts.len(), &parsed.records, &self.config.output_path);

        Ok(RunSummary {
            input_path,
            output_path: self.config.output_path.clone(),
            parts: parsed.parts.len(),
            records: parsed.records.len(),
        })
    }

    /// 配置中指定了输入文件时直接使用，否则弹出选择框
    async fn resolve_input(&self) -> AppResult<PathBuf> {
        match &self.config.input_path {
            Some(path) => {
                info!("使用配置中的输入文件: {}", path.display());
                Ok(path.clone())
            }
            None => FilePicker::new().pick().await,
        }
    }
}

/// 解析整篇文档
pub fn convert(document: &str, config: &Config) -> AppResult<ParsedDocument> {
    let parser = DocumentParser::from_config(config)?;
    let parsed = parser.parse(document)?;

    logging::log_parts_found(&parsed.parts);
    if config.verbose_logging {
        logging::log_records(&parsed.records);
    }

    Ok(parsed)
}
