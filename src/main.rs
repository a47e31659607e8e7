use anyhow::{Context, Result};
use exam_md_to_xlsx::utils::logging;
use exam_md_to_xlsx::{App, AppError, Config};
use std::process::ExitCode;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // 加载配置
    let config = Config::load().context("加载配置失败")?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    match App::initialize(config).run().await {
        Ok(summary) => {
            println!(
                "Парсинг завершён. Результат сохранён в {}",
                summary.output_path.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(AppError::Cancelled) => {
            eprintln!("Выбор файла отменён.");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            error!("❌ 处理失败: {}", e);
            Err(e).context("转换失败")
        }
    }
}
