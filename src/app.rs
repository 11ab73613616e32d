use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::config::Config;
use crate::latex;
use crate::models::loaders;
use crate::models::exam::ExamConfig;
use crate::preview;
use crate::services::{Difficulty, ExportService, LlmService, QuestionSuggestion};
use crate::utils::logging;

/// 应用主结构
pub struct App {
    config: Config,
    exam: ExamConfig,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config.output_dir);

        // 加载试卷描述（文件不存在时使用内置默认试卷）
        let exam = loaders::load_exam_config_or_default(Path::new(&config.exam_file)).await?;

        if let Ok(json) = serde_json::to_string_pretty(&exam) {
            debug!("试卷描述:\n{}", json);
        }

        Ok(Self { config, exam })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 生成两份产物
        let files = latex::generate(&self.exam);
        info!(
            "✓ 已生成 {} ({} 字节) 和 {} ({} 字节)",
            latex::CLASS_FILE_NAME,
            files.class_text.len(),
            latex::MAIN_FILE_NAME,
            files.main_text.len()
        );

        // 终端预览
        if self.config.show_preview {
            let page = preview::render(&self.exam);
            println!("{}", page);
        }

        // 导出到输出目录
        let export = ExportService::new(&self.config.output_dir);
        let paths = export.export_all(&files).await?;

        // 出题建议（可选流程，与试卷配置相互独立）
        let mut exported = paths.len();
        if self.run_suggestion(&export).await? {
            exported += 1;
        }

        logging::print_final_stats(exported, &self.config.output_dir);

        Ok(())
    }

    /// 执行出题建议流程
    ///
    /// 出题范围为空时不发起任何请求；服务内部把所有失败
    /// 折叠为哨兵文本，这里照常写出。
    async fn run_suggestion(&self, export: &ExportService) -> Result<bool> {
        let topic = self.config.suggest_topic.trim();
        if topic.is_empty() {
            debug!("未设置出题范围，跳过出题建议");
            return Ok(false);
        }

        let service = QuestionSuggestion::new(LlmService::new(&self.config));
        let difficulty = Difficulty::parse_or_default(&self.config.suggest_difficulty);

        let text = service
            .suggest(
                &self.exam.course_name,
                topic,
                difficulty,
                self.config.suggest_count,
            )
            .await;

        let path = export.export_suggestion(&text).await?;
        info!("💡 出题建议已写入 {}", path.display());

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::export::SUGGESTION_FILE_NAME;

    /// 出题范围为空时整个建议流程被跳过，不写建议文件
    #[tokio::test]
    async fn test_empty_topic_skips_suggestion() {
        let dir = std::env::temp_dir().join(format!("examsmith_app_{}", std::process::id()));
        let config = Config {
            exam_file: "does_not_exist.toml".to_string(),
            output_dir: dir.display().to_string(),
            show_preview: false,
            suggest_topic: String::new(),
            ..Config::default()
        };

        let app = App::initialize(config).await.expect("初始化失败");
        app.run().await.expect("运行失败");

        // 两份产物在，建议文件不在
        assert!(dir.join(crate::latex::CLASS_FILE_NAME).exists());
        assert!(dir.join(crate::latex::MAIN_FILE_NAME).exists());
        assert!(!dir.join(SUGGESTION_FILE_NAME).exists());

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
