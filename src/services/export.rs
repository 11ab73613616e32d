//! 导出服务 - 业务能力层
//!
//! 只负责"把生成产物写到磁盘"能力，不关心流程

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::latex::{CLASS_FILE_NAME, MAIN_FILE_NAME};
use crate::models::exam::GeneratedFiles;

/// 出题建议的输出文件名
pub const SUGGESTION_FILE_NAME: &str = "suggested_questions.tex";

/// 导出服务
///
/// 职责：
/// - 按约定文件名（examtemplate.cls / main.tex）写出两份产物
/// - 输出目录不存在时先创建
pub struct ExportService {
    output_dir: PathBuf,
}

impl ExportService {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 写出两份生成产物
    ///
    /// # 返回
    /// 返回写出的文件路径列表（类文件在前）
    pub async fn export_all(&self, files: &GeneratedFiles) -> Result<Vec<PathBuf>> {
        self.ensure_output_dir().await?;

        let class_path = self.write_file(CLASS_FILE_NAME, &files.class_text).await?;
        let main_path = self.write_file(MAIN_FILE_NAME, &files.main_text).await?;

        info!(
            "已导出 {} 和 {} 到 {}",
            CLASS_FILE_NAME,
            MAIN_FILE_NAME,
            self.output_dir.display()
        );

        Ok(vec![class_path, main_path])
    }

    /// 写出一份出题建议文本
    pub async fn export_suggestion(&self, text: &str) -> Result<PathBuf> {
        self.ensure_output_dir().await?;
        self.write_file(SUGGESTION_FILE_NAME, text).await
    }

    async fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)
            .await
            .with_context(|| format!("无法创建输出目录: {}", self.output_dir.display()))
    }

    async fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(name);
        fs::write(&path, content)
            .await
            .with_context(|| format!("写入文件失败: {}", path.display()))?;

        debug!("写出 {} ({} 字节)", path.display(), content.len());
        Ok(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_output_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("examsmith_test_{}_{}", tag, std::process::id()))
    }

    #[tokio::test]
    async fn test_export_all_writes_both_files() {
        let dir = temp_output_dir("export");
        let service = ExportService::new(&dir);

        let files = GeneratedFiles {
            class_text: "% class".to_string(),
            main_text: "% main".to_string(),
        };

        let paths = service.export_all(&files).await.expect("导出失败");

        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with(CLASS_FILE_NAME));
        assert!(paths[1].ends_with(MAIN_FILE_NAME));

        let class_content = fs::read_to_string(&paths[0]).await.expect("读取失败");
        assert_eq!(class_content, "% class");

        let _ = fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_export_suggestion() {
        let dir = temp_output_dir("suggestion");
        let service = ExportService::new(&dir);

        let path = service
            .export_suggestion("\\item 第一题")
            .await
            .expect("导出失败");

        assert!(path.ends_with(SUGGESTION_FILE_NAME));
        let content = fs::read_to_string(&path).await.expect("读取失败");
        assert_eq!(content, "\\item 第一题");

        let _ = fs::remove_dir_all(&dir).await;
    }
}
