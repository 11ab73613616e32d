use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

use crate::models::exam::ExamConfig;

/// 从 TOML 文件加载试卷描述
///
/// 文件中缺失的字段回退到默认值，保证加载结果总是可生成的。
pub async fn load_exam_config(path: &Path) -> Result<ExamConfig> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取试卷描述文件: {}", path.display()))?;

    let config: ExamConfig = toml::from_str(&content)
        .with_context(|| format!("无法解析试卷描述文件: {}", path.display()))?;

    tracing::info!(
        "成功加载试卷描述: {} ({} 个大题)",
        path.file_name().unwrap_or_default().to_string_lossy(),
        config.sections.len()
    );

    Ok(config)
}

/// 加载试卷描述，文件不存在时回退到默认配置
pub async fn load_exam_config_or_default(path: &Path) -> Result<ExamConfig> {
    if !path.exists() {
        tracing::info!("未找到 {}，使用默认试卷描述", path.display());
        return Ok(ExamConfig::default());
    }

    load_exam_config(path).await
}
