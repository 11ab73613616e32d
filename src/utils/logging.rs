//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 默认 info 级别，可通过 RUST_LOG 环境变量覆盖；
/// `verbose` 为 true 时提升到 debug 级别。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// 记录程序启动信息
pub fn log_startup(output_dir: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 试卷模板生成模式");
    info!("📁 输出目录: {}", output_dir);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `exported`: 导出的文件数量
/// - `output_dir`: 输出目录
pub fn print_final_stats(exported: usize, output_dir: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 生成完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 导出文件: {} 个", exported);
    info!("📁 输出目录: {}", output_dir);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("短文本", 10), "短文本");
        assert_eq!(truncate_text("这是一段很长的文本内容", 5), "这是一段很...");
    }
}
