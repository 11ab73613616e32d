//! # ExamSmith
//!
//! 一个用于生成大学试卷 LaTeX 模板的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统围绕一份试卷配置展开：
//!
//! ### ① 模型层（Models）
//! - `models/` - 试卷配置 `ExamConfig`，系统唯一的数据源
//! - `models/update` - 表单更新归约器，所有修改走带标签的更新枚举
//! - `models/loaders` - 从 TOML 文件加载试卷描述
//!
//! ### ② 生成层（Latex / Preview）
//! - `latex/layout` - 版面共享描述：字段顺序、评分表列规则、
//!   序号标签、承诺书语句、大题迭代顺序
//! - `latex/` - 配置到两份文本产物（examtemplate.cls / main.tex）
//!   的纯映射，重复生成字节一致
//! - `preview/` - 同一份版面描述的终端可视化近似，不经过 TeX 工具链
//!
//! ### ③ 业务能力层（Services）
//! - `services/llm_service` - 生成式文本接口调用能力
//! - `services/suggestion` - 出题建议能力，失败折叠为哨兵文本
//! - `services/export` - 产物写盘能力
//!
//! ### ④ 编排层（App / Viewer）
//! - `app` - 加载 → 生成 → 预览 → 导出 → 出题建议的流程编排
//! - `viewer` - 产物标签页切换、剪贴板复制、按约定文件名保存

pub mod app;
pub mod config;
pub mod error;
pub mod latex;
pub mod models;
pub mod preview;
pub mod services;
pub mod utils;
pub mod viewer;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use latex::generate;
pub use models::exam::{ExamConfig, ExamSection, GeneratedFiles, PaperType};
pub use models::update::{ConfigUpdate, ScalarField, SectionField};
pub use preview::{render, PreviewPage};
pub use services::{Difficulty, ExportService, LlmService, QuestionSuggestion};
pub use viewer::{OutputTab, OutputViewer};
