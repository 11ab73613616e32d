//! 模板生成器
//!
//! `generate` 是配置到两份文本产物的纯映射：
//! 对任何可达的配置都有定义，重复调用产出字节一致的结果。

pub mod class;
pub mod document;
pub mod layout;

use crate::models::exam::{ExamConfig, GeneratedFiles};

/// 类文件的约定文件名
pub const CLASS_FILE_NAME: &str = "examtemplate.cls";
/// 主文档的约定文件名
pub const MAIN_FILE_NAME: &str = "main.tex";

/// 由试卷配置生成两份 LaTeX 文本
pub fn generate(config: &ExamConfig) -> GeneratedFiles {
    GeneratedFiles {
        class_text: class::render_class_text(),
        main_text: document::render_main_text(config),
    }
}

/// 可选的 LaTeX 特殊字符转义
///
/// 生成器本身按原样插值（与参考行为一致），
/// 需要安全输出的调用方可先用本函数处理用户文本。
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '#' | '$' | '%' | '&' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}
