//! examtemplate.cls 文本生成
//!
//! 类文件声明页面几何、固定的诚信警示块和排版原语
//! （标题命令、下划线填空、大题标题、承诺书环境），
//! 字段取值全部留给主文档提供。

use crate::latex::layout::{self, PLEDGE_HEADER, WARNING_BOLD_LINE, WARNING_LINE};

/// 类文件版本声明，固定字面量，保证重复生成字节一致
const CLASS_DATE: &str = "2024/06/01";

/// 生成 examtemplate.cls 的完整文本
pub fn render_class_text() -> String {
    let mut out = String::new();

    out.push_str("\\NeedsTeXFormat{LaTeX2e}\n");
    out.push_str(&format!(
        "\\ProvidesClass{{examtemplate}}[{} v1.0 University exam paper template]\n\n",
        CLASS_DATE
    ));
    out.push_str("\\LoadClass[12pt]{article}\n\n");

    out.push_str("\\RequirePackage[a4paper,margin=2.5cm]{geometry}\n");
    out.push_str("\\RequirePackage{ctex}\n");
    out.push_str("\\RequirePackage{amsmath}\n");
    out.push_str("\\RequirePackage{array}\n");
    out.push_str("\\RequirePackage{ulem}\n");
    out.push_str("\\RequirePackage{framed}\n\n");

    out.push_str("\\pagestyle{empty}\n");
    out.push_str("\\setlength{\\parindent}{0pt}\n");
    out.push_str("\\linespread{1.2}\n\n");

    out.push_str("% 下划线填空：\\blankfield{<宽度>}{<内容>}\n");
    out.push_str("\\newcommand{\\blankfield}[2]{\\uline{\\makebox[#1][c]{\\textbf{#2}}}}\n\n");

    out.push_str("% 诚信警示块（固定内容）\n");
    out.push_str("\\newcommand{\\integritywarning}{%\n");
    out.push_str("  \\begin{center}\n");
    out.push_str(&format!("    {{\\zihao{{5}} {}}}\\\\[2pt]\n", WARNING_LINE));
    out.push_str(&format!(
        "    \\uline{{\\textbf{{\\zihao{{5}} {}}}}}\n",
        WARNING_BOLD_LINE
    ));
    out.push_str("  \\end{center}}\n\n");

    out.push_str("% 试卷标题：\\examtitle{<学校>}{<学年>}{<学期>}\n");
    out.push_str("\\newcommand{\\examtitle}[3]{%\n");
    out.push_str("  \\begin{center}\n");
    out.push_str(&format!(
        "    {{\\zihao{{3}}\\heiti #1 \\uline{{~#2~}} {} \\uline{{~#3~}} {}}}\n",
        layout::TITLE_INFIX,
        layout::TITLE_SUFFIX
    ));
    out.push_str("  \\end{center}}\n\n");

    out.push_str("% 大题标题\n");
    out.push_str(
        "\\newcommand{\\sectionheading}[1]{\\par\\vspace{0.6em}{\\heiti\\zihao{4} #1}\\par\\vspace{0.3em}}\n\n",
    );

    out.push_str("% 考生承诺书环境\n");
    out.push_str("\\newenvironment{pledgebox}{%\n");
    out.push_str(&format!(
        "  \\begin{{framed}}\\bfseries\\zihao{{5}}\\noindent\\hspace{{1em}}{}\\par\n",
        PLEDGE_HEADER
    ));
    out.push_str("}{\\end{framed}}\n\n");

    out.push_str("% 签名栏\n");
    out.push_str(&format!(
        "\\newcommand{{\\pledgesignature}}{{\\hfill {}\\uline{{\\makebox[3cm]{{}}}}}}\n",
        layout::PLEDGE_SIGNATURE
    ));

    out.push_str("\n\\endinput\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_declares_primitives() {
        let text = render_class_text();

        assert!(text.starts_with("\\NeedsTeXFormat{LaTeX2e}"));
        assert!(text.contains("\\ProvidesClass{examtemplate}"));
        assert!(text.contains("\\newcommand{\\blankfield}[2]"));
        assert!(text.contains("\\newcommand{\\examtitle}[3]"));
        assert!(text.contains("\\newcommand{\\sectionheading}[1]"));
        assert!(text.contains("\\newenvironment{pledgebox}"));
        assert!(text.ends_with("\\endinput\n"));
    }

    #[test]
    fn test_class_embeds_warning_block() {
        let text = render_class_text();

        assert!(text.contains(WARNING_LINE));
        assert!(text.contains(WARNING_BOLD_LINE));
    }

    #[test]
    fn test_class_text_is_stable() {
        // 重复生成字节一致（无时间戳、无随机性）
        assert_eq!(render_class_text(), render_class_text());
    }
}
