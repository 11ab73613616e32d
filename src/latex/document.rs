//! main.tex 文本生成
//!
//! 主文档只负责把配置值填进类文件声明的命令槽位，
//! 排版顺序完全来自 `layout` 模块的共享描述。

use crate::latex::layout::{
    self, CoverTitle, FieldSlot, SCORE_ROW_GRADER, SCORE_ROW_SCORE,
};
use crate::models::exam::ExamConfig;

/// 生成 main.tex 的完整文本
pub fn render_main_text(config: &ExamConfig) -> String {
    let mut out = String::new();

    out.push_str("\\documentclass{examtemplate}\n\n");
    out.push_str("\\begin{document}\n\n");

    out.push_str("\\integritywarning\n\n");

    let title = CoverTitle::from_config(config);
    out.push_str(&format!(
        "\\examtitle{{{}}}{{{}}}{{{}}}\n\n",
        title.university, title.year_range, title.semester
    ));

    out.push_str("\\vspace{0.5em}\n\n");

    // 元数据填空行，顺序由共享版面描述决定
    for row in layout::field_rows(config) {
        let line = row
            .iter()
            .map(render_field_slot)
            .collect::<Vec<_>>()
            .join(" \\hfill ");
        out.push_str(&line);
        out.push_str("\\par\n");
    }
    out.push('\n');

    render_score_table(&mut out, config);

    render_pledge_box(&mut out, config);

    // 大题按列表顺序展开，每题一个占位小题
    for block in layout::section_blocks(config) {
        out.push_str(&format!("\\sectionheading{{{}}}\n", block.title));
        if !block.content.is_empty() {
            out.push_str(&block.content);
            out.push_str("\\par\n");
        }
        out.push_str(&format!("{}\\par\n\n", block.placeholder));
    }

    out.push_str("\\end{document}\n");

    out
}

fn render_field_slot(slot: &FieldSlot) -> String {
    let mut cell = format!(
        "{} \\blankfield{{{}}}{{{}}}",
        slot.label,
        slot.width_latex(),
        slot.value
    );
    if let Some(suffix) = slot.suffix {
        cell.push(' ');
        cell.push_str(suffix);
    }
    cell
}

/// 评分表：题号行 + 得分行 + 阅卷人行，列数为截断后的题目数加两个固定列
fn render_score_table(out: &mut String, config: &ExamConfig) {
    let table = layout::score_table(config);
    let question_columns = table.question_columns();

    out.push_str("\\begin{center}\n");
    out.push_str(&format!(
        "\\begin{{tabular}}{{|c|*{{{}}}{{c|}}c|}}\n",
        question_columns
    ));
    out.push_str("\\hline\n");

    out.push_str(&table.header_cells().join(" & "));
    out.push_str(" \\\\\n\\hline\n");

    // 得分与阅卷人行：除行标签外全部留空
    let empty_cells = " &".repeat(question_columns + 1);
    out.push_str(&format!("{}{} \\\\\n\\hline\n", SCORE_ROW_SCORE, empty_cells));
    out.push_str(&format!("{}{} \\\\\n\\hline\n", SCORE_ROW_GRADER, empty_cells));

    out.push_str("\\end{tabular}\n");
    out.push_str("\\end{center}\n\n");
}

fn render_pledge_box(out: &mut String, config: &ExamConfig) {
    let pledge = layout::pledge_box(&config.university);

    out.push_str("\\begin{pledgebox}\n");
    for item in &pledge.items {
        out.push_str(item);
        out.push_str("\\par\n");
    }
    out.push_str("\\pledgesignature\n");
    out.push_str("\\end{pledgebox}\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_text_structure() {
        let config = ExamConfig::default();
        let text = render_main_text(&config);

        assert!(text.starts_with("\\documentclass{examtemplate}"));
        assert!(text.contains("\\integritywarning"));
        assert!(text.contains("\\examtitle{某某大学}{20XX-20XX}{一}"));
        assert!(text.trim_end().ends_with("\\end{document}"));
    }

    #[test]
    fn test_main_text_field_order() {
        let config = ExamConfig::default();
        let text = render_main_text(&config);

        // 填空槽位按固定顺序出现
        let order = [
            "考试科目", "试卷类型", "课程代码", "考试时长", "考试方式",
            "开课学院", "年级专业", "学院", "班级", "姓名", "学号",
        ];
        let mut cursor = 0;
        for label in order {
            let pos = text[cursor..]
                .find(label)
                .unwrap_or_else(|| panic!("缺少字段: {}", label));
            cursor += pos;
        }

        assert!(text.contains("考试科目 \\blankfield{5.5cm}{课程名称}"));
        assert!(text.contains("考试时长 \\blankfield{2cm}{100} 分钟"));
        assert!(text.contains("学号 \\blankfield{2.2cm}{}"));
    }

    #[test]
    fn test_score_table_columns() {
        let config = ExamConfig::default();
        let text = render_main_text(&config);

        assert!(text.contains("\\begin{tabular}{|c|*{9}{c|}c|}"));
        assert!(text.contains("题号 & 一 & 二 & 三 & 四 & 五 & 六 & 七 & 八 & 九 & 总分"));
    }

    #[test]
    fn test_score_table_clamps_out_of_range() {
        let mut config = ExamConfig::default();
        config.question_count = 25;
        let text = render_main_text(&config);

        assert!(text.contains("\\begin{tabular}{|c|*{20}{c|}c|}"));
        assert!(text.contains("& 二十 & 总分"));

        config.question_count = -3;
        let text = render_main_text(&config);
        assert!(text.contains("\\begin{tabular}{|c|*{1}{c|}c|}"));
    }

    #[test]
    fn test_pledge_box_interpolation() {
        let mut config = ExamConfig::default();
        config.university = "东方大学".to_string();
        let text = render_main_text(&config);

        assert_eq!(text.matches("《东方大学学生违纪处分管理规定》").count(), 2);
        assert!(text.contains("\\begin{pledgebox}"));
        assert!(text.contains("\\pledgesignature"));
    }

    #[test]
    fn test_sections_in_order_with_placeholder() {
        let config = ExamConfig::default();
        let text = render_main_text(&config);

        let first = text.find("\\sectionheading{一、选择题 (每题 3 分，共 30 分)}").unwrap();
        let second = text.find("\\sectionheading{二、填空题 (每题 4 分，共 20 分)}").unwrap();
        let third = text.find("\\sectionheading{三、计算题 (共 50 分)}").unwrap();
        assert!(first < second && second < third);

        assert!(text.contains("题目 1.1 (题目内容...)\\par"));
        assert!(text.contains("题目 3.1 (题目内容...)\\par"));
    }

    #[test]
    fn test_user_text_is_inserted_verbatim() {
        // 插值不做转义（已记录的取舍），特殊字符原样出现
        let mut config = ExamConfig::default();
        config.course_name = "C& Unix 程序设计 100%".to_string();
        let text = render_main_text(&config);

        assert!(text.contains("C& Unix 程序设计 100%"));
    }
}
