//! 可视化预览渲染
//!
//! 不经过 TeX 工具链，直接把配置渲染成页面的结构化近似。
//! 所有版面决定（字段顺序、列数、序号标签、承诺书语句、大题顺序）
//! 均来自 `latex::layout`，与模板生成器共用一份描述。

use std::fmt;

use crate::latex::layout::{
    self, CoverTitle, FieldSlot, PledgeBox, SectionBlock, SCORE_ROW_GRADER, SCORE_ROW_SCORE,
};
use crate::models::exam::ExamConfig;

/// 诚信警示块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningBlock {
    pub line: String,
    pub bold_line: String,
}

/// 评分表的三行单元格
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTableView {
    pub header: Vec<String>,
    pub score_row: Vec<String>,
    pub grader_row: Vec<String>,
}

impl ScoreTableView {
    /// 题目数据列数（不含首末固定列）
    pub fn question_columns(&self) -> usize {
        self.header.len().saturating_sub(2)
    }
}

/// 页面的结构化预览模型
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPage {
    pub warning: WarningBlock,
    pub title: CoverTitle,
    pub field_rows: Vec<Vec<FieldSlot>>,
    pub score_table: ScoreTableView,
    pub pledge: PledgeBox,
    pub sections: Vec<SectionBlock>,
}

/// 由试卷配置构建页面预览
pub fn render(config: &ExamConfig) -> PreviewPage {
    let table = layout::score_table(config);
    let header = table.header_cells();

    let mut score_row = vec![SCORE_ROW_SCORE.to_string()];
    let mut grader_row = vec![SCORE_ROW_GRADER.to_string()];
    for _ in 1..header.len() {
        score_row.push(String::new());
        grader_row.push(String::new());
    }

    PreviewPage {
        warning: WarningBlock {
            line: layout::WARNING_LINE.to_string(),
            bold_line: layout::WARNING_BOLD_LINE.to_string(),
        },
        title: CoverTitle::from_config(config),
        field_rows: layout::field_rows(config),
        score_table: ScoreTableView {
            header,
            score_row,
            grader_row,
        },
        pledge: layout::pledge_box(&config.university),
        sections: layout::section_blocks(config),
    }
}

impl PreviewPage {
    /// 大题标题列表（与生成器的排版顺序一致）
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }
}

impl fmt::Display for PreviewPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "═".repeat(64);
        let thin_rule = "─".repeat(64);

        writeln!(f, "{}", rule)?;
        writeln!(f, "  {}", self.warning.line)?;
        writeln!(f, "  {}", self.warning.bold_line)?;
        writeln!(f, "{}", thin_rule)?;
        writeln!(
            f,
            "  {} 〔{}〕 {} 〔{}〕 {}",
            self.title.university,
            self.title.year_range,
            layout::TITLE_INFIX,
            self.title.semester,
            layout::TITLE_SUFFIX
        )?;
        writeln!(f)?;

        for row in &self.field_rows {
            let line = row
                .iter()
                .map(format_field_slot)
                .collect::<Vec<_>>()
                .join("    ");
            writeln!(f, "  {}", line)?;
        }
        writeln!(f)?;

        format_table(f, &self.score_table)?;
        writeln!(f)?;

        writeln!(f, "┌{}", thin_rule)?;
        writeln!(f, "│ {}", self.pledge.header)?;
        for item in &self.pledge.items {
            writeln!(f, "│ {}", item)?;
        }
        writeln!(f, "│ {}＿＿＿＿＿＿", self.pledge.signature_label)?;
        writeln!(f, "└{}", thin_rule)?;
        writeln!(f)?;

        for block in &self.sections {
            writeln!(f, "  {}", block.title)?;
            if !block.content.is_empty() {
                writeln!(f, "  {}", block.content)?;
            }
            writeln!(f, "    {}", block.placeholder)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

/// 下划线填空的文本近似：值居中补下划线
fn format_field_slot(slot: &FieldSlot) -> String {
    // 厘米宽度折算为字符数的粗略近似
    let width = (slot.width_cm * 2.0).round() as usize;
    let mut cell = format!("{} {:＿^width$}", slot.label, slot.value, width = width.max(2));
    if let Some(suffix) = slot.suffix {
        cell.push(' ');
        cell.push_str(suffix);
    }
    cell
}

fn format_table(f: &mut fmt::Formatter<'_>, table: &ScoreTableView) -> fmt::Result {
    let columns = table.header.len();
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            [&table.header, &table.score_row, &table.grader_row]
                .iter()
                .map(|row| row[i].chars().count())
                .max()
                .unwrap_or(0)
                .max(2)
        })
        .collect();

    let border: String = widths
        .iter()
        .map(|w| "─".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("┼");

    for row in [&table.header, &table.score_row, &table.grader_row] {
        writeln!(f, "  ├{}┤", border)?;
        let cells = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!(" {:^width$} ", cell, width = *w))
            .collect::<Vec<_>>()
            .join("│");
        writeln!(f, "  │{}│", cells)?;
    }
    writeln!(f, "  ├{}┤", border)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latex;

    #[test]
    fn test_preview_matches_generator_columns() {
        // 预览与生成器的列标签来自同一份版面描述
        for raw in [-1, 0, 9, 20, 25] {
            let mut config = ExamConfig::default();
            config.question_count = raw;

            let page = render(&config);
            let table = latex::layout::score_table(&config);

            assert_eq!(page.score_table.header, table.header_cells());
            assert_eq!(page.score_table.question_columns(), table.question_columns());
        }
    }

    #[test]
    fn test_preview_score_rows_shape() {
        let config = ExamConfig::default();
        let page = render(&config);

        // 三行等宽：题号行、得分行、阅卷人行
        assert_eq!(page.score_table.header.len(), 11);
        assert_eq!(page.score_table.score_row.len(), 11);
        assert_eq!(page.score_table.grader_row.len(), 11);
        assert_eq!(page.score_table.score_row[0], "得分");
        assert_eq!(page.score_table.grader_row[0], "阅卷人");
        assert!(page.score_table.score_row[1..].iter().all(String::is_empty));
    }

    #[test]
    fn test_preview_sections_in_order() {
        let config = ExamConfig::default();
        let page = render(&config);

        assert_eq!(
            page.section_titles(),
            vec![
                "一、选择题 (每题 3 分，共 30 分)",
                "二、填空题 (每题 4 分，共 20 分)",
                "三、计算题 (共 50 分)",
            ]
        );
    }

    #[test]
    fn test_preview_identity_blanks() {
        let config = ExamConfig::default();
        let page = render(&config);

        let identity_row = page.field_rows.last().unwrap();
        assert_eq!(identity_row.len(), 4);
        assert!(identity_row.iter().all(|s| s.value.is_empty()));
        assert!(identity_row.iter().all(|s| (s.width_cm - 2.2).abs() < f32::EPSILON));
    }

    #[test]
    fn test_preview_pledge_interpolation() {
        let mut config = ExamConfig::default();
        config.university = "南方学院".to_string();
        let page = render(&config);

        assert_eq!(
            page.pledge.items[2]
                .matches("《南方学院学生违纪处分管理规定》")
                .count(),
            2
        );
    }

    #[test]
    fn test_display_renders_whole_page() {
        let config = ExamConfig::default();
        let text = render(&config).to_string();

        assert!(text.contains("诚信关于个人一生"));
        assert!(text.contains("某某大学"));
        assert!(text.contains("题号"));
        assert!(text.contains("总分"));
        assert!(text.contains("考生承诺："));
        assert!(text.contains("三、计算题 (共 50 分)"));
    }
}
