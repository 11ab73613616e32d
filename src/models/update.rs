//! 表单更新归约器
//!
//! 把表单层的所有修改收敛为一个带标签的更新枚举，
//! 由 `ExamConfig::apply` 统一分发，保证各分支可穷举检查。

use regex::Regex;
use tracing::debug;

use crate::models::exam::{ExamConfig, ExamSection, PaperType};

/// 题目数量的回退默认值（数字解析失败时使用）
const QUESTION_COUNT_FALLBACK: i32 = 9;

/// 可直接赋值的标量字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    University,
    YearRange,
    Semester,
    CourseName,
    CourseCode,
    ExamDuration,
    ExamMode,
    College,
    Major,
}

/// 大题的可编辑字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionField {
    Title,
    Content,
}

/// 一次表单更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigUpdate {
    /// 设置标量字段
    SetScalar { field: ScalarField, value: String },
    /// 设置试卷类型（闭集，不走字符串）
    SetPaperType(PaperType),
    /// 设置题目数量（数字校验，失败回退到 9）
    SetQuestionCount { raw: String },
    /// 追加一个新大题
    AddSection,
    /// 修改指定大题的单个字段
    EditSection {
        id: String,
        field: SectionField,
        value: String,
    },
    /// 按 id 删除大题
    RemoveSection { id: String },
}

impl ExamConfig {
    /// 应用一次表单更新
    ///
    /// 表单输入错误不对外暴露：非数字的时长保持原值，
    /// 非数字的题目数量回退到默认值 9。
    pub fn apply(&mut self, update: ConfigUpdate) {
        debug!("应用表单更新: {:?}", update);

        match update {
            ConfigUpdate::SetScalar { field, value } => self.set_scalar(field, value),
            ConfigUpdate::SetPaperType(paper_type) => self.paper_type = paper_type,
            ConfigUpdate::SetQuestionCount { raw } => {
                self.question_count = raw.trim().parse().unwrap_or(QUESTION_COUNT_FALLBACK);
            }
            ConfigUpdate::AddSection => {
                let id = next_section_id(&self.sections);
                self.sections
                    .push(ExamSection::new(id, "新题型 (共 X 分)", ""));
            }
            ConfigUpdate::EditSection { id, field, value } => {
                // 未知 id 静默忽略
                if let Some(section) = self.sections.iter_mut().find(|s| s.id == id) {
                    match field {
                        SectionField::Title => section.title = value,
                        SectionField::Content => section.content = value,
                    }
                }
            }
            ConfigUpdate::RemoveSection { id } => {
                self.sections.retain(|s| s.id != id);
            }
        }
    }

    fn set_scalar(&mut self, field: ScalarField, value: String) {
        match field {
            ScalarField::University => self.university = value,
            ScalarField::YearRange => self.year_range = value,
            ScalarField::Semester => self.semester = value,
            ScalarField::CourseName => self.course_name = value,
            ScalarField::CourseCode => self.course_code = value,
            ScalarField::ExamDuration => {
                // 数字校验：非数字输入保持原值
                if value.trim().parse::<u32>().is_ok() {
                    self.exam_duration = value.trim().to_string();
                }
            }
            ScalarField::ExamMode => self.exam_mode = value,
            ScalarField::College => self.college = value,
            ScalarField::Major => self.major = value,
        }
    }
}

/// 计算新大题的 id：现有数字 id 的最大值加一，无数字 id 时为 1
///
/// id 按前导数字解析（"12a" 记为 12），与表单的宽松解析保持一致。
pub fn next_section_id(sections: &[ExamSection]) -> String {
    let max_id = sections
        .iter()
        .filter_map(|s| parse_leading_number(&s.id))
        .max()
        .unwrap_or(0);
    (max_id + 1).to_string()
}

/// 提取字符串开头的数字段
fn parse_leading_number(s: &str) -> Option<u32> {
    let re = Regex::new(r"^\s*(\d+)").ok()?;
    let caps = re.captures(s)?;
    caps[1].parse().ok()
}
