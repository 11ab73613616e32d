//! 试卷描述模型
//!
//! `ExamConfig` 是整个系统唯一的数据源：模板生成器和可视化预览
//! 都是它的纯函数，任何派生结果都不会被单独缓存。

use serde::{Deserialize, Serialize};

/// 试卷类型（A/B 卷），闭集
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperType {
    A,
    B,
}

impl PaperType {
    /// 获取显示名称
    pub fn name(self) -> &'static str {
        match self {
            PaperType::A => "A",
            PaperType::B => "B",
        }
    }

    /// 从字符串解析试卷类型，无法识别时回退到 A 卷
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim() {
            "B" | "b" => PaperType::B,
            _ => PaperType::A,
        }
    }
}

impl Default for PaperType {
    fn default() -> Self {
        PaperType::A
    }
}

impl std::fmt::Display for PaperType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 一个大题块（如"一、选择题"）
///
/// `id` 在列表内唯一，列表顺序即排版顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSection {
    pub id: String,
    pub title: String,
    /// 题型说明文字
    pub content: String,
}

impl ExamSection {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// 试卷配置
///
/// 职责：
/// - 描述一份试卷的全部元数据与大题结构
/// - 只被表单归约器（`models::update`）修改
/// - `question_count` 存储原始值，渲染时才做 [1, 20] 截断
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamConfig {
    /// 学校名称
    pub university: String,
    /// 学年范围，如 "2024-2025"
    pub year_range: String,
    /// 学期（一/二/三）
    pub semester: String,
    /// 考试科目
    pub course_name: String,
    /// 课程代码
    pub course_code: String,
    /// 考试时长（分钟，字符串存储，更新时做数字校验）
    pub exam_duration: String,
    /// 试卷类型
    pub paper_type: PaperType,
    /// 考试方式（开卷/闭卷）
    pub exam_mode: String,
    /// 开课学院
    pub college: String,
    /// 年级专业
    pub major: String,
    /// 评分表题目数量（原始值，可能暂时越界）
    pub question_count: i32,
    /// 大题列表，顺序即排版顺序
    pub sections: Vec<ExamSection>,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            university: "某某大学".to_string(),
            year_range: "20XX-20XX".to_string(),
            semester: "一".to_string(),
            course_name: "课程名称".to_string(),
            course_code: "CODE123".to_string(),
            exam_duration: "100".to_string(),
            paper_type: PaperType::A,
            exam_mode: "闭卷".to_string(),
            college: "某某学院".to_string(),
            major: "年级专业".to_string(),
            question_count: 9,
            sections: vec![
                ExamSection::new("1", "一、选择题 (每题 3 分，共 30 分)", "请在选项中选择唯一正确的答案。"),
                ExamSection::new("2", "二、填空题 (每题 4 分，共 20 分)", "请将答案填写在横线上。"),
                ExamSection::new("3", "三、计算题 (共 50 分)", "要求写出必要的解题步骤。"),
            ],
        }
    }
}

impl ExamConfig {
    /// 按 id 查找大题
    pub fn section(&self, id: &str) -> Option<&ExamSection> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// 生成产物：类文件文本 + 主文档文本
///
/// 完全由 `latex::generate` 派生，不会被直接修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    /// examtemplate.cls 的内容
    pub class_text: String,
    /// main.tex 的内容
    pub main_text: String,
}
