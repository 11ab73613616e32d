//! 版面共享描述
//!
//! 模板生成器和可视化预览必须对同一份配置给出一致的版面：
//! 字段顺序、评分表列数与序号标签、身份栏空格、承诺书语句结构、
//! 大题迭代顺序。这些决定全部收敛到本模块，两个渲染端只消费
//! 这里产出的结构，不各自复制规则。

use crate::models::exam::ExamConfig;

/// 评分表题目数量的渲染下限
pub const MIN_QUESTION_COUNT: i32 = 1;
/// 评分表题目数量的渲染上限
pub const MAX_QUESTION_COUNT: i32 = 20;

/// 诚信警示第一行
pub const WARNING_LINE: &str = "诚信关于个人一生，公平竞争赢得尊重。";
/// 诚信警示第二行（加粗下划线）
pub const WARNING_BOLD_LINE: &str =
    "以下行为是严重作弊行为，学校将给予留校察看或开除学籍处分：1. 替他人考试或由他人替考；2. 通讯工具作弊；3. 团伙作弊。";

/// 标题中学年与学期之间的连接文字
pub const TITLE_INFIX: &str = "学年第";
/// 标题结尾文字
pub const TITLE_SUFFIX: &str = "学期课程考试试卷 (回忆)";

/// 评分表行标签
pub const SCORE_ROW_HEADER: &str = "题号";
pub const SCORE_ROW_SCORE: &str = "得分";
pub const SCORE_ROW_GRADER: &str = "阅卷人";
/// 评分表末列标签
pub const SCORE_COL_TOTAL: &str = "总分";

/// 承诺书抬头与签名栏
pub const PLEDGE_HEADER: &str = "考生承诺：";
pub const PLEDGE_SIGNATURE: &str = "考生签名：";

/// 中文数字表（一到十）
const IDEOGRAPHS: [&str; 10] = ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];

/// 渲染用的题目数量：存储值截断到 [1, 20]
pub fn clamp_question_count(raw: i32) -> usize {
    raw.clamp(MIN_QUESTION_COUNT, MAX_QUESTION_COUNT) as usize
}

/// 题号的中文序号标签
///
/// 规则：1-10 使用单字（一…十）；11-19 使用"十"加个位字；
/// 20 为"二十"；超过 20 回退到阿拉伯数字。
pub fn ordinal_label(n: usize) -> String {
    match n {
        1..=10 => IDEOGRAPHS[n - 1].to_string(),
        11..=19 => format!("十{}", IDEOGRAPHS[n - 11]),
        20 => "二十".to_string(),
        _ => n.to_string(),
    }
}

/// 封面标题的三个取值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverTitle {
    pub university: String,
    pub year_range: String,
    pub semester: String,
}

impl CoverTitle {
    pub fn from_config(config: &ExamConfig) -> Self {
        Self {
            university: config.university.clone(),
            year_range: config.year_range.clone(),
            semester: config.semester.clone(),
        }
    }
}

/// 一个下划线填空位：标签 + 固定宽度 + 填入值
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSlot {
    pub label: &'static str,
    pub width_cm: f32,
    pub value: String,
    /// 填空后面跟随的单位文字（如"分钟"）
    pub suffix: Option<&'static str>,
}

impl FieldSlot {
    fn new(label: &'static str, width_cm: f32, value: impl Into<String>) -> Self {
        Self {
            label,
            width_cm,
            value: value.into(),
            suffix: None,
        }
    }

    fn with_suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = Some(suffix);
        self
    }

    /// LaTeX 长度写法，如 "5.5cm" / "2cm"
    pub fn width_latex(&self) -> String {
        if self.width_cm.fract() == 0.0 {
            format!("{}cm", self.width_cm as i32)
        } else {
            format!("{}cm", self.width_cm)
        }
    }
}

/// 元数据填空行，固定顺序：
/// 科目/卷型 → 代码/时长/方式 → 学院/专业 → 四个身份空栏
pub fn field_rows(config: &ExamConfig) -> Vec<Vec<FieldSlot>> {
    vec![
        vec![
            FieldSlot::new("考试科目", 5.5, config.course_name.as_str()),
            FieldSlot::new("试卷类型", 5.5, config.paper_type.name()),
        ],
        vec![
            FieldSlot::new("课程代码", 2.0, config.course_code.as_str()),
            FieldSlot::new("考试时长", 2.0, config.exam_duration.as_str()).with_suffix("分钟"),
            FieldSlot::new("考试方式", 2.0, config.exam_mode.as_str()),
        ],
        vec![
            FieldSlot::new("开课学院", 5.0, config.college.as_str()),
            FieldSlot::new("年级专业", 5.0, config.major.as_str()),
        ],
        vec![
            FieldSlot::new("学院", 2.2, ""),
            FieldSlot::new("班级", 2.2, ""),
            FieldSlot::new("姓名", 2.2, ""),
            FieldSlot::new("学号", 2.2, ""),
        ],
    ]
}

/// 评分表形状：题目列标签（不含首列"题号"与末列"总分"）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    pub question_labels: Vec<String>,
}

impl ScoreTable {
    /// 数据列数（截断后的题目数量）
    pub fn question_columns(&self) -> usize {
        self.question_labels.len()
    }

    /// 表头整行：题号 + 各题序号 + 总分
    pub fn header_cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(self.question_labels.len() + 2);
        cells.push(SCORE_ROW_HEADER.to_string());
        cells.extend(self.question_labels.iter().cloned());
        cells.push(SCORE_COL_TOTAL.to_string());
        cells
    }

    /// 总列数（题目列 + 首末两个固定列）
    pub fn total_columns(&self) -> usize {
        self.question_labels.len() + 2
    }
}

/// 由配置得到评分表形状（列数按截断后的题目数量）
pub fn score_table(config: &ExamConfig) -> ScoreTable {
    let count = clamp_question_count(config.question_count);
    ScoreTable {
        question_labels: (1..=count).map(ordinal_label).collect(),
    }
}

/// 承诺书：抬头 + 三条承诺 + 签名栏
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PledgeBox {
    pub header: &'static str,
    pub items: Vec<String>,
    pub signature_label: &'static str,
}

/// 构造承诺书，学校名称插入第三条的两处校规引用
pub fn pledge_box(university: &str) -> PledgeBox {
    PledgeBox {
        header: PLEDGE_HEADER,
        items: vec![
            "1. 未携带通信工具及其他各类带有拍照、摄像、接收、发送、储存等功能的设备（包括但不限于手机、智能手表、智能眼镜、平板电脑、无线耳机）或关机并将其置于监考老师指定位置；"
                .to_string(),
            "2. 已按要求清理干净整个座位（包括考生邻座）桌面和抽屉里的所有物品（无论是否属于考生本人）；"
                .to_string(),
            format!(
                "3. 已知晓并理解《{u}学生违纪处分管理规定》等与考试相关规定，承诺在考试中自觉遵守以上规定，服从监考教师的安排，自觉遵守考场纪律，诚信考试，不违规、不作弊。如有违反，自愿按《{u}学生违纪处分管理规定》相关条款接受处理。",
                u = university
            ),
        ],
        signature_label: PLEDGE_SIGNATURE,
    }
}

/// 一个大题块：标题 + 说明 + 单个占位小题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBlock {
    pub title: String,
    pub content: String,
    pub placeholder: String,
}

/// 按列表顺序展开大题，每个大题带一个占位小题
pub fn section_blocks(config: &ExamConfig) -> Vec<SectionBlock> {
    config
        .sections
        .iter()
        .enumerate()
        .map(|(idx, section)| SectionBlock {
            title: section.title.clone(),
            content: section.content.clone(),
            placeholder: format!("题目 {}.1 (题目内容...)", idx + 1),
        })
        .collect()
}
