//! 出题建议服务 - 业务能力层
//!
//! 只负责"向 LLM 要题目"能力，不关心流程：
//! - 不读写 `ExamConfig`
//! - 端点返回的文本原样交给调用方
//! - 任何失败都折叠为注释形式的哨兵字符串，不向上抛出
//! - 缺少凭据在任何网络请求之前就地失败

use tracing::{debug, warn};

use crate::services::llm_service::LlmService;

/// 建议题目数量的上限
const MAX_SUGGEST_COUNT: u32 = 10;

/// 出错时返回的哨兵文本
pub const ERROR_SENTINEL: &str = "% Error generating questions. Please check your API key.";
/// LLM 返回空内容时的哨兵文本
pub const EMPTY_SENTINEL: &str = "% No content generated.";

/// 题目难度（闭集）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// 从字符串解析难度，大小写不敏感，无法识别时回退到 Medium
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 出题建议服务
pub struct QuestionSuggestion {
    llm: LlmService,
}

impl QuestionSuggestion {
    pub fn new(llm: LlmService) -> Self {
        Self { llm }
    }

    /// 请求一批 LaTeX 格式的考题建议
    ///
    /// # 参数
    /// - `subject`: 考试科目（通常取自表单的课程名称）
    /// - `topic`: 出题范围关键词
    /// - `difficulty`: 难度
    /// - `count`: 题目数量，截断到 [1, 10]
    ///
    /// # 返回
    /// 成功时原样返回 LLM 的文本；
    /// 任何失败都返回哨兵字符串，调用方无需处理错误。
    pub async fn suggest(
        &self,
        subject: &str,
        topic: &str,
        difficulty: Difficulty,
        count: u32,
    ) -> String {
        // 凭据缺失：在任何网络请求之前就地失败
        if !self.llm.has_credentials() {
            warn!("LLM API Key 未配置，跳过网络请求");
            return ERROR_SENTINEL.to_string();
        }

        let count = count.clamp(1, MAX_SUGGEST_COUNT);
        let prompt = build_prompt(subject, topic, difficulty, count);

        debug!(
            "请求出题建议: 科目={} 范围={} 难度={} 数量={}",
            subject, topic, difficulty, count
        );

        match self.llm.send_to_llm(&prompt, Some(SYSTEM_MESSAGE)).await {
            Ok(content) if content.is_empty() => EMPTY_SENTINEL.to_string(),
            Ok(content) => content,
            Err(e) => {
                warn!("出题建议请求失败: {}", e);
                ERROR_SENTINEL.to_string()
            }
        }
    }
}

const SYSTEM_MESSAGE: &str =
    "You are a strict university professor preparing a final exam.";

/// 构建出题提示词，内嵌期望的 LaTeX 输出示例
fn build_prompt(subject: &str, topic: &str, difficulty: Difficulty, count: u32) -> String {
    format!(
        r#"Subject: {subject}
Topic: {topic}
Difficulty: {difficulty}

Please generate {count} exam questions in LaTeX format.
Do not include the document preamble, just the items.
Format them inside an 'enumerate' environment.
Ensure mathematical equations are properly formatted with LaTeX syntax (e.g., $...$ or $$...$$).
If the subject implies it, use Chinese for the question text, but keep standard math notation.

Example Output:
\item Calculate the limit: $\lim_{{x \to \infty}} (1+\frac{{1}}{{x}})^x$.
\item Define the Central Limit Theorem."#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn service_without_key() -> QuestionSuggestion {
        let config = Config {
            llm_api_key: String::new(),
            ..Config::default()
        };
        QuestionSuggestion::new(LlmService::new(&config))
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse_or_default("Easy"), Difficulty::Easy);
        assert_eq!(Difficulty::parse_or_default("hard"), Difficulty::Hard);
        assert_eq!(Difficulty::parse_or_default("MEDIUM"), Difficulty::Medium);
        assert_eq!(Difficulty::parse_or_default("未知"), Difficulty::Medium);
    }

    #[test]
    fn test_build_prompt_embeds_parameters() {
        let prompt = build_prompt("高等数学", "极限与连续", Difficulty::Hard, 5);

        assert!(prompt.contains("Subject: 高等数学"));
        assert!(prompt.contains("Topic: 极限与连续"));
        assert!(prompt.contains("Difficulty: Hard"));
        assert!(prompt.contains("generate 5 exam questions"));
        assert!(prompt.contains("\\item Calculate the limit"));
        assert!(prompt.contains("enumerate"));
    }

    /// 缺少凭据时同步返回哨兵，不发起网络请求
    #[tokio::test]
    async fn test_missing_credentials_returns_sentinel() {
        let service = service_without_key();

        let result = service
            .suggest("高等数学", "极限", Difficulty::Medium, 3)
            .await;

        assert_eq!(result, ERROR_SENTINEL);
    }

    /// 真实调用 LLM，需要配置 LLM_API_KEY 后手动运行：
    /// cargo test test_suggest_live -- --ignored --nocapture
    #[tokio::test]
    #[ignore]
    async fn test_suggest_live() {
        let _ = tracing_subscriber::fmt::try_init();

        let config = Config::from_env();
        let service = QuestionSuggestion::new(LlmService::new(&config));

        let result = service
            .suggest("高等数学", "洛必达法则", Difficulty::Medium, 2)
            .await;

        println!("\n========== LLM 出题结果 ==========");
        println!("{}", result);
        println!("==================================\n");

        assert!(!result.is_empty());
        assert!(!result.starts_with("% Error"));
    }
}
