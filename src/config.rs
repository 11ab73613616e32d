/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 试卷描述 TOML 文件路径（不存在时使用内置默认试卷）
    pub exam_file: String,
    /// 生成产物的输出目录
    pub output_dir: String,
    /// 是否在终端打印可视化预览
    pub show_preview: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    // --- 出题建议参数（topic 为空时不发起请求） ---
    pub suggest_topic: String,
    pub suggest_difficulty: String,
    pub suggest_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exam_file: "exam.toml".to_string(),
            output_dir: "output".to_string(),
            show_preview: true,
            verbose_logging: false,
            llm_api_key: String::new(),
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            llm_model_name: "gemini-2.5-flash".to_string(),
            suggest_topic: String::new(),
            suggest_difficulty: "Medium".to_string(),
            suggest_count: 3,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            exam_file: std::env::var("EXAM_FILE").unwrap_or(default.exam_file),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            show_preview: std::env::var("SHOW_PREVIEW").ok().and_then(|v| v.parse().ok()).unwrap_or(default.show_preview),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            suggest_topic: std::env::var("SUGGEST_TOPIC").unwrap_or(default.suggest_topic),
            suggest_difficulty: std::env::var("SUGGEST_DIFFICULTY").unwrap_or(default.suggest_difficulty),
            suggest_count: std::env::var("SUGGEST_COUNT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.suggest_count),
        }
    }
}
