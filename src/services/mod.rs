pub mod export;
pub mod llm_service;
pub mod suggestion;

pub use export::ExportService;
pub use llm_service::LlmService;
pub use suggestion::{Difficulty, QuestionSuggestion};
