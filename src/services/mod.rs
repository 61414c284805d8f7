pub mod ai_client;
pub mod export;

pub use ai_client::{ColorSuggester, GeminiClient};
pub use export::ExportService;
