// Gemini API client module
// Author: kelexine (https://github.com/kelexine)

mod client;
pub mod prompt;

pub use client::GeminiClient;
pub use prompt::{parse_analysis, strip_code_fences, ANALYSIS_PROMPT};
