//! Data models for the fridge-chef gateway.
//!
//! This module contains the type definitions used by:
//! - The analysis domain (`analysis`)
//! - The inbound HTTP API envelopes (`api`)
//! - The upstream Google Gemini API (`gemini`)

// Author: kelexine (https://github.com/kelexine)

pub mod analysis;
pub mod api;
pub mod gemini;

pub use analysis::{AnalysisResult, Recipe};
pub use api::{AnalyzeRequest, AnalyzeResponse, HealthResponse};
pub use gemini::{GenerateContentRequest, GenerateContentResponse, Content, Part};
