//! Fridge photo analysis use case.
//!
//! [`ImageAnalyzer`] is the capability that turns a decoded image into an
//! [`AnalysisResult`]; the Gemini client implements it in production and
//! tests plug in their own. [`AnalysisService`] decodes the upload and runs
//! the analyzer on a task of its own, so a client hanging up does not cancel
//! a model call that is already in flight.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod service;

pub use service::AnalysisService;

use crate::error::Result;
use crate::models::AnalysisResult;
use crate::vision::DecodedImage;
use async_trait::async_trait;

/// Something that can look at a fridge photo and suggest recipes.
#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    async fn analyze(&self, image: &DecodedImage) -> Result<AnalysisResult>;
}
