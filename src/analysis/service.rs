// Analysis use case
// Author: kelexine (https://github.com/kelexine)

use super::ImageAnalyzer;
use crate::error::{ChefError, Result};
use crate::models::AnalysisResult;
use crate::vision::decode_image;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct AnalysisService {
    analyzer: Arc<dyn ImageAnalyzer>,
}

impl AnalysisService {
    pub fn new(analyzer: Arc<dyn ImageAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Decode `image` and analyze it.
    ///
    /// The analyzer runs on a spawned task. If the caller's future is dropped
    /// the task keeps running to completion and its result is discarded.
    pub async fn analyze_image(&self, image: String) -> Result<AnalysisResult> {
        let decoded = decode_image(&image)?;

        debug!(
            "Decoded image: {} bytes, mime_type={}",
            decoded.data.len(),
            decoded.mime_type
        );

        let analyzer = Arc::clone(&self.analyzer);
        let task = tokio::spawn(async move { analyzer.analyze(&decoded).await });

        task.await.map_err(|e| {
            warn!("Analysis task did not complete: {}", e);
            ChefError::Internal(format!("analysis task failed: {}", e))
        })?
    }
}
