// Gemini API client for fridge photo analysis
// Author: kelexine (https://github.com/kelexine)

use super::prompt::{parse_analysis, ANALYSIS_PROMPT};
use crate::analysis::ImageAnalyzer;
use crate::config::GeminiConfig;
use crate::error::{ChefError, Result};
use crate::metrics;
use crate::models::gemini::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part,
};
use crate::models::AnalysisResult;
use crate::utils::logging::sanitize;
use crate::vision::DecodedImage;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use zeroize::Zeroizing;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Google Gemini Generative Language API.
///
/// Holds one pooled HTTP client for the lifetime of the process. Calls are
/// never retried.
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
    api_key: Zeroizing<String>,
}

impl GeminiClient {
    /// Build the HTTP client and bind it to `api_key`.
    pub fn new(config: &GeminiConfig, api_key: impl Into<String>) -> Result<Self> {
        let api_key = Zeroizing::new(api_key.into());
        if api_key.trim().is_empty() {
            return Err(ChefError::ClientConstruction("API key is empty".to_string()));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .use_rustls_tls()
            .build()
            .map_err(|e| ChefError::ClientConstruction(e.to_string()))?;

        debug!(
            "Created Gemini HTTP client (timeout {}s)",
            config.timeout_seconds
        );

        Ok(Self {
            http_client,
            config: config.clone(),
            api_key,
        })
    }

    /// Model used for analysis
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the single-turn request: the photo followed by the fixed prompt.
    pub fn build_request(&self, image: &DecodedImage) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type.clone(),
                            data: image.to_base64(),
                        },
                    },
                    Part::text(ANALYSIS_PROMPT),
                ],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(self.config.temperature),
                response_mime_type: Some("application/json".to_string()),
                ..Default::default()
            }),
        }
    }

    /// Call Gemini `generateContent`.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.generate_content_url();
        debug!("Calling generateContent API for model: {}", self.config.model);

        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(request)
            .send()
            .await
            .map_err(|e| ChefError::GeminiApi(format!("HTTP error: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| ChefError::GeminiApi(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let detail = Self::extract_error_message(&response_text)
                .unwrap_or_else(|| response_text.clone());
            let detail = sanitize(&detail);
            error!("Gemini API error: HTTP {} - {}", status, detail);
            return Err(ChefError::GeminiApi(format!("HTTP {}: {}", status.as_u16(), detail)));
        }

        debug!(
            "Raw Gemini response (first 500 chars): {}",
            response_text.chars().take(500).collect::<String>()
        );

        serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse Gemini response envelope: {}", e);
            ChefError::GeminiApi(format!("Response parsing error: {}", e))
        })
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            status: Option<String>,
        }

        let error = serde_json::from_str::<ErrorResponse>(response_text).ok()?.error?;
        error.message.or(error.status)
    }
}

fn log_response_meta(response: &GenerateContentResponse) {
    let finish_reason = response.finish_reason().unwrap_or("none");
    match &response.usage_metadata {
        Some(usage) => debug!(
            "Gemini finish reason: {}, tokens: prompt={} candidates={} total={}",
            finish_reason,
            usage.prompt_token_count.unwrap_or(0),
            usage.candidates_token_count.unwrap_or(0),
            usage.total_token_count.unwrap_or(0)
        ),
        None => debug!("Gemini finish reason: {}", finish_reason),
    }
    if finish_reason != "STOP" && finish_reason != "none" {
        warn!("Gemini candidate stopped early: {}", finish_reason);
    }
}

#[async_trait]
impl ImageAnalyzer for GeminiClient {
    async fn analyze(&self, image: &DecodedImage) -> Result<AnalysisResult> {
        let start = Instant::now();
        let request = self.build_request(image);

        let outcome = self
            .generate_content(&request)
            .await
            .and_then(|response| {
                log_response_meta(&response);
                response.first_text().ok_or(ChefError::EmptyResponse)
            })
            .and_then(|text| parse_analysis(&text));

        let label = match &outcome {
            Ok(_) => "success",
            Err(ChefError::EmptyResponse) => "empty",
            Err(ChefError::ResponseParse(_)) => "parse_error",
            Err(_) => "api_error",
        };
        metrics::record_gemini_call(&self.config.model, label, start.elapsed().as_secs_f64());

        let result = outcome?;
        info!(
            "Gemini analysis finished in {:?}: {} ingredients, {} recipes",
            start.elapsed(),
            result.ingredients_detected.len(),
            result.recipes.len()
        );
        Ok(result)
    }
}
