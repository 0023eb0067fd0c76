// Analysis prompt and model output parsing
// Author: kelexine (https://github.com/kelexine)

use crate::error::{ChefError, Result};
use crate::models::AnalysisResult;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Instruction sent alongside every fridge photo.
pub const ANALYSIS_PROMPT: &str = r#"Analyze this image of fridge contents and identify all visible food ingredients.
Then suggest 2-3 recipes that can be made with these ingredients.

Respond in this exact JSON format:
{
  "ingredients_detected": ["ingredient1", "ingredient2", ...],
  "recipes": [
    {
      "title": "Recipe Name",
      "description": "Brief description of the dish",
      "ingredients_needed": ["ingredient1", "ingredient2", ...],
      "instructions": ["Step 1", "Step 2", ...],
      "cooking_time": "30 mins",
      "difficulty": "Easy"
    }
  ],
  "shopping_list_suggestions": ["item1", "item2", ...]
}

The shopping_list_suggestions should contain common ingredients that would complement the detected ingredients but are not visible in the image."#;

/// Lazily initialized regex for an opening markdown fence (```json, ```)
static OPENING_FENCE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_opening_fence_regex() -> &'static Regex {
    OPENING_FENCE_REGEX.get_or_init(|| {
        Regex::new(r"\A\s*```[A-Za-z]*").expect("Invalid regex pattern")
    })
}

/// Parse the model's text output into an [`AnalysisResult`].
///
/// Tries the text as-is first, then once more with markdown code fences
/// removed.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult> {
    match serde_json::from_str(text) {
        Ok(result) => Ok(result),
        Err(first_err) => {
            debug!("Direct JSON decode failed ({}), retrying without code fences", first_err);
            serde_json::from_str(strip_code_fences(text))
                .map_err(|e| ChefError::ResponseParse(e.to_string()))
        }
    }
}

/// Remove one leading and one trailing markdown fence.
pub fn strip_code_fences(text: &str) -> &str {
    let without_open = match get_opening_fence_regex().find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    let trimmed = without_open.trim_end();
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}
