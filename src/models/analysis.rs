// Analysis domain types
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// A single recipe suggestion returned by the model.
///
/// All fields are free text and may be empty; missing fields decode to
/// their empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub ingredients_needed: Vec<String>,
    /// Ordered preparation steps.
    pub instructions: Vec<String>,
    /// e.g. "30 mins"
    pub cooking_time: String,
    /// e.g. "Easy"
    pub difficulty: String,
}

/// Result of analyzing one fridge photo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub ingredients_detected: Vec<String>,
    pub recipes: Vec<Recipe>,
    pub shopping_list_suggestions: Vec<String>,
}
