use serde::{Deserialize, Serialize};

/// Typed view of a generated recipe.
///
/// The HTTP layer passes the provider's JSON through untouched; this type
/// gives library consumers structured access to that payload. The provider's
/// output shape is not enforced, so every field defaults when missing.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<RecipeStep>,
}

/// One step of a recipe, with a prompt describing the matching photo
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeStep {
    pub instruction: String,
    #[serde(rename = "imagePrompt")]
    pub image_prompt: String,
}

/// Url of a generated food photo, empty when the provider returned none
#[derive(Debug, Serialize, Deserialize)]
pub struct ImageResult {
    pub url: String,
}
