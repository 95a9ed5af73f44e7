mod open_ai;
mod prompt;

pub use open_ai::OpenAiProvider;
pub use prompt::{recipe_user_prompt, RECIPE_SYSTEM_PROMPT};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RequestError;

/// Gateway to the AI provider backing both generation operations
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Generate a recipe for the given dish topic.
    ///
    /// Returns the provider's JSON payload as-is; no shape is enforced on
    /// the model's output.
    async fn generate_recipe(&self, topic: &str) -> Result<Value, RequestError>;

    /// Generate one food photo for the prompt and return its url.
    ///
    /// The url is empty when the provider returned no image.
    async fn generate_image(&self, prompt: &str) -> Result<String, RequestError>;
}
