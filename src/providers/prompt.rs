/// The system prompt used for recipe generation.
///
/// This prompt instructs the model to behave as a cooking assistant and to
/// answer with a JSON object carrying the fields the frontend expects.
///
/// The prompt is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
pub const RECIPE_SYSTEM_PROMPT: &str = include_str!("prompt.txt");

/// Build the user message for a recipe request.
pub fn recipe_user_prompt(topic: &str) -> String {
    format!("Generate a recipe for {topic}.")
}
