use serde::Deserialize;

use crate::error::RequestError;

/// Minimum characters accepted for a recipe topic
pub const MIN_TOPIC_CHARS: usize = 3;
/// Minimum characters accepted for an image prompt
pub const MIN_PROMPT_CHARS: usize = 5;

/// Body of a recipe-generation request
#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    pub topic: String,
}

/// Body of an image-generation request
#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    pub prompt: String,
}

impl RecipeRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.topic.chars().count() < MIN_TOPIC_CHARS {
            return Err(RequestError::Validation {
                field: "topic",
                min: MIN_TOPIC_CHARS,
            });
        }
        Ok(())
    }
}

impl ImageRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.prompt.chars().count() < MIN_PROMPT_CHARS {
            return Err(RequestError::Validation {
                field: "prompt",
                min: MIN_PROMPT_CHARS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_minimum_length() {
        let too_short = RecipeRequest {
            topic: "ab".to_string(),
        };
        assert!(too_short.validate().is_err());

        let just_long_enough = RecipeRequest {
            topic: "pho".to_string(),
        };
        assert!(just_long_enough.validate().is_ok());
    }

    #[test]
    fn test_prompt_minimum_length() {
        let too_short = ImageRequest {
            prompt: "soup".to_string(),
        };
        assert!(too_short.validate().is_err());

        let just_long_enough = ImageRequest {
            prompt: "soups".to_string(),
        };
        assert!(just_long_enough.validate().is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Three characters, nine bytes
        let request = RecipeRequest {
            topic: "ラーメン".chars().take(3).collect(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validation_error_names_the_field() {
        let request = ImageRequest {
            prompt: "x".to_string(),
        };
        let message = request.validate().unwrap_err().to_string();
        assert!(message.contains("prompt"));
        assert!(message.contains('5'));
    }
}
