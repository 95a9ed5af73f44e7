use crate::config::ProviderConfig;
use crate::error::RequestError;
use crate::providers::{recipe_user_prompt, RecipeProvider, RECIPE_SYSTEM_PROMPT};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Map, Value};

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    image_model: String,
    image_size: String,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider from configuration.
    ///
    /// A missing API key is tolerated so the server can still start; the
    /// provider rejects the first outbound call instead.
    pub fn new(config: &ProviderConfig) -> Self {
        let api_key = config.resolve_api_key().unwrap_or_default();

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://api.openai.com".to_string());

        OpenAiProvider {
            client: Client::new(),
            api_key,
            base_url,
            model: config.model.clone(),
            image_model: config.image_model.clone(),
            image_size: config.image_size.clone(),
        }
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        OpenAiProvider {
            client: Client::new(),
            api_key,
            base_url,
            model: "gpt-3.5-turbo".to_string(),
            image_model: "dall-e-3".to_string(),
            image_size: "1024x1024".to_string(),
        }
    }

    async fn post_json(&self, path: &str, body: Value) -> Result<Value, RequestError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        if !status.is_success() {
            let message = response_body["error"]["message"]
                .as_str()
                .unwrap_or("request failed")
                .to_string();
            return Err(RequestError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response_body)
    }
}

#[async_trait]
impl RecipeProvider for OpenAiProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn generate_recipe(&self, topic: &str) -> Result<Value, RequestError> {
        let response_body = self
            .post_json(
                "/v1/chat/completions",
                json!({
                    "model": self.model,
                    "messages": [
                        {"role": "system", "content": RECIPE_SYSTEM_PROMPT},
                        {"role": "user", "content": recipe_user_prompt(topic)}
                    ],
                    "response_format": {"type": "json_object"}
                }),
            )
            .await?;

        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                RequestError::MalformedResponse("no message content in completion".to_string())
            })?;

        // Content that is not valid JSON becomes an empty object; callers
        // see missing fields, not an error.
        Ok(serde_json::from_str(content).unwrap_or_else(|_| Value::Object(Map::new())))
    }

    async fn generate_image(&self, prompt: &str) -> Result<String, RequestError> {
        let response_body = self
            .post_json(
                "/v1/images/generations",
                json!({
                    "model": self.image_model,
                    "prompt": prompt,
                    "n": 1,
                    "size": self.image_size
                }),
            )
            .await?;

        Ok(response_body["data"][0]["url"]
            .as_str()
            .unwrap_or_default()
            .to_string())
    }
}
