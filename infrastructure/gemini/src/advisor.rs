use async_trait::async_trait;
use serde_json::json;

use business::domain::recommendation::errors::RecommendationError;
use business::domain::recommendation::services::HairstyleAdvisorService;

use crate::client::GeminiClient;

const MODEL: &str = "gemini-2.5-flash";

pub struct HairstyleAdvisorGemini {
    client: GeminiClient,
}

impl HairstyleAdvisorGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn extract_text(data: &serde_json::Value) -> Option<&str> {
        data["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"].as_array())
            .and_then(|parts| parts.iter().find_map(|part| part["text"].as_str()))
    }
}

#[async_trait]
impl HairstyleAdvisorService for HairstyleAdvisorGemini {
    /// Single-shot prompt, no conversation history. Any transport or
    /// payload failure is reported as an empty AI response.
    async fn ask(&self, prompt: &str) -> Result<String, RecommendationError> {
        let body = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let response = self
            .client
            .client
            .post(self.client.generate_content_url(MODEL))
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|_| RecommendationError::EmptyAiResponse)?;

        if !response.status().is_success() {
            return Err(RecommendationError::EmptyAiResponse);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| RecommendationError::EmptyAiResponse)?;

        let text = Self::extract_text(&data).ok_or(RecommendationError::EmptyAiResponse)?;

        Ok(text.to_string())
    }
}
