use crate::error::{Result, StatementError};
use crate::llm::types::{
    permissive_safety_settings, Content, GenerateContentRequest, GenerateContentResponse, Part,
};
use log::debug;
use reqwest::Client;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub(crate) async fn generate_content(
        &self,
        system_prompt: &str,
        messages: Vec<Content>,
    ) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let payload = GenerateContentRequest {
            contents: messages,
            system_instruction: Some(Content::user(system_prompt)),
            safety_settings: permissive_safety_settings(),
        };

        debug!(
            "Requesting generateContent from model {} ({} messages)",
            self.model,
            payload.contents.len()
        );

        let res = self.client.post(&url).json(&payload).send().await?;
        let status = res.status();

        if !status.is_success() {
            let err_text = res.text().await?;
            return Err(StatementError::NarrationFailed(format!(
                "Gemini API error (status {}): {}",
                status, err_text
            )));
        }

        let body: GenerateContentResponse = res.json().await?;

        let part = body
            .candidates
            .ok_or_else(|| StatementError::NarrationFailed("No candidates returned".to_string()))?
            .first()
            .ok_or_else(|| StatementError::NarrationFailed("Empty candidates list".to_string()))?
            .content
            .parts
            .first()
            .ok_or_else(|| StatementError::NarrationFailed("No parts in content".to_string()))?
            .clone();

        let Part::Text { text } = part;
        Ok(text)
    }
}
