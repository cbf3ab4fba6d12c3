use crate::session::{ChatRole, ChatTurn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part::Text { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part::Text { text: text.into() }],
        }
    }
}

impl From<&ChatTurn> for Content {
    fn from(turn: &ChatTurn) -> Self {
        match turn.role {
            ChatRole::User => Content::user(turn.text.clone()),
            ChatRole::Model => Content::model(turn.text.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

/// BLOCK_NONE across all harm categories; the default thresholds block
/// legitimate financial answers.
pub fn permissive_safety_settings() -> Vec<SafetySetting> {
    [
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ]
    .iter()
    .map(|category| SafetySetting {
        category: category.to_string(),
        threshold: "BLOCK_NONE".to_string(),
    })
    .collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello")],
            system_instruction: Some(Content::user("be terse")),
            safety_settings: permissive_safety_settings(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert!(json.get("systemInstruction").is_some());
    }

    #[test]
    fn test_system_instruction_omitted_when_none() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello")],
            system_instruction: None,
            safety_settings: permissive_safety_settings(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn test_safety_settings_block_none_for_all_categories() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello")],
            system_instruction: None,
            safety_settings: permissive_safety_settings(),
        };

        let json = serde_json::to_value(&request).unwrap();
        let settings = json["safetySettings"].as_array().unwrap();
        assert_eq!(settings.len(), 4);
        for setting in settings {
            assert_eq!(setting["threshold"], "BLOCK_NONE");
        }
        assert!(settings
            .iter()
            .any(|s| s["category"] == "HARM_CATEGORY_DANGEROUS_CONTENT"));
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Assets grew."}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let candidates = response.candidates.unwrap();
        let Part::Text { text } = &candidates[0].content.parts[0];
        assert_eq!(text, "Assets grew.");
    }

    #[test]
    fn test_chat_turn_conversion() {
        let content: Content = (&ChatTurn::model("ok")).into();
        assert_eq!(content.role, "model");
    }
}
