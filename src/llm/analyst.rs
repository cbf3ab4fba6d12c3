use crate::error::Result;
use crate::llm::client::GeminiClient;
use crate::llm::prompts::{build_chat_prompt, build_summary_prompt, SYSTEM_PROMPT_ANALYST};
use crate::llm::types::Content;
use crate::session::ChatTurn;
use log::info;

/// Narration adapter over the enriched statement: one-shot commentary and
/// multi-turn Q&A, both grounded in the serialized analysis context.
pub struct StatementAnalyst {
    client: GeminiClient,
}

impl StatementAnalyst {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Requests an overview assessment of the enriched statement.
    ///
    /// `context` is the serialized rendering from
    /// [`crate::render::analysis_context`].
    pub async fn summarize(&self, context: &str) -> Result<String> {
        info!("Requesting overview commentary");
        let prompt = build_summary_prompt(context);
        self.client
            .generate_content(SYSTEM_PROMPT_ANALYST, vec![Content::user(prompt)])
            .await
    }

    /// Answers a follow-up question about the same data. Prior turns are
    /// replayed as conversation contents so the model keeps the thread; the
    /// new question is wrapped with the data context.
    pub async fn ask(
        &self,
        question: &str,
        context: &str,
        history: &[ChatTurn],
    ) -> Result<String> {
        info!("Requesting chat answer ({} prior turns)", history.len());

        let mut messages: Vec<Content> = history.iter().map(Content::from).collect();
        messages.push(Content::user(build_chat_prompt(question, context)));

        self.client
            .generate_content(SYSTEM_PROMPT_ANALYST, messages)
            .await
    }
}
