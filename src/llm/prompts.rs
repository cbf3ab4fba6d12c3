// Prompts for the two narration paths: a one-shot overview of the enriched
// statement and a contextual answer within a running conversation.

pub const SYSTEM_PROMPT_ANALYST: &str = "You are a professional financial analyst. \
Answer objectively and ground every statement in the data you are given.";

pub fn build_summary_prompt(context: &str) -> String {
    format!(
        r#"Based on the following financial indicators, give an objective, concise
assessment (3-4 paragraphs) of the company's financial position. Focus on the
growth rates, the change in asset composition, and the current liquidity ratio.

Raw data and indicators:
{context}
"#
    )
}

pub fn build_chat_prompt(question: &str, context: &str) -> String {
    format!(
        r#"Based on the following financial statement data:
{context}

Answer this question: "{question}"
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_embeds_context() {
        let prompt = build_summary_prompt("| TOTAL ASSETS | 1,000 |");
        assert!(prompt.contains("| TOTAL ASSETS | 1,000 |"));
        assert!(prompt.contains("current liquidity"));
    }

    #[test]
    fn test_chat_prompt_embeds_question_and_context() {
        let prompt = build_chat_prompt("Why did liquidity fall?", "table");
        assert!(prompt.contains("\"Why did liquidity fall?\""));
        assert!(prompt.contains("table"));
    }
}
