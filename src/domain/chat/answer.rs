//! Answer generation on top of an [`LlmProvider`]

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::llm::{FinishReason, LlmProvider, LlmRequest};
use crate::domain::DomainError;

const SYSTEM_PROMPT: &str = "You are a specialized assistant that ONLY answers questions about \
the Sui blockchain, the Move smart contract language, and Walrus (the decentralized storage and \
data availability network built on Sui), plus closely related blockchain fundamentals.

Rules:
1. Prefer the information in the provided context (Sui docs, the Move book, Walrus docs and live data)
2. If the context does not cover the question, say so before answering from general knowledge
3. If the question is not about Sui, Move, Walrus or blockchain, say \"I only help with Sui blockchain, Move smart contracts, Walrus, and related blockchain topics.\"
4. Be concise but comprehensive
5. Include Move code examples when relevant
6. Never invent addresses, prices or statistics that are not in the context";

const NO_CONTEXT_NOTICE: &str = "No context was found for this question. Answer from general \
knowledge and say that the answer is not based on retrieved documentation.";

/// Model parameters for answer generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.2
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

/// Turns a query and optional retrieved context into a final answer
#[derive(Debug, Clone)]
pub struct AnswerGenerator {
    provider: Arc<dyn LlmProvider>,
    settings: GenerationSettings,
}

impl AnswerGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub fn build_request(&self, query: &str, context: Option<&str>) -> LlmRequest {
        let user_message = format!(
            "Context (Sui/Move/Walrus): {}\n\nQuestion: {}",
            context.unwrap_or(NO_CONTEXT_NOTICE),
            query
        );

        LlmRequest::builder()
            .system(SYSTEM_PROMPT)
            .user(user_message)
            .max_tokens(self.settings.max_tokens)
            .temperature(self.settings.temperature)
            .build()
    }

    pub async fn generate(&self, query: &str, context: Option<&str>) -> Result<String, DomainError> {
        let request = self.build_request(query, context);

        debug!(
            provider = self.provider.provider_name(),
            model = %self.settings.model,
            has_context = context.is_some(),
            "Generating answer"
        );

        let response = self.provider.chat(&self.settings.model, request).await?;

        if response.finish_reason == Some(FinishReason::Length) {
            warn!(max_tokens = self.settings.max_tokens, "Answer truncated at token limit");
        }

        if let Some(usage) = &response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Answer generated"
            );
        }

        let answer = response.content().trim();

        if answer.is_empty() {
            return Err(DomainError::provider(
                self.provider.provider_name(),
                "Empty completion",
            ));
        }

        Ok(answer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::{LlmResponse, Message, MessageRole, MockLlmProvider};

    fn mock_answer(text: &str) -> Arc<MockLlmProvider> {
        Arc::new(MockLlmProvider::new("mock").with_response(LlmResponse::new(
            "resp-1".to_string(),
            "gpt-4o-mini".to_string(),
            Message::assistant(text),
        )))
    }

    #[tokio::test]
    async fn test_generate_with_context() {
        let provider = mock_answer("Sui is a blockchain platform that uses Move.");
        let generator = AnswerGenerator::new(provider.clone(), GenerationSettings::default());

        let answer = generator
            .generate("What is Sui?", Some("Sui is a Layer 1 blockchain."))
            .await
            .unwrap();

        assert_eq!(answer, "Sui is a blockchain platform that uses Move.");

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        let (model, request) = &requests[0];
        assert_eq!(model, "gpt-4o-mini");
        assert_eq!(request.max_tokens, Some(500));
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert!(request.messages[0]
            .content
            .contains("Sui blockchain, the Move smart contract language, and Walrus"));
        assert_eq!(
            request.messages[1].content,
            "Context (Sui/Move/Walrus): Sui is a Layer 1 blockchain.\n\nQuestion: What is Sui?"
        );
    }

    #[tokio::test]
    async fn test_generate_without_context_mentions_general_knowledge() {
        let provider = mock_answer("From general knowledge...");
        let generator = AnswerGenerator::new(provider.clone(), GenerationSettings::default());

        generator.generate("What is a rollup?", None).await.unwrap();

        let (_, request) = &provider.requests()[0];
        let user = request.last_user_message().unwrap();
        assert!(user.contains("general knowledge"));
        assert!(user.ends_with("Question: What is a rollup?"));
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let provider = Arc::new(MockLlmProvider::new("openai").with_error("HTTP 500"));
        let generator = AnswerGenerator::new(provider, GenerationSettings::default());

        let err = generator.generate("What is Sui?", None).await.unwrap_err();

        assert!(matches!(err, DomainError::Provider { .. }));
        assert_eq!(err.provider_name(), Some("openai"));
    }

    #[tokio::test]
    async fn test_empty_completion_is_an_error() {
        let generator = AnswerGenerator::new(mock_answer("   "), GenerationSettings::default());

        let err = generator.generate("What is Sui?", None).await.unwrap_err();

        assert!(err.to_string().contains("Empty completion"));
    }
}
