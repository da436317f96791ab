//! E2E tests against the live provider APIs
//!
//! These tests make real API calls and require API keys.
//! Run with: cargo test -- --ignored

#[cfg(test)]
mod tests {
    use chat_gateway::config::{Config, ProviderConfig, ProviderKind};
    use chat_gateway::core::providers::build_adapter;
    use chat_gateway::{ChatMessage, ChatRequest, server::AppState};

    fn conversation() -> Vec<ChatMessage> {
        vec![
            ChatMessage::system("Answer in one short sentence."),
            ChatMessage::user("What is a digital certificate?"),
        ]
    }

    async fn ask(kind: ProviderKind) {
        let config = ProviderConfig::new(kind);
        let api_key = config
            .resolve_api_key()
            .expect("credential checked by skip_without_env");
        let adapter = build_adapter(&config, api_key).unwrap();

        match adapter.chat(&conversation()).await {
            Ok(reply) => {
                println!("{}: {}", adapter.name(), reply);
                assert!(!reply.trim().is_empty());
            }
            Err(e) => {
                // Free tiers are often saturated; report rather than fail
                eprintln!("{} call failed: {}", adapter.name(), e);
            }
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_groq_live() {
        crate::skip_without_env!("GROQ_API_KEY");
        ask(ProviderKind::Groq).await;
    }

    #[tokio::test]
    #[ignore]
    async fn test_gemini_live() {
        crate::skip_without_env!("GOOGLE_AI_API_KEY");
        ask(ProviderKind::Gemini).await;
    }

    #[tokio::test]
    #[ignore]
    async fn test_huggingface_live() {
        crate::skip_without_env!("HUGGINGFACE_API_KEY");
        ask(ProviderKind::HuggingFace).await;
    }

    #[tokio::test]
    #[ignore]
    async fn test_together_live() {
        crate::skip_without_env!("TOGETHER_API_KEY");
        ask(ProviderKind::Together).await;
    }

    #[tokio::test]
    #[ignore]
    async fn test_cohere_live() {
        crate::skip_without_env!("COHERE_API_KEY");
        ask(ProviderKind::Cohere).await;
    }

    /// Full pipeline with whatever credentials are present
    #[tokio::test]
    #[ignore]
    async fn test_chat_pipeline_live() {
        let state = AppState::from_config(Config::default()).unwrap();
        if !state.registry().has_enabled() {
            eprintln!("Skipping test: no provider credentials set");
            return;
        }

        let reply = state
            .chat
            .handle("e2e", ChatRequest::new("How do I verify a certificate?"))
            .await;
        match reply {
            Ok(reply) => println!("{} answered: {}", reply.provider, reply.response),
            Err(e) => eprintln!("All providers failed: {}", e),
        }
    }
}
