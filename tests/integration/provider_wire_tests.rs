//! Provider wire-format integration tests
//!
//! Each adapter talks to a local `wiremock` server standing in for the
//! upstream API.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::mock_provider;
    use chat_gateway::config::ProviderKind;
    use chat_gateway::core::providers::base::AdapterSettings;
    use chat_gateway::core::providers::{
        CohereProvider, GeminiProvider, GroqProvider, HuggingFaceProvider, TogetherProvider,
        build_adapter,
    };
    use chat_gateway::{ChatMessage, ChatProvider, FallbackRouter, ProviderError, ProviderRegistry};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(server: &MockServer) -> AdapterSettings {
        AdapterSettings::new("test-key")
            .with_api_base(server.uri())
            .with_timeout(Duration::from_secs(2))
    }

    fn conversation() -> Vec<ChatMessage> {
        vec![
            ChatMessage::system("You help with certificates."),
            ChatMessage::user("earlier question"),
            ChatMessage::assistant("earlier answer"),
            ChatMessage::user("How do I verify?"),
        ]
    }

    fn completion(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        })
    }

    #[tokio::test]
    async fn test_groq_sends_full_conversation_with_bearer_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "llama-3.1-8b-instant",
                "max_tokens": 500,
                "messages": [
                    {"role": "system", "content": "You help with certificates."},
                    {"role": "user", "content": "earlier question"},
                    {"role": "assistant", "content": "earlier answer"},
                    {"role": "user", "content": "How do I verify?"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("Scan the QR code.")))
            .expect(1)
            .mount(&server)
            .await;

        let provider = GroqProvider::new(settings(&server)).unwrap();
        let reply = provider.chat(&conversation()).await.unwrap();

        assert_eq!(reply, "Scan the QR code.");
    }

    #[tokio::test]
    async fn test_together_uses_its_default_model() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "meta-llama/Llama-3.3-70B-Instruct-Turbo"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("Sure.")))
            .expect(1)
            .mount(&server)
            .await;

        let provider = TogetherProvider::new(settings(&server)).unwrap();
        assert_eq!(provider.chat(&conversation()).await.unwrap(), "Sure.");
    }

    #[tokio::test]
    async fn test_gemini_sends_flattened_prompt_and_key_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{
                    "parts": [{"text": "You help with certificates.\n\nUser: How do I verify?"}]
                }],
                "generationConfig": {"maxOutputTokens": 500}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"parts": [{"text": "Open the "}, {"text": "verify page."}]}
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = GeminiProvider::new(settings(&server)).unwrap();
        let reply = provider.chat(&conversation()).await.unwrap();

        assert_eq!(reply, "Open the verify page.");
    }

    #[tokio::test]
    async fn test_huggingface_sends_last_user_turn_only() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/microsoft/DialoGPT-large"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "inputs": "How do I verify?",
                "parameters": {"max_length": 500}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"generated_text": "Use the verify tab."}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let provider = HuggingFaceProvider::new(settings(&server)).unwrap();
        assert_eq!(
            provider.chat(&conversation()).await.unwrap(),
            "Use the verify tab."
        );
    }

    #[tokio::test]
    async fn test_cohere_sends_preamble_and_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "command-r",
                "message": "How do I verify?",
                "preamble": "You help with certificates.",
                "max_tokens": 500
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "text": "Paste the certificate ID.",
                "generation_id": "g-1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = CohereProvider::new(settings(&server)).unwrap();
        assert_eq!(
            provider.chat(&conversation()).await.unwrap(),
            "Paste the certificate ID."
        );
    }

    #[tokio::test]
    async fn test_error_status_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(429).set_body_json(json!({"error": {"message": "slow down"}})),
            )
            .mount(&server)
            .await;

        let provider = GroqProvider::new(settings(&server)).unwrap();
        let err = provider.chat(&conversation()).await.unwrap_err();

        match err {
            ProviderError::ApiError {
                provider, status, ..
            } => {
                assert_eq!(provider, "Groq");
                assert_eq!(status, 429);
            }
            other => panic!("Expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blank_completion_is_empty_completion() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "  \n "})))
            .mount(&server)
            .await;

        let provider = CohereProvider::new(settings(&server)).unwrap();
        let err = provider.chat(&conversation()).await.unwrap_err();

        assert_eq!(err, ProviderError::empty_completion("Cohere"));
    }

    #[tokio::test]
    async fn test_unexpected_envelope_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"promptFeedback": {}})))
            .mount(&server)
            .await;

        let provider = GeminiProvider::new(settings(&server)).unwrap();
        let err = provider.chat(&conversation()).await.unwrap_err();

        assert!(matches!(err, ProviderError::ResponseParsing { .. }));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion("too late"))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let provider = GroqProvider::new(
            AdapterSettings::new("test-key")
                .with_api_base(server.uri())
                .with_timeout(Duration::from_millis(200)),
        )
        .unwrap();
        let err = provider.chat(&conversation()).await.unwrap_err();

        assert!(matches!(err, ProviderError::Timeout { .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_configured_chain_falls_back_across_real_adapters() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "Hello!"})))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let configs = vec![
            mock_provider(ProviderKind::Groq, &uri, "gsk"),
            mock_provider(ProviderKind::Cohere, &uri, "co"),
        ];
        let registry = ProviderRegistry::from_config_with(&configs, |_| None).unwrap();
        assert_eq!(registry.enabled_count(), 2);

        let router = FallbackRouter::new(Arc::new(registry));
        let outcome = router.complete(&conversation()).await.unwrap();

        assert_eq!(outcome.text, "Hello!");
        assert_eq!(outcome.provider, "Cohere");
        assert_eq!(outcome.attempts.len(), 1);
        assert_eq!(outcome.attempts[0].provider, "Groq");
    }

    #[tokio::test]
    async fn test_build_adapter_honours_model_override() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gpt2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"generated_text": "hi"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut config = mock_provider(ProviderKind::HuggingFace, &server.uri(), "hf");
        config.model = Some("gpt2".to_string());
        let adapter = build_adapter(&config, "hf".to_string()).unwrap();

        assert_eq!(adapter.name(), "Hugging Face");
        assert_eq!(adapter.chat(&conversation()).await.unwrap(), "hi");
    }
}
