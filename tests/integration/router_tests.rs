//! Fallback router integration tests
//!
//! Tests ordering, skipping and terminal outcomes of the provider chain.

#[cfg(test)]
mod tests {
    use crate::common::providers::{CallLog, Step, registry_of};
    use chat_gateway::{ChatMessage, FallbackRouter, RouterError};
    use std::sync::Arc;

    fn conversation() -> Vec<ChatMessage> {
        vec![ChatMessage::system("be helpful"), ChatMessage::user("Hi")]
    }

    fn router(log: &CallLog, entries: Vec<(&'static str, i32, bool, Step)>) -> FallbackRouter {
        FallbackRouter::new(Arc::new(registry_of(log, entries)))
    }

    /// A fails, B answers: A is called exactly once and strictly before B
    #[tokio::test]
    async fn test_first_failure_falls_through_to_second() {
        let log = CallLog::default();
        let router = router(
            &log,
            vec![
                ("A", 1, true, Step::fail()),
                ("B", 2, true, Step::reply("Hello!")),
            ],
        );

        let outcome = router.complete(&conversation()).await.unwrap();

        assert_eq!(outcome.text, "Hello!");
        assert_eq!(outcome.provider, "B");
        assert_eq!(outcome.attempts.len(), 1);
        assert_eq!(outcome.attempts[0].provider, "A");
        assert_eq!(log.order(), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_providers_after_success_are_not_called() {
        let log = CallLog::default();
        let router = router(
            &log,
            vec![
                ("A", 1, true, Step::reply("first")),
                ("B", 2, true, Step::reply("second")),
                ("C", 3, true, Step::reply("third")),
            ],
        );

        let outcome = router.complete(&conversation()).await.unwrap();

        assert_eq!(outcome.provider, "A");
        assert!(outcome.attempts.is_empty());
        assert_eq!(log.order(), vec!["A"]);
    }

    #[tokio::test]
    async fn test_order_follows_priority_not_insertion() {
        let log = CallLog::default();
        let router = router(
            &log,
            vec![
                ("Cohere", 5, true, Step::reply("late")),
                ("Groq", 1, true, Step::fail()),
                ("Together", 4, true, Step::fail()),
            ],
        );

        let outcome = router.complete(&conversation()).await.unwrap();

        assert_eq!(outcome.provider, "Cohere");
        assert_eq!(log.order(), vec!["Groq", "Together", "Cohere"]);
    }

    #[tokio::test]
    async fn test_disabled_providers_are_never_invoked() {
        let log = CallLog::default();
        let router = router(
            &log,
            vec![
                ("A", 1, false, Step::reply("should not be used")),
                ("B", 2, true, Step::fail()),
                ("C", 3, false, Step::reply("nor this")),
                ("D", 4, true, Step::reply("ok")),
            ],
        );

        let outcome = router.complete(&conversation()).await.unwrap();

        assert_eq!(outcome.provider, "D");
        assert_eq!(log.order(), vec!["B", "D"]);
    }

    #[tokio::test]
    async fn test_each_enabled_provider_tried_once_when_all_fail() {
        let log = CallLog::default();
        let router = router(
            &log,
            vec![
                ("A", 1, true, Step::fail()),
                ("B", 2, true, Step::Blank),
                ("C", 3, true, Step::Panic),
            ],
        );

        let err = router.complete(&conversation()).await.unwrap_err();

        match err {
            RouterError::AllProvidersFailed { attempts } => {
                let names: Vec<_> = attempts.iter().map(|a| a.provider.as_str()).collect();
                assert_eq!(names, vec!["A", "B", "C"]);
            }
            other => panic!("Expected AllProvidersFailed, got {:?}", other),
        }
        assert_eq!(log.order(), vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_no_enabled_provider_makes_no_calls() {
        let log = CallLog::default();
        let router = router(
            &log,
            vec![
                ("A", 1, false, Step::reply("x")),
                ("B", 2, false, Step::reply("y")),
            ],
        );

        let err = router.complete(&conversation()).await.unwrap_err();

        assert!(matches!(err, RouterError::NoProvidersConfigured));
        assert_eq!(log.count(), 0);
    }

    #[tokio::test]
    async fn test_every_provider_sees_the_same_conversation() {
        let log = CallLog::default();
        let router = router(
            &log,
            vec![
                ("A", 1, true, Step::fail()),
                ("B", 2, true, Step::reply("done")),
            ],
        );
        let messages = conversation();

        router.complete(&messages).await.unwrap();

        let calls = log.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].messages, messages);
        assert_eq!(calls[1].messages, messages);
    }
}
