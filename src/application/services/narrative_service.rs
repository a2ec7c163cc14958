//! Narrative service - retry and fallback around the generation port
//!
//! The external service is treated as an unreliable dependency: one retry
//! after a short backoff, then the node's authored fallback prose. A failed
//! generation never fails a turn and never reaches the player as an error.

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::outbound::{NarrativeError, NarrativePort, NarrativeRequest};

/// When to call the external service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeMode {
    /// Call the service for every beat (the default)
    Always,
    /// Serve authored fallback prose for beats this playthrough has
    /// already visited; only new beats get a live call
    FallbackOnRevisit,
}

impl NarrativeMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "always" => Some(Self::Always),
            "fallback-on-revisit" => Some(Self::FallbackOnRevisit),
            _ => None,
        }
    }
}

/// Renders player-facing prose for resolved beats.
pub struct NarrativeService {
    port: Arc<dyn NarrativePort>,
    mode: NarrativeMode,
    retry_backoff: Duration,
}

impl NarrativeService {
    pub fn new(port: Arc<dyn NarrativePort>, mode: NarrativeMode, retry_backoff: Duration) -> Self {
        Self {
            port,
            mode,
            retry_backoff,
        }
    }

    /// Produce prose for a beat. Infallible by design: the worst outcome is
    /// the node's authored fallback text.
    pub async fn render(
        &self,
        request: &NarrativeRequest,
        fallback: &str,
        revisited: bool,
    ) -> String {
        if self.mode == NarrativeMode::FallbackOnRevisit && revisited {
            tracing::debug!(node = %request.node_title, "serving authored prose for revisited beat");
            return fallback.to_string();
        }

        match self.generate_with_retry(request).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    node = %request.node_title,
                    error = %e,
                    "narrative generation failed twice, serving authored fallback"
                );
                fallback.to_string()
            }
        }
    }

    async fn generate_with_retry(
        &self,
        request: &NarrativeRequest,
    ) -> Result<String, NarrativeError> {
        match self.port.generate(request).await {
            Ok(text) if !text.trim().is_empty() => return Ok(text),
            Ok(_) => {
                tracing::warn!(node = %request.node_title, "empty completion, retrying once");
            }
            Err(e) => {
                tracing::warn!(node = %request.node_title, error = %e, "generation failed, retrying once");
            }
        }

        tokio::time::sleep(self.retry_backoff).await;

        match self.port.generate(request).await {
            Ok(text) if !text.trim().is_empty() => Ok(text),
            Ok(_) => Err(NarrativeError::Empty),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Port double that serves scripted outcomes in sequence.
    struct ScriptedPort {
        outcomes: Vec<Result<String, NarrativeError>>,
        calls: AtomicUsize,
    }

    impl ScriptedPort {
        fn new(outcomes: Vec<Result<String, NarrativeError>>) -> Arc<Self> {
            Arc::new(Self {
                outcomes,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl NarrativePort for ScriptedPort {
        async fn generate(&self, _request: &NarrativeRequest) -> Result<String, NarrativeError> {
            let i = self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcomes.get(i) {
                Some(Ok(text)) => Ok(text.clone()),
                Some(Err(NarrativeError::Http(msg))) => Err(NarrativeError::Http(msg.clone())),
                Some(Err(NarrativeError::Api(msg))) => Err(NarrativeError::Api(msg.clone())),
                Some(Err(NarrativeError::Empty)) | None => Err(NarrativeError::Empty),
            }
        }
    }

    fn request() -> NarrativeRequest {
        NarrativeRequest {
            scenario_title: "Operation Forest Ashes".to_string(),
            narrator_brief: "brief".to_string(),
            node_title: "Chapter 1".to_string(),
            node_prompt: "prompt".to_string(),
            decision: None,
            recent_history: vec![],
            flags: vec![],
        }
    }

    fn service(port: Arc<dyn NarrativePort>, mode: NarrativeMode) -> NarrativeService {
        NarrativeService::new(port, mode, Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_success_returns_generated_text_verbatim() {
        let port = ScriptedPort::new(vec![Ok("  The ash was still warm.  ".to_string())]);
        let svc = service(port.clone(), NarrativeMode::Always);

        let text = svc.render(&request(), "fallback", false).await;
        assert_eq!(text, "  The ash was still warm.  ");
        assert_eq!(port.calls(), 1);
    }

    #[tokio::test]
    async fn test_one_failure_then_success_retries_once() {
        let port = ScriptedPort::new(vec![
            Err(NarrativeError::Http("timeout".to_string())),
            Ok("Recovered prose.".to_string()),
        ]);
        let svc = service(port.clone(), NarrativeMode::Always);

        let text = svc.render(&request(), "fallback", false).await;
        assert_eq!(text, "Recovered prose.");
        assert_eq!(port.calls(), 2);
    }

    #[tokio::test]
    async fn test_two_failures_serve_fallback() {
        let port = ScriptedPort::new(vec![
            Err(NarrativeError::Api("overloaded".to_string())),
            Err(NarrativeError::Api("overloaded".to_string())),
        ]);
        let svc = service(port.clone(), NarrativeMode::Always);

        let text = svc.render(&request(), "authored fallback", false).await;
        assert_eq!(text, "authored fallback");
        assert_eq!(port.calls(), 2);
    }

    #[tokio::test]
    async fn test_empty_completion_counts_as_failure() {
        let port = ScriptedPort::new(vec![Ok("   ".to_string()), Ok(String::new())]);
        let svc = service(port.clone(), NarrativeMode::Always);

        let text = svc.render(&request(), "authored fallback", false).await;
        assert_eq!(text, "authored fallback");
    }

    #[tokio::test]
    async fn test_revisit_mode_skips_the_live_call() {
        let port = ScriptedPort::new(vec![Ok("live".to_string())]);
        let svc = service(port.clone(), NarrativeMode::FallbackOnRevisit);

        let text = svc.render(&request(), "authored", true).await;
        assert_eq!(text, "authored");
        assert_eq!(port.calls(), 0);

        // A beat not yet visited still goes live
        let text = svc.render(&request(), "authored", false).await;
        assert_eq!(text, "live");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(NarrativeMode::parse("always"), Some(NarrativeMode::Always));
        assert_eq!(
            NarrativeMode::parse("fallback-on-revisit"),
            Some(NarrativeMode::FallbackOnRevisit)
        );
        assert_eq!(NarrativeMode::parse("sometimes"), None);
    }
}
