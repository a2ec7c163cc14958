//! Groq client for narrative generation
//!
//! Talks to Groq's OpenAI-compatible chat-completions API. The timeout is
//! set on the client itself, so every generation call is bounded; retry and
//! fallback policy live above this adapter in `NarrativeService`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::time::Duration;

use crate::application::ports::outbound::{NarrativeError, NarrativePort, NarrativeRequest};

const MAX_TOKENS: u32 = 1500;
const TEMPERATURE: f32 = 0.8;
const TOP_P: f32 = 0.95;

/// Client for the Groq chat-completions API
pub struct GroqClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GroqClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl NarrativePort for GroqClient {
    async fn generate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
        let payload = ChatCompletionRequest {
            model: &self.model,
            messages: build_messages(request),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NarrativeError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NarrativeError::Api(format!("{}: {}", status, body)));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| NarrativeError::Http(e.to_string()))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(NarrativeError::Empty);
        }
        Ok(text)
    }
}

/// Assemble the chat messages for one beat.
fn build_messages(request: &NarrativeRequest) -> Vec<ChatMessage> {
    let system = format!(
        "You narrate \"{}\", a turn-based environmental investigation game. {} \
         Write one vivid scene of 2-3 short paragraphs in second person, present \
         tense. End at a natural decision point without listing options.",
        request.scenario_title, request.narrator_brief
    );

    let mut user = format!("Current beat: {}\n{}\n", request.node_title, request.node_prompt);
    if !request.recent_history.is_empty() {
        user.push_str("\nRecent turns:\n");
        for line in &request.recent_history {
            let _ = writeln!(user, "- Player: {} / Scene: {}", line.decision, line.narrative);
        }
    }
    if !request.flags.is_empty() {
        let _ = writeln!(user, "\nClues collected: {}", request.flags.join(", "));
    }
    match &request.decision {
        Some(decision) => {
            let _ = write!(user, "\nThe player just decided: \"{}\"", decision);
        }
        None => user.push_str("\nThis is the opening scene of the investigation."),
    }

    vec![
        ChatMessage {
            role: "system".to_string(),
            content: system,
        },
        ChatMessage {
            role: "user".to_string(),
            content: user,
        },
    ]
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::HistoryLine;

    fn request() -> NarrativeRequest {
        NarrativeRequest {
            scenario_title: "Operation Forest Ashes".to_string(),
            narrator_brief: "Noir narrator.".to_string(),
            node_title: "Chapter 2: Tracks in the Woods".to_string(),
            node_prompt: "Stumps cut before the burn.".to_string(),
            decision: Some("investigate the ashes".to_string()),
            recent_history: vec![HistoryLine {
                decision: "look around".to_string(),
                narrative: "The smoke column rises.".to_string(),
            }],
            flags: vec!["fire_pattern".to_string()],
        }
    }

    #[test]
    fn test_messages_carry_brief_beat_and_decision() {
        let messages = build_messages(&request());
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert!(messages[0].content.contains("Operation Forest Ashes"));
        assert!(messages[0].content.contains("Noir narrator."));

        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.contains("Chapter 2: Tracks in the Woods"));
        assert!(messages[1].content.contains("investigate the ashes"));
        assert!(messages[1].content.contains("fire_pattern"));
        assert!(messages[1].content.contains("The smoke column rises."));
    }

    #[test]
    fn test_opening_scene_has_no_decision_line() {
        let mut req = request();
        req.decision = None;
        req.recent_history.clear();
        req.flags.clear();

        let messages = build_messages(&req);
        assert!(messages[1].content.contains("opening scene"));
        assert!(!messages[1].content.contains("Recent turns"));
        assert!(!messages[1].content.contains("Clues collected"));
    }
}
