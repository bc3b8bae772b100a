//! services/api/src/adapters/discovery_llm.rs
//!
//! This module contains the adapter for the place-discovery LLM.
//! It implements the `DiscoveryService` port from the `core` crate as a
//! single chat-completion round trip: no retry, no cache, no streaming.
//! Every transport or parse failure degrades to "no result".

const SYSTEM_INSTRUCTIONS: &str = r#"You are a local guide for international students in Semey, Kazakhstan.

When asked for a kind of establishment, list real, currently operating, student-friendly places in Semey with their exact names and a short note on why each suits students.

Respond with ONLY a JSON object of this shape, no prose around it:
{
  "narrative": "one short paragraph summarizing the picks",
  "places": [
    { "title": "exact establishment name", "link": "canonical map or website URL if known, else null" }
  ]
}

Rules:
- Only real establishments, no inventions.
- Omit the link field or set it to null when you are not certain of the URL.
- An empty "places" array is a valid answer."#;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use semey_guide_core::catalog::CITY_CENTER;
use semey_guide_core::domain::{DiscoveryResult, RawChunk};
use semey_guide_core::ports::DiscoveryService;
use serde::Deserialize;
use tracing::warn;

//=========================================================================================
// Response Payload (lenient)
//=========================================================================================

/// The JSON shape requested from the model. Every field is optional so a
/// sloppy response still yields whatever it did carry.
#[derive(Debug, Default, Deserialize)]
struct DiscoveryPayload {
    narrative: Option<String>,
    #[serde(default)]
    places: Vec<ChunkPayload>,
}

#[derive(Debug, Default, Deserialize)]
struct ChunkPayload {
    title: Option<String>,
    link: Option<String>,
}

/// Pulls the first JSON object out of a model reply that may wrap it in
/// code fences or prose.
fn extract_json(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (end > start).then(|| &content[start..=end])
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `DiscoveryService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiDiscoveryAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiDiscoveryAdapter {
    /// Creates a new `OpenAiDiscoveryAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    async fn request(&self, topic: &str) -> Result<DiscoveryResult, String> {
        let (lat, lng) = CITY_CENTER;
        let user_input = format!(
            "Find real, student-friendly {} in Semey, Kazakhstan (around {:.4}, {:.4}). \
             Provide the places with their exact names and brief descriptions of why they are good for students.",
            topic, lat, lng
        );

        let messages = vec![
            ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SYSTEM_INSTRUCTIONS)
                    .build()
                    .map_err(|e| e.to_string())?,
            ),
            ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_input)
                    .build()
                    .map_err(|e| e.to_string())?,
            ),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .max_tokens(800u32)
            .build()
            .map_err(|e| e.to_string())?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| e.to_string())?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| "Empty completion".to_string())?;

        let raw = extract_json(&content).ok_or_else(|| "No JSON object in reply".to_string())?;
        let payload: DiscoveryPayload =
            serde_json::from_str(raw).map_err(|e| e.to_string())?;

        Ok(DiscoveryResult {
            narrative: payload.narrative.unwrap_or_default(),
            chunks: payload
                .places
                .into_iter()
                .map(|c| RawChunk {
                    title: c.title,
                    link: c.link,
                })
                .collect(),
        })
    }
}

//=========================================================================================
// `DiscoveryService` Trait Implementation
//=========================================================================================

#[async_trait]
impl DiscoveryService for OpenAiDiscoveryAdapter {
    async fn discover(&self, topic: &str) -> Option<DiscoveryResult> {
        match self.request(topic).await {
            Ok(result) => Some(result),
            Err(e) => {
                warn!("Discovery failed for topic {:?}: {}", topic, e);
                None
            }
        }
    }
}

/// Stand-in used when no API key is configured: every discovery request
/// degrades to "no result".
pub struct DisabledDiscovery;

#[async_trait]
impl DiscoveryService for DisabledDiscovery {
    async fn discover(&self, topic: &str) -> Option<DiscoveryResult> {
        warn!("Discovery requested for {:?} but no API key is configured", topic);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_json_handles_fenced_and_plain_replies() {
        let fenced = "Sure!\n```json\n{\"narrative\": \"ok\", \"places\": []}\n```";
        let plain = "{\"places\": [{\"title\": \"Cafe\"}]}";

        let payload: DiscoveryPayload =
            serde_json::from_str(extract_json(fenced).unwrap()).unwrap();
        assert_eq!(payload.narrative.as_deref(), Some("ok"));
        assert!(payload.places.is_empty());

        let payload: DiscoveryPayload =
            serde_json::from_str(extract_json(plain).unwrap()).unwrap();
        assert_eq!(payload.places.len(), 1);
        assert_eq!(payload.places[0].title.as_deref(), Some("Cafe"));
        assert!(payload.places[0].link.is_none());

        assert!(extract_json("no json here").is_none());
    }

    #[tokio::test]
    async fn disabled_discovery_yields_nothing() {
        assert!(DisabledDiscovery.discover("Food").await.is_none());
    }
}
