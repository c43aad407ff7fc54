use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use cadence_core::domain::{BrandContext, BrandVoice, PostDraft};
use cadence_core::error::GatewayError;
use cadence_core::ports::ContentGenerator;

use crate::llm::prompt;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4-turbo";

const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Chat-completions client for OpenAI-compatible providers.
///
/// One request per operation, no retries; whatever timeout the transport
/// defaults to is inherited.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// `{"posts": [...]}` payload the calendar and week prompts ask for.
#[derive(Debug, Deserialize)]
struct PostsPayload {
    posts: Vec<PostDraft>,
}

impl OpenAiGenerator {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_url: api_url.into(),
            model: model.into(),
        }
    }

    /// Send one completion and return the raw message content.
    #[instrument(skip(self, system, user), fields(model = %self.model))]
    async fn complete(
        &self,
        system: &'static str,
        user: String,
        temperature: Option<f32>,
    ) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: temperature.unwrap_or(DEFAULT_TEMPERATURE),
        };

        debug!("Sending chat completion request");
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to reach completion endpoint");
                GatewayError::Http(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            error!(status, body = %message, "Provider returned an error");
            return Err(GatewayError::Api { status, message });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(format!("malformed completion envelope: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GatewayError::Empty)
    }

    fn parse_posts(content: &str) -> Result<Vec<PostDraft>, GatewayError> {
        let payload: PostsPayload = serde_json::from_str(content)
            .map_err(|e| GatewayError::Parse(format!("expected {{\"posts\": [...]}}: {e}")))?;
        Ok(payload.posts)
    }

    fn parse_post(content: &str) -> Result<PostDraft, GatewayError> {
        serde_json::from_str(content)
            .map_err(|e| GatewayError::Parse(format!("expected a post object: {e}")))
    }
}

#[async_trait]
impl ContentGenerator for OpenAiGenerator {
    #[instrument(skip_all, fields(frequency = brand.frequency))]
    async fn generate_calendar(
        &self,
        brand: &BrandContext,
    ) -> Result<Vec<PostDraft>, GatewayError> {
        let today = chrono::Utc::now().date_naive();
        let user = prompt::calendar_prompt(brand, today);
        let content = self
            .complete(prompt::CALENDAR_SYSTEM, user, brand.voice.temperature)
            .await?;
        Self::parse_posts(&content)
    }

    #[instrument(skip_all, fields(date = %post.date))]
    async fn regenerate_post(
        &self,
        post: &PostDraft,
        voice: &BrandVoice,
    ) -> Result<PostDraft, GatewayError> {
        let user = prompt::post_prompt(post, voice);
        let content = self
            .complete(prompt::POST_SYSTEM, user, voice.temperature)
            .await?;
        Self::parse_post(&content)
    }

    #[instrument(skip_all, fields(slots = week.len()))]
    async fn regenerate_week(
        &self,
        week: &[PostDraft],
        voice: &BrandVoice,
    ) -> Result<Vec<PostDraft>, GatewayError> {
        let user = prompt::week_prompt(week, voice);
        let content = self
            .complete(prompt::POST_SYSTEM, user, voice.temperature)
            .await?;
        Self::parse_posts(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST_JSON: &str = r#"{
        "date": "2025-06-09",
        "videoIdea": "Studio tour",
        "hook": "Ever wondered where the magic happens?",
        "caption": "Come on in.",
        "hashtags": ["studio", "bts"],
        "contentType": "Behind the Scenes"
    }"#;

    #[test]
    fn parses_a_single_post_payload() {
        let draft = OpenAiGenerator::parse_post(POST_JSON).unwrap();
        assert_eq!(draft.video_idea, "Studio tour");
        assert_eq!(draft.date.to_string(), "2025-06-09");
        assert_eq!(draft.hashtags.len(), 2);
    }

    #[test]
    fn parses_a_posts_payload() {
        let content = format!(r#"{{"posts": [{POST_JSON}, {POST_JSON}]}}"#);
        let drafts = OpenAiGenerator::parse_posts(&content).unwrap();
        assert_eq!(drafts.len(), 2);
    }

    #[test]
    fn rejects_prose_around_the_payload() {
        let content = format!("Here is your calendar:\n{POST_JSON}");
        assert!(matches!(
            OpenAiGenerator::parse_post(&content),
            Err(GatewayError::Parse(_))
        ));
    }

    #[test]
    fn content_type_is_optional_on_the_wire() {
        let content = r#"{"date":"2025-06-09","videoIdea":"x","hook":"y","caption":"z","hashtags":["a"]}"#;
        let draft = OpenAiGenerator::parse_post(content).unwrap();
        assert!(draft.content_type.is_none());
    }
}
