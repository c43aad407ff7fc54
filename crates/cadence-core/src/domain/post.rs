use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity token for a post, unique within a calendar.
///
/// Assigned once when a calendar is built from gateway drafts and never
/// reassigned. The generation gateway neither sees nor produces ids; the
/// caller holds them and re-attaches them to regenerated content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Mint a fresh token. UUIDv4, so tokens are never reused within the
    /// process lifetime.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// The identity-free shape the generation gateway consumes and produces.
///
/// Field names match the JSON the provider is prompted to emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub date: NaiveDate,
    pub video_idea: String,
    pub hook: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// One planned content item: identity, schedule date, editable content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub date: NaiveDate,
    pub video_idea: String,
    pub hook: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl Post {
    /// Attach an identity to gateway content.
    pub fn from_draft(id: PostId, draft: PostDraft) -> Self {
        Self {
            id,
            date: draft.date,
            video_idea: draft.video_idea,
            hook: draft.hook,
            caption: draft.caption,
            hashtags: draft.hashtags,
            content_type: draft.content_type,
        }
    }

    /// Strip identity for resubmission to the gateway.
    pub fn draft(&self) -> PostDraft {
        PostDraft {
            date: self.date,
            video_idea: self.video_idea.clone(),
            hook: self.hook.clone(),
            caption: self.caption.clone(),
            hashtags: self.hashtags.clone(),
            content_type: self.content_type.clone(),
        }
    }

    /// Apply a typed field edit in place.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::VideoIdea(value) => self.video_idea = value,
            FieldEdit::Hook(value) => self.hook = value,
            FieldEdit::Caption(value) => self.caption = value,
            FieldEdit::Hashtags(value) => self.hashtags = value,
        }
    }
}

/// A typed edit to one editable post field.
///
/// Externally tagged, so the wire form is `{"hook": "new hook"}`. An
/// unknown field name fails to deserialize instead of writing nowhere.
/// Editing may leave `hashtags` empty; nothing enforces otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldEdit {
    VideoIdea(String),
    Hook(String),
    Caption(String),
    Hashtags(Vec<String>),
}

/// Render form of a hashtag: exactly one leading `#`, however the tag was
/// stored. Stored values are never rewritten.
pub fn canonical_hashtag(tag: &str) -> String {
    if tag.starts_with('#') {
        tag.to_string()
    } else {
        format!("#{tag}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            video_idea: "Day in the life".to_string(),
            hook: "You won't believe this".to_string(),
            caption: "Behind the counter".to_string(),
            hashtags: vec!["smallbusiness".to_string(), "#fyp".to_string()],
            content_type: Some("Behind the Scenes".to_string()),
        }
    }

    #[test]
    fn draft_round_trip_preserves_content_and_strips_id() {
        let post = Post::from_draft(PostId::fresh(), draft());
        assert_eq!(post.draft(), draft());
    }

    #[test]
    fn apply_edits_each_field() {
        let mut post = Post::from_draft(PostId::fresh(), draft());

        post.apply(FieldEdit::Hook("New hook".to_string()));
        assert_eq!(post.hook, "New hook");

        post.apply(FieldEdit::Caption("New caption".to_string()));
        assert_eq!(post.caption, "New caption");

        post.apply(FieldEdit::VideoIdea("New idea".to_string()));
        assert_eq!(post.video_idea, "New idea");

        // The edit path may empty the hashtag list.
        post.apply(FieldEdit::Hashtags(vec![]));
        assert!(post.hashtags.is_empty());
    }

    #[test]
    fn field_edit_rejects_unknown_fields() {
        assert!(serde_json::from_str::<FieldEdit>(r#"{"hook": "ok"}"#).is_ok());
        assert!(serde_json::from_str::<FieldEdit>(r#"{"date": "2025-06-02"}"#).is_err());
        assert!(serde_json::from_str::<FieldEdit>(r#"{"id": "nope"}"#).is_err());
    }

    #[test]
    fn post_serializes_camel_case() {
        let post = Post::from_draft(PostId::from("p1"), draft());
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["id"], "p1");
        assert_eq!(value["videoIdea"], "Day in the life");
        assert_eq!(value["contentType"], "Behind the Scenes");
    }

    #[test]
    fn canonical_hashtag_adds_marker_once() {
        assert_eq!(canonical_hashtag("fyp"), "#fyp");
        assert_eq!(canonical_hashtag("#fyp"), "#fyp");
    }
}
