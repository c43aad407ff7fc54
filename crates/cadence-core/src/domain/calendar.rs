use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::post::{FieldEdit, Post, PostDraft, PostId};
use crate::domain::reconcile;
use crate::domain::schedule::{self, WeekBucket};
use crate::error::DomainError;

/// The brand voice a regeneration is written in: everything the gateway
/// needs except the posting cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandVoice {
    pub brand_description: String,
    pub tone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Full brand context for calendar generation: voice plus posting
/// frequency (posts per week).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandContext {
    #[serde(flatten)]
    pub voice: BrandVoice,
    pub frequency: u8,
}

/// An ordered set of posts plus the brand context that produced them.
///
/// Serializes to the snapshot record
/// `{posts, brandDescription, tone, frequency, userType}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    pub posts: Vec<Post>,
    #[serde(flatten)]
    pub brand: BrandContext,
}

impl Calendar {
    /// Build a calendar from gateway drafts, assigning each post a fresh
    /// id in input order. This is the only place ids are assigned.
    pub fn from_drafts(brand: BrandContext, drafts: Vec<PostDraft>) -> Self {
        let posts = drafts
            .into_iter()
            .map(|draft| Post::from_draft(PostId::fresh(), draft))
            .collect();
        Self { posts, brand }
    }

    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|post| &post.id == id)
    }

    /// Apply a typed edit to the post with the given id.
    pub fn edit_post(&mut self, id: &PostId, edit: FieldEdit) -> Result<&Post, DomainError> {
        let post = self
            .posts
            .iter_mut()
            .find(|post| &post.id == id)
            .ok_or_else(|| DomainError::UnknownPost { id: id.clone() })?;
        post.apply(edit);
        Ok(post)
    }

    /// Replace the single id-matching post. Returns false (and leaves the
    /// calendar unchanged) when the id is not present.
    pub fn merge_post(&mut self, replacement: &Post) -> bool {
        if self.get(&replacement.id).is_none() {
            return false;
        }
        self.posts = reconcile::merge_post(&self.posts, replacement);
        true
    }

    /// Merge a week's replacements by id, best-effort. Returns how many
    /// entries were replaced.
    pub fn merge_week(&mut self, replacements: &[Post]) -> usize {
        let matched = replacements
            .iter()
            .filter(|replacement| self.get(&replacement.id).is_some())
            .count();
        self.posts = reconcile::merge_week(&self.posts, replacements);
        matched
    }

    /// Week buckets relative to `today`.
    pub fn weeks(&self, today: NaiveDate) -> Vec<WeekBucket> {
        schedule::bucket_by_week(&self.posts, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn brand() -> BrandContext {
        BrandContext {
            voice: BrandVoice {
                brand_description: "Handmade ceramics studio".to_string(),
                tone: "Casual".to_string(),
                user_type: Some("Small Business".to_string()),
                temperature: None,
            },
            frequency: 3,
        }
    }

    fn drafts(count: usize) -> Vec<PostDraft> {
        (0..count)
            .map(|i| PostDraft {
                date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
                    + chrono::Duration::days(i as i64 * 2),
                video_idea: format!("idea {i}"),
                hook: "hook".to_string(),
                caption: "caption".to_string(),
                hashtags: vec!["ceramics".to_string()],
                content_type: Some("Educational".to_string()),
            })
            .collect()
    }

    #[test]
    fn from_drafts_assigns_distinct_nonempty_ids_in_order() {
        let calendar = Calendar::from_drafts(brand(), drafts(12));
        assert_eq!(calendar.posts.len(), 12);

        let ids: HashSet<&str> = calendar.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 12);
        assert!(ids.iter().all(|id| !id.is_empty()));

        // Content order is preserved through assignment.
        assert_eq!(calendar.posts[0].video_idea, "idea 0");
        assert_eq!(calendar.posts[11].video_idea, "idea 11");
    }

    #[test]
    fn successive_calendars_never_share_ids() {
        let first = Calendar::from_drafts(brand(), drafts(6));
        let second = Calendar::from_drafts(brand(), drafts(6));

        let first_ids: HashSet<&str> = first.posts.iter().map(|p| p.id.as_str()).collect();
        assert!(
            second
                .posts
                .iter()
                .all(|p| !first_ids.contains(p.id.as_str()))
        );
    }

    #[test]
    fn edit_post_rewrites_one_field_of_one_post() {
        let mut calendar = Calendar::from_drafts(brand(), drafts(3));
        let id = calendar.posts[1].id.clone();

        let edited = calendar
            .edit_post(&id, FieldEdit::Caption("Rewritten".to_string()))
            .unwrap();
        assert_eq!(edited.caption, "Rewritten");
        assert_eq!(calendar.posts[0].caption, "caption");
        assert_eq!(calendar.posts[2].caption, "caption");
    }

    #[test]
    fn edit_post_with_unknown_id_errors() {
        let mut calendar = Calendar::from_drafts(brand(), drafts(2));
        let missing = PostId::from("not-there");
        assert!(matches!(
            calendar.edit_post(&missing, FieldEdit::Hook("x".to_string())),
            Err(DomainError::UnknownPost { .. })
        ));
    }

    #[test]
    fn merge_post_reports_membership() {
        let mut calendar = Calendar::from_drafts(brand(), drafts(3));
        let mut replacement = calendar.posts[2].clone();
        replacement.video_idea = "fresh".to_string();

        assert!(calendar.merge_post(&replacement));
        assert_eq!(calendar.posts[2].video_idea, "fresh");

        let mut stranger = replacement.clone();
        stranger.id = PostId::from("elsewhere");
        let before = calendar.posts.clone();
        assert!(!calendar.merge_post(&stranger));
        assert_eq!(calendar.posts, before);
    }

    #[test]
    fn snapshot_shape_is_flat() {
        let calendar = Calendar::from_drafts(brand(), drafts(1));
        let value = serde_json::to_value(&calendar).unwrap();

        assert!(value["posts"].is_array());
        assert_eq!(value["brandDescription"], "Handmade ceramics studio");
        assert_eq!(value["tone"], "Casual");
        assert_eq!(value["frequency"], 3);
        assert_eq!(value["userType"], "Small Business");

        let restored: Calendar = serde_json::from_value(value).unwrap();
        assert_eq!(restored.posts, calendar.posts);
        assert_eq!(restored.brand.frequency, 3);
    }
}
