//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use cadence_core::domain::{Post, WeekBucket};

/// Request to generate a full 4-week calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCalendarRequest {
    pub brand_description: String,
    pub tone: String,
    /// Posts per week, 1 through 7.
    pub frequency: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Request to regenerate one post. The post travels with its id; the
/// server strips the id before the gateway call and re-attaches it to
/// the regenerated content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegeneratePostRequest {
    pub post: Post,
    pub brand_description: String,
    pub tone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Request to regenerate one week's posts. Ids are re-attached
/// positionally against the order of `week_posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateWeekRequest {
    pub week_posts: Vec<Post>,
    pub brand_description: String,
    pub tone: String,
    pub frequency: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Response carrying a full post list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub posts: Vec<Post>,
}

/// Response carrying a single regenerated post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub post: Post,
}

/// Bucketed week view of the held calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeksResponse {
    pub weeks: Vec<WeekBucket>,
}
