use async_trait::async_trait;

use crate::domain::{BrandContext, BrandVoice, PostDraft};
use crate::error::GatewayError;

/// Generation gateway: turns brand context into calendar content.
///
/// Implementations never see post ids. They consume and produce
/// identity-free drafts; identity is held by the caller and re-attached
/// through `domain::attach_ids` before merging.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate a full calendar: `frequency * 4` posts spanning four
    /// weeks from today, dates non-decreasing.
    async fn generate_calendar(&self, brand: &BrandContext)
    -> Result<Vec<PostDraft>, GatewayError>;

    /// Regenerate one post's content, keeping its date and content type.
    async fn regenerate_post(
        &self,
        post: &PostDraft,
        voice: &BrandVoice,
    ) -> Result<PostDraft, GatewayError>;

    /// Regenerate a week of posts against the submitted date/content-type
    /// slots, one returned post per slot, in submitted order.
    async fn regenerate_week(
        &self,
        week: &[PostDraft],
        voice: &BrandVoice,
    ) -> Result<Vec<PostDraft>, GatewayError>;
}
