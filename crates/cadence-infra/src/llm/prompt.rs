//! Prompt construction for the generation gateway.
//!
//! These strings are the contract with the provider: every prompt demands
//! a bare JSON object so `response_format: json_object` parses cleanly,
//! and the regeneration prompts pin the date/content-type slots the
//! reconciler will merge against.

use chrono::NaiveDate;

use cadence_core::domain::{BrandContext, BrandVoice, PostDraft};

/// System prompt for full-calendar generation.
pub const CALENDAR_SYSTEM: &str = "You are a social media content strategist specialized in \
    creating engaging TikTok content calendars. You always respond with valid JSON.";

/// System prompt for single-post and week regeneration.
pub const POST_SYSTEM: &str = "You are a social media content strategist specialized in \
    creating engaging TikTok content. You always respond with valid JSON.";

const CONTENT_TYPES: &str = "\"Educational\", \"Entertainment\", \"Behind the Scenes\", \
    \"Product Showcase\", \"Trending\", \"User Generated\", \"Testimonial\"";

fn audience_line(voice: &BrandVoice) -> String {
    match &voice.user_type {
        Some(user_type) => {
            format!("The brand is a {user_type}; tailor every idea to that kind of creator.\n")
        }
        None => String::new(),
    }
}

/// Full 4-week calendar: `frequency * 4` posts starting from `start`.
pub fn calendar_prompt(brand: &BrandContext, start: NaiveDate) -> String {
    let total = u32::from(brand.frequency) * 4;
    format!(
        "Create a 4-week TikTok content calendar for a brand with the following details:\n\
         \n\
         Brand Description: {description}\n\
         Tone: {tone}\n\
         Posting Frequency: {frequency} times per week\n\
         {audience}\
         \n\
         For each post, provide:\n\
         1. Suggested date (starting from today: {start}, and spanning the next 4 weeks)\n\
         2. Video idea (brief description)\n\
         3. Hook (first line spoken)\n\
         4. Caption\n\
         5. Suggested hashtags (5-7 relevant hashtags)\n\
         6. Content type (one of: {types})\n\
         \n\
         Format the response as a JSON object with the following structure:\n\
         {{\n\
         \x20 \"posts\": [\n\
         \x20   {{\n\
         \x20     \"date\": \"YYYY-MM-DD\",\n\
         \x20     \"videoIdea\": \"Brief description\",\n\
         \x20     \"hook\": \"First line spoken\",\n\
         \x20     \"caption\": \"Caption text\",\n\
         \x20     \"hashtags\": [\"tag1\", \"tag2\", \"tag3\", \"tag4\", \"tag5\"],\n\
         \x20     \"contentType\": \"Content type from the list above\"\n\
         \x20   }}\n\
         \x20 ]\n\
         }}\n\
         \n\
         Generate exactly {total} posts total, evenly distributed across the 4 weeks.\n\
         Make sure all dates are accurate starting from {start} and following a realistic \
         posting schedule.\n\
         \n\
         IMPORTANT: Return ONLY the JSON object with no additional text or explanations.",
        description = brand.voice.brand_description,
        tone = brand.voice.tone,
        frequency = brand.frequency,
        audience = audience_line(&brand.voice),
        start = start,
        types = CONTENT_TYPES,
        total = total,
    )
}

/// Single-post regeneration: same date and content type, fresh content.
pub fn post_prompt(post: &PostDraft, voice: &BrandVoice) -> String {
    let content_type = post.content_type.as_deref().unwrap_or("General");
    format!(
        "Regenerate a single TikTok post for the following brand:\n\
         \n\
         Brand Description: {description}\n\
         Tone: {tone}\n\
         {audience}\
         \n\
         The current post is:\n\
         Date: {date}\n\
         Video Idea: {video_idea}\n\
         Hook: {hook}\n\
         Caption: {caption}\n\
         Hashtags: {hashtags}\n\
         Content Type: {content_type}\n\
         \n\
         Create a new version of this post with the same content type but a fresh approach.\n\
         Keep the same date but create new video idea, hook, caption, and hashtags.\n\
         \n\
         Format the response as a JSON object with the following structure:\n\
         {{\n\
         \x20 \"date\": \"{date}\",\n\
         \x20 \"videoIdea\": \"New video idea\",\n\
         \x20 \"hook\": \"New hook\",\n\
         \x20 \"caption\": \"New caption\",\n\
         \x20 \"hashtags\": [\"tag1\", \"tag2\", \"tag3\", \"tag4\", \"tag5\"],\n\
         \x20 \"contentType\": \"{content_type}\"\n\
         }}\n\
         \n\
         IMPORTANT: Return ONLY the JSON object with no additional text or explanations.",
        description = voice.brand_description,
        tone = voice.tone,
        audience = audience_line(voice),
        date = post.date,
        video_idea = post.video_idea,
        hook = post.hook,
        caption = post.caption,
        hashtags = post.hashtags.join(" "),
        content_type = content_type,
    )
}

/// Week regeneration: one fresh post per submitted date/content-type
/// slot, in the submitted order.
pub fn week_prompt(week: &[PostDraft], voice: &BrandVoice) -> String {
    let slots = week
        .iter()
        .enumerate()
        .map(|(i, post)| {
            format!(
                "{}. Date: {}, Content Type: {}",
                i + 1,
                post.date,
                post.content_type.as_deref().unwrap_or("General"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Regenerate a week of TikTok posts for the following brand:\n\
         \n\
         Brand Description: {description}\n\
         Tone: {tone}\n\
         {audience}\
         \n\
         Create {count} new posts with fresh ideas, hooks, captions, and hashtags.\n\
         Use the following dates and content types:\n\
         {slots}\n\
         \n\
         Format the response as a JSON object with the following structure:\n\
         {{\n\
         \x20 \"posts\": [\n\
         \x20   {{\n\
         \x20     \"date\": \"YYYY-MM-DD\",\n\
         \x20     \"videoIdea\": \"New video idea\",\n\
         \x20     \"hook\": \"New hook\",\n\
         \x20     \"caption\": \"New caption\",\n\
         \x20     \"hashtags\": [\"tag1\", \"tag2\", \"tag3\", \"tag4\", \"tag5\"],\n\
         \x20     \"contentType\": \"Content type for that slot\"\n\
         \x20   }}\n\
         \x20 ]\n\
         }}\n\
         \n\
         IMPORTANT: Return ONLY the JSON object with no additional text or explanations.\n\
         Make sure to create exactly {count} posts, one for each date provided.",
        description = voice.brand_description,
        tone = voice.tone,
        audience = audience_line(voice),
        count = week.len(),
        slots = slots,
    )
}
