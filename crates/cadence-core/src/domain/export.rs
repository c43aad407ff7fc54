//! Derived renderings of a calendar: CSV download, plain-text clipboard
//! copy, markdown share preview.

use chrono::NaiveDate;

use crate::domain::post::{Post, canonical_hashtag};
use crate::domain::schedule;

/// Quote a CSV field, doubling embedded double-quotes.
fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn hashtag_line(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| canonical_hashtag(tag))
        .collect::<Vec<_>>()
        .join(" ")
}

/// CSV rendering, one row per post. Dates are ISO and unquoted; text
/// fields are always quoted.
pub fn to_csv(posts: &[Post]) -> String {
    let mut lines = vec!["Date,Video Idea,Hook,Caption,Hashtags,Content Type".to_string()];
    for post in posts {
        lines.push(
            [
                post.date.to_string(),
                csv_quote(&post.video_idea),
                csv_quote(&post.hook),
                csv_quote(&post.caption),
                csv_quote(&hashtag_line(&post.hashtags)),
                csv_quote(post.content_type.as_deref().unwrap_or("")),
            ]
            .join(","),
        );
    }
    lines.join("\n")
}

/// Plain-text rendering: labeled lines per post, posts separated by a
/// `---` rule.
pub fn to_plain_text(posts: &[Post]) -> String {
    posts
        .iter()
        .map(|post| {
            format!(
                "Date: {}\nVideo Idea: {}\nHook: {}\nCaption: {}\nHashtags: {}",
                post.date,
                post.video_idea,
                post.hook,
                post.caption,
                hashtag_line(&post.hashtags),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

/// Markdown rendering, sectioned by week bucket relative to `today`.
pub fn to_markdown(posts: &[Post], today: NaiveDate) -> String {
    let mut out = String::from("# Content Calendar\n");
    for (index, bucket) in schedule::bucket_by_week(posts, today).iter().enumerate() {
        out.push_str(&format!("\n## Week {}\n\n", index + 1));
        for post in &bucket.posts {
            out.push_str(&format!(
                "- **{}** {} ({})\n  - Hook: {}\n  - Caption: {}\n  - Hashtags: {}\n",
                post.date,
                post.video_idea,
                post.content_type.as_deref().unwrap_or("General"),
                post.hook,
                post.caption,
                hashtag_line(&post.hashtags),
            ));
        }
    }
    out
}
