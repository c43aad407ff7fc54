//! Merging regenerated content back into the full ordered post list.
//!
//! The gateway never sees identity tokens. Callers submit identity-free
//! drafts, hold the id list for the submitted slots, and re-attach ids
//! positionally against the submitted order before any matching. Merges
//! then go by id, so entries outside the request are never disturbed.

use std::collections::HashMap;

use crate::domain::post::{Post, PostDraft, PostId};

/// Re-attach caller-held ids to gateway drafts, positionally against the
/// originally submitted order.
///
/// Pairs up to the shorter of the two lists: a gateway that returns too
/// few posts produces a short replacement list (the unmatched tail of the
/// calendar stays untouched on merge) and surplus returned posts are
/// dropped. The caller logs the count mismatch.
pub fn attach_ids(ids: &[PostId], drafts: Vec<PostDraft>) -> Vec<Post> {
    ids.iter()
        .cloned()
        .zip(drafts)
        .map(|(id, draft)| Post::from_draft(id, draft))
        .collect()
}

/// Replace the single entry whose id matches `replacement`.
///
/// Every other entry keeps its value and position; the length is
/// invariant. An unknown id returns the sequence unchanged.
pub fn merge_post(posts: &[Post], replacement: &Post) -> Vec<Post> {
    posts
        .iter()
        .map(|post| {
            if post.id == replacement.id {
                replacement.clone()
            } else {
                post.clone()
            }
        })
        .collect()
}

/// Replace every entry whose id appears in `replacements`.
///
/// Entries with no corresponding replacement keep their original position
/// and value, which makes the merge best-effort under a short or
/// reordered gateway return.
pub fn merge_week(posts: &[Post], replacements: &[Post]) -> Vec<Post> {
    let by_id: HashMap<&PostId, &Post> = replacements.iter().map(|r| (&r.id, r)).collect();
    posts
        .iter()
        .map(|post| match by_id.get(&post.id) {
            Some(replacement) => (*replacement).clone(),
            None => post.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    fn post(id: &str, idea: &str) -> Post {
        Post {
            id: PostId::from(id),
            date: date(2),
            video_idea: idea.to_string(),
            hook: "hook".to_string(),
            caption: "caption".to_string(),
            hashtags: vec!["tag".to_string()],
            content_type: Some("Educational".to_string()),
        }
    }

    fn draft(idea: &str) -> PostDraft {
        PostDraft {
            date: date(2),
            video_idea: idea.to_string(),
            hook: "new hook".to_string(),
            caption: "new caption".to_string(),
            hashtags: vec!["new".to_string()],
            content_type: Some("Educational".to_string()),
        }
    }

    #[test]
    fn merge_post_replaces_only_the_matching_entry() {
        let posts = vec![post("a", "one"), post("b", "two"), post("c", "three")];
        let merged = merge_post(&posts, &post("b", "fresh"));

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0], posts[0]);
        assert_eq!(merged[1].video_idea, "fresh");
        assert_eq!(merged[2], posts[2]);
    }

    #[test]
    fn merge_post_with_unknown_id_changes_nothing() {
        let posts = vec![post("a", "one"), post("b", "two")];
        assert_eq!(merge_post(&posts, &post("zzz", "fresh")), posts);
    }

    #[test]
    fn attach_ids_is_positional_against_submitted_order() {
        let ids = vec![PostId::from("a"), PostId::from("b"), PostId::from("c")];
        let replacements = attach_ids(&ids, vec![draft("r1"), draft("r2"), draft("r3")]);

        assert_eq!(replacements.len(), 3);
        assert_eq!(replacements[0].id, PostId::from("a"));
        assert_eq!(replacements[0].video_idea, "r1");
        assert_eq!(replacements[2].id, PostId::from("c"));
        assert_eq!(replacements[2].video_idea, "r3");
    }

    #[test]
    fn attach_ids_pairs_the_shorter_side() {
        let ids = vec![PostId::from("a"), PostId::from("b"), PostId::from("c")];

        let short = attach_ids(&ids, vec![draft("r1"), draft("r2")]);
        assert_eq!(short.len(), 2);
        assert_eq!(short[1].id, PostId::from("b"));

        let surplus = attach_ids(&ids[..1], vec![draft("r1"), draft("r2")]);
        assert_eq!(surplus.len(), 1);
        assert_eq!(surplus[0].video_idea, "r1");
    }

    #[test]
    fn merge_week_updates_exactly_the_submitted_ids() {
        // Three-post week in the middle of a larger calendar.
        let posts = vec![
            post("p1", "keep"),
            post("p2", "old"),
            post("p3", "old"),
            post("p4", "old"),
            post("p5", "keep"),
        ];
        let ids = vec![PostId::from("p2"), PostId::from("p3"), PostId::from("p4")];
        let replacements = attach_ids(&ids, vec![draft("n2"), draft("n3"), draft("n4")]);

        let merged = merge_week(&posts, &replacements);
        assert_eq!(merged.len(), 5);
        assert_eq!(merged[0], posts[0]);
        assert_eq!(merged[1].video_idea, "n2");
        assert_eq!(merged[2].video_idea, "n3");
        assert_eq!(merged[3].video_idea, "n4");
        assert_eq!(merged[4], posts[4]);
    }

    #[test]
    fn short_gateway_return_leaves_the_unmatched_tail_unchanged() {
        let posts = vec![post("a", "old"), post("b", "old"), post("c", "old")];
        let ids: Vec<PostId> = posts.iter().map(|p| p.id.clone()).collect();

        // Gateway violated its contract and returned 2 posts for 3 slots.
        let replacements = attach_ids(&ids, vec![draft("n1"), draft("n2")]);
        let merged = merge_week(&posts, &replacements);

        assert_eq!(merged[0].video_idea, "n1");
        assert_eq!(merged[1].video_idea, "n2");
        assert_eq!(merged[2], posts[2]);
    }

    #[test]
    fn replacement_order_does_not_affect_merge_positions() {
        // Ids were attached against the submitted order; shuffling the
        // replacement list afterwards must not move entries around.
        let posts = vec![post("a", "old"), post("b", "old"), post("c", "old")];
        let ids: Vec<PostId> = posts.iter().map(|p| p.id.clone()).collect();
        let mut replacements = attach_ids(&ids, vec![draft("na"), draft("nb"), draft("nc")]);
        replacements.reverse();

        let merged = merge_week(&posts, &replacements);
        assert_eq!(merged[0].video_idea, "na");
        assert_eq!(merged[1].video_idea, "nb");
        assert_eq!(merged[2].video_idea, "nc");
    }
}
