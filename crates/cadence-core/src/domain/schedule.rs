//! Week bucketing for tabbed display.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::post::Post;

/// A maximal contiguous run of posts sharing a computed week offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBucket {
    /// Whole weeks between the bucket's posts and `today`; negative for
    /// past dates.
    pub offset: i64,
    pub posts: Vec<Post>,
}

/// Offset in whole weeks from `today` to `date`, rounded toward negative
/// infinity so that yesterday already counts as week -1.
pub fn week_offset(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days().div_euclid(7)
}

/// Partition posts into week buckets relative to `today`.
///
/// Posts are scanned in input order and a bucket ends at every offset
/// transition, so two non-adjacent runs with the same offset stay
/// separate buckets. Concatenating the buckets reproduces the input
/// exactly. Empty input yields no buckets.
///
/// Callers pass the wall-clock date at render time, so the same calendar
/// can bucket differently on different days. That is intended.
pub fn bucket_by_week(posts: &[Post], today: NaiveDate) -> Vec<WeekBucket> {
    let mut buckets: Vec<WeekBucket> = Vec::new();
    for post in posts {
        let offset = week_offset(post.date, today);
        match buckets.last_mut() {
            Some(bucket) if bucket.offset == offset => bucket.posts.push(post.clone()),
            _ => buckets.push(WeekBucket {
                offset,
                posts: vec![post.clone()],
            }),
        }
    }
    buckets
}
