//! Domain entities and the calendar logic built on them.

mod calendar;
mod export;
mod post;
mod reconcile;
mod schedule;

pub use calendar::{BrandContext, BrandVoice, Calendar};
pub use export::{to_csv, to_markdown, to_plain_text};
pub use post::{FieldEdit, Post, PostDraft, PostId, canonical_hashtag};
pub use reconcile::{attach_ids, merge_post, merge_week};
pub use schedule::{WeekBucket, bucket_by_week, week_offset};
