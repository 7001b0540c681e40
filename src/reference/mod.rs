//! Static Reference Content
//!
//! Fixed tables shown by the UI around the estimator. None of this is
//! loaded from or written to storage.
//!
//! - `history.rs` - mock prediction history and its summary stats
//! - `community.rs` - forum posts, helplines, community stats
//! - `languages.rs` - language picker entries

pub mod history;
pub mod community;
pub mod languages;

pub use history::{prediction_history, HistoryRecord, HistoryStatus, HistorySummary};
pub use community::{community_stats, forum_posts, helplines, CommunityStat, ForumPost, Helpline};
pub use languages::{find_language, languages, Language};
