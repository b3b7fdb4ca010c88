use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::post::{NewPost, Post, PostId};
use crate::models::user::{MoodEntry, UserMoodProfile};

pub mod memory;

pub use memory::MemoryStore;

/// Persistence boundary for posts and mood data.
///
/// Multi-step mutations that must not interleave (likes, remixes) are single
/// calls so an implementation can make them atomic.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// All posts, most recently inserted first.
    async fn list_posts(&self) -> AppResult<Vec<Post>>;

    async fn get_post(&self, id: PostId) -> AppResult<Option<Post>>;

    /// Assign the next id and store the post.
    async fn insert_post(&self, post: NewPost) -> AppResult<Post>;

    /// Increment `likes`; `None` when the post does not exist.
    async fn like_post(&self, id: PostId) -> AppResult<Option<Post>>;

    /// Store `remix` and bump the origin's remix counter. Returns
    /// `(remix, updated_origin)`, or `None` when the origin does not exist.
    async fn remix_post(&self, origin_id: PostId, remix: NewPost) -> AppResult<Option<(Post, Post)>>;

    /// Append `entry` to the user's log and refresh their profile from the
    /// whole log in one step. A new profile starts with the author's existing
    /// post count.
    async fn record_mood(&self, entry: MoodEntry) -> AppResult<UserMoodProfile>;

    /// `None` when the user has never logged a mood.
    async fn mood_history(&self, user_id: &str) -> AppResult<Option<Vec<MoodEntry>>>;

    async fn get_profile(&self, user_id: &str) -> AppResult<Option<UserMoodProfile>>;

    /// Bump `total_posts` on an existing profile. No-op for unknown users.
    async fn increment_post_count(&self, user_id: &str) -> AppResult<()>;
}
