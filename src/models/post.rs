use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::mood::Mood;

pub type PostId = u64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub author: String,
    pub author_id: String,
    pub mood: Mood,
    pub content: String,
    pub video_url: String,
    pub thumbnail: String,
    pub likes: u64,
    pub comments: u64,
    pub remixes: u64,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_post_id: Option<PostId>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_remix: bool,
}

/// A post before the store has assigned its id.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author: String,
    pub author_id: String,
    pub mood: Mood,
    pub content: String,
    /// Falls back to a placeholder derived from the assigned id.
    pub video_url: Option<String>,
    pub thumbnail: String,
    pub tags: Vec<String>,
    pub original_post_id: Option<PostId>,
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    pub fn into_post(self, id: PostId) -> Post {
        let is_remix = self.original_post_id.is_some();
        let video_url = self.video_url.unwrap_or_else(|| {
            if is_remix {
                format!("https://example.com/remix{}.mp4", id)
            } else {
                format!("https://example.com/video{}.mp4", id)
            }
        });

        Post {
            id,
            author: self.author,
            author_id: self.author_id,
            mood: self.mood,
            content: self.content,
            video_url,
            thumbnail: self.thumbnail,
            likes: 0,
            comments: 0,
            remixes: 0,
            created_at: self.created_at,
            tags: self.tags,
            original_post_id: self.original_post_id,
            is_remix,
        }
    }
}

/// A post as returned to clients: the stored fields plus read-time extras.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    #[serde(flatten)]
    pub post: Post,
    pub time_ago: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trending_score: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedFilter {
    #[default]
    Mood,
    Trending,
    Friends,
    #[serde(other)]
    All,
}

impl FeedFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedFilter::Mood => "mood",
            FeedFilter::Trending => "trending",
            FeedFilter::Friends => "friends",
            FeedFilter::All => "all",
        }
    }
}

// ── Requests ─────────────────────────────────────────────────────────────────

/// GET /api/posts/feed
#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub mood: Option<String>,
    #[serde(default)]
    pub filter: FeedFilter,
    pub limit: Option<usize>,
}

/// GET /api/posts/trending
#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    pub limit: Option<usize>,
}

/// POST /api/posts
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(length(max = 2000, message = "Content must be under 2000 characters"))]
    pub content: Option<String>,
    pub mood: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Author must be 1-100 characters"))]
    pub author: Option<String>,
    pub author_id: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// POST /api/posts/:id/like
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub user_id: Option<String>,
}

/// POST /api/posts/:id/remix
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RemixRequest {
    pub user_id: Option<String>,
    #[validate(length(max = 2000, message = "Content must be under 2000 characters"))]
    pub new_content: Option<String>,
    pub new_mood: Option<String>,
    pub author: Option<String>,
}

// ── Responses ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub posts: Vec<PostView>,
    pub total: usize,
    pub filter: FeedFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct TrendingResponse {
    pub posts: Vec<PostView>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub success: bool,
    pub post: PostView,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub success: bool,
    pub likes: u64,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixResponse {
    pub success: bool,
    pub remix: PostView,
    pub original_post: PostView,
    pub message: String,
}
