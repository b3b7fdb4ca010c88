//! Process-local store. Lives from startup to shutdown; nothing survives a
//! restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::models::mood::Mood;
use crate::models::post::{NewPost, Post, PostId};
use crate::models::user::{MoodEntry, UserMoodProfile};
use crate::services::streak::calculate_mood_streak;
use crate::store::Store;

#[derive(Default)]
struct Inner {
    /// Newest insert at index 0.
    posts: Vec<Post>,
    next_post_id: PostId,
    mood_history: HashMap<String, Vec<MoodEntry>>,
    profiles: HashMap<String, UserMoodProfile>,
}

impl Inner {
    fn new(seed: bool, now: DateTime<Utc>) -> Self {
        let posts = if seed { demo_posts(now) } else { Vec::new() };
        let next_post_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            posts,
            next_post_id,
            ..Default::default()
        }
    }

    fn count_posts_by(&self, author_id: &str) -> u64 {
        self.posts.iter().filter(|p| p.author_id == author_id).count() as u64
    }

    fn push_post(&mut self, new: NewPost) -> Post {
        let id = self.next_post_id;
        self.next_post_id += 1;
        let post = new.into_post(id);
        self.posts.insert(0, post.clone());
        post
    }
}

pub struct MemoryStore {
    #[cfg(test)]
    seed: bool,
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::build(false)
    }

    /// Start with the three demo posts.
    pub fn seeded() -> Self {
        Self::build(true)
    }

    fn build(seed: bool) -> Self {
        Self {
            #[cfg(test)]
            seed,
            inner: RwLock::new(Inner::new(seed, Utc::now())),
        }
    }

    /// Drop everything and return to the startup state.
    #[cfg(test)]
    pub async fn reset(&self) {
        let mut inner = self.inner.write().await;
        *inner = Inner::new(self.seed, Utc::now());
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_posts(&self) -> AppResult<Vec<Post>> {
        Ok(self.inner.read().await.posts.clone())
    }

    async fn get_post(&self, id: PostId) -> AppResult<Option<Post>> {
        let inner = self.inner.read().await;
        Ok(inner.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_post(&self, post: NewPost) -> AppResult<Post> {
        let mut inner = self.inner.write().await;
        Ok(inner.push_post(post))
    }

    async fn like_post(&self, id: PostId) -> AppResult<Option<Post>> {
        let mut inner = self.inner.write().await;
        Ok(inner.posts.iter_mut().find(|p| p.id == id).map(|post| {
            post.likes += 1;
            post.clone()
        }))
    }

    async fn remix_post(&self, origin_id: PostId, remix: NewPost) -> AppResult<Option<(Post, Post)>> {
        let mut inner = self.inner.write().await;

        let Some(origin) = inner.posts.iter_mut().find(|p| p.id == origin_id) else {
            return Ok(None);
        };
        origin.remixes += 1;
        let origin = origin.clone();

        let remix = inner.push_post(remix);
        Ok(Some((remix, origin)))
    }

    async fn record_mood(&self, entry: MoodEntry) -> AppResult<UserMoodProfile> {
        let mut inner = self.inner.write().await;
        let user_id = entry.user_id.clone();
        let (mood, at, today) = (entry.mood, entry.timestamp, entry.date);

        let history = inner.mood_history.entry(user_id.clone()).or_default();
        history.push(entry);
        let streak_days = calculate_mood_streak(history, today);

        let total_posts = inner.count_posts_by(&user_id);
        let profile = inner
            .profiles
            .entry(user_id.clone())
            .or_insert_with(|| UserMoodProfile {
                id: user_id,
                current_mood: mood,
                last_mood_update: at,
                streak_days,
                total_posts,
                created_at: at,
            });
        profile.current_mood = mood;
        profile.last_mood_update = at;
        profile.streak_days = streak_days;
        Ok(profile.clone())
    }

    async fn mood_history(&self, user_id: &str) -> AppResult<Option<Vec<MoodEntry>>> {
        Ok(self.inner.read().await.mood_history.get(user_id).cloned())
    }

    async fn get_profile(&self, user_id: &str) -> AppResult<Option<UserMoodProfile>> {
        Ok(self.inner.read().await.profiles.get(user_id).cloned())
    }

    async fn increment_post_count(&self, user_id: &str) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        if let Some(profile) = inner.profiles.get_mut(user_id) {
            profile.total_posts += 1;
        }
        Ok(())
    }
}

fn demo_posts(now: DateTime<Utc>) -> Vec<Post> {
    let seed = |id: PostId,
                author: &str,
                mood: Mood,
                content: &str,
                (likes, comments, remixes): (u64, u64, u64),
                hours_ago: i64,
                tags: [&str; 3]| Post {
        id,
        author: author.to_string(),
        author_id: format!("user_{}", author.to_lowercase()),
        mood,
        content: content.to_string(),
        video_url: format!("https://example.com/video{}.mp4", id),
        thumbnail: mood.emoji().to_string(),
        likes,
        comments,
        remixes,
        created_at: now - Duration::hours(hours_ago),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        original_post_id: None,
        is_remix: false,
    };

    vec![
        seed(
            1,
            "Alex",
            Mood::Creative,
            "Just made this trippy video about painting in zero gravity! 🎨✨",
            (23, 5, 2),
            2,
            ["creative", "art", "space"],
        ),
        seed(
            2,
            "Sam",
            Mood::Excited,
            "Dancing through the neon city streets! Energy is everything! ⚡",
            (45, 12, 8),
            4,
            ["excited", "dance", "city"],
        ),
        seed(
            3,
            "Maya",
            Mood::Calm,
            "Meditation by the virtual lake. Finding peace in digital spaces 🧘",
            (18, 3, 1),
            6,
            ["calm", "meditation", "nature"],
        ),
    ]
}
