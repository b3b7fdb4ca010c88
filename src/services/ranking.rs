//! Feed ranking: mood affinity, decayed trending score, ordering and
//! relative-time labels. Everything here is a pure function of the post
//! collection and the query instant.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::models::mood::Mood;
use crate::models::post::{FeedFilter, Post, PostView};

/// Score lost per hour of age, relative to the raw engagement.
pub const TRENDING_DECAY_PER_HOUR: f64 = 0.1;

/// What a feed request asks for, resolved against config.
#[derive(Debug, Clone, Copy)]
pub struct FeedRequest<'a> {
    pub filter: FeedFilter,
    pub mood: Option<Mood>,
    pub friend_ids: &'a [String],
    pub limit: usize,
}

/// Weighted engagement: likes + 2·comments + 3·remixes.
pub fn engagement(post: &Post) -> f64 {
    post.likes as f64 + 2.0 * post.comments as f64 + 3.0 * post.remixes as f64
}

/// Hours since creation. Posts stamped in the future count as brand new.
pub fn age_hours(post: &Post, now: DateTime<Utc>) -> f64 {
    let millis = (now - post.created_at).num_milliseconds().max(0);
    millis as f64 / 3_600_000.0
}

pub fn trending_score(post: &Post, now: DateTime<Utc>) -> f64 {
    engagement(post) / (1.0 + age_hours(post, now) * TRENDING_DECAY_PER_HOUR)
}

/// Rank every post by trending score, highest first. The sort is stable so
/// equal scores keep their incoming order.
pub fn rank_trending(posts: Vec<Post>, now: DateTime<Utc>, limit: usize) -> Vec<PostView> {
    let mut scored: Vec<(f64, Post)> = posts
        .into_iter()
        .map(|p| (trending_score(&p, now), p))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    scored
        .into_iter()
        .take(limit)
        .map(|(score, post)| PostView {
            time_ago: time_ago(post.created_at, now),
            post,
            trending_score: Some(score),
        })
        .collect()
}

/// Build a feed view: filter, order, then truncate.
pub fn rank_feed(posts: Vec<Post>, req: &FeedRequest<'_>, now: DateTime<Utc>) -> Vec<PostView> {
    let filtered: Vec<Post> = match (req.filter, req.mood) {
        (FeedFilter::Mood, Some(mood)) => posts
            .into_iter()
            .filter(|p| mood.is_compatible_with(p.mood))
            .collect(),
        (FeedFilter::Friends, _) => posts
            .into_iter()
            .filter(|p| req.friend_ids.iter().any(|id| *id == p.author_id))
            .collect(),
        _ => posts,
    };

    if req.filter == FeedFilter::Trending {
        return rank_trending(filtered, now, req.limit);
    }

    let mut ordered = filtered;
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    ordered
        .into_iter()
        .take(req.limit)
        .map(|post| PostView {
            time_ago: time_ago(post.created_at, now),
            post,
            trending_score: None,
        })
        .collect()
}

/// Human-readable age: "Just now", "5m ago", "3h ago", "2d ago".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now - then;
    let minutes = diff.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = diff.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", diff.num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn post(id: u64, mood: Mood, likes: u64, comments: u64, remixes: u64, age_h: i64, now: DateTime<Utc>) -> Post {
        Post {
            id,
            author: format!("author{id}"),
            author_id: format!("user_{id}"),
            mood,
            content: format!("post {id}"),
            video_url: format!("https://example.com/video{id}.mp4"),
            thumbnail: mood.emoji().into(),
            likes,
            comments,
            remixes,
            created_at: now - Duration::hours(age_h),
            tags: vec![],
            original_post_id: None,
            is_remix: false,
        }
    }

    fn request(filter: FeedFilter, mood: Option<Mood>, limit: usize) -> FeedRequest<'static> {
        FeedRequest {
            filter,
            mood,
            friend_ids: &[],
            limit,
        }
    }

    #[test]
    fn test_trending_score_formula() {
        let now = Utc::now();
        let p = post(1, Mood::Calm, 10, 5, 2, 10, now);
        // (10 + 10 + 6) / (1 + 10 * 0.1) = 13
        assert!((trending_score(&p, now) - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_trending_score_decays_with_age() {
        let now = Utc::now();
        let mut previous = f64::INFINITY;
        for age in [0, 1, 2, 6, 24, 72] {
            let score = trending_score(&post(1, Mood::Happy, 20, 3, 1, age, now), now);
            assert!(score < previous, "score at {age}h should drop, got {score} after {previous}");
            previous = score;
        }
    }

    #[test]
    fn test_trending_output_is_non_increasing() {
        let now = Utc::now();
        let posts = vec![
            post(1, Mood::Creative, 23, 5, 2, 2, now),
            post(2, Mood::Excited, 45, 12, 8, 4, now),
            post(3, Mood::Calm, 18, 3, 1, 6, now),
            post(4, Mood::Sad, 0, 0, 0, 0, now),
            post(5, Mood::Happy, 100, 0, 0, 200, now),
        ];
        let ranked = rank_trending(posts, now, 10);
        assert_eq!(ranked.len(), 5);
        for pair in ranked.windows(2) {
            assert!(pair[0].trending_score.unwrap() >= pair[1].trending_score.unwrap());
        }
        assert_eq!(ranked[0].post.id, 2);
    }

    #[test]
    fn test_trending_ties_keep_input_order() {
        let now = Utc::now();
        let posts = vec![
            post(9, Mood::Calm, 5, 0, 0, 1, now),
            post(3, Mood::Calm, 5, 0, 0, 1, now),
            post(7, Mood::Calm, 5, 0, 0, 1, now),
        ];
        let ids: Vec<u64> = rank_trending(posts, now, 10).iter().map(|v| v.post.id).collect();
        assert_eq!(ids, vec![9, 3, 7]);
    }

    #[test]
    fn test_mood_filter_uses_complementary_table() {
        let now = Utc::now();
        let posts: Vec<Post> = Mood::ALL
            .into_iter()
            .enumerate()
            .map(|(i, m)| post(i as u64 + 1, m, 1, 0, 0, 1, now))
            .collect();

        let feed = rank_feed(posts, &request(FeedFilter::Mood, Some(Mood::Happy), 50), now);
        let moods: Vec<Mood> = feed.iter().map(|v| v.post.mood).collect();
        for m in [Mood::Happy, Mood::Creative, Mood::Excited, Mood::Calm] {
            assert!(moods.contains(&m), "{m} missing from happy feed");
        }
        for m in [Mood::Sad, Mood::Angry] {
            assert!(!moods.contains(&m), "{m} leaked into happy feed");
        }
    }

    #[test]
    fn test_mood_filter_without_mood_keeps_everything() {
        let now = Utc::now();
        let posts = vec![post(1, Mood::Sad, 0, 0, 0, 1, now), post(2, Mood::Angry, 0, 0, 0, 2, now)];
        let feed = rank_feed(posts, &request(FeedFilter::Mood, None, 10), now);
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn test_default_ordering_is_newest_first() {
        let now = Utc::now();
        let posts = vec![
            post(1, Mood::Calm, 90, 0, 0, 6, now),
            post(2, Mood::Calm, 0, 0, 0, 1, now),
            post(3, Mood::Calm, 10, 0, 0, 3, now),
        ];
        let ids: Vec<u64> = rank_feed(posts, &request(FeedFilter::All, None, 10), now)
            .iter()
            .map(|v| v.post.id)
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_limit_applies_after_filtering() {
        let now = Utc::now();
        // Newest two posts are sad and would fill a limit of 2 if truncation came first.
        let posts = vec![
            post(1, Mood::Sad, 0, 0, 0, 0, now),
            post(2, Mood::Sad, 0, 0, 0, 1, now),
            post(3, Mood::Happy, 0, 0, 0, 2, now),
            post(4, Mood::Creative, 0, 0, 0, 3, now),
            post(5, Mood::Calm, 0, 0, 0, 4, now),
        ];
        let ids: Vec<u64> = rank_feed(posts, &request(FeedFilter::Mood, Some(Mood::Happy), 2), now)
            .iter()
            .map(|v| v.post.id)
            .collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_friends_filter() {
        let now = Utc::now();
        let friends = vec!["user_2".to_string()];
        let posts = vec![post(1, Mood::Calm, 0, 0, 0, 1, now), post(2, Mood::Calm, 0, 0, 0, 2, now)];
        let req = FeedRequest {
            filter: FeedFilter::Friends,
            mood: Some(Mood::Calm),
            friend_ids: &friends,
            limit: 10,
        };
        let feed = rank_feed(posts, &req, now);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].post.author_id, "user_2");
    }

    #[test]
    fn test_trending_filter_attaches_scores() {
        let now = Utc::now();
        let posts = vec![post(1, Mood::Calm, 1, 0, 0, 1, now), post(2, Mood::Calm, 50, 0, 0, 1, now)];
        let feed = rank_feed(posts, &request(FeedFilter::Trending, None, 10), now);
        assert_eq!(feed[0].post.id, 2);
        assert!(feed.iter().all(|v| v.trending_score.is_some()));
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::seconds(30), now), "Just now");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(time_ago(now - Duration::hours(3), now), "3h ago");
        assert_eq!(time_ago(now - Duration::days(2), now), "2d ago");
    }
}
