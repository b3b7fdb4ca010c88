use axum::{extract::State, Json};
use chrono::Utc;
use validator::Validate;

use crate::error::{require_fields, AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery, OptionalJson};
use crate::models::mood::Mood;
use crate::models::post::{
    CreatePostRequest, CreatePostResponse, FeedQuery, FeedResponse, LikeRequest, LikeResponse,
    NewPost, PostId, PostView, RemixRequest, RemixResponse, TrendingQuery, TrendingResponse,
};
use crate::models::user::DEFAULT_USER_ID;
use crate::services::ranking::{rank_feed, rank_trending, time_ago, FeedRequest};
use crate::AppState;

pub async fn get_feed(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<FeedQuery>,
) -> AppResult<Json<FeedResponse>> {
    let mood = query
        .mood
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .map(str::parse::<Mood>)
        .transpose()?;

    let posts = state.store.list_posts().await?;
    let total = posts.len();

    let request = FeedRequest {
        filter: query.filter,
        mood,
        friend_ids: &state.config.feed_friend_ids,
        limit: state.config.feed_limit(query.limit),
    };
    let views = rank_feed(posts, &request, Utc::now());

    let label = mood.map_or(query.filter.as_str(), Mood::key);
    let message = format!("{} posts found for your {} feed ✨", views.len(), label);

    Ok(Json(FeedResponse {
        posts: views,
        total,
        filter: query.filter,
        mood,
        message,
    }))
}

pub async fn get_trending(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TrendingQuery>,
) -> AppResult<Json<TrendingResponse>> {
    let posts = state.store.list_posts().await?;
    let views = rank_trending(posts, Utc::now(), state.config.feed_limit(query.limit));

    Ok(Json(TrendingResponse {
        message: format!("Top {} trending posts 🔥", views.len()),
        posts: views,
    }))
}

pub async fn create_post(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreatePostRequest>,
) -> AppResult<Json<CreatePostResponse>> {
    require_fields(&[
        ("content", body.content.as_deref()),
        ("mood", body.mood.as_deref()),
    ])?;
    body.validate()?;

    let mood: Mood = body.mood.as_deref().unwrap_or_default().parse()?;
    let now = Utc::now();

    let new_post = NewPost {
        author: body.author.unwrap_or_else(|| "Anonymous".into()),
        author_id: body.author_id.unwrap_or_else(|| DEFAULT_USER_ID.into()),
        mood,
        content: body.content.unwrap_or_default().trim().to_string(),
        video_url: body.video_url.filter(|u| !u.is_empty()),
        thumbnail: body
            .thumbnail
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| mood.emoji().into()),
        tags: body.tags.unwrap_or_default(),
        original_post_id: None,
        created_at: now,
    };

    let post = state.store.insert_post(new_post).await?;
    state.store.increment_post_count(&post.author_id).await?;

    tracing::info!(
        post_id = post.id,
        mood = %post.mood,
        author_id = %post.author_id,
        "New post created"
    );

    Ok(Json(CreatePostResponse {
        success: true,
        message: format!("Your {} post has been shared! 🎉", mood),
        post: PostView {
            time_ago: time_ago(post.created_at, now),
            post,
            trending_score: None,
        },
    }))
}

pub async fn like_post(
    State(state): State<AppState>,
    AppPath(post_id): AppPath<PostId>,
    OptionalJson(body): OptionalJson<LikeRequest>,
) -> AppResult<Json<LikeResponse>> {
    let user_id = body.user_id.unwrap_or_else(|| DEFAULT_USER_ID.into());

    let post = state
        .store
        .like_post(post_id)
        .await?
        .ok_or(AppError::NotFound("Post not found".into()))?;

    tracing::info!(post_id, user_id = %user_id, likes = post.likes, "Post liked");

    Ok(Json(LikeResponse {
        success: true,
        likes: post.likes,
        message: "Post liked! 💜".into(),
    }))
}

pub async fn remix_post(
    State(state): State<AppState>,
    AppPath(post_id): AppPath<PostId>,
    OptionalJson(body): OptionalJson<RemixRequest>,
) -> AppResult<Json<RemixResponse>> {
    body.validate()?;

    let new_mood = body
        .new_mood
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .map(str::parse::<Mood>)
        .transpose()?;

    let origin = state
        .store
        .get_post(post_id)
        .await?
        .ok_or(AppError::NotFound("Original post not found".into()))?;

    let mood = new_mood.unwrap_or(origin.mood);
    let now = Utc::now();
    let remix = NewPost {
        author: body.author.unwrap_or_else(|| "Remixer".into()),
        author_id: body.user_id.unwrap_or_else(|| DEFAULT_USER_ID.into()),
        mood,
        content: body
            .new_content
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| format!("Remix of: {}", origin.content)),
        video_url: None,
        thumbnail: mood.emoji().into(),
        tags: vec!["remix".into(), origin.mood.to_string()],
        original_post_id: Some(origin.id),
        created_at: now,
    };

    let (remix, origin) = state
        .store
        .remix_post(post_id, remix)
        .await?
        .ok_or(AppError::NotFound("Original post not found".into()))?;
    state.store.increment_post_count(&remix.author_id).await?;

    tracing::info!(
        post_id,
        remix_id = remix.id,
        user_id = %remix.author_id,
        "Post remixed"
    );

    Ok(Json(RemixResponse {
        success: true,
        remix: PostView {
            time_ago: time_ago(remix.created_at, now),
            post: remix,
            trending_score: None,
        },
        original_post: PostView {
            time_ago: time_ago(origin.created_at, now),
            post: origin,
            trending_score: None,
        },
        message: "Remix created! Your creative spin is live 🎨".into(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};

    use crate::handlers::test_support::app;
    use crate::store::Store;

    fn find_post<'a>(feed: &'a Value, id: u64) -> &'a Value {
        feed["posts"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["id"] == id)
            .unwrap_or_else(|| panic!("post {id} missing from feed"))
    }

    #[tokio::test]
    async fn test_create_post_requires_content() {
        let app = app();
        let (status, body) = app.post("/api/posts", json!({ "mood": "happy" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["required"], json!(["content", "mood"]));
        assert_eq!(body["error"], "Missing required fields");
    }

    #[tokio::test]
    async fn test_create_post_rejects_unknown_mood() {
        let app = app();
        let (status, body) = app
            .post("/api/posts", json!({ "content": "hi", "mood": "grumpy" }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("grumpy"));
    }

    #[tokio::test]
    async fn test_create_post_fills_defaults() {
        let app = app();
        let (status, body) = app
            .post("/api/posts", json!({ "content": "Sunset loops", "mood": "calm" }))
            .await;
        assert_eq!(status, StatusCode::OK);
        let post = &body["post"];
        assert_eq!(post["id"], 4);
        assert_eq!(post["author"], "Anonymous");
        assert_eq!(post["authorId"], "guest");
        assert_eq!(post["thumbnail"], "🧘");
        assert_eq!(post["videoUrl"], "https://example.com/video4.mp4");
        assert_eq!(post["likes"], 0);
        assert_eq!(post["timeAgo"], "Just now");
    }

    #[tokio::test]
    async fn test_like_twice_is_reflected_in_feed() {
        let app = app();
        let (_, before) = app.get("/api/posts/feed?filter=all&limit=50").await;
        let likes_before = find_post(&before, 2)["likes"].as_u64().unwrap();

        for expected in [likes_before + 1, likes_before + 2] {
            let (status, body) = app.post("/api/posts/2/like", json!({ "userId": "user_maya" })).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["likes"], expected);
        }

        let (_, after) = app.get("/api/posts/feed?filter=all&limit=50").await;
        assert_eq!(find_post(&after, 2)["likes"].as_u64().unwrap(), likes_before + 2);
    }

    #[tokio::test]
    async fn test_like_without_body() {
        let app = app();
        let (status, body) = app.send(Method::POST, "/api/posts/1/like", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["likes"], 24);
    }

    #[tokio::test]
    async fn test_like_unknown_post_is_not_found() {
        let app = app();
        let (status, body) = app.post("/api/posts/999/like", json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Post not found");
    }

    #[tokio::test]
    async fn test_remix_links_origin_and_bumps_counter() {
        let app = app();
        let (status, body) = app
            .post("/api/posts/3/remix", json!({ "userId": "user_sam", "newMood": "happy" }))
            .await;
        assert_eq!(status, StatusCode::OK);

        let remix = &body["remix"];
        assert_eq!(remix["originalPostId"], 3);
        assert_eq!(remix["isRemix"], true);
        assert_eq!(remix["mood"], "happy");
        assert_eq!(remix["authorId"], "user_sam");
        assert_eq!(remix["tags"], json!(["remix", "calm"]));
        assert!(remix["content"].as_str().unwrap().starts_with("Remix of: "));
        assert_eq!(body["originalPost"]["remixes"], 2);

        let stored = app.store.get_post(3).await.unwrap().unwrap();
        assert_eq!(stored.remixes, 2);
    }

    #[tokio::test]
    async fn test_remix_unknown_origin() {
        let app = app();
        let (status, body) = app.post("/api/posts/77/remix", json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Original post not found");
        assert_eq!(app.store.list_posts().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_mood_feed_filters_by_affinity() {
        let app = app();
        app.post("/api/posts", json!({ "content": "rainy day", "mood": "sad" })).await;

        let (status, body) = app.get("/api/posts/feed?mood=happy").await;
        assert_eq!(status, StatusCode::OK);
        let moods: Vec<&str> = body["posts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["mood"].as_str().unwrap())
            .collect();
        assert!(!moods.contains(&"sad"));
        assert_eq!(moods, vec!["creative", "excited", "calm"]);
        assert_eq!(body["total"], 4);
        assert_eq!(body["mood"], "happy");
    }

    #[tokio::test]
    async fn test_friends_feed_uses_configured_ids() {
        let app = app();
        let (_, body) = app.get("/api/posts/feed?filter=friends").await;
        let authors: Vec<&str> = body["posts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["authorId"].as_str().unwrap())
            .collect();
        assert_eq!(authors, vec!["user_alex", "user_maya"]);
    }

    #[tokio::test]
    async fn test_trending_is_sorted_and_limited() {
        let app = app();
        let (status, body) = app.get("/api/posts/trending?limit=2").await;
        assert_eq!(status, StatusCode::OK);
        let posts = body["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 2);
        let scores: Vec<f64> = posts
            .iter()
            .map(|p| p["trendingScore"].as_f64().unwrap())
            .collect();
        assert!(scores[0] >= scores[1]);
        assert_eq!(posts[0]["id"], 2);
    }

    #[tokio::test]
    async fn test_non_numeric_post_id_is_json_error() {
        let app = app();
        let (status, body) = app.post("/api/posts/abc/like", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_bad_feed_limit_is_json_error() {
        let app = app();
        for uri in ["/api/posts/feed?limit=abc", "/api/posts/trending?limit=-1"] {
            let (status, body) = app.get(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"], "Invalid request", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_mistyped_create_body_is_json_error() {
        let app = app();
        let (status, body) = app
            .post("/api/posts", json!({ "content": "hi", "mood": "happy", "tags": "solo" }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request");
        assert_eq!(app.store.list_posts().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_malformed_like_body_is_rejected() {
        let app = app();
        let (status, body) = app
            .send_raw(Method::POST, "/api/posts/1/like", Some("{not json".into()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request");
        assert_eq!(app.store.get_post(1).await.unwrap().unwrap().likes, 23);
    }
}
