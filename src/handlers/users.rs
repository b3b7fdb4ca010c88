use axum::{extract::State, Json};
use chrono::{Duration, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::error::{require_fields, AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery, OptionalJson};
use crate::models::mood::Mood;
use crate::models::user::{
    BreakRequest, BreakResponse, BreakSession, MoodEntry, MoodHistoryQuery, MoodHistoryResponse,
    MoodUpdateRequest, MoodUpdateResponse, WellnessResponse, DEFAULT_INTENSITY, DEFAULT_USER_ID,
};
use crate::services::streak::{
    calculate_mood_streak, generate_mood_insights, most_frequent_mood, wellness_recommendations,
};
use crate::AppState;

/// Entries shown on the wellness dashboard.
const WELLNESS_HISTORY_LEN: usize = 7;

pub async fn update_mood(
    State(state): State<AppState>,
    AppJson(body): AppJson<MoodUpdateRequest>,
) -> AppResult<Json<MoodUpdateResponse>> {
    require_fields(&[("mood", body.mood.as_deref())])?;
    body.validate()?;

    let mood: Mood = body.mood.as_deref().unwrap_or_default().parse()?;
    let user_id = body.user_id.unwrap_or_else(|| DEFAULT_USER_ID.into());
    let intensity = body.intensity.unwrap_or(DEFAULT_INTENSITY);
    let now = Utc::now();

    let entry = MoodEntry::new(user_id.clone(), mood, intensity, now);
    let profile = state.store.record_mood(entry.clone()).await?;
    let streak_days = profile.streak_days;

    tracing::info!(
        user_id = %user_id,
        mood = %mood,
        intensity,
        streak_days,
        "Mood updated"
    );

    Ok(Json(MoodUpdateResponse {
        success: true,
        mood: entry,
        user: profile,
        message: format!("Mood updated to {}! Keep expressing yourself ✨", mood),
    }))
}

pub async fn get_mood_history(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<String>,
    AppQuery(query): AppQuery<MoodHistoryQuery>,
) -> AppResult<Json<MoodHistoryResponse>> {
    let history = state
        .store
        .mood_history(&user_id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    let now = Utc::now();
    let cutoff = now - Duration::days(query.days());

    // Reversed first so entries with equal timestamps keep newest-insert-first.
    let mut recent: Vec<MoodEntry> = history
        .iter()
        .rev()
        .filter(|e| e.timestamp >= cutoff)
        .cloned()
        .collect();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    Ok(Json(MoodHistoryResponse {
        mood_history: recent,
        total_entries: history.len(),
        streak: calculate_mood_streak(&history, now.date_naive()),
    }))
}

pub async fn get_wellness(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<String>,
) -> AppResult<Json<WellnessResponse>> {
    let mut profile = state
        .store
        .get_profile(&user_id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;
    let history = state.store.mood_history(&user_id).await?.unwrap_or_default();

    // Stored streak is as of the last update; a missed day since then breaks it.
    profile.streak_days = calculate_mood_streak(&history, Utc::now().date_naive());

    let usage_stats = state.usage_stats.usage_stats(&profile);
    let current = Some(profile.current_mood);
    let recent_start = history.len().saturating_sub(WELLNESS_HISTORY_LEN);

    Ok(Json(WellnessResponse {
        usage_stats,
        most_frequent_mood: most_frequent_mood(&history),
        insights: generate_mood_insights(&history, current),
        recommendations: wellness_recommendations(current, &usage_stats),
        mood_history: history[recent_start..].to_vec(),
    }))
}

pub async fn start_break(
    AppPath(user_id): AppPath<String>,
    OptionalJson(body): OptionalJson<BreakRequest>,
) -> AppResult<Json<BreakResponse>> {
    let kind = body
        .kind
        .filter(|k| !k.trim().is_empty())
        .unwrap_or_else(|| "creative-reset".into());
    let duration = if kind == "creative-reset" { 120 } else { 300 };

    tracing::info!(user_id = %user_id, kind = %kind, "Starting wellness break");

    Ok(Json(BreakResponse {
        success: true,
        break_session: BreakSession {
            id: format!("break_{}", Uuid::new_v4().simple()),
            kind,
            start_time: Utc::now(),
            duration,
            user_id,
        },
        message: "Enjoy your mindful break! 🌟".into(),
        tips: vec![
            "Take deep breaths",
            "Look away from the screen",
            "Stretch your body",
            "Think about something you're grateful for",
        ],
    }))
}
