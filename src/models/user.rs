use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::mood::Mood;

pub const DEFAULT_USER_ID: &str = "guest";
pub const DEFAULT_INTENSITY: i32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub user_id: String,
    pub mood: Mood,
    pub intensity: i32,
    pub timestamp: DateTime<Utc>,
    /// UTC calendar day of `timestamp`; streaks compare on this field.
    pub date: NaiveDate,
}

impl MoodEntry {
    pub fn new(user_id: impl Into<String>, mood: Mood, intensity: i32, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            mood,
            intensity,
            timestamp: now,
            date: now.date_naive(),
        }
    }
}

/// Derived from the mood log on every mood update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserMoodProfile {
    pub id: String,
    pub current_mood: Mood,
    pub last_mood_update: DateTime<Utc>,
    pub streak_days: u32,
    pub total_posts: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UsageStats {
    pub today_minutes: u32,
    pub weekly_average: u32,
    pub streak_days: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Break,
    Mood,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub message: String,
    pub action: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakSession {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub start_time: DateTime<Utc>,
    /// Seconds.
    pub duration: u32,
    pub user_id: String,
}

// ── Requests ─────────────────────────────────────────────────────────────────

/// POST /api/users/mood
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MoodUpdateRequest {
    #[validate(length(min = 1, max = 100, message = "userId must be 1-100 characters"))]
    pub user_id: Option<String>,
    pub mood: Option<String>,
    #[validate(range(min = 1, max = 10, message = "Intensity must be 1-10"))]
    pub intensity: Option<i32>,
}

/// GET /api/users/:id/mood-history
#[derive(Debug, Deserialize)]
pub struct MoodHistoryQuery {
    pub days: Option<i64>,
}

impl MoodHistoryQuery {
    pub fn days(&self) -> i64 {
        self.days.unwrap_or(7).clamp(0, 365)
    }
}

/// POST /api/users/:id/wellness/break
#[derive(Debug, Default, Deserialize)]
pub struct BreakRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

// ── Responses ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MoodUpdateResponse {
    pub success: bool,
    pub mood: MoodEntry,
    pub user: UserMoodProfile,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodHistoryResponse {
    pub mood_history: Vec<MoodEntry>,
    pub total_entries: usize,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessResponse {
    pub usage_stats: UsageStats,
    pub mood_history: Vec<MoodEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_frequent_mood: Option<Mood>,
    pub insights: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakResponse {
    pub success: bool,
    pub break_session: BreakSession,
    pub message: String,
    pub tips: Vec<&'static str>,
}
