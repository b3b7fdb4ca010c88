use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::mood::{Mood, MoodInfo};

pub const VIDEO_DURATION_SECS: u32 = 30;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Processing,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub url: String,
    pub thumbnail: String,
    pub prompt: String,
    pub mood: Mood,
    /// Seconds.
    pub duration: u32,
    pub status: VideoStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatusReport {
    pub id: String,
    pub status: VideoStatus,
    pub progress: u8,
    pub estimated_time_remaining: u32,
}

// ── Requests ─────────────────────────────────────────────────────────────────

/// POST /api/video/generate and POST /api/video/enhance-prompt
#[derive(Debug, Deserialize, Validate)]
pub struct PromptRequest {
    #[validate(length(max = 500, message = "Prompt too long (max 500 characters)"))]
    pub prompt: Option<String>,
    pub mood: Option<String>,
}

// ── Responses ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateVideoResponse {
    pub success: bool,
    pub video: Video,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[serde(flatten)]
    pub report: VideoStatusReport,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MoodCatalogueResponse {
    pub moods: Vec<MoodInfo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancePromptResponse {
    pub original_prompt: String,
    pub enhanced_prompt: String,
    pub mood: Mood,
    pub suggestions: Vec<&'static str>,
}
