use axum::{extract::State, Json};
use validator::Validate;

use crate::error::{require_fields, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::models::mood::{Mood, MoodInfo};
use crate::models::video::{
    EnhancePromptResponse, GenerateVideoResponse, MoodCatalogueResponse, PromptRequest,
    StatusResponse, VideoStatus,
};
use crate::services::video::enhance_prompt as enhance;
use crate::AppState;

/// Checks shared by generate and enhance-prompt.
fn parse_prompt_request(body: &PromptRequest) -> AppResult<(&str, Mood)> {
    require_fields(&[
        ("prompt", body.prompt.as_deref()),
        ("mood", body.mood.as_deref()),
    ])?;
    body.validate()?;

    let mood = body.mood.as_deref().unwrap_or_default().parse()?;
    Ok((body.prompt.as_deref().unwrap_or_default(), mood))
}

pub async fn generate_video(
    State(state): State<AppState>,
    AppJson(body): AppJson<PromptRequest>,
) -> AppResult<Json<GenerateVideoResponse>> {
    let (prompt, mood) = parse_prompt_request(&body)?;

    tracing::info!(mood = %mood, provider = state.video.name(), "Generating video");
    let video = state.video.generate(prompt, mood).await?;
    tracing::info!(video_id = %video.id, "Video generated");

    Ok(Json(GenerateVideoResponse {
        success: true,
        video,
        message: format!("{} video generated successfully! ✨", mood.name()),
    }))
}

pub async fn video_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<Json<StatusResponse>> {
    let report = state.video.status(&id).await?;

    let message = match report.status {
        VideoStatus::Completed => "Video is ready! 🎉".to_string(),
        VideoStatus::Processing => format!("Video is still generating ({}%)", report.progress),
        VideoStatus::Failed => "Video generation failed. Please try again".to_string(),
    };

    Ok(Json(StatusResponse { report, message }))
}

pub async fn list_moods() -> Json<MoodCatalogueResponse> {
    Json(MoodCatalogueResponse {
        moods: Mood::ALL.iter().copied().map(MoodInfo::from).collect(),
    })
}

pub async fn enhance_prompt(
    AppJson(body): AppJson<PromptRequest>,
) -> AppResult<Json<EnhancePromptResponse>> {
    let (prompt, mood) = parse_prompt_request(&body)?;

    Ok(Json(EnhancePromptResponse {
        original_prompt: prompt.to_string(),
        enhanced_prompt: enhance(prompt, mood),
        mood,
        suggestions: vec![
            "Consider adding specific camera movements",
            "Think about lighting that matches your mood",
            "Add details about the setting or environment",
        ],
    }))
}
