//! Video generation backends.
//!
//! The generator is an external dependency. `MockVideoProvider` stands in
//! for it with artificial latency; `RemoteVideoProvider` talks to a real
//! text-to-video HTTP API when one is configured.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::mood::Mood;
use crate::models::video::{Video, VideoStatus, VideoStatusReport, VIDEO_DURATION_SECS};

#[async_trait]
pub trait VideoProvider: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    async fn generate(&self, prompt: &str, mood: Mood) -> anyhow::Result<Video>;

    async fn status(&self, id: &str) -> anyhow::Result<VideoStatusReport>;
}

/// Append mood-specific cinematography hints to a user prompt.
pub fn enhance_prompt(prompt: &str, mood: Mood) -> String {
    format!(
        "{}, {}, {} seconds, professional video quality",
        prompt.trim(),
        mood.prompt_enhancement(),
        VIDEO_DURATION_SECS
    )
}

// ── Mock ─────────────────────────────────────────────────────────────────────

pub struct MockVideoProvider {
    latency: Duration,
}

impl MockVideoProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl VideoProvider for MockVideoProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, prompt: &str, mood: Mood) -> anyhow::Result<Video> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let key = Uuid::new_v4().simple().to_string();
        Ok(Video {
            id: format!("video_{}", key),
            url: format!("https://storage.googleapis.com/pling-videos/mock_{}.mp4", key),
            thumbnail: format!("https://storage.googleapis.com/pling-thumbnails/mock_{}.jpg", key),
            prompt: prompt.to_string(),
            mood,
            duration: VIDEO_DURATION_SECS,
            status: VideoStatus::Completed,
            created_at: Utc::now(),
        })
    }

    async fn status(&self, id: &str) -> anyhow::Result<VideoStatusReport> {
        Ok(VideoStatusReport {
            id: id.to_string(),
            status: VideoStatus::Completed,
            progress: 100,
            estimated_time_remaining: 0,
        })
    }
}

// ── Remote ───────────────────────────────────────────────────────────────────

pub struct RemoteVideoProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteVideo {
    id: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    thumbnail: String,
    status: VideoStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteStatus {
    status: VideoStatus,
    #[serde(default)]
    progress: u8,
    #[serde(default)]
    estimated_time_remaining: u32,
}

impl RemoteVideoProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl VideoProvider for RemoteVideoProvider {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn generate(&self, prompt: &str, mood: Mood) -> anyhow::Result<Video> {
        let response = self
            .client
            .post(format!("{}/generate", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "prompt": prompt,
                "mood": mood,
                "duration": VIDEO_DURATION_SECS,
                "style": mood.video_style(),
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Video API error {}: {}", status, body);
        }

        let remote: RemoteVideo = response.json().await?;
        Ok(Video {
            id: remote.id,
            url: remote.url,
            thumbnail: remote.thumbnail,
            prompt: prompt.to_string(),
            mood,
            duration: VIDEO_DURATION_SECS,
            status: remote.status,
            created_at: Utc::now(),
        })
    }

    async fn status(&self, id: &str) -> anyhow::Result<VideoStatusReport> {
        let response = self
            .client
            .get(format!("{}/status/{}", self.base_url, id))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Video API error {}: {}", status, body);
        }

        let remote: RemoteStatus = response.json().await?;
        Ok(VideoStatusReport {
            id: id.to_string(),
            status: remote.status,
            progress: remote.progress,
            estimated_time_remaining: remote.estimated_time_remaining,
        })
    }
}
