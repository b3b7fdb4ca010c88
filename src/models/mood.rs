//! The fixed mood enumeration and every per-mood lookup table.
//!
//! This is the single canonical copy of the mood tables; feed affinity,
//! thumbnails, video styles and wellness copy all read from here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Declaration order is the catalogue order and breaks ties in
/// most-frequent-mood counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Creative,
    Excited,
    Calm,
    Confident,
    Sad,
    Angry,
    Happy,
    Neutral,
}

/// Wellness recommendation copy attached to a mood.
#[derive(Debug, Clone, Copy)]
pub struct MoodRecommendation {
    pub title: &'static str,
    pub message: &'static str,
    pub action: &'static str,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Creative,
        Mood::Excited,
        Mood::Calm,
        Mood::Confident,
        Mood::Sad,
        Mood::Angry,
        Mood::Happy,
        Mood::Neutral,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Mood::Creative => "creative",
            Mood::Excited => "excited",
            Mood::Calm => "calm",
            Mood::Confident => "confident",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mood::Creative => "Creative",
            Mood::Excited => "Excited",
            Mood::Calm => "Calm",
            Mood::Confident => "Confident",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Creative => "🎨",
            Mood::Excited => "⚡",
            Mood::Calm => "🧘",
            Mood::Confident => "💪",
            Mood::Sad => "😢",
            Mood::Angry => "😤",
            Mood::Happy => "😊",
            Mood::Neutral => "😐",
        }
    }

    /// Hex color used by clients for mood accents.
    pub fn color(self) -> &'static str {
        match self {
            Mood::Creative => "#FF6B9D",
            Mood::Excited => "#FFE66D",
            Mood::Calm => "#4ECDC4",
            Mood::Confident => "#FF8C42",
            Mood::Sad => "#6C7CE0",
            Mood::Angry => "#FF4757",
            Mood::Happy => "#2ED573",
            Mood::Neutral => "#A4B0BE",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mood::Creative => "Artistic and imaginative",
            Mood::Excited => "High energy and enthusiastic",
            Mood::Calm => "Peaceful and serene",
            Mood::Confident => "Bold and self-assured",
            Mood::Sad => "Melancholic and reflective",
            Mood::Angry => "Intense and passionate",
            Mood::Happy => "Joyful and upbeat",
            Mood::Neutral => "Balanced and steady",
        }
    }

    /// Style keywords handed to the video generator.
    pub fn video_style(self) -> &'static str {
        match self {
            Mood::Creative => "abstract, artistic, colorful, painterly",
            Mood::Excited => "dynamic, high-energy, neon, fast-paced",
            Mood::Calm => "peaceful, soft, natural, meditative",
            Mood::Confident => "bold, powerful, cinematic, dramatic",
            Mood::Sad => "muted, emotional, gentle, contemplative",
            Mood::Angry => "intense, fiery, dramatic, high-contrast",
            Mood::Happy => "bright, cheerful, vibrant, uplifting",
            Mood::Neutral => "balanced, clean, minimal, steady",
        }
    }

    pub fn prompt_enhancement(self) -> &'static str {
        match self {
            Mood::Creative => "artistic, imaginative, with vibrant colors and abstract elements",
            Mood::Excited => "dynamic, energetic, with fast movement and bright lighting",
            Mood::Calm => "peaceful, serene, with soft natural lighting and gentle movements",
            Mood::Confident => "bold, powerful, with dramatic angles and strong composition",
            Mood::Sad => "emotional, contemplative, with soft muted colors and gentle rain",
            Mood::Angry => "intense, dramatic, with bold contrasts and powerful energy",
            Mood::Happy => "bright, cheerful, with warm sunlight and vibrant colors",
            Mood::Neutral => "balanced, clean, with even lighting and steady camera movement",
        }
    }

    /// Moods whose posts also show up in this mood's feed. Product-defined,
    /// not symmetric.
    pub fn complementary(self) -> &'static [Mood] {
        match self {
            Mood::Creative => &[Mood::Excited, Mood::Happy],
            Mood::Excited => &[Mood::Creative, Mood::Confident],
            Mood::Calm => &[Mood::Happy, Mood::Neutral],
            Mood::Confident => &[Mood::Excited, Mood::Creative],
            Mood::Sad => &[Mood::Calm, Mood::Neutral],
            Mood::Angry => &[Mood::Excited, Mood::Confident],
            Mood::Happy => &[Mood::Creative, Mood::Excited, Mood::Calm],
            Mood::Neutral => &[Mood::Calm, Mood::Happy],
        }
    }

    /// True when a post tagged `other` belongs in this mood's feed.
    pub fn is_compatible_with(self, other: Mood) -> bool {
        self == other || self.complementary().contains(&other)
    }

    pub fn insight(self) -> &'static str {
        match self {
            Mood::Creative => "Perfect time for artistic expression! 🎨",
            Mood::Excited => "Channel that energy into something amazing! ⚡",
            Mood::Calm => "Great mindset for mindful creation 🧘",
            Mood::Confident => "You're ready to take on any creative challenge! 💪",
            Mood::Sad => "Art can be healing - express what you're feeling 💙",
            Mood::Angry => "Transform that intensity into powerful creativity 🔥",
            Mood::Happy => "Spread those good vibes through your creations! 😊",
            Mood::Neutral => "A balanced mood opens up all creative possibilities ⚖️",
        }
    }

    pub fn recommendation(self) -> Option<MoodRecommendation> {
        let rec = match self {
            Mood::Creative => MoodRecommendation {
                title: "Creative Flow",
                message: "Try experimenting with a new artistic style today!",
                action: "Explore",
            },
            Mood::Excited => MoodRecommendation {
                title: "High Energy",
                message: "Great time for collaborative projects or remixing!",
                action: "Collaborate",
            },
            Mood::Calm => MoodRecommendation {
                title: "Peaceful Vibes",
                message: "Perfect for creating meditative or nature-inspired content",
                action: "Create",
            },
            Mood::Sad => MoodRecommendation {
                title: "Emotional Expression",
                message: "Art can be therapeutic. Express what you're feeling.",
                action: "Express",
            },
            _ => return None,
        };
        Some(rec)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Mood {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Mood::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| AppError::Validation(format!("Unknown mood '{}'", needle)))
    }
}

/// Catalogue entry served by `GET /api/video/moods`.
#[derive(Debug, Serialize)]
pub struct MoodInfo {
    pub key: Mood,
    pub name: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub style: &'static str,
    pub complementary: &'static [Mood],
}

impl From<Mood> for MoodInfo {
    fn from(mood: Mood) -> Self {
        Self {
            key: mood,
            name: mood.name(),
            emoji: mood.emoji(),
            color: mood.color(),
            description: mood.description(),
            style: mood.video_style(),
            complementary: mood.complementary(),
        }
    }
}
