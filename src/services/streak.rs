use std::collections::{BTreeMap, HashSet};

use chrono::{Duration, NaiveDate};

use crate::models::mood::Mood;
use crate::models::user::{MoodEntry, Recommendation, RecommendationKind, UsageStats};

/// Furthest back the streak walk looks.
pub const STREAK_LOOKBACK_DAYS: u32 = 30;

/// Minutes of use today after which a break is suggested.
pub const BREAK_THRESHOLD_MINUTES: u32 = 60;

/// Count consecutive days with at least one entry, walking back from `today`.
///
/// Today may still be empty without breaking the run, so a user who logged
/// yesterday keeps their streak until midnight. Any other empty day ends the
/// walk. Only the last [`STREAK_LOOKBACK_DAYS`] days are examined.
pub fn calculate_mood_streak(history: &[MoodEntry], today: NaiveDate) -> u32 {
    let logged: HashSet<NaiveDate> = history.iter().map(|e| e.date).collect();

    let mut streak = 0u32;
    for offset in 0..STREAK_LOOKBACK_DAYS {
        let check_date = today - Duration::days(i64::from(offset));
        if logged.contains(&check_date) {
            streak += 1;
        } else if offset > 0 {
            break;
        }
    }
    streak
}

/// Most common mood across the whole history. Ties go to the mood that
/// comes first in catalogue order.
pub fn most_frequent_mood(history: &[MoodEntry]) -> Option<Mood> {
    let mut counts: BTreeMap<Mood, usize> = BTreeMap::new();
    for entry in history {
        *counts.entry(entry.mood).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .map(|(mood, _)| mood)
}

pub fn generate_mood_insights(history: &[MoodEntry], current: Option<Mood>) -> Vec<String> {
    let Some(most_common) = most_frequent_mood(history) else {
        return vec!["Start tracking your mood to get personalized insights!".into()];
    };

    let mut insights = vec![format!("Your most frequent mood is {} 💫", most_common)];
    if let Some(mood) = current {
        insights.push(mood.insight().to_string());
    }
    insights
}

pub fn wellness_recommendations(current: Option<Mood>, usage: &UsageStats) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if usage.today_minutes > BREAK_THRESHOLD_MINUTES {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Break,
            title: "Time for a break!".into(),
            message: "You've been creating for a while. How about a 5-minute mindful break?".into(),
            action: "Take Break".into(),
        });
    }

    if let Some(rec) = current.and_then(Mood::recommendation) {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Mood,
            title: rec.title.into(),
            message: rec.message.into(),
            action: rec.action.into(),
        });
    }

    recommendations
}
