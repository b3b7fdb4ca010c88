use rand::Rng;

use crate::models::user::{UsageStats, UserMoodProfile};

/// Source of screen-time numbers for the wellness dashboard.
pub trait UsageStatsProvider: Send + Sync + 'static {
    fn usage_stats(&self, profile: &UserMoodProfile) -> UsageStats;
}

/// Placeholder numbers until real session tracking exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomUsageStats;

impl UsageStatsProvider for RandomUsageStats {
    fn usage_stats(&self, profile: &UserMoodProfile) -> UsageStats {
        let mut rng = rand::thread_rng();
        UsageStats {
            today_minutes: rng.gen_range(15..75),
            weekly_average: rng.gen_range(30..75),
            streak_days: profile.streak_days,
        }
    }
}

/// Returns the same minutes for everyone.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedUsageStats {
    pub today_minutes: u32,
    pub weekly_average: u32,
}

#[cfg(test)]
impl UsageStatsProvider for FixedUsageStats {
    fn usage_stats(&self, profile: &UserMoodProfile) -> UsageStats {
        UsageStats {
            today_minutes: self.today_minutes,
            weekly_average: self.weekly_average,
            streak_days: profile.streak_days,
        }
    }
}
