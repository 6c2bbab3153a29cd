use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// A badge tied to a streak threshold.
///
/// `LOCKED -> UNLOCKED` is the only transition: once `unlocked` is set it is
/// never reset, and `unlocked_at` is written exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub tier: AchievementTier,
    pub unlocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
    /// Display percentage (0-100) towards the threshold while still locked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    /// The streak threshold, surfaced for display on locked badges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<u32>,
    pub user_id: String,
}

/// One row of the data-driven unlock table: reaching `threshold` on any
/// goal's current streak unlocks `achievement_id`.
#[derive(Debug, Clone, Copy)]
pub struct StreakRule {
    pub achievement_id: &'static str,
    pub threshold: u32,
}
