use crate::achievements::achievements_model::{Achievement, AchievementTier, StreakRule};

/// Streak thresholds, ascending. The evaluator iterates this table; adding a
/// tier means adding a row here and a matching catalog entry below.
pub const STREAK_RULES: [StreakRule; 4] = [
    StreakRule {
        achievement_id: "achievement-streak-starter",
        threshold: 3,
    },
    StreakRule {
        achievement_id: "achievement-consistency-king",
        threshold: 7,
    },
    StreakRule {
        achievement_id: "achievement-streak-champion",
        threshold: 30,
    },
    StreakRule {
        achievement_id: "achievement-centurion",
        threshold: 100,
    },
];

/// The fixed catalog seeded for every user at account setup, all locked.
pub fn default_achievements(user_id: &str) -> Vec<Achievement> {
    let catalog = [
        (
            "achievement-streak-starter",
            "Streak Starter",
            "Maintain a 3-day streak on any goal",
            "award",
            AchievementTier::Bronze,
            3,
        ),
        (
            "achievement-consistency-king",
            "Consistency King",
            "Maintain a 7-day streak on any goal",
            "crown",
            AchievementTier::Silver,
            7,
        ),
        (
            "achievement-streak-champion",
            "Streak Champion",
            "Maintain a 30-day streak on any goal",
            "trophy",
            AchievementTier::Gold,
            30,
        ),
        (
            "achievement-centurion",
            "Centurion",
            "Maintain a 100-day streak on any goal",
            "medal",
            AchievementTier::Platinum,
            100,
        ),
    ];

    catalog
        .into_iter()
        .map(|(id, name, description, icon, tier, threshold)| Achievement {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            tier,
            unlocked: false,
            unlocked_at: None,
            progress: Some(0),
            goal: Some(threshold),
            user_id: user_id.to_string(),
        })
        .collect()
}
