pub mod achievements_constants;
pub mod achievements_model;
pub mod achievements_service;

pub use achievements_constants::{default_achievements, STREAK_RULES};
pub use achievements_model::{Achievement, AchievementTier, StreakRule};
pub use achievements_service::AchievementEvaluator;
