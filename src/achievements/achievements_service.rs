use std::sync::{Arc, RwLock};

use log::debug;

use crate::achievements::achievements_constants::{default_achievements, STREAK_RULES};
use crate::achievements::achievements_model::Achievement;
use crate::clock::Clock;
use crate::errors::{Error, Result};
use crate::goals::goals_traits::GoalStoreTrait;

/// Scans goal streaks against the rule table and unlocks matching badges.
pub struct AchievementEvaluator<G: GoalStoreTrait> {
    goal_store: Arc<G>,
    clock: Arc<dyn Clock>,
    achievements: RwLock<Vec<Achievement>>,
}

impl<G: GoalStoreTrait> AchievementEvaluator<G> {
    /// Seeds the default catalog for the user the goal store is scoped to.
    pub fn new(goal_store: Arc<G>, clock: Arc<dyn Clock>, user_id: &str) -> Self {
        AchievementEvaluator {
            goal_store,
            clock,
            achievements: RwLock::new(default_achievements(user_id)),
        }
    }

    pub fn list(&self) -> Result<Vec<Achievement>> {
        let achievements = self
            .achievements
            .read()
            .map_err(|_| Error::poisoned("achievements"))?;
        Ok(achievements.clone())
    }

    pub fn get_unlocked(&self) -> Result<Vec<Achievement>> {
        Ok(self.list()?.into_iter().filter(|a| a.unlocked).collect())
    }

    /// Locked badges carrying a display percentage.
    pub fn get_in_progress(&self) -> Result<Vec<Achievement>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|a| !a.unlocked && a.progress.is_some())
            .collect())
    }

    /// One-shot scan: unlocks every rule whose threshold the highest current
    /// streak meets, refreshes display progress on the rest, and returns only
    /// the achievements unlocked by this call. Monotonic and idempotent --
    /// a second call with no intervening progress unlocks nothing new.
    pub fn check_new_achievements(&self) -> Result<Vec<Achievement>> {
        let goals = self.goal_store.list()?;
        let highest_streak = goals.iter().map(|g| g.current_streak).max().unwrap_or(0);

        let mut achievements = self
            .achievements
            .write()
            .map_err(|_| Error::poisoned("achievements"))?;
        let mut newly_unlocked = Vec::new();

        for rule in STREAK_RULES {
            let Some(achievement) = achievements
                .iter_mut()
                .find(|a| a.id == rule.achievement_id)
            else {
                continue;
            };
            if achievement.unlocked {
                continue;
            }

            if highest_streak >= rule.threshold {
                achievement.unlocked = true;
                achievement.unlocked_at = Some(self.clock.now());
                achievement.progress = Some(100);
                debug!(
                    "Unlocked achievement '{}' at streak {}",
                    achievement.id, highest_streak
                );
                newly_unlocked.push(achievement.clone());
            } else {
                achievement.progress =
                    Some((highest_streak * 100 / rule.threshold).min(100));
            }
        }

        Ok(newly_unlocked)
    }
}
