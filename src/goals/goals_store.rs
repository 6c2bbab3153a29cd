use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use log::debug;
use uuid::Uuid;

use crate::clock::Clock;
use crate::errors::{Error, NotFoundError, Result};
use crate::goals::goals_model::{
    validate_definition, Goal, GoalUpdate, NewGoal, StreakUpdate,
};
use crate::goals::goals_traits::GoalStoreTrait;

/// In-memory goal store scoped to a single authenticated user.
///
/// Goals keep insertion order; the identity collaborator's opaque user id is
/// stamped on every goal created through this store.
pub struct GoalStore {
    user_id: String,
    clock: Arc<dyn Clock>,
    goals: RwLock<Vec<Goal>>,
}

impl GoalStore {
    pub fn new(user_id: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        GoalStore {
            user_id: user_id.into(),
            clock,
            goals: RwLock::new(Vec::new()),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

impl GoalStoreTrait for GoalStore {
    fn create(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;

        let goal = Goal {
            id: new_goal.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_goal.name,
            description: new_goal.description,
            goal_type: new_goal.goal_type,
            icon: new_goal.icon,
            color: new_goal.color,
            user_id: self.user_id.clone(),
            created_at: self.clock.now(),
            frequency: new_goal.frequency,
            tracking_unit: new_goal.tracking_unit,
            target_value: new_goal.target_value,
            custom_days: new_goal.custom_days,
            current_streak: 0,
            longest_streak: 0,
            last_completed: None,
        };

        let mut goals = self.goals.write().map_err(|_| Error::poisoned("goals"))?;
        debug!("Creating goal '{}' ({})", goal.name, goal.id);
        goals.push(goal.clone());
        Ok(goal)
    }

    fn update(&self, goal_id: &str, update: GoalUpdate) -> Result<Goal> {
        let mut goals = self.goals.write().map_err(|_| Error::poisoned("goals"))?;
        let goal = goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| NotFoundError::Goal(goal_id.to_string()))?;

        // Validate the merged result before touching the stored goal.
        let mut merged = goal.clone();
        update.apply_to(&mut merged);
        validate_definition(
            &merged.name,
            merged.tracking_unit,
            merged.target_value,
            merged.frequency,
            merged.custom_days.as_deref(),
        )?;

        *goal = merged.clone();
        debug!("Updated goal '{}' ({})", merged.name, merged.id);
        Ok(merged)
    }

    fn delete(&self, goal_id: &str) -> Result<()> {
        let mut goals = self.goals.write().map_err(|_| Error::poisoned("goals"))?;
        let position = goals
            .iter()
            .position(|g| g.id == goal_id)
            .ok_or_else(|| NotFoundError::Goal(goal_id.to_string()))?;
        let removed = goals.remove(position);
        debug!("Deleted goal '{}' ({})", removed.name, removed.id);
        Ok(())
    }

    fn get(&self, goal_id: &str) -> Result<Goal> {
        let goals = self.goals.read().map_err(|_| Error::poisoned("goals"))?;
        goals
            .iter()
            .find(|g| g.id == goal_id)
            .cloned()
            .ok_or_else(|| NotFoundError::Goal(goal_id.to_string()).into())
    }

    fn list(&self) -> Result<Vec<Goal>> {
        let goals = self.goals.read().map_err(|_| Error::poisoned("goals"))?;
        Ok(goals.clone())
    }

    fn list_due_on(&self, date: NaiveDate) -> Result<Vec<Goal>> {
        let goals = self.goals.read().map_err(|_| Error::poisoned("goals"))?;
        Ok(goals
            .iter()
            .filter(|g| g.is_scheduled_on(date))
            .cloned()
            .collect())
    }

    fn apply_streak(&self, goal_id: &str, update: StreakUpdate) -> Result<Goal> {
        let mut goals = self.goals.write().map_err(|_| Error::poisoned("goals"))?;
        let goal = goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| NotFoundError::Goal(goal_id.to_string()))?;

        goal.current_streak = update.current_streak;
        // The longest streak can never fall behind the current one.
        goal.longest_streak = update.longest_streak.max(update.current_streak);
        goal.last_completed = Some(update.last_completed);
        debug!(
            "Goal '{}' streak -> current {} / longest {}",
            goal.id, goal.current_streak, goal.longest_streak
        );
        Ok(goal.clone())
    }
}
