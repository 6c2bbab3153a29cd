use chrono::NaiveDate;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal, StreakUpdate};

/// Trait for goal store operations.
///
/// The in-memory [`GoalStore`](crate::goals::GoalStore) implements it directly;
/// a persistence collaborator provides a durable implementation with the same
/// identity and atomicity guarantees.
pub trait GoalStoreTrait: Send + Sync {
    fn create(&self, new_goal: NewGoal) -> Result<Goal>;
    fn update(&self, goal_id: &str, update: GoalUpdate) -> Result<Goal>;
    /// Removes the goal. Deleting an unknown id is an error, not a no-op;
    /// cascading the progress entries is the ledger's job.
    fn delete(&self, goal_id: &str) -> Result<()>;
    fn get(&self, goal_id: &str) -> Result<Goal>;
    /// All goals in insertion order.
    fn list(&self) -> Result<Vec<Goal>>;
    /// Goals whose frequency policy schedules `date`.
    fn list_due_on(&self, date: NaiveDate) -> Result<Vec<Goal>>;
    /// Single write path into the streak counters, used by the progress
    /// ledger's recompute step.
    fn apply_streak(&self, goal_id: &str, update: StreakUpdate) -> Result<Goal>;
}
