use chrono::NaiveDate;

use crate::errors::Result;
use crate::progress::progress_model::ProgressEntry;

/// Trait for progress ledger operations.
pub trait ProgressLedgerTrait: Send + Sync {
    /// Records activity for (goal, date) and keeps the goal's streak
    /// counters consistent with recorded history.
    fn log_progress(
        &self,
        goal_id: &str,
        date: NaiveDate,
        value: f64,
        notes: Option<String>,
    ) -> Result<ProgressEntry>;

    /// All entries for the goal, optionally bounded inclusive by date range,
    /// ascending by date. Pure read.
    fn get_progress_for_goal(
        &self,
        goal_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<ProgressEntry>>;

    /// Entry for one specific date, if any.
    fn get_entry(&self, goal_id: &str, date: NaiveDate) -> Result<Option<ProgressEntry>>;

    /// Deletes the goal from the store and purges its entries.
    fn delete_goal(&self, goal_id: &str) -> Result<()>;

    /// Drops all entries for a goal, returning how many were removed.
    fn purge_goal(&self, goal_id: &str) -> Result<usize>;
}
