use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::{Duration, NaiveDate};
use log::debug;

use crate::clock::Clock;
use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::StreakUpdate;
use crate::goals::goals_traits::GoalStoreTrait;
use crate::progress::progress_model::ProgressEntry;
use crate::progress::progress_traits::ProgressLedgerTrait;

/// Records per-goal, per-date activity and drives the streak state machine.
///
/// Entries are keyed by (goal_id, date), so range queries come back sorted
/// and each (goal, date) pair holds at most one entry. The whole write path
/// of [`log_progress`](ProgressLedgerTrait::log_progress) runs under one
/// write lock; no two writes to the same goal's streak fields can interleave
/// their read-modify-write sequence.
pub struct ProgressLedger<G: GoalStoreTrait> {
    goal_store: Arc<G>,
    clock: Arc<dyn Clock>,
    entries: RwLock<BTreeMap<(String, NaiveDate), ProgressEntry>>,
}

impl<G: GoalStoreTrait> ProgressLedger<G> {
    pub fn new(goal_store: Arc<G>, clock: Arc<dyn Clock>) -> Self {
        ProgressLedger {
            goal_store,
            clock,
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn goal_store(&self) -> &Arc<G> {
        &self.goal_store
    }
}

impl<G: GoalStoreTrait> ProgressLedgerTrait for ProgressLedger<G> {
    fn log_progress(
        &self,
        goal_id: &str,
        date: NaiveDate,
        value: f64,
        notes: Option<String>,
    ) -> Result<ProgressEntry> {
        // Validate and resolve everything fallible before mutating anything,
        // so a failed call leaves both the entry and the goal untouched.
        if value < 0.0 {
            return Err(ValidationError::NegativeValue(value).into());
        }
        let goal = self.goal_store.get(goal_id)?;
        let completed = goal.completes(value);

        let mut entries = self.entries.write().map_err(|_| Error::poisoned("progress"))?;
        let key = (goal_id.to_string(), date);

        let entry = match entries.get(&key) {
            Some(existing) => ProgressEntry {
                id: existing.id.clone(),
                goal_id: existing.goal_id.clone(),
                date,
                value,
                completed,
                // An empty or omitted replacement keeps the prior note.
                notes: match notes {
                    Some(n) if !n.trim().is_empty() => Some(n),
                    _ => existing.notes.clone(),
                },
            },
            None => ProgressEntry {
                id: ProgressEntry::entry_id(goal_id, date),
                goal_id: goal_id.to_string(),
                date,
                value,
                completed,
                notes: notes.filter(|n| !n.trim().is_empty()),
            },
        };

        // Streak recompute fires only for a completion logged on the current
        // calendar date, and only once per day: if `last_completed` is already
        // today, this completion is a re-log and the counters stand.
        // Backdated and future-dated logs never touch the streak.
        let today = self.clock.today();
        if completed && date == today && goal.last_completed != Some(date) {
            let yesterday = date - Duration::days(1);
            let completed_yesterday = entries
                .get(&(goal_id.to_string(), yesterday))
                .is_some_and(|e| e.completed);

            // Today's completion itself counts, so a broken chain restarts
            // at 1 rather than resetting to 0.
            let new_streak = if completed_yesterday {
                goal.current_streak + 1
            } else {
                1
            };
            self.goal_store.apply_streak(
                goal_id,
                StreakUpdate {
                    current_streak: new_streak,
                    longest_streak: goal.longest_streak.max(new_streak),
                    last_completed: date,
                },
            )?;
            debug!(
                "Goal '{}' completed on {}, streak now {}",
                goal_id, date, new_streak
            );
        }

        entries.insert(key, entry.clone());
        Ok(entry)
    }

    fn get_progress_for_goal(
        &self,
        goal_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<ProgressEntry>> {
        let entries = self.entries.read().map_err(|_| Error::poisoned("progress"))?;
        let start = start_date.unwrap_or(NaiveDate::MIN);
        let end = end_date.unwrap_or(NaiveDate::MAX);
        Ok(entries
            .range((goal_id.to_string(), start)..=(goal_id.to_string(), end))
            .map(|(_, entry)| entry.clone())
            .collect())
    }

    fn get_entry(&self, goal_id: &str, date: NaiveDate) -> Result<Option<ProgressEntry>> {
        let entries = self.entries.read().map_err(|_| Error::poisoned("progress"))?;
        Ok(entries.get(&(goal_id.to_string(), date)).cloned())
    }

    fn delete_goal(&self, goal_id: &str) -> Result<()> {
        // Store delete first: an unknown id fails before any entry is dropped.
        self.goal_store.delete(goal_id)?;
        let purged = self.purge_goal(goal_id)?;
        debug!("Deleted goal '{}' and {} progress entries", goal_id, purged);
        Ok(())
    }

    fn purge_goal(&self, goal_id: &str) -> Result<usize> {
        let mut entries = self.entries.write().map_err(|_| Error::poisoned("progress"))?;
        let before = entries.len();
        entries.retain(|(gid, _), _| gid != goal_id);
        Ok(before - entries.len())
    }
}
