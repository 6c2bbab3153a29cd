use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::goals::goals_model::Goal;

/// One goal's recorded activity for one calendar date.
///
/// Identity is the (goal_id, date) pair; at most one entry exists per goal
/// per date and re-logging the same date overwrites it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub id: String,
    pub goal_id: String,
    pub date: NaiveDate,
    pub value: f64,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ProgressEntry {
    pub(crate) fn entry_id(goal_id: &str, date: NaiveDate) -> String {
        format!("progress-{}-{}", goal_id, date.format("%Y-%m-%d"))
    }
}

/// Heat-map intensity classification for one calendar date.
///
/// The rendering layer depends on this mapping to colour its cells, so the
/// ratio boundaries (1.0 and 1.5) are part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatLevel {
    /// No entry recorded for the date.
    NoData,
    /// An entry exists but did not reach completion.
    Missed,
    /// Completed at or under target (ratio <= 1.0).
    Completed,
    /// Completed over target (1.0 < ratio <= 1.5).
    OverTarget,
    /// Completed well over target (ratio > 1.5).
    WellOverTarget,
}

impl HeatLevel {
    /// Classifies a date's entry (or its absence) against the goal's target.
    pub fn classify(goal: &Goal, entry: Option<&ProgressEntry>) -> HeatLevel {
        let Some(entry) = entry else {
            return HeatLevel::NoData;
        };
        if !entry.completed {
            return HeatLevel::Missed;
        }
        let ratio = entry.value / goal.effective_target();
        if ratio <= 1.0 {
            HeatLevel::Completed
        } else if ratio <= 1.5 {
            HeatLevel::OverTarget
        } else {
            HeatLevel::WellOverTarget
        }
    }

    /// 0-4 scale the heat-map renders, darkest last.
    pub fn intensity(&self) -> u8 {
        match self {
            HeatLevel::NoData => 0,
            HeatLevel::Missed => 1,
            HeatLevel::Completed => 2,
            HeatLevel::OverTarget => 3,
            HeatLevel::WellOverTarget => 4,
        }
    }
}
