use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Goal category, used by the UI to pick integrations and artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Github,
    Leetcode,
    Custom,
}

/// How often the goal is expected to be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalFrequency {
    Daily,
    Weekdays,
    Weekends,
    /// Explicit weekday set carried in `custom_days` (0 = Sunday).
    Custom,
}

/// How progress values are interpreted when deriving completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingUnit {
    /// Done / not done. Target value is ignored and treated as 1.
    Binary,
    /// Number of repetitions against `target_value`.
    Count,
    /// Minutes against `target_value`.
    Duration,
}

/// Domain model for a tracked habit.
///
/// Streak fields are owned by the progress ledger: they change only through
/// [`StreakUpdate`], never through a [`GoalUpdate`] merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub icon: String,
    pub color: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub frequency: GoalFrequency,
    pub tracking_unit: TrackingUnit,
    pub target_value: f64,
    /// Weekday indices 0-6 (0 = Sunday), only meaningful for `custom` frequency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_days: Option<Vec<u8>>,
    pub current_streak: u32,
    pub longest_streak: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_completed: Option<NaiveDate>,
}

impl Goal {
    /// Target the logged value is compared against. Binary goals always
    /// complete at exactly 1 regardless of the stored target.
    pub fn effective_target(&self) -> f64 {
        match self.tracking_unit {
            TrackingUnit::Binary => 1.0,
            TrackingUnit::Count | TrackingUnit::Duration => self.target_value,
        }
    }

    /// Unit-specific completion rule for a logged value.
    pub fn completes(&self, value: f64) -> bool {
        match self.tracking_unit {
            TrackingUnit::Binary => value == 1.0,
            TrackingUnit::Count | TrackingUnit::Duration => value >= self.target_value,
        }
    }

    /// Whether the frequency policy schedules this goal on `date`.
    pub fn is_scheduled_on(&self, date: NaiveDate) -> bool {
        let weekday = date.weekday();
        match self.frequency {
            GoalFrequency::Daily => true,
            GoalFrequency::Weekdays => weekday.num_days_from_monday() < 5,
            GoalFrequency::Weekends => weekday.num_days_from_monday() >= 5,
            GoalFrequency::Custom => {
                let index = weekday.num_days_from_sunday() as u8;
                self.custom_days
                    .as_ref()
                    .is_some_and(|days| days.contains(&index))
            }
        }
    }
}

/// Input model for creating a new goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGoal {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub icon: String,
    pub color: String,
    pub frequency: GoalFrequency,
    pub tracking_unit: TrackingUnit,
    pub target_value: f64,
    #[serde(default)]
    pub custom_days: Option<Vec<u8>>,
}

impl NewGoal {
    /// Validates the new goal data
    pub fn validate(&self) -> Result<()> {
        validate_definition(
            &self.name,
            self.tracking_unit,
            self.target_value,
            self.frequency,
            self.custom_days.as_deref(),
        )
    }
}

/// Partial update merged into an existing goal. Absent fields keep their
/// current value; streak counters are not part of the update surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub goal_type: Option<GoalType>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub frequency: Option<GoalFrequency>,
    pub tracking_unit: Option<TrackingUnit>,
    pub target_value: Option<f64>,
    pub custom_days: Option<Vec<u8>>,
}

impl GoalUpdate {
    pub fn apply_to(&self, goal: &mut Goal) {
        if let Some(name) = &self.name {
            goal.name = name.clone();
        }
        if let Some(description) = &self.description {
            goal.description = description.clone();
        }
        if let Some(goal_type) = self.goal_type {
            goal.goal_type = goal_type;
        }
        if let Some(icon) = &self.icon {
            goal.icon = icon.clone();
        }
        if let Some(color) = &self.color {
            goal.color = color.clone();
        }
        if let Some(frequency) = self.frequency {
            goal.frequency = frequency;
        }
        if let Some(tracking_unit) = self.tracking_unit {
            goal.tracking_unit = tracking_unit;
        }
        if let Some(target_value) = self.target_value {
            goal.target_value = target_value;
        }
        if let Some(custom_days) = &self.custom_days {
            goal.custom_days = Some(custom_days.clone());
        }
    }
}

/// Result of a streak recompute, written back by the ledger in one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_completed: NaiveDate,
}

pub(crate) fn validate_definition(
    name: &str,
    tracking_unit: TrackingUnit,
    target_value: f64,
    frequency: GoalFrequency,
    custom_days: Option<&[u8]>,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    if tracking_unit != TrackingUnit::Binary && target_value <= 0.0 {
        return Err(ValidationError::NonPositiveTarget(target_value).into());
    }
    if frequency == GoalFrequency::Custom {
        match custom_days {
            None | Some([]) => {
                return Err(ValidationError::MissingField("custom_days".to_string()).into());
            }
            Some(days) => {
                if let Some(bad) = days.iter().find(|d| **d > 6) {
                    return Err(ValidationError::InvalidInput(format!(
                        "Weekday index out of range (0-6): {}",
                        bad
                    ))
                    .into());
                }
            }
        }
    }
    Ok(())
}
