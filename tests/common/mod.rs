#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;

use achievo_core::{
    Clock, FixedClock, GoalFrequency, GoalStore, GoalType, NewGoal, ProgressLedger,
    ProgressLedgerTrait, TrackingUnit,
};

pub const USER_ID: &str = "user-1";

pub struct Fixture {
    pub clock: Arc<FixedClock>,
    pub goals: Arc<GoalStore>,
    pub ledger: ProgressLedger<GoalStore>,
}

/// Fixture pinned to an arbitrary but fixed Monday.
pub fn fixture() -> Fixture {
    fixture_at(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
}

pub fn fixture_at(today: NaiveDate) -> Fixture {
    let clock = Arc::new(FixedClock::at_date(today));
    let goals = Arc::new(GoalStore::new(USER_ID, clock.clone()));
    let ledger = ProgressLedger::new(goals.clone(), clock.clone());
    Fixture {
        clock,
        goals,
        ledger,
    }
}

pub fn binary_goal(name: &str) -> NewGoal {
    NewGoal {
        id: None,
        name: name.to_string(),
        description: String::new(),
        goal_type: GoalType::Custom,
        icon: "check".to_string(),
        color: "#8B5CF6".to_string(),
        frequency: GoalFrequency::Daily,
        tracking_unit: TrackingUnit::Binary,
        target_value: 1.0,
        custom_days: None,
    }
}

pub fn duration_goal(name: &str, target: f64) -> NewGoal {
    NewGoal {
        id: None,
        name: name.to_string(),
        description: String::new(),
        goal_type: GoalType::Custom,
        icon: "dumbbell".to_string(),
        color: "#10B981".to_string(),
        frequency: GoalFrequency::Daily,
        tracking_unit: TrackingUnit::Duration,
        target_value: target,
        custom_days: None,
    }
}

/// Logs a completed entry on each of `days` consecutive days starting at the
/// clock's current date, leaving the clock on the last logged day.
pub fn build_streak(fx: &Fixture, goal_id: &str, days: u32, value: f64) {
    assert!(days > 0);
    for day in 0..days {
        if day > 0 {
            fx.clock.advance_days(1);
        }
        fx.ledger
            .log_progress(goal_id, fx.clock.today(), value, None)
            .unwrap();
    }
}
