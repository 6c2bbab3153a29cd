use std::sync::Arc;

use achievo_core::{
    AchievementEvaluator, AchievementTier, Clock, GoalStoreTrait, ProgressLedgerTrait,
};

mod common;

fn evaluator(fx: &common::Fixture) -> AchievementEvaluator<achievo_core::GoalStore> {
    AchievementEvaluator::new(fx.goals.clone(), fx.clock.clone(), common::USER_ID)
}

#[test]
fn catalog_starts_fully_locked() {
    let fx = common::fixture();
    let evaluator = evaluator(&fx);

    let all = evaluator.list().unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.iter().all(|a| !a.unlocked && a.unlocked_at.is_none()));
    assert!(evaluator.get_unlocked().unwrap().is_empty());
    assert_eq!(evaluator.get_in_progress().unwrap().len(), 4);
}

#[test]
fn check_with_no_goals_unlocks_nothing() {
    let fx = common::fixture();
    let evaluator = evaluator(&fx);

    assert!(evaluator.check_new_achievements().unwrap().is_empty());
    assert!(evaluator.get_unlocked().unwrap().is_empty());
}

#[test]
fn reaching_seven_unlocks_bronze_and_silver_in_one_call() {
    let fx = common::fixture();
    let evaluator = evaluator(&fx);
    let goal = fx.goals.create(common::binary_goal("Meditate")).unwrap();

    common::build_streak(&fx, &goal.id, 7, 1.0);

    let unlocked = evaluator.check_new_achievements().unwrap();
    let tiers: Vec<_> = unlocked.iter().map(|a| a.tier).collect();
    assert_eq!(tiers, vec![AchievementTier::Bronze, AchievementTier::Silver]);
    assert!(unlocked.iter().all(|a| a.unlocked && a.unlocked_at.is_some()));

    // Idempotent: a second scan with no new progress unlocks nothing.
    assert!(evaluator.check_new_achievements().unwrap().is_empty());
    assert_eq!(evaluator.get_unlocked().unwrap().len(), 2);
}

#[test]
fn highest_streak_across_goals_drives_unlocks() {
    let fx = common::fixture();
    let evaluator = evaluator(&fx);
    let short = fx.goals.create(common::binary_goal("Short")).unwrap();
    let long = fx.goals.create(common::binary_goal("Long")).unwrap();

    fx.ledger
        .log_progress(&short.id, fx.clock.today(), 1.0, None)
        .unwrap();
    common::build_streak(&fx, &long.id, 3, 1.0);

    let unlocked = evaluator.check_new_achievements().unwrap();
    assert_eq!(unlocked.len(), 1);
    assert_eq!(unlocked[0].tier, AchievementTier::Bronze);
}

#[test]
fn locked_achievements_report_display_progress() {
    let fx = common::fixture();
    let evaluator = evaluator(&fx);
    let goal = fx.goals.create(common::binary_goal("Meditate")).unwrap();

    common::build_streak(&fx, &goal.id, 7, 1.0);
    evaluator.check_new_achievements().unwrap();

    let in_progress = evaluator.get_in_progress().unwrap();
    let gold = in_progress
        .iter()
        .find(|a| a.tier == AchievementTier::Gold)
        .unwrap();
    assert_eq!(gold.progress, Some(7 * 100 / 30));
    assert_eq!(gold.goal, Some(30));

    let platinum = in_progress
        .iter()
        .find(|a| a.tier == AchievementTier::Platinum)
        .unwrap();
    assert_eq!(platinum.progress, Some(7));
}

#[test]
fn unlock_timestamp_is_set_once_and_never_reset() {
    let fx = common::fixture();
    let evaluator = evaluator(&fx);
    let goal = fx.goals.create(common::binary_goal("Meditate")).unwrap();

    common::build_streak(&fx, &goal.id, 3, 1.0);
    let unlocked = evaluator.check_new_achievements().unwrap();
    assert_eq!(unlocked.len(), 1);
    let first_unlock_at = unlocked[0].unlocked_at.unwrap();

    // Streak collapses afterwards; the badge stays unlocked and keeps its
    // original timestamp through later scans on later days.
    fx.clock.advance_days(5);
    fx.ledger
        .log_progress(&goal.id, fx.clock.today(), 1.0, None)
        .unwrap();
    evaluator.check_new_achievements().unwrap();

    let bronze = evaluator
        .get_unlocked()
        .unwrap()
        .into_iter()
        .find(|a| a.tier == AchievementTier::Bronze)
        .unwrap();
    assert!(bronze.unlocked);
    assert_eq!(bronze.unlocked_at, Some(first_unlock_at));
}

#[test]
fn evaluator_shares_the_goal_store() {
    // The evaluator reads streaks through the same Arc the ledger writes to.
    let fx = common::fixture();
    let evaluator = AchievementEvaluator::new(
        Arc::clone(&fx.goals),
        fx.clock.clone(),
        common::USER_ID,
    );
    let goal = fx.goals.create(common::binary_goal("Meditate")).unwrap();

    common::build_streak(&fx, &goal.id, 3, 1.0);
    assert_eq!(evaluator.check_new_achievements().unwrap().len(), 1);
}
