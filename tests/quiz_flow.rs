//! Integration tests for the quiz NPC through the world context

use alchemist::alchemy::{AlchemyError, QuizProgress, QuizTier, World};
use alchemist::config::{GameConfig, QuizConfig};

fn world(tier_switching: bool) -> World {
    let quiz = QuizConfig {
        tier_switching,
        ..QuizConfig::default()
    };
    let game = GameConfig {
        rng_seed: Some(2),
        initial_levels: 1,
        ..GameConfig::default()
    };
    World::new(&game, &quiz).unwrap()
}

fn answer_all_correctly(world: &mut World) -> QuizProgress {
    loop {
        let question = world.current_question().expect("question pending");
        let progress = world.answer_quiz(question.correct).unwrap();
        if let QuizProgress::Finished { .. } = progress {
            return progress;
        }
    }
}

#[test]
fn test_beginner_perfect_run_credits_fifteen_gold() {
    let mut world = world(false);
    let greeting = world.start_quiz();
    assert!(greeting.starts_with("Вітаю, новачку!"));

    let progress = answer_all_correctly(&mut world);
    match progress {
        QuizProgress::Finished {
            correct_answers,
            total,
            reward,
            passed,
            farewell,
            ..
        } => {
            assert_eq!(correct_answers, 3);
            assert_eq!(total, 3);
            assert_eq!(reward, 15);
            assert!(passed);
            assert_eq!(farewell, QuizTier::Beginner.farewell(true));
        }
        other => panic!("expected finish, got {:?}", other),
    }
    assert_eq!(world.player.gold, 515);
}

#[test]
fn test_answers_after_completion_are_rejected() {
    let mut world = world(false);
    world.start_quiz();
    answer_all_correctly(&mut world);
    assert!(world.current_question().is_none());
    assert!(matches!(world.answer_quiz(0), Err(AlchemyError::QuizCompleted)));
    assert_eq!(world.player.gold, 515);
}

#[test]
fn test_failing_run_pays_per_correct_answer() {
    let mut world = world(false);
    world.start_quiz();
    // Option 2 is wrong for every beginner question.
    let mut last = None;
    for _ in 0..3 {
        last = Some(world.answer_quiz(2).unwrap());
    }
    match last {
        Some(QuizProgress::Finished { reward, passed, .. }) => {
            assert_eq!(reward, 0);
            assert!(!passed);
        }
        other => panic!("expected finish, got {:?}", other),
    }
    assert_eq!(world.player.gold, 500);
}

#[test]
fn test_tier_frozen_without_switching() {
    let mut world = world(false);
    world.player.level = 6;
    world.start_quiz();
    assert_eq!(world.questioner.tier(), QuizTier::Beginner);
}

#[test]
fn test_tier_follows_level_with_switching() {
    let mut world = world(true);
    world.player.level = 3;
    assert!(world.start_quiz().starts_with("Вітаю, учень!"));
    assert_eq!(world.questioner.total_questions(), 4);

    world.player.level = 5;
    world.start_quiz();
    let progress = answer_all_correctly(&mut world);
    assert!(matches!(progress, QuizProgress::Finished { reward: 150, .. }));
}

#[test]
fn test_restarting_resets_progress() {
    let mut world = world(false);
    world.start_quiz();
    world.answer_quiz(0).unwrap();
    world.start_quiz();
    assert_eq!(world.questioner.position(), 0);
    assert_eq!(world.questioner.correct_answers(), 0);
}
