use hush::config::MusicTimings;
use hush::game::music::{MusicManager, MusicPhase, MusicTransition};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

fn manager(seed: u64, now: u64) -> MusicManager<rand::rngs::StdRng> {
    MusicManager::new(MusicTimings::default(), common::rng(seed), now)
}

#[test]
fn test_starts_playing_with_long_interval() {
    let music = manager(1, 500);

    assert_that(&music.is_playing()).is_true();
    assert_eq!(music.phase(), MusicPhase::Playing);
    assert_eq!(music.last_transition(), 500);
    assert_that(&(10_000..20_000).contains(&music.current_interval())).is_true();
}

#[test]
fn test_no_transition_until_interval_exceeded() {
    let mut music = manager(2, 0);
    let interval = music.current_interval();

    assert_eq!(music.update(interval - 1), None);
    assert_eq!(music.update(interval), None);
    assert_that(&music.is_playing()).is_true();

    assert_eq!(music.update(interval + 1), Some(MusicTransition::Stopped));
    assert_that(&music.is_playing()).is_false();
    assert_eq!(music.last_transition(), interval + 1);
    assert_that(&(3_000..7_000).contains(&music.current_interval())).is_true();
}

#[test]
fn test_stopped_phase_resumes_with_long_interval() {
    let mut music = manager(3, 0);
    let stop_at = music.next_transition();
    assert_eq!(music.update(stop_at), Some(MusicTransition::Stopped));

    let resume_at = music.next_transition();
    assert_eq!(music.update(resume_at - 1), None);
    assert_eq!(music.update(resume_at), Some(MusicTransition::Resumed));
    assert_eq!(music.phase(), MusicPhase::Playing);
    assert_that(&(10_000..20_000).contains(&music.current_interval())).is_true();
}

#[test]
fn test_one_transition_per_update_even_after_long_gap() {
    let mut music = manager(4, 0);

    // Far past both phases: only the next phase is entered
    assert_eq!(music.update(1_000_000), Some(MusicTransition::Stopped));
    assert_eq!(music.phase(), MusicPhase::Stopped);
    assert_eq!(music.update(1_000_001), None);
}

#[test]
fn test_cycle_alternates_and_phase_lengths_stay_in_range() {
    let mut music = manager(5, 0);
    let mut expected = MusicTransition::Stopped;
    let mut phase_start = 0u64;
    let mut interval = music.current_interval();
    let mut transitions = 0;

    for now in 0..=300_000u64 {
        let Some(transition) = music.update(now) else {
            continue;
        };

        assert_eq!(transition, expected, "phase skipped at {now}ms");
        // Ticking every millisecond, a phase ends on the first tick past its interval
        assert_eq!(now - phase_start, interval + 1);

        let range = match transition {
            MusicTransition::Stopped => 3_000..7_000,
            MusicTransition::Resumed => 10_000..20_000,
        };
        assert!(range.contains(&music.current_interval()), "interval {} outside {range:?}", music.current_interval());

        expected = match transition {
            MusicTransition::Stopped => MusicTransition::Resumed,
            MusicTransition::Resumed => MusicTransition::Stopped,
        };
        phase_start = now;
        interval = music.current_interval();
        transitions += 1;
    }

    // 300s covers at least 300 / (20 + 7) full cycles
    assert_that(&transitions).is_greater_than_or_equal_to(22);
}

#[test]
fn test_same_seed_same_schedule() {
    let mut a = manager(99, 0);
    let mut b = manager(99, 0);

    for now in (0..200_000u64).step_by(16) {
        assert_eq!(a.update(now), b.update(now));
    }
    assert_eq!(a.current_interval(), b.current_interval());
}

#[test]
fn test_custom_timings_are_respected() {
    let timings = MusicTimings {
        playing: 100..101,
        stopped: 50..51,
    };
    let mut music = MusicManager::new(timings, common::rng(0), 0);

    assert_eq!(music.current_interval(), 100);
    assert_eq!(music.update(101), Some(MusicTransition::Stopped));
    assert_eq!(music.current_interval(), 50);
    assert_eq!(music.update(152), Some(MusicTransition::Resumed));
}
