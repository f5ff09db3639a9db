use std::path::PathBuf;

use hush::config::{GameConfig, Options};
use hush::constants::{ARENA_SIZE, COIN_COUNT, JUMPSCARE_ARM_DELAY, JUMPSCARE_HOLD, MUSIC_PLAYING_RANGE, MUSIC_STOPPED_RANGE};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_default_config_uses_constants() {
    let config = GameConfig::default();
    assert_eq!(config.arena, ARENA_SIZE);
    assert_eq!(config.coin_count, COIN_COUNT);
    assert_eq!(config.music.playing, MUSIC_PLAYING_RANGE);
    assert_eq!(config.music.stopped, MUSIC_STOPPED_RANGE);
    assert_eq!(config.jumpscare.arm_delay, JUMPSCARE_ARM_DELAY);
    assert_eq!(config.jumpscare.hold, JUMPSCARE_HOLD);
}

#[test]
fn test_no_arguments_gives_defaults() {
    let options = Options::parse(Vec::<String>::new());
    assert_eq!(options, Options::default());
    assert_eq!(options.assets, PathBuf::from("assets"));
}

#[test]
fn test_all_options_parsed() {
    let options = Options::parse(["--assets", "/opt/hush/assets", "--seed", "42", "--muted"]);
    assert_eq!(options.assets, PathBuf::from("/opt/hush/assets"));
    assert_that(&options.seed).is_equal_to(Some(42));
    assert_that(&options.muted).is_true();
}

#[test]
fn test_short_flags() {
    let options = Options::parse(["-s", "7", "-m", "-a", "data"]);
    assert_eq!(options.seed, Some(7));
    assert_eq!(options.assets, PathBuf::from("data"));
    assert_that(&options.muted).is_true();
}

#[test]
fn test_invalid_and_unknown_arguments_are_ignored() {
    let options = Options::parse(["--seed", "banana", "--fullscreen", "--seed"]);
    assert_eq!(options, Options::default());
}
