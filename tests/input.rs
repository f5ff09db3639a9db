use hush::direction::Direction;
use hush::input::{translate_key, Binding, Bindings, HeldDirections, InputEvent, SimpleKeyEvent};
use sdl2::keyboard::Keycode;
use speculoos::prelude::*;

mod keyboard_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arrow_and_wasd_keys_press_directions() {
        let bindings = Bindings::default();
        let cases = [
            (Keycode::Up, Direction::Up),
            (Keycode::W, Direction::Up),
            (Keycode::Down, Direction::Down),
            (Keycode::S, Direction::Down),
            (Keycode::Left, Direction::Left),
            (Keycode::A, Direction::Left),
            (Keycode::Right, Direction::Right),
            (Keycode::D, Direction::Right),
        ];

        for (key, direction) in cases {
            assert_eq!(
                translate_key(&bindings, SimpleKeyEvent::KeyDown(key)),
                Some(InputEvent::KeyDown(direction))
            );
            assert_eq!(
                translate_key(&bindings, SimpleKeyEvent::KeyUp(key)),
                Some(InputEvent::KeyUp(direction))
            );
        }
    }

    #[test]
    fn quit_keys_emit_quit() {
        let bindings = Bindings::default();
        assert_that(&translate_key(&bindings, SimpleKeyEvent::KeyDown(Keycode::Escape))).is_equal_to(Some(InputEvent::Quit));
        assert_that(&translate_key(&bindings, SimpleKeyEvent::KeyDown(Keycode::Q))).is_equal_to(Some(InputEvent::Quit));
    }

    #[test]
    fn mute_key_emits_toggle() {
        let bindings = Bindings::default();
        assert_eq!(bindings.get(Keycode::M), Some(Binding::Mute));
        assert_that(&translate_key(&bindings, SimpleKeyEvent::KeyDown(Keycode::M))).is_equal_to(Some(InputEvent::ToggleMute));
    }

    #[test]
    fn releasing_non_movement_key_emits_nothing() {
        let bindings = Bindings::default();
        assert_that(&translate_key(&bindings, SimpleKeyEvent::KeyUp(Keycode::Escape))).is_none();
        assert_that(&translate_key(&bindings, SimpleKeyEvent::KeyUp(Keycode::M))).is_none();
    }

    #[test]
    fn unbound_key_emits_nothing() {
        let bindings = Bindings::default();
        assert_that(&translate_key(&bindings, SimpleKeyEvent::KeyDown(Keycode::Z))).is_none();
        assert_that(&translate_key(&bindings, SimpleKeyEvent::KeyUp(Keycode::Z))).is_none();
    }
}

mod held_direction_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_direction_has_its_own_flag() {
        let flags: Vec<HeldDirections> = Direction::DIRECTIONS.into_iter().map(HeldDirections::from).collect();
        assert_eq!(flags.iter().fold(HeldDirections::empty(), |acc, f| acc | *f), HeldDirections::all());
    }

    #[test]
    fn directions_iterates_only_held_flags() {
        let held = HeldDirections::UP | HeldDirections::RIGHT;
        assert_eq!(held.directions().collect::<Vec<_>>(), vec![Direction::Up, Direction::Right]);
        assert_that(&HeldDirections::empty().directions().count()).is_equal_to(0);
    }
}
