//! Keyboard input: raw SDL events are reduced to [`InputEvent`]s once per tick.

use std::collections::HashMap;

use bitflags::bitflags;
use sdl2::{event::Event, keyboard::Keycode, EventPump};
use smallvec::SmallVec;

use crate::direction::Direction;

/// What the game reacts to. Everything else SDL reports is dropped during polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Direction),
    KeyUp(Direction),
    /// Handled by the application wrapper; the game ignores it.
    ToggleMute,
}

bitflags! {
    /// The movement keys currently held down.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HeldDirections: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl From<Direction> for HeldDirections {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => HeldDirections::UP,
            Direction::Down => HeldDirections::DOWN,
            Direction::Left => HeldDirections::LEFT,
            Direction::Right => HeldDirections::RIGHT,
        }
    }
}

impl HeldDirections {
    /// The held directions, in `Direction::DIRECTIONS` order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::DIRECTIONS
            .into_iter()
            .filter(move |direction| self.contains((*direction).into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Move(Direction),
    Quit,
    Mute,
}

#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, Binding>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Player movement
        key_bindings.insert(Keycode::Up, Binding::Move(Direction::Up));
        key_bindings.insert(Keycode::W, Binding::Move(Direction::Up));
        key_bindings.insert(Keycode::Down, Binding::Move(Direction::Down));
        key_bindings.insert(Keycode::S, Binding::Move(Direction::Down));
        key_bindings.insert(Keycode::Left, Binding::Move(Direction::Left));
        key_bindings.insert(Keycode::A, Binding::Move(Direction::Left));
        key_bindings.insert(Keycode::Right, Binding::Move(Direction::Right));
        key_bindings.insert(Keycode::D, Binding::Move(Direction::Right));

        key_bindings.insert(Keycode::M, Binding::Mute);
        key_bindings.insert(Keycode::Escape, Binding::Quit);
        key_bindings.insert(Keycode::Q, Binding::Quit);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn get(&self, key: Keycode) -> Option<Binding> {
        self.key_bindings.get(&key).copied()
    }
}

/// A keyboard event stripped of everything but the key, so translation can run without SDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleKeyEvent {
    KeyDown(Keycode),
    KeyUp(Keycode),
}

/// Maps one key event through the bindings. Releasing a non-movement key does nothing.
pub fn translate_key(bindings: &Bindings, event: SimpleKeyEvent) -> Option<InputEvent> {
    match event {
        SimpleKeyEvent::KeyDown(key) => bindings.get(key).map(|binding| match binding {
            Binding::Move(direction) => InputEvent::KeyDown(direction),
            Binding::Quit => InputEvent::Quit,
            Binding::Mute => InputEvent::ToggleMute,
        }),
        SimpleKeyEvent::KeyUp(key) => match bindings.get(key) {
            Some(Binding::Move(direction)) => Some(InputEvent::KeyUp(direction)),
            _ => None,
        },
    }
}

/// Drains the SDL event queue into the events the game cares about.
pub fn poll(pump: &mut EventPump, bindings: &Bindings) -> SmallVec<[InputEvent; 8]> {
    pump.poll_iter()
        .filter_map(|event| match event {
            Event::Quit { .. } => Some(InputEvent::Quit),
            // Key repeats carry no new information for held-key tracking
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => translate_key(bindings, SimpleKeyEvent::KeyDown(key)),
            Event::KeyUp {
                keycode: Some(key),
                repeat: false,
                ..
            } => translate_key(bindings, SimpleKeyEvent::KeyUp(key)),
            _ => None,
        })
        .collect()
}
