use dotboy_common::key::Key;

/// The eight DMG buttons.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

/// Which P1 line group a button is wired to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum Group {
    /// Selected when P1 bit 4 is low.
    Dpad,
    /// Selected when P1 bit 5 is low.
    Action,
}

impl Button {
    /// Line group and bit (0-3) of the button within P1's low nibble.
    pub(super) fn line(self) -> (Group, u8) {
        match self {
            Button::Right => (Group::Dpad, 0),
            Button::Left => (Group::Dpad, 1),
            Button::Up => (Group::Dpad, 2),
            Button::Down => (Group::Dpad, 3),
            Button::A => (Group::Action, 0),
            Button::B => (Group::Action, 1),
            Button::Select => (Group::Action, 2),
            Button::Start => (Group::Action, 3),
        }
    }

    /// Default host mapping: A/S are A/B, Enter is Start, Space is Select and
    /// the arrows are the d-pad.
    pub fn from_key(key: Key) -> Button {
        match key {
            Key::Right => Button::Right,
            Key::Left => Button::Left,
            Key::Up => Button::Up,
            Key::Down => Button::Down,
            Key::A => Button::A,
            Key::S => Button::B,
            Key::Enter => Button::Start,
            Key::Space => Button::Select,
        }
    }
}
