/// Host keys that a frontend can forward to an emulated machine.
///
/// Only the keys used by the default DMG mapping are listed; frontends are
/// free to translate whatever input device they poll into these.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    A,
    S,
    Enter,
    Space,
}
