pub mod cpu;
pub mod diagnostics;
pub mod interrupts;
pub mod loader;
pub mod machine;

pub use diagnostics::Diagnostic;
pub use machine::{Button, FrameBuffer, FrameSink, GameBoy, SessionOptions, TraceEntry};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
