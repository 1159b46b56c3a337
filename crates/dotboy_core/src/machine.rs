//! The DMG machine: memory map, cartridge, timer, PPU, and the composition
//! root that steps them together.

mod bus;
mod cartridge;
mod gameboy;
mod io;
mod joypad;
mod ppu;
mod serial;
mod timer;

pub use bus::GameBoyBus;
pub use cartridge::CartridgeKind;
pub use gameboy::{GameBoy, SessionOptions, TraceEntry, CYCLES_PER_FRAME};
pub use joypad::Button;
pub use ppu::{FrameBuffer, FrameSink, LcdMode, Ppu};
pub use timer::Timer;

/// Total addressable memory for the Game Boy (64 KiB).
const MEMORY_SIZE: usize = 0x10000;
