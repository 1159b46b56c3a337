//! Scanline PPU.
//!
//! Timing is tracked per scanline: a dot counter advances with the CPU's
//! cycles, each 456 dots completes a line, and a visible line is rendered in
//! one go when it completes. The mode reported in STAT is derived from the
//! dot position within the current line.

mod frame;
mod registers;
mod render;

pub use frame::{FrameBuffer, FrameSink};
use registers::LcdRegisters;

use super::io::{LY, STAT};
use super::GameBoyBus;
use crate::interrupts::Interrupts;
use crate::SCREEN_HEIGHT;

/// Dots in one scanline, including HBlank.
pub const DOTS_PER_LINE: u32 = 456;
/// Scanlines per frame, including the ten VBlank lines.
pub const LINES_PER_FRAME: u8 = 154;
/// Dots spent in OAM search at the start of a visible line.
const OAM_SEARCH_DOTS: u32 = 80;
/// Dot at which pixel transfer ends and HBlank begins.
const HBLANK_START: u32 = 252;

/// The two-bit mode reported in STAT bits 0-1.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum LcdMode {
    #[default]
    HBlank = 0,
    VBlank = 1,
    OamSearch = 2,
    Transfer = 3,
}

impl LcdMode {
    fn for_position(line: u8, dots: u32) -> Self {
        if usize::from(line) >= SCREEN_HEIGHT {
            LcdMode::VBlank
        } else if dots < OAM_SEARCH_DOTS {
            LcdMode::OamSearch
        } else if dots < HBLANK_START {
            LcdMode::Transfer
        } else {
            LcdMode::HBlank
        }
    }

    /// STAT bit that routes this mode onto the STAT interrupt line.
    fn stat_select(self) -> u8 {
        match self {
            LcdMode::HBlank => 0x08,
            LcdMode::VBlank => 0x10,
            LcdMode::OamSearch => 0x20,
            LcdMode::Transfer => 0x00,
        }
    }
}

pub struct Ppu {
    line: u8,
    dots: u32,
    mode: LcdMode,
    /// Last level of the ORed STAT interrupt sources.
    stat_line: bool,
    frame: FrameBuffer,
    frame_ready: bool,
    /// Raw background/window color index per column of the line being drawn.
    bg_index: [u8; crate::SCREEN_WIDTH],
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}

impl Ppu {
    pub fn new() -> Self {
        Self {
            line: 0,
            dots: 0,
            mode: LcdMode::OamSearch,
            stat_line: false,
            frame: FrameBuffer::new(),
            frame_ready: false,
            bg_index: [0; crate::SCREEN_WIDTH],
        }
    }

    #[inline]
    pub fn line(&self) -> u8 {
        self.line
    }

    #[inline]
    pub fn mode(&self) -> LcdMode {
        self.mode
    }

    #[inline]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Clear and return the "frame completed" latch set on entering VBlank.
    pub fn take_frame_ready(&mut self) -> bool {
        std::mem::take(&mut self.frame_ready)
    }

    /// Advance by `cycles` dots, rendering every visible line that completes.
    pub fn advance(&mut self, cycles: u32, bus: &mut GameBoyBus) {
        let regs = LcdRegisters::snapshot(bus);

        if !regs.lcd_enabled() {
            self.line = 0;
            self.dots = 0;
            self.mode = LcdMode::HBlank;
            self.stat_line = false;
            bus.io_write(LY, 0);
            bus.io_write(STAT, bus.io_read(STAT) & 0x78);
            return;
        }

        self.dots += cycles;
        while self.dots >= DOTS_PER_LINE {
            self.dots -= DOTS_PER_LINE;
            if usize::from(self.line) < SCREEN_HEIGHT {
                self.render_line(self.line, &regs, bus);
            }
            self.line = (self.line + 1) % LINES_PER_FRAME;
            if usize::from(self.line) == SCREEN_HEIGHT {
                bus.request_interrupt(Interrupts::VBLANK);
                self.frame_ready = true;
                log::trace!("vblank");
            }
        }

        self.mode = LcdMode::for_position(self.line, self.dots);
        self.update_stat(&regs, bus);
    }

    /// Publish LY and the STAT mode/coincidence bits, and raise the STAT
    /// interrupt on a rising edge of the combined source line.
    fn update_stat(&mut self, regs: &LcdRegisters, bus: &mut GameBoyBus) {
        let coincidence = self.line == regs.lyc;
        let selects = regs.stat & 0x78;
        let stat = selects | (u8::from(coincidence) << 2) | self.mode as u8;
        bus.io_write(LY, self.line);
        bus.io_write(STAT, stat);

        let line = (coincidence && selects & 0x40 != 0) || selects & self.mode.stat_select() != 0;
        if line && !self.stat_line {
            bus.request_interrupt(Interrupts::LCD_STAT);
            log::trace!("stat edge: LY={} mode={:?} STAT={stat:#04X}", self.line, self.mode);
        }
        self.stat_line = line;
    }
}
