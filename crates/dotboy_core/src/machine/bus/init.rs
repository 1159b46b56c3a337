use super::GameBoyBus;
use crate::machine::io::{BGP, DIV, DMA, LCDC, STAT, TAC};

/// Sound register values left by the DMG boot ROM, from NR10 (0xFF10).
const SOUND_DEFAULTS: [(u16, u8); 21] = [
    (0xFF10, 0x80),
    (0xFF11, 0xBF),
    (0xFF12, 0xF3),
    (0xFF13, 0xFF),
    (0xFF14, 0xBF),
    (0xFF16, 0x3F),
    (0xFF17, 0x00),
    (0xFF18, 0xFF),
    (0xFF19, 0xBF),
    (0xFF1A, 0x7F),
    (0xFF1B, 0xFF),
    (0xFF1C, 0x9F),
    (0xFF1D, 0xFF),
    (0xFF1E, 0xBF),
    (0xFF20, 0xFF),
    (0xFF21, 0x00),
    (0xFF22, 0x00),
    (0xFF23, 0xBF),
    (0xFF24, 0x77),
    (0xFF25, 0xF3),
    (0xFF26, 0xF1),
];

impl GameBoyBus {
    /// Put the I/O window in the state the DMG boot ROM hands over with.
    pub(super) fn apply_dmg_initial_io_state(&mut self) {
        self.write_joyp(0xCF);
        self.serial.sb = 0x00;
        self.serial.sc = 0x7E;

        self.memory[usize::from(DIV)] = 0xAB;
        self.memory[usize::from(TAC)] = 0xF8;

        // VBlank is already requested when the boot ROM exits.
        self.if_reg = 0x01;
        self.ie_reg = 0x00;

        for (addr, value) in SOUND_DEFAULTS {
            self.memory[usize::from(addr)] = value;
        }

        self.memory[usize::from(LCDC)] = 0x91;
        self.memory[usize::from(STAT)] = 0x85;
        self.memory[usize::from(DMA)] = 0xFF;
        self.memory[usize::from(BGP)] = 0xFC;
    }

    /// Seed WRAM and HRAM from a fixed-seed xorshift32 generator. Real
    /// hardware powers up with noise there; a fixed seed keeps runs
    /// reproducible.
    pub(super) fn randomize_internal_ram(&mut self) {
        let mut x: u32 = 0xC0DE_1234;
        let mut next_byte = || {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x as u8
        };

        for byte in &mut self.memory[0xC000..0xE000] {
            *byte = next_byte();
        }
        for byte in &mut self.memory[0xFF80..0xFFFF] {
            *byte = next_byte();
        }
    }
}
