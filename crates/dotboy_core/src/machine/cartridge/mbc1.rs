use super::{rom_byte, RAM_BANK_SIZE, ROM_BANK_SIZE};

/// MBC1 bank controller.
///
/// ROM bank 0 is fixed at 0x0000-0x3FFF. The window at 0x4000-0x7FFF shows
/// the bank formed by two upper bits and a five-bit lower register, where a
/// lower value of 0 always reads as 1. The two-bit register at 0x4000-0x5FFF
/// feeds either the upper ROM bits or the RAM bank, depending on the banking
/// mode latched at 0x6000-0x7FFF.
pub(in crate::machine) struct Mbc1 {
    rom: Vec<u8>,
    ram: Vec<u8>,
    rom_bank_low5: u8,
    rom_bank_high2: u8,
    ram_bank: u8,
    ram_enabled: bool,
    ram_banking_mode: bool,
}

impl Mbc1 {
    pub(super) fn new(rom: Vec<u8>, ram_bytes: usize) -> Self {
        Self {
            rom,
            ram: vec![0; ram_bytes],
            rom_bank_low5: 1,
            rom_bank_high2: 0,
            ram_bank: 0,
            ram_enabled: false,
            ram_banking_mode: false,
        }
    }

    /// Bank currently mapped at 0x4000-0x7FFF. Never zero.
    fn rom_bank(&self) -> usize {
        let low = match self.rom_bank_low5 & 0x1F {
            0 => 1,
            n => n,
        };
        usize::from((self.rom_bank_high2 << 5) | low)
    }

    pub(super) fn rom_read(&self, addr: u16) -> u8 {
        let offset = usize::from(addr & 0x3FFF);
        let bank = if addr < 0x4000 { 0 } else { self.rom_bank() };
        rom_byte(&self.rom, bank * ROM_BANK_SIZE + offset)
    }

    pub(super) fn rom_write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => {
                self.ram_enabled = value & 0x0F == 0x0A;
            }
            0x2000..=0x3FFF => {
                self.rom_bank_low5 = match value & 0x1F {
                    0 => 1,
                    n => n,
                };
            }
            0x4000..=0x5FFF => {
                if self.ram_banking_mode {
                    self.ram_bank = value & 0x03;
                } else {
                    self.rom_bank_high2 = value & 0x03;
                }
            }
            _ => {
                self.ram_banking_mode = value & 0x01 != 0;
            }
        }
    }

    fn ram_offset(&self, addr: u16) -> Option<usize> {
        if !self.ram_enabled || self.ram.is_empty() {
            return None;
        }
        let offset = usize::from(self.ram_bank) * RAM_BANK_SIZE + usize::from(addr - 0xA000);
        Some(offset % self.ram.len())
    }

    pub(super) fn ram_read(&self, addr: u16) -> u8 {
        self.ram_offset(addr).map_or(0xFF, |offset| self.ram[offset])
    }

    pub(super) fn ram_write(&mut self, addr: u16, value: u8) {
        if let Some(offset) = self.ram_offset(addr) {
            self.ram[offset] = value;
        }
    }
}
