use super::rom_byte;

/// A cartridge without a bank controller: 32 KiB of ROM mapped flat at
/// 0x0000-0x7FFF and, optionally, up to 8 KiB of RAM at 0xA000-0xBFFF.
pub(in crate::machine) struct NoMbc {
    rom: Vec<u8>,
    ram: Vec<u8>,
}

impl NoMbc {
    pub(super) fn new(rom: Vec<u8>, ram_bytes: usize) -> Self {
        Self {
            rom,
            ram: vec![0; ram_bytes.min(0x2000)],
        }
    }

    pub(super) fn has_ram(&self) -> bool {
        !self.ram.is_empty()
    }

    pub(super) fn rom_read(&self, addr: u16) -> u8 {
        rom_byte(&self.rom, usize::from(addr))
    }

    pub(super) fn ram_read(&self, addr: u16) -> u8 {
        let offset = (addr - 0xA000) as usize;
        self.ram.get(offset).copied().unwrap_or(0xFF)
    }

    pub(super) fn ram_write(&mut self, addr: u16, value: u8) {
        let offset = (addr - 0xA000) as usize;
        if let Some(byte) = self.ram.get_mut(offset) {
            *byte = value;
        }
    }
}
