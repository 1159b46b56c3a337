mod mbc1;
mod no_mbc;

use mbc1::Mbc1;
use no_mbc::NoMbc;

/// Header offset of the cartridge type byte.
pub(super) const TYPE_OFFSET: usize = 0x147;
/// Header offset of the external RAM size byte.
const RAM_SIZE_OFFSET: usize = 0x149;
/// Size of one switchable ROM bank.
const ROM_BANK_SIZE: usize = 0x4000;
/// Size of one external RAM bank.
const RAM_BANK_SIZE: usize = 0x2000;

/// Controller family selected by the cartridge type byte.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CartridgeKind {
    RomOnly,
    RomRam,
    Mbc1,
}

impl CartridgeKind {
    /// Map a header type code onto a supported controller, or `None` if the
    /// code names something this core does not emulate.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(CartridgeKind::RomOnly),
            0x08 | 0x09 => Some(CartridgeKind::RomRam),
            0x01..=0x03 => Some(CartridgeKind::Mbc1),
            _ => None,
        }
    }
}

/// External RAM size in bytes, from the header's RAM size code.
fn ram_size(rom: &[u8]) -> usize {
    match rom.get(RAM_SIZE_OFFSET).copied().unwrap_or(0) {
        0x01 => 0x800,
        0x02 => RAM_BANK_SIZE,
        0x03 => 4 * RAM_BANK_SIZE,
        0x04 => 16 * RAM_BANK_SIZE,
        0x05 => 8 * RAM_BANK_SIZE,
        _ => 0,
    }
}

pub(super) enum Cartridge {
    NoMbc(NoMbc),
    Mbc1(Mbc1),
}

impl Cartridge {
    /// Build the cartridge for `rom`. Returns the raw type code as well when
    /// it was not recognised, in which case the image is mapped without
    /// banking.
    pub(super) fn from_rom(rom: Vec<u8>) -> (Self, Option<u8>) {
        let code = rom.get(TYPE_OFFSET).copied().unwrap_or(0);
        let ram_bytes = ram_size(&rom);
        match CartridgeKind::from_code(code) {
            Some(CartridgeKind::Mbc1) => (Cartridge::Mbc1(Mbc1::new(rom, ram_bytes)), None),
            Some(CartridgeKind::RomRam) => {
                // RAM is always present on these boards even if the header
                // under-reports it.
                let ram = ram_bytes.max(RAM_BANK_SIZE);
                (Cartridge::NoMbc(NoMbc::new(rom, ram)), None)
            }
            Some(CartridgeKind::RomOnly) => (Cartridge::NoMbc(NoMbc::new(rom, 0)), None),
            None => (Cartridge::NoMbc(NoMbc::new(rom, 0)), Some(code)),
        }
    }

    pub(super) fn kind(&self) -> CartridgeKind {
        match self {
            Cartridge::NoMbc(c) if c.has_ram() => CartridgeKind::RomRam,
            Cartridge::NoMbc(_) => CartridgeKind::RomOnly,
            Cartridge::Mbc1(_) => CartridgeKind::Mbc1,
        }
    }

    pub(super) fn rom_read(&self, addr: u16) -> u8 {
        match self {
            Cartridge::NoMbc(c) => c.rom_read(addr),
            Cartridge::Mbc1(c) => c.rom_read(addr),
        }
    }

    pub(super) fn rom_write(&mut self, addr: u16, value: u8) {
        match self {
            // Plain ROM ignores control writes.
            Cartridge::NoMbc(_) => {}
            Cartridge::Mbc1(c) => c.rom_write(addr, value),
        }
    }

    pub(super) fn ram_read(&self, addr: u16) -> u8 {
        match self {
            Cartridge::NoMbc(c) => c.ram_read(addr),
            Cartridge::Mbc1(c) => c.ram_read(addr),
        }
    }

    pub(super) fn ram_write(&mut self, addr: u16, value: u8) {
        match self {
            Cartridge::NoMbc(c) => c.ram_write(addr, value),
            Cartridge::Mbc1(c) => c.ram_write(addr, value),
        }
    }
}

/// Byte at `index` of a ROM image, wrapping past the end of the image.
/// An empty image reads as open bus.
fn rom_byte(rom: &[u8], index: usize) -> u8 {
    if rom.is_empty() {
        0xFF
    } else {
        rom[index % rom.len()]
    }
}
