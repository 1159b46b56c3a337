use super::GameBoyBus;
use crate::interrupts::{Interrupts, IE_ADDR, IF_ADDR};
use crate::machine::io::{BOOT_OFF, DIV, DMA, LY, P1, SB, SC, STAT, TAC};

impl GameBoyBus {
    pub(super) fn read_mapped(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF => self.cartridge.rom_read(addr),
            0xA000..=0xBFFF => self.cartridge.ram_read(addr),

            // Echo RAM mirrors 0xC000-0xDDFF.
            0xE000..=0xFDFF => self.memory[usize::from(addr - 0x2000)],
            0xFEA0..=0xFEFF => 0xFF,

            P1 => self.read_joyp(),
            SB => self.serial.sb,
            SC => self.serial.read_sc(),
            TAC => self.memory[usize::from(addr)] | 0xF8,
            IF_ADDR => self.if_reg | 0xE0,
            STAT => self.memory[usize::from(addr)] | 0x80,
            BOOT_OFF => 0xFF,
            IE_ADDR => self.ie_reg,

            _ => self.memory[usize::from(addr)],
        }
    }

    pub(super) fn write_mapped(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7FFF => self.cartridge.rom_write(addr, value),
            0xA000..=0xBFFF => self.cartridge.ram_write(addr, value),

            0xE000..=0xFDFF => self.memory[usize::from(addr - 0x2000)] = value,
            0xFEA0..=0xFEFF => {}

            P1 => self.write_joyp(value),
            SB => self.serial.sb = value,
            SC => {
                if let Some(byte) = self.serial.write_sc(value) {
                    log::debug!("serial out {byte:#04X} ({:?})", char::from(byte));
                    self.request_interrupt(Interrupts::SERIAL);
                }
            }
            // Any write clears the whole divider, not just the visible byte.
            DIV => {
                self.memory[usize::from(DIV)] = 0;
                self.div_reset = true;
            }
            IF_ADDR => self.if_reg = value & 0x1F,
            // Mode and coincidence bits belong to the PPU.
            STAT => {
                let current = self.memory[usize::from(STAT)];
                self.memory[usize::from(STAT)] = (current & 0x07) | (value & 0x78);
            }
            // LY is read-only to the CPU.
            LY => {}
            DMA => self.do_oam_dma(value),
            BOOT_OFF => {
                if value != 0 && self.boot_active {
                    self.boot_active = false;
                    log::debug!("boot overlay disabled");
                }
            }
            IE_ADDR => self.ie_reg = value,

            _ => self.memory[usize::from(addr)] = value,
        }
    }
}
