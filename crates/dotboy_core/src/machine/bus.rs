use super::cartridge::{Cartridge, CartridgeKind};
use super::serial::Serial;
use super::MEMORY_SIZE;
use crate::cpu::Bus;
use crate::interrupts::Interrupts;
use crate::Diagnostic;

mod dma;
mod init;
mod joypad;
mod mmio;

/// Length of the region a boot image overlays at 0x0000.
const BOOT_OVERLAY_LEN: usize = 0x100;

/// The DMG memory map.
///
/// Owns everything the CPU can address: the cartridge, a flat backing array
/// for RAM and I/O registers, and the few registers whose reads or writes
/// have side effects (joypad, serial, IF/IE, DMA, boot overlay control).
/// The timer and PPU reach their registers through the raw `io_*` accessors
/// so their own updates bypass the CPU-facing write rules.
pub struct GameBoyBus {
    pub(crate) memory: [u8; MEMORY_SIZE],
    cartridge: Cartridge,
    boot_rom: Option<Vec<u8>>,
    boot_active: bool,
    pub(crate) serial: Serial,
    if_reg: u8,
    ie_reg: u8,
    // Joypad: P1 selection bits 4-5 as last written, plus pressed masks
    // (bit = 1 means pressed) for the d-pad and action groups.
    joyp_select: u8,
    joyp_buttons: u8,
    joyp_dpad: u8,
    // Set by a CPU write to DIV; the timer clears its divider on the next
    // advance.
    div_reset: bool,
    diagnostics: Vec<Diagnostic>,
}

impl GameBoyBus {
    /// Map `rom` and, if given, a boot image overlaying 0x0000-0x00FF.
    ///
    /// Without a boot image the I/O window is initialised to the values the
    /// boot ROM would have left behind.
    pub fn new(rom: Vec<u8>, boot_rom: Option<Vec<u8>>) -> Self {
        let (cartridge, unknown_code) = Cartridge::from_rom(rom);
        let mut bus = Self {
            memory: [0; MEMORY_SIZE],
            cartridge,
            boot_active: boot_rom.is_some(),
            boot_rom,
            serial: Serial::default(),
            if_reg: 0,
            ie_reg: 0,
            joyp_select: 0x30,
            joyp_buttons: 0,
            joyp_dpad: 0,
            div_reset: false,
            diagnostics: Vec::new(),
        };
        bus.randomize_internal_ram();
        if !bus.boot_active {
            bus.apply_dmg_initial_io_state();
        }
        if let Some(code) = unknown_code {
            bus.report(Diagnostic::UnknownCartridgeType { code });
        }
        bus
    }

    pub fn cartridge_kind(&self) -> CartridgeKind {
        self.cartridge.kind()
    }

    /// Whether the boot image is still mapped over the cartridge.
    pub fn boot_overlay_active(&self) -> bool {
        self.boot_active
    }

    /// Side-effect-free read of any address, as the CPU would see it.
    pub fn read(&self, addr: u16) -> u8 {
        if let Some(byte) = self.boot_byte(addr) {
            return byte;
        }
        self.read_mapped(addr)
    }

    /// CPU-facing write with all register side effects.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.write_mapped(addr, value);
    }

    fn boot_byte(&self, addr: u16) -> Option<u8> {
        if !self.boot_active {
            return None;
        }
        let boot = self.boot_rom.as_deref()?;
        let index = usize::from(addr);
        if index < BOOT_OVERLAY_LEN.min(boot.len()) {
            Some(boot[index])
        } else {
            None
        }
    }

    /// Raw register read that skips every intercept.
    #[inline]
    pub(crate) fn io_read(&self, addr: u16) -> u8 {
        self.memory[usize::from(addr)]
    }

    /// Raw register write that skips every intercept.
    #[inline]
    pub(crate) fn io_write(&mut self, addr: u16, value: u8) {
        self.memory[usize::from(addr)] = value;
    }

    /// Whether the CPU wrote DIV since the last call.
    #[inline]
    pub(crate) fn take_div_reset(&mut self) -> bool {
        std::mem::take(&mut self.div_reset)
    }

    /// Set request bits in IF.
    pub fn request_interrupt(&mut self, interrupts: Interrupts) {
        self.if_reg |= interrupts.bits();
    }

    /// Video RAM, 0x8000-0x9FFF.
    pub(crate) fn vram(&self) -> &[u8] {
        &self.memory[0x8000..0xA000]
    }

    /// Object attribute memory, 0xFE00-0xFE9F.
    pub(crate) fn oam(&self) -> &[u8] {
        &self.memory[0xFE00..0xFEA0]
    }

    /// Bytes sent over the serial port so far.
    pub fn serial_output(&self) -> &[u8] {
        &self.serial.output
    }

    /// Take all diagnostics reported since the last call.
    pub fn drain_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl Bus for GameBoyBus {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.read(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.write(addr, value);
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}
