use bitflags::bitflags;

/// Interrupt flag register (IF).
pub const IF_ADDR: u16 = 0xFF0F;
/// Interrupt enable register (IE).
pub const IE_ADDR: u16 = 0xFFFF;

bitflags! {
    /// The five DMG interrupt sources as laid out in IF and IE. Lower bits
    /// have higher priority.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Interrupts: u8 {
        const VBLANK = 0x01;
        const LCD_STAT = 0x02;
        const TIMER = 0x04;
        const SERIAL = 0x08;
        const JOYPAD = 0x10;
    }
}

impl Interrupts {
    /// The highest-priority source in the set.
    pub fn highest_priority(self) -> Option<Interrupts> {
        let bits = self.bits();
        if bits == 0 {
            return None;
        }
        Some(Interrupts::from_bits_retain(bits & bits.wrapping_neg()))
    }

    /// Bit index of a single source, 0 for VBlank through 4 for Joypad.
    pub fn index(self) -> u8 {
        self.bits().trailing_zeros() as u8
    }

    /// Service routine address: 0x40 + 8 * index.
    pub fn vector(self) -> u16 {
        0x0040 + u16::from(self.index()) * 8
    }
}
