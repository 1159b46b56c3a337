use super::GameBoyBus;
use crate::interrupts::Interrupts;
use crate::machine::joypad::{Button, Group};

impl GameBoyBus {
    /// Compose P1: bits 7-6 read 1, bits 5-4 echo the selection, and the low
    /// nibble reads 0 for each pressed button in a selected group.
    pub(super) fn read_joyp(&self) -> u8 {
        let select = self.joyp_select & 0x30;
        let mut low = 0x0F;
        if select & 0x10 == 0 {
            low &= !self.joyp_dpad;
        }
        if select & 0x20 == 0 {
            low &= !self.joyp_buttons;
        }
        0xC0 | select | (low & 0x0F)
    }

    /// Only the selection bits are writable.
    pub(super) fn write_joyp(&mut self, value: u8) {
        self.joyp_select = value & 0x30;
    }

    /// Record a button transition. A press requests the joypad interrupt.
    pub(crate) fn set_button(&mut self, button: Button, pressed: bool) {
        let (group, bit) = button.line();
        let mask = 1u8 << bit;
        let lines = match group {
            Group::Dpad => &mut self.joyp_dpad,
            Group::Action => &mut self.joyp_buttons,
        };
        let was_pressed = *lines & mask != 0;
        if pressed {
            *lines |= mask;
        } else {
            *lines &= !mask;
        }
        if pressed && !was_pressed {
            self.request_interrupt(Interrupts::JOYPAD);
        }
    }
}
