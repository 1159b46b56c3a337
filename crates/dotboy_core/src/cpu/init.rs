use super::{Cpu, Registers, RunState, StepEvent};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// A core in the state the DMG boot ROM hands over to the cartridge.
    pub fn new() -> Self {
        let mut cpu = Self::powered_on();
        cpu.apply_post_boot_state();
        cpu
    }

    /// A core at true power-on: every register zero and PC at 0x0000, ready
    /// to run a boot ROM overlay.
    pub fn powered_on() -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            state: RunState::Running,
            ime_pending: false,
            halt_bug: false,
            last_event: StepEvent::Idle,
        }
    }

    /// Reset to power-on values. With a boot ROM present execution starts
    /// from 0x0000 with zeroed registers; otherwise the post-boot register
    /// file is applied directly.
    pub fn reset(&mut self, boot_rom_present: bool) {
        *self = if boot_rom_present {
            Self::powered_on()
        } else {
            Self::new()
        };
    }

    fn apply_post_boot_state(&mut self) {
        self.regs = Registers::POST_BOOT;
        // IME is clear at 0x0100; cartridge code enables interrupts itself.
        self.ime = false;
    }
}
