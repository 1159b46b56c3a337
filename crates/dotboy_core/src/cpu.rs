//! Sharp SM83 (LR35902) instruction execution engine.
//!
//! The CPU never owns the memory map. Every entry point takes the bus as an
//! explicit `&mut dyn Bus` argument, so the machine can hand the same bus to
//! the timer and PPU between instructions without any shared ownership.

mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;
mod table;

pub use bus::Bus;
pub use cb::cb_mnemonic;
pub use regs::{Flag, Registers};
pub use step::StepEvent;
pub use table::{instruction, Handler, Instruction};

/// T-cycles charged for dispatching an interrupt to its vector.
pub const INTERRUPT_SERVICE_CYCLES: u32 = 20;
/// T-cycles charged for a step that does not execute an instruction
/// (HALT/STOP idling) and for unrecognized opcodes.
pub const IDLE_CYCLES: u32 = 4;

/// Execution state of the core.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum RunState {
    #[default]
    Running,
    /// Entered by HALT; left as soon as `IE & IF` is non-zero.
    Halted,
    /// Entered by STOP; left when a joypad line reads low.
    Stopped,
}

#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable.
    pub ime: bool,
    state: RunState,
    /// Set by EI. Committed to `ime` once the next opcode fetch completes.
    ime_pending: bool,
    /// HALT bug: the next opcode fetch does not advance PC.
    halt_bug: bool,
    last_event: StepEvent,
}

impl Cpu {
    #[inline]
    pub fn run_state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.state == RunState::Stopped
    }

    /// Whether an EI is waiting for the next fetch to enable interrupts.
    #[inline]
    pub fn ime_pending(&self) -> bool {
        self.ime_pending
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }
}

#[cfg(test)]
mod tests;
