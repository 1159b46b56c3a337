use crate::cpu::interrupts::pending_interrupts;
use crate::cpu::{Bus, Cpu, RunState, IDLE_CYCLES};
use crate::Diagnostic;

impl Cpu {
    pub(in crate::cpu) fn exec_nop(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        4
    }

    /// HALT. With IME clear and an interrupt already pending the core does
    /// not halt; instead the next opcode byte is fetched twice (HALT bug).
    pub(in crate::cpu) fn exec_halt(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        if !self.ime && pending_interrupts(bus).is_some() {
            self.halt_bug = true;
        } else {
            self.state = RunState::Halted;
        }
        4
    }

    /// STOP consumes its padding byte and idles until a joypad line goes low.
    pub(in crate::cpu) fn exec_stop(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let _ = self.fetch8(bus);
        self.state = RunState::Stopped;
        4
    }

    pub(in crate::cpu) fn exec_di(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.ime = false;
        self.ime_pending = false;
        4
    }

    /// EI takes effect after the instruction that follows it has been fetched.
    pub(in crate::cpu) fn exec_ei(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        if !self.ime {
            self.ime_pending = true;
        }
        4
    }

    /// Unassigned opcodes (0xD3, 0xDB, ...). Reported to the bus and
    /// otherwise treated as a 4-cycle no-op.
    pub(in crate::cpu) fn exec_unknown(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let pc = self.regs.pc.wrapping_sub(1);
        let r = &self.regs;
        log::debug!(
            "unknown opcode {opcode:#04X}: PC={pc:04X} SP={:04X} AF={:04X} BC={:04X} DE={:04X} HL={:04X}",
            r.sp,
            r.af(),
            r.bc(),
            r.de(),
            r.hl()
        );
        bus.report(Diagnostic::UnknownOpcode { pc, opcode });
        IDLE_CYCLES
    }
}
