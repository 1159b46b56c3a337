use super::interrupts::pending_interrupts;
use super::table::instruction;
use super::{Bus, Cpu, RunState, IDLE_CYCLES};

/// Joypad register; STOP mode ends when any selected line reads low.
const P1_ADDR: u16 = 0xFF00;

/// What the last call to [`Cpu::step`] did.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StepEvent {
    /// HALT or STOP idling, no fetch.
    #[default]
    Idle,
    /// An interrupt was dispatched to `vector`.
    Interrupt { vector: u16 },
    /// The opcode at `pc` was fetched and executed. `cb` holds the second
    /// byte of a CB-prefixed instruction as it was fetched.
    Instruction { pc: u16, opcode: u8, cb: Option<u8> },
}

impl Cpu {
    /// Run one step: service one interrupt, execute one instruction, or idle
    /// for a fixed cost while halted/stopped. Returns the T-cycles consumed.
    pub fn step(&mut self, bus: &mut dyn Bus) -> u32 {
        let (cycles, event) = self.step_event(bus);
        self.last_event = event;
        cycles
    }

    /// Event produced by the most recent [`Cpu::step`].
    #[inline]
    pub fn last_event(&self) -> StepEvent {
        self.last_event
    }

    fn step_event(&mut self, bus: &mut dyn Bus) -> (u32, StepEvent) {
        let enable_ime = std::mem::take(&mut self.ime_pending);

        match self.state {
            RunState::Stopped => {
                if bus.read8(P1_ADDR) & 0x0F == 0x0F {
                    self.ime |= enable_ime;
                    return (IDLE_CYCLES, StepEvent::Idle);
                }
                log::debug!("leaving STOP on joypad input");
                self.state = RunState::Running;
            }
            RunState::Halted => {
                if pending_interrupts(bus).is_none() {
                    self.ime |= enable_ime;
                    return (IDLE_CYCLES, StepEvent::Idle);
                }
                self.state = RunState::Running;
            }
            RunState::Running => {}
        }

        if let Some(cycles) = self.service_interrupt(bus) {
            return (
                cycles,
                StepEvent::Interrupt {
                    vector: self.regs.pc,
                },
            );
        }

        let pc = self.regs.pc;
        let opcode = self.fetch8(bus);
        if enable_ime {
            self.ime = true;
        }
        let cb = if opcode == 0xCB {
            Some(bus.read8(self.regs.pc))
        } else {
            None
        };
        let cycles = (instruction(opcode).exec)(self, bus, opcode);
        (cycles, StepEvent::Instruction { pc, opcode, cb })
    }
}
