use super::{Bus, Cpu, INTERRUPT_SERVICE_CYCLES};
use crate::interrupts::{Interrupts, IE_ADDR, IF_ADDR};

/// Interrupts that are both requested and enabled, if any.
pub(super) fn pending_interrupts(bus: &mut dyn Bus) -> Option<Interrupts> {
    let requested = Interrupts::from_bits_truncate(bus.read8(IF_ADDR));
    let enabled = Interrupts::from_bits_truncate(bus.read8(IE_ADDR));
    let pending = requested & enabled;
    (!pending.is_empty()).then_some(pending)
}

impl Cpu {
    /// Dispatch the highest-priority pending interrupt if IME is set.
    ///
    /// Returns the cycles spent, or `None` when nothing was dispatched.
    pub(super) fn service_interrupt(&mut self, bus: &mut dyn Bus) -> Option<u32> {
        if !self.ime {
            return None;
        }
        let source = pending_interrupts(bus)?.highest_priority()?;

        let flags = bus.read8(IF_ADDR);
        bus.write8(IF_ADDR, flags & !source.bits());
        self.ime = false;
        // An EI immediately before the dispatch is dropped.
        self.ime_pending = false;

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = source.vector();

        log::trace!(
            "interrupt {source:?} from {pc:#06X} to {:#06X}",
            self.regs.pc
        );
        Some(INTERRUPT_SERVICE_CYCLES)
    }
}
