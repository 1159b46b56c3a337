use super::io::{DIV, TAC, TIMA, TMA};
use super::GameBoyBus;
use crate::interrupts::Interrupts;

/// T-cycles per DIV increment.
const DIV_PERIOD: u32 = 256;
/// T-cycles per TIMA increment, indexed by TAC bits 0-1.
const TIMA_PERIODS: [u32; 4] = [1024, 16, 64, 256];

/// Divider and programmable counter.
///
/// The registers themselves live in the bus's I/O window; the timer only
/// keeps the cycles accumulated towards the next increment of each.
#[derive(Clone, Debug, Default)]
pub struct Timer {
    div_cycles: u32,
    tima_cycles: u32,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `cycles` T-cycles. Several increments (and overflows) may
    /// happen in one call.
    pub fn advance(&mut self, cycles: u32, bus: &mut GameBoyBus) {
        // TIMA is clocked off the same divider, so both residues go.
        if bus.take_div_reset() {
            self.div_cycles = 0;
            self.tima_cycles = 0;
        }

        self.div_cycles += cycles;
        while self.div_cycles >= DIV_PERIOD {
            self.div_cycles -= DIV_PERIOD;
            let div = bus.io_read(DIV).wrapping_add(1);
            bus.io_write(DIV, div);
        }

        let tac = bus.io_read(TAC);
        if tac & 0x04 == 0 {
            return;
        }
        let period = TIMA_PERIODS[usize::from(tac & 0x03)];
        self.tima_cycles += cycles;
        while self.tima_cycles >= period {
            self.tima_cycles -= period;
            let (tima, overflow) = bus.io_read(TIMA).overflowing_add(1);
            if overflow {
                bus.io_write(TIMA, bus.io_read(TMA));
                bus.request_interrupt(Interrupts::TIMER);
            } else {
                bus.io_write(TIMA, tima);
            }
        }
    }
}
