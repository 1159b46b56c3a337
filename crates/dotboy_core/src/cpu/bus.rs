use crate::diagnostics::Diagnostic;

/// The CPU's view of the 16-bit address space.
///
/// Both accessors are total: every address yields a byte and accepts a
/// write. What sits behind an address (cartridge, I/O register, plain RAM)
/// is entirely the implementor's business.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Deliver a non-fatal condition noticed while executing.
    ///
    /// The default implementation only logs it; the machine's bus also
    /// queues it so callers can inspect it after a headless run.
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
    }
}
