use super::GameBoyBus;
use crate::machine::io::DMA;

impl GameBoyBus {
    /// OAM DMA: copy 160 bytes from `value << 8` into 0xFE00-0xFE9F.
    ///
    /// The transfer completes at once. Source bytes go through the normal
    /// read path, so the boot overlay and cartridge banking apply.
    pub(super) fn do_oam_dma(&mut self, value: u8) {
        let base = u16::from(value) << 8;
        for i in 0u16..0xA0 {
            let byte = self.read(base.wrapping_add(i));
            self.memory[usize::from(0xFE00 + i)] = byte;
        }
        self.memory[usize::from(DMA)] = value;
    }
}
