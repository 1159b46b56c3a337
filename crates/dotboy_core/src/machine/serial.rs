/// Serial port stub driven through SB (0xFF01) and SC (0xFF02).
///
/// There is no link partner. A transfer started with the internal clock
/// (SC bits 7 and 0 both set) completes immediately: the SB byte is appended
/// to `output` and SC bit 7 clears.
#[derive(Default)]
pub(crate) struct Serial {
    pub(crate) sb: u8,
    pub(crate) sc: u8,
    pub(crate) output: Vec<u8>,
}

impl Serial {
    /// Write SC. Returns the transmitted byte if this write completed a
    /// transfer.
    pub(super) fn write_sc(&mut self, value: u8) -> Option<u8> {
        self.sc = value;
        if value & 0x81 != 0x81 {
            return None;
        }
        self.output.push(self.sb);
        self.sc &= !0x80;
        Some(self.sb)
    }

    /// SC with its unused bits reading as 1.
    pub(super) fn read_sc(&self) -> u8 {
        self.sc | 0x7E
    }
}
