use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// `PUSH rr` for BC/DE/HL/AF.
    pub(in crate::cpu) fn exec_push(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.read_rp2(opcode >> 4);
        self.push_u16(bus, value);
        16
    }

    /// `POP rr`. Popping into AF drops the low nibble of F.
    pub(in crate::cpu) fn exec_pop(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.pop_u16(bus);
        self.write_rp2(opcode >> 4, value);
        12
    }

    /// `RST n`: call to the fixed vector encoded in bits 3-5.
    pub(in crate::cpu) fn exec_rst(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = u16::from(opcode & 0x38);
        16
    }
}
