use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_inc_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let reg = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, reg);
        let result = self.inc8(value);
        self.write_reg8(bus, reg, result);
        if reg == 6 {
            12
        } else {
            4
        }
    }

    pub(in crate::cpu) fn exec_dec_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let reg = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, reg);
        let result = self.dec8(value);
        self.write_reg8(bus, reg, result);
        if reg == 6 {
            12
        } else {
            4
        }
    }

    /// 16-bit INC/DEC never touch flags.
    pub(in crate::cpu) fn exec_inc_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        let rp = opcode >> 4;
        let value = self.read_rp(rp).wrapping_add(1);
        self.write_rp(rp, value);
        8
    }

    pub(in crate::cpu) fn exec_dec_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        let rp = opcode >> 4;
        let value = self.read_rp(rp).wrapping_sub(1);
        self.write_rp(rp, value);
        8
    }
}
