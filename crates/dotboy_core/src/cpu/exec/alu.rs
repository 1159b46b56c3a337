use crate::cpu::alu::{AluOp, Shift};
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// 0x80-0xBF: `op A,r` with the operation in bits 3-5.
    pub(in crate::cpu) fn exec_alu_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);
        self.alu(AluOp::from_bits(opcode >> 3), value);
        if src == 6 {
            8
        } else {
            4
        }
    }

    /// 0xC6, 0xCE, ..., 0xFE: `op A,d8`.
    pub(in crate::cpu) fn exec_alu_d8(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.fetch8(bus);
        self.alu(AluOp::from_bits(opcode >> 3), value);
        8
    }

    /// RLCA, RRCA, RLA, RRA. Same as the CB forms except Z is always cleared.
    pub(in crate::cpu) fn exec_rotate_a(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        let result = self.shift(Shift::from_bits(opcode >> 3), self.regs.a);
        self.regs.a = result;
        self.set_flag(Flag::Z, false);
        4
    }

    pub(in crate::cpu) fn exec_add_hl_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.read_rp(opcode >> 4);
        self.add_hl(value);
        8
    }

    pub(in crate::cpu) fn exec_add_sp_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let offset = self.fetch8(bus);
        self.regs.sp = self.sp_plus_offset(offset);
        16
    }

    pub(in crate::cpu) fn exec_daa(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.daa();
        4
    }

    pub(in crate::cpu) fn exec_cpl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        4
    }

    pub(in crate::cpu) fn exec_scf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
        4
    }

    pub(in crate::cpu) fn exec_ccf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
        4
    }
}
