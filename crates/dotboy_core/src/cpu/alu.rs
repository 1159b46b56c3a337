use super::{Cpu, Flag};

/// The eight accumulator operations in opcode order (bits 3-5 of the
/// 0x80-0xBF block and of the `op A,d8` column).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    pub(super) fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

/// Shift/rotate family shared by the CB block and the accumulator rotates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Shift {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl Shift {
    pub(super) fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Shift::Rlc,
            1 => Shift::Rrc,
            2 => Shift::Rl,
            3 => Shift::Rr,
            4 => Shift::Sla,
            5 => Shift::Sra,
            6 => Shift::Swap,
            _ => Shift::Srl,
        }
    }
}

impl Cpu {
    /// Apply `op` to A and `value`, updating A (except for CP) and all flags.
    pub(super) fn alu(&mut self, op: AluOp, value: u8) {
        let a = self.regs.a;
        let carry = u8::from(self.get_flag(Flag::C));
        match op {
            AluOp::Add | AluOp::Adc => {
                let cin = if op == AluOp::Adc { carry } else { 0 };
                let wide = u16::from(a) + u16::from(value) + u16::from(cin);
                let result = wide as u8;
                let half = (a & 0x0F) + (value & 0x0F) + cin > 0x0F;
                self.regs.set_flags(result == 0, false, half, wide > 0xFF);
                self.regs.a = result;
            }
            AluOp::Sub | AluOp::Sbc | AluOp::Cp => {
                let cin = if op == AluOp::Sbc { carry } else { 0 };
                let wide = i16::from(a) - i16::from(value) - i16::from(cin);
                let result = wide as u8;
                let half = i16::from(a & 0x0F) - i16::from(value & 0x0F) - i16::from(cin) < 0;
                self.regs.set_flags(result == 0, true, half, wide < 0);
                if op != AluOp::Cp {
                    self.regs.a = result;
                }
            }
            AluOp::And => {
                let result = a & value;
                self.regs.set_flags(result == 0, false, true, false);
                self.regs.a = result;
            }
            AluOp::Xor => {
                let result = a ^ value;
                self.regs.set_flags(result == 0, false, false, false);
                self.regs.a = result;
            }
            AluOp::Or => {
                let result = a | value;
                self.regs.set_flags(result == 0, false, false, false);
                self.regs.a = result;
            }
        }
    }

    /// Shift or rotate `value`, returning the result. Z reflects the result,
    /// N and H are cleared, C receives the bit shifted out (cleared by SWAP).
    pub(super) fn shift(&mut self, kind: Shift, value: u8) -> u8 {
        let carry_in = self.get_flag(Flag::C);
        let (result, carry_out) = match kind {
            Shift::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            Shift::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            Shift::Rl => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            Shift::Rr => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            Shift::Sla => (value << 1, value & 0x80 != 0),
            Shift::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            Shift::Swap => (value.rotate_left(4), false),
            Shift::Srl => (value >> 1, value & 0x01 != 0),
        };
        self.regs.set_flags(result == 0, false, false, carry_out);
        result
    }

    /// Decimal-adjust A after a BCD add or subtract. N is preserved.
    pub(super) fn daa(&mut self) {
        let subtract = self.get_flag(Flag::N);
        let mut carry = self.get_flag(Flag::C);
        let mut a = self.regs.a;

        let mut adjust = 0u8;
        if self.get_flag(Flag::H) || (!subtract && a & 0x0F > 0x09) {
            adjust |= 0x06;
        }
        if carry || (!subtract && a > 0x99) {
            adjust |= 0x60;
            carry = true;
        }
        a = if subtract {
            a.wrapping_sub(adjust)
        } else {
            a.wrapping_add(adjust)
        };

        self.regs.set_flags(a == 0, subtract, false, carry);
        self.regs.a = a;
    }

    /// INC for 8-bit operands. C is untouched.
    pub(super) fn inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        let carry = self.get_flag(Flag::C);
        self.regs
            .set_flags(result == 0, false, value & 0x0F == 0x0F, carry);
        result
    }

    /// DEC for 8-bit operands. C is untouched.
    pub(super) fn dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        let carry = self.get_flag(Flag::C);
        self.regs.set_flags(result == 0, true, value & 0x0F == 0, carry);
        result
    }

    /// `ADD HL,rr`: Z untouched, H from bit 11, C from bit 15.
    pub(super) fn add_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let zero = self.get_flag(Flag::Z);
        let half = (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF;
        let (result, carry) = hl.overflowing_add(value);
        self.regs.set_flags(zero, false, half, carry);
        self.regs.set_hl(result);
    }

    /// `SP + r8` as used by `ADD SP,r8` and `LD HL,SP+r8`. Z and N are
    /// cleared; H and C come from the unsigned low-byte addition.
    pub(super) fn sp_plus_offset(&mut self, offset: u8) -> u16 {
        let sp = self.regs.sp;
        let low = sp & 0x00FF;
        let half = (low & 0x0F) + u16::from(offset & 0x0F) > 0x0F;
        let carry = low + u16::from(offset) > 0xFF;
        self.regs.set_flags(false, false, half, carry);
        sp.wrapping_add_signed(i16::from(offset as i8))
    }
}
