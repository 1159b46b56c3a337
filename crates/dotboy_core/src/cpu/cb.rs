use super::alu::Shift;
use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Execute a CB-prefixed instruction. PC already points past the 0xCB
    /// prefix; the second opcode byte is fetched here.
    ///
    /// The second byte decodes as `xx yyy zzz`: `x` selects the group
    /// (shift, BIT, RES, SET), `y` the shift kind or bit number and `z` the
    /// operand register.
    pub(super) fn exec_cb(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let cb = self.fetch8(bus);
        let group = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;
        let memory = z == 6;

        match group {
            0 => {
                let value = self.read_reg8(bus, z);
                let result = self.shift(Shift::from_bits(y), value);
                self.write_reg8(bus, z, result);
                if memory {
                    16
                } else {
                    8
                }
            }
            1 => {
                let value = self.read_reg8(bus, z);
                let carry = self.get_flag(Flag::C);
                self.regs
                    .set_flags(value & (1 << y) == 0, false, true, carry);
                if memory {
                    12
                } else {
                    8
                }
            }
            _ => {
                let value = self.read_reg8(bus, z);
                let result = if group == 2 {
                    value & !(1 << y)
                } else {
                    value | (1 << y)
                };
                self.write_reg8(bus, z, result);
                if memory {
                    16
                } else {
                    8
                }
            }
        }
    }
}

/// Disassembly for the second byte of a CB-prefixed instruction.
pub fn cb_mnemonic(cb: u8) -> String {
    const REGS: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];
    const SHIFTS: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];
    let y = (cb >> 3) & 0x07;
    let reg = REGS[usize::from(cb & 0x07)];
    match cb >> 6 {
        0 => format!("{} {reg}", SHIFTS[usize::from(y)]),
        1 => format!("BIT {y},{reg}"),
        2 => format!("RES {y},{reg}"),
        _ => format!("SET {y},{reg}"),
    }
}
