use lazy_static::lazy_static;

use super::{Bus, Cpu};

/// Opcode handler: `(cpu, bus, opcode) -> T-cycles`.
pub type Handler = fn(&mut Cpu, &mut dyn Bus, u8) -> u32;

/// One entry of the unprefixed opcode table.
#[derive(Clone, Copy)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub exec: Handler,
}

impl std::fmt::Debug for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.mnemonic)
            .finish_non_exhaustive()
    }
}

lazy_static! {
    static ref OPCODES: [Instruction; 256] = std::array::from_fn(|index| {
        let opcode = index as u8;
        Instruction {
            mnemonic: MNEMONICS[index],
            exec: handler_for(opcode),
        }
    });
}

/// Table entry for an unprefixed opcode. Every byte has an entry; the
/// unassigned ones resolve to the unknown-opcode handler.
pub fn instruction(opcode: u8) -> &'static Instruction {
    &OPCODES[usize::from(opcode)]
}

fn handler_for(opcode: u8) -> Handler {
    match opcode {
        0x00 => Cpu::exec_nop,
        0x08 => Cpu::exec_ld_a16_sp,
        0x10 => Cpu::exec_stop,
        0x18 => Cpu::exec_jr,
        0x20 | 0x28 | 0x30 | 0x38 => Cpu::exec_jr_cc,
        0x01 | 0x11 | 0x21 | 0x31 => Cpu::exec_ld_rr_d16,
        0x09 | 0x19 | 0x29 | 0x39 => Cpu::exec_add_hl_rr,
        0x02 | 0x12 | 0x22 | 0x32 => Cpu::exec_ld_indirect_a,
        0x0A | 0x1A | 0x2A | 0x3A => Cpu::exec_ld_a_indirect,
        0x03 | 0x13 | 0x23 | 0x33 => Cpu::exec_inc_rr,
        0x0B | 0x1B | 0x2B | 0x3B => Cpu::exec_dec_rr,
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => Cpu::exec_inc_r,
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => Cpu::exec_dec_r,
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => Cpu::exec_ld_r_d8,
        0x07 | 0x0F | 0x17 | 0x1F => Cpu::exec_rotate_a,
        0x27 => Cpu::exec_daa,
        0x2F => Cpu::exec_cpl,
        0x37 => Cpu::exec_scf,
        0x3F => Cpu::exec_ccf,

        0x76 => Cpu::exec_halt,
        0x40..=0x7F => Cpu::exec_ld_r_r,
        0x80..=0xBF => Cpu::exec_alu_r,

        0xC0 | 0xC8 | 0xD0 | 0xD8 => Cpu::exec_ret_cc,
        0xC1 | 0xD1 | 0xE1 | 0xF1 => Cpu::exec_pop,
        0xC5 | 0xD5 | 0xE5 | 0xF5 => Cpu::exec_push,
        0xC2 | 0xCA | 0xD2 | 0xDA => Cpu::exec_jp_cc,
        0xC4 | 0xCC | 0xD4 | 0xDC => Cpu::exec_call_cc,
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => Cpu::exec_alu_d8,
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => Cpu::exec_rst,
        0xC3 => Cpu::exec_jp,
        0xC9 => Cpu::exec_ret,
        0xCB => Cpu::exec_cb,
        0xCD => Cpu::exec_call,
        0xD9 => Cpu::exec_reti,
        0xE0 | 0xF0 => Cpu::exec_ldh_a8,
        0xE2 | 0xF2 => Cpu::exec_ldh_c,
        0xE8 => Cpu::exec_add_sp_r8,
        0xE9 => Cpu::exec_jp_hl,
        0xEA | 0xFA => Cpu::exec_ld_a16_a,
        0xF3 => Cpu::exec_di,
        0xF8 => Cpu::exec_ld_hl_sp_r8,
        0xF9 => Cpu::exec_ld_sp_hl,
        0xFB => Cpu::exec_ei,

        // 0xD3 0xDB 0xDD 0xE3 0xE4 0xEB 0xEC 0xED 0xF4 0xFC 0xFD
        _ => Cpu::exec_unknown,
    }
}

#[rustfmt::skip]
const MNEMONICS: [&str; 256] = [
    // 0x00
    "NOP", "LD BC,d16", "LD (BC),A", "INC BC", "INC B", "DEC B", "LD B,d8", "RLCA",
    // 0x08
    "LD (a16),SP", "ADD HL,BC", "LD A,(BC)", "DEC BC", "INC C", "DEC C", "LD C,d8", "RRCA",
    // 0x10
    "STOP", "LD DE,d16", "LD (DE),A", "INC DE", "INC D", "DEC D", "LD D,d8", "RLA",
    // 0x18
    "JR r8", "ADD HL,DE", "LD A,(DE)", "DEC DE", "INC E", "DEC E", "LD E,d8", "RRA",
    // 0x20
    "JR NZ,r8", "LD HL,d16", "LD (HL+),A", "INC HL", "INC H", "DEC H", "LD H,d8", "DAA",
    // 0x28
    "JR Z,r8", "ADD HL,HL", "LD A,(HL+)", "DEC HL", "INC L", "DEC L", "LD L,d8", "CPL",
    // 0x30
    "JR NC,r8", "LD SP,d16", "LD (HL-),A", "INC SP", "INC (HL)", "DEC (HL)", "LD (HL),d8", "SCF",
    // 0x38
    "JR C,r8", "ADD HL,SP", "LD A,(HL-)", "DEC SP", "INC A", "DEC A", "LD A,d8", "CCF",
    // 0x40
    "LD B,B", "LD B,C", "LD B,D", "LD B,E", "LD B,H", "LD B,L", "LD B,(HL)", "LD B,A",
    // 0x48
    "LD C,B", "LD C,C", "LD C,D", "LD C,E", "LD C,H", "LD C,L", "LD C,(HL)", "LD C,A",
    // 0x50
    "LD D,B", "LD D,C", "LD D,D", "LD D,E", "LD D,H", "LD D,L", "LD D,(HL)", "LD D,A",
    // 0x58
    "LD E,B", "LD E,C", "LD E,D", "LD E,E", "LD E,H", "LD E,L", "LD E,(HL)", "LD E,A",
    // 0x60
    "LD H,B", "LD H,C", "LD H,D", "LD H,E", "LD H,H", "LD H,L", "LD H,(HL)", "LD H,A",
    // 0x68
    "LD L,B", "LD L,C", "LD L,D", "LD L,E", "LD L,H", "LD L,L", "LD L,(HL)", "LD L,A",
    // 0x70
    "LD (HL),B", "LD (HL),C", "LD (HL),D", "LD (HL),E", "LD (HL),H", "LD (HL),L", "HALT", "LD (HL),A",
    // 0x78
    "LD A,B", "LD A,C", "LD A,D", "LD A,E", "LD A,H", "LD A,L", "LD A,(HL)", "LD A,A",
    // 0x80
    "ADD A,B", "ADD A,C", "ADD A,D", "ADD A,E", "ADD A,H", "ADD A,L", "ADD A,(HL)", "ADD A,A",
    // 0x88
    "ADC A,B", "ADC A,C", "ADC A,D", "ADC A,E", "ADC A,H", "ADC A,L", "ADC A,(HL)", "ADC A,A",
    // 0x90
    "SUB B", "SUB C", "SUB D", "SUB E", "SUB H", "SUB L", "SUB (HL)", "SUB A",
    // 0x98
    "SBC A,B", "SBC A,C", "SBC A,D", "SBC A,E", "SBC A,H", "SBC A,L", "SBC A,(HL)", "SBC A,A",
    // 0xA0
    "AND B", "AND C", "AND D", "AND E", "AND H", "AND L", "AND (HL)", "AND A",
    // 0xA8
    "XOR B", "XOR C", "XOR D", "XOR E", "XOR H", "XOR L", "XOR (HL)", "XOR A",
    // 0xB0
    "OR B", "OR C", "OR D", "OR E", "OR H", "OR L", "OR (HL)", "OR A",
    // 0xB8
    "CP B", "CP C", "CP D", "CP E", "CP H", "CP L", "CP (HL)", "CP A",
    // 0xC0
    "RET NZ", "POP BC", "JP NZ,a16", "JP a16", "CALL NZ,a16", "PUSH BC", "ADD A,d8", "RST 00H",
    // 0xC8
    "RET Z", "RET", "JP Z,a16", "PREFIX CB", "CALL Z,a16", "CALL a16", "ADC A,d8", "RST 08H",
    // 0xD0
    "RET NC", "POP DE", "JP NC,a16", "ILLEGAL_D3", "CALL NC,a16", "PUSH DE", "SUB d8", "RST 10H",
    // 0xD8
    "RET C", "RETI", "JP C,a16", "ILLEGAL_DB", "CALL C,a16", "ILLEGAL_DD", "SBC A,d8", "RST 18H",
    // 0xE0
    "LDH (a8),A", "POP HL", "LD (C),A", "ILLEGAL_E3", "ILLEGAL_E4", "PUSH HL", "AND d8", "RST 20H",
    // 0xE8
    "ADD SP,r8", "JP (HL)", "LD (a16),A", "ILLEGAL_EB", "ILLEGAL_EC", "ILLEGAL_ED", "XOR d8", "RST 28H",
    // 0xF0
    "LDH A,(a8)", "POP AF", "LD A,(C)", "DI", "ILLEGAL_F4", "PUSH AF", "OR d8", "RST 30H",
    // 0xF8
    "LD HL,SP+r8", "LD SP,HL", "LD A,(a16)", "EI", "ILLEGAL_FC", "ILLEGAL_FD", "CP d8", "RST 38H",
];
