use super::*;
use crate::interrupts::{IE_ADDR, IF_ADDR};
use crate::Diagnostic;

struct TestBus {
    memory: [u8; 0x10000],
    reported: Vec<Diagnostic>,
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
            reported: Vec::new(),
        }
    }
}

impl TestBus {
    fn load(&mut self, addr: u16, program: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + program.len()].copy_from_slice(program);
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported.push(diagnostic);
    }
}

/// A post-boot CPU positioned at `pc` over a zeroed bus.
fn cpu_at(pc: u16) -> (Cpu, TestBus) {
    let mut cpu = Cpu::new();
    cpu.regs.pc = pc;
    (cpu, TestBus::default())
}

#[test]
fn post_boot_register_values() {
    let cpu = Cpu::new();
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert_eq!(cpu.regs.bc(), 0x0013);
    assert_eq!(cpu.regs.de(), 0x00D8);
    assert_eq!(cpu.regs.hl(), 0x014D);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert!(!cpu.ime);
    assert_eq!(cpu.run_state(), RunState::Running);
}

#[test]
fn boot_rom_power_on_zeroes_registers() {
    let mut cpu = Cpu::new();
    cpu.reset(true);
    assert_eq!(cpu.regs, Registers::default());
    assert_eq!(cpu.regs.pc, 0x0000);

    cpu.reset(false);
    assert_eq!(cpu.regs, Registers::POST_BOOT);
}

#[test]
fn nop_advances_pc() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    let cycles = cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0001);
    assert_eq!(cycles, 4);
    assert_eq!(
        cpu.last_event(),
        StepEvent::Instruction {
            pc: 0x0000,
            opcode: 0x00,
            cb: None
        }
    );
}

#[test]
fn cb_event_keeps_the_fetched_second_byte() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    // SWAP (HL) with HL pointing at its own second byte.
    bus.load(0x0000, &[0xCB, 0x36]);
    cpu.regs.set_hl(0x0001);
    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(bus.read8(0x0001), 0x63);
    assert_eq!(
        cpu.last_event(),
        StepEvent::Instruction {
            pc: 0x0000,
            opcode: 0xCB,
            cb: Some(0x36)
        }
    );
}

#[test]
fn ld_16bit_and_indirect_forms() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    // LD BC,0x1234 ; LD (BC),A ; LD A,(BC)
    bus.load(0x0000, &[0x01, 0x34, 0x12, 0x02, 0x0A]);
    cpu.regs.a = 0xAB;

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.bc(), 0x1234);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(bus.memory[0x1234], 0xAB);

    cpu.regs.a = 0;
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.a, 0xAB);
    assert_eq!(cpu.regs.pc, 0x0005);
}

#[test]
fn hl_increment_and_decrement_loads() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    // LD (HL+),A ; LD (HL-),A ; LD A,(HL-)
    bus.load(0x0000, &[0x22, 0x32, 0x3A]);
    cpu.regs.set_hl(0xC000);
    cpu.regs.a = 0x11;

    cpu.step(&mut bus);
    assert_eq!(bus.memory[0xC000], 0x11);
    assert_eq!(cpu.regs.hl(), 0xC001);

    cpu.regs.a = 0x22;
    cpu.step(&mut bus);
    assert_eq!(bus.memory[0xC001], 0x22);
    assert_eq!(cpu.regs.hl(), 0xC000);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x11);
    assert_eq!(cpu.regs.hl(), 0xBFFF);
}

#[test]
fn ld_r_r_timing_depends_on_memory_operand() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    // LD B,C ; LD (HL),B ; LD E,(HL)
    bus.load(0x0000, &[0x41, 0x70, 0x5E]);
    cpu.regs.c = 0x5A;
    cpu.regs.set_hl(0xD000);

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.b, 0x5A);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(bus.memory[0xD000], 0x5A);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.e, 0x5A);
}

#[test]
fn inc_dec_on_hl_memory() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    bus.load(0x0000, &[0x34, 0x35, 0x35]);
    cpu.regs.set_hl(0xC100);
    bus.memory[0xC100] = 0xFF;

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(bus.memory[0xC100], 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));

    cpu.step(&mut bus);
    assert_eq!(bus.memory[0xC100], 0xFF);
    assert!(cpu.get_flag(Flag::N));
    cpu.step(&mut bus);
    assert_eq!(bus.memory[0xC100], 0xFE);
}

#[test]
fn xor_a_clears_accumulator_and_sets_zero() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    bus.load(0x0000, &[0xAF]);
    cpu.regs.a = 0x5C;
    cpu.regs.f = 0xF0;

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.a, 0);
    assert_eq!(cpu.regs.f, 0x80);
}

#[test]
fn add_immediate_sets_half_and_full_carry() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    bus.load(0x0000, &[0xC6, 0x01]);
    cpu.regs.a = 0xFF;

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(!cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn rotate_accumulator_always_clears_zero() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    // RLCA ; RRA
    bus.load(0x0000, &[0x07, 0x1F]);
    cpu.regs.a = 0x80;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x01);
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));

    cpu.regs.a = 0x01;
    cpu.set_flag(Flag::C, false);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn cpl_scf_ccf() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    bus.load(0x0000, &[0x2F, 0x37, 0x3F]);
    cpu.regs.a = 0x35;
    cpu.regs.f = 0x00;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0xCA);
    assert!(cpu.get_flag(Flag::N) && cpu.get_flag(Flag::H));

    cpu.step(&mut bus);
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::N) && !cpu.get_flag(Flag::H));

    cpu.step(&mut bus);
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn jr_relative_forward_and_backward() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    bus.load(0x0000, &[0x18, 0x02]);
    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0004);

    cpu.regs.pc = 0x0010;
    bus.load(0x0010, &[0x18, 0xFE]);
    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0010);
}

#[test]
fn jr_nz_not_taken_costs_eight() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    bus.load(0x0000, &[0x20, 0x10]);
    cpu.set_flag(Flag::Z, true);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn call_and_ret_use_the_stack_high_byte_first() {
    let (mut cpu, mut bus) = cpu_at(0x0200);
    // CALL 0x0300 ; ... ; RET at 0x0300
    bus.load(0x0200, &[0xCD, 0x00, 0x03]);
    bus.load(0x0300, &[0xC9]);
    cpu.regs.sp = 0xDFF0;

    assert_eq!(cpu.step(&mut bus), 24);
    assert_eq!(cpu.regs.pc, 0x0300);
    assert_eq!(cpu.regs.sp, 0xDFEE);
    assert_eq!(bus.memory[0xDFEF], 0x02);
    assert_eq!(bus.memory[0xDFEE], 0x03);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0203);
    assert_eq!(cpu.regs.sp, 0xDFF0);
}

#[test]
fn conditional_call_and_ret_timings() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    // CALL NZ,0x1234 (not taken) ; RET Z (not taken) ; RET NZ... taken below
    bus.load(0x0000, &[0xC4, 0x34, 0x12, 0xC8]);
    cpu.set_flag(Flag::Z, true);
    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0003);

    cpu.set_flag(Flag::Z, false);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0004);
}

#[test]
fn push_pop_round_trip_and_pop_af_masks_flags() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    // PUSH BC ; POP AF
    bus.load(0x0000, &[0xC5, 0xF1]);
    cpu.regs.sp = 0xFFFE;
    cpu.regs.set_bc(0x12FF);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(bus.memory[0xFFFD], 0x12);
    assert_eq!(bus.memory[0xFFFC], 0xFF);

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f, 0xF0);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn rst_jumps_to_fixed_vector() {
    let (mut cpu, mut bus) = cpu_at(0x1000);
    bus.load(0x1000, &[0xEF]);
    cpu.regs.sp = 0xD000;
    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(bus.memory[0xCFFF], 0x10);
    assert_eq!(bus.memory[0xCFFE], 0x01);
}

#[test]
fn ld_a16_sp_stores_little_endian() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    bus.load(0x0000, &[0x08, 0x00, 0xC0]);
    cpu.regs.sp = 0xBEEF;
    assert_eq!(cpu.step(&mut bus), 20);
    assert_eq!(bus.memory[0xC000], 0xEF);
    assert_eq!(bus.memory[0xC001], 0xBE);
}

#[test]
fn ldh_reaches_high_page() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    // LDH (0x80),A ; LD C,0x81 ; LD A,(C)
    bus.load(0x0000, &[0xE0, 0x80, 0x0E, 0x81, 0xF2]);
    bus.memory[0xFF81] = 0x77;
    cpu.regs.a = 0x42;

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(bus.memory[0xFF80], 0x42);
    cpu.step(&mut bus);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.a, 0x77);
}

#[test]
fn add_sp_and_ld_hl_sp_offset() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    // ADD SP,-1 ; LD HL,SP+2 ; LD SP,HL
    bus.load(0x0000, &[0xE8, 0xFF, 0xF8, 0x02, 0xF9]);
    cpu.regs.sp = 0xC000;

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.sp, 0xBFFF);
    assert!(!cpu.get_flag(Flag::Z));

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.hl(), 0xC001);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.sp, 0xC001);
}

#[test]
fn cb_ops_on_registers_and_memory() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    // RLC B ; BIT 7,(HL) ; RES 0,(HL) ; SET 3,A ; SWAP A
    bus.load(0x0000, &[0xCB, 0x00, 0xCB, 0x7E, 0xCB, 0x86, 0xCB, 0xDF, 0xCB, 0x37]);
    cpu.regs.b = 0x80;
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0x01;
    cpu.regs.a = 0x00;

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.b, 0x01);
    assert!(cpu.get_flag(Flag::C));

    assert_eq!(cpu.step(&mut bus), 12);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C), "BIT preserves carry");

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(bus.memory[0xC000], 0x00);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.a, 0x08);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x80);
    assert_eq!(cpu.regs.pc, 0x000A);
}

#[test]
fn vblank_is_serviced_on_the_very_next_step() {
    let (mut cpu, mut bus) = cpu_at(0x0150);
    bus.load(0x0150, &[0x00]);
    cpu.ime = true;
    cpu.regs.sp = 0xFFFE;
    bus.memory[IE_ADDR as usize] = 0x01;
    bus.memory[IF_ADDR as usize] = 0x01;

    let cycles = cpu.step(&mut bus);

    assert_eq!(cycles, INTERRUPT_SERVICE_CYCLES);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert!(!cpu.ime);
    assert_eq!(bus.memory[IF_ADDR as usize] & 0x01, 0);
    assert_eq!(bus.memory[0xFFFD], 0x01);
    assert_eq!(bus.memory[0xFFFC], 0x50);
    assert_eq!(cpu.last_event(), StepEvent::Interrupt { vector: 0x0040 });
}

#[test]
fn only_the_highest_priority_interrupt_is_serviced() {
    let (mut cpu, mut bus) = cpu_at(0x0200);
    cpu.ime = true;
    cpu.regs.sp = 0xD000;
    bus.memory[IE_ADDR as usize] = 0x1F;
    bus.memory[IF_ADDR as usize] = 0x14;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0050);
    assert_eq!(bus.memory[IF_ADDR as usize], 0x10);
}

#[test]
fn disabled_interrupts_are_not_serviced() {
    let (mut cpu, mut bus) = cpu_at(0x0200);
    cpu.ime = true;
    bus.memory[IE_ADDR as usize] = 0x00;
    bus.memory[IF_ADDR as usize] = 0x01;

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0201);
}

#[test]
fn ei_takes_effect_after_the_following_instruction() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    // EI ; NOP ; NOP
    bus.load(0x0000, &[0xFB, 0x00, 0x00]);
    bus.memory[IE_ADDR as usize] = 0x01;
    bus.memory[IF_ADDR as usize] = 0x01;

    cpu.step(&mut bus);
    assert!(!cpu.ime);
    assert!(cpu.ime_pending());
    assert_eq!(cpu.regs.pc, 0x0001);

    // The NOP after EI still runs before the interrupt can be taken.
    cpu.step(&mut bus);
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0002);

    assert_eq!(cpu.step(&mut bus), INTERRUPT_SERVICE_CYCLES);
    assert_eq!(cpu.regs.pc, 0x0040);
}

#[test]
fn di_cancels_a_pending_enable() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    // EI ; DI ; NOP
    bus.load(0x0000, &[0xFB, 0xF3, 0x00]);
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert!(!cpu.ime);
    assert!(!cpu.ime_pending());
}

#[test]
fn reti_enables_interrupts_immediately() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    bus.load(0x0000, &[0xD9]);
    cpu.regs.sp = 0xC000;
    bus.load(0xC000, &[0x34, 0x12]);

    assert_eq!(cpu.step(&mut bus), 16);
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc, 0x1234);
}

#[test]
fn halt_idles_until_an_interrupt_is_pending() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    bus.load(0x0000, &[0x76, 0x3C]);
    bus.memory[IE_ADDR as usize] = 0x04;
    cpu.regs.a = 0;

    cpu.step(&mut bus);
    assert!(cpu.is_halted());
    for _ in 0..10 {
        assert_eq!(cpu.step(&mut bus), IDLE_CYCLES);
        assert_eq!(cpu.regs.pc, 0x0001);
        assert_eq!(cpu.last_event(), StepEvent::Idle);
    }

    // With IME clear the core wakes and continues without dispatching.
    bus.memory[IF_ADDR as usize] = 0x04;
    cpu.step(&mut bus);
    assert!(!cpu.is_halted());
    assert_eq!(cpu.regs.a, 1);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn halt_with_ime_wakes_into_the_handler() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    bus.load(0x0000, &[0x76]);
    cpu.ime = true;
    cpu.regs.sp = 0xD000;
    bus.memory[IE_ADDR as usize] = 0x01;

    cpu.step(&mut bus);
    assert!(cpu.is_halted());

    bus.memory[IF_ADDR as usize] = 0x01;
    assert_eq!(cpu.step(&mut bus), INTERRUPT_SERVICE_CYCLES);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(bus.memory[0xCFFE], 0x01, "return address is after HALT");
}

#[test]
fn halt_bug_repeats_the_next_byte() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    // HALT ; INC A ; NOP
    bus.load(0x0000, &[0x76, 0x3C, 0x00]);
    bus.memory[IE_ADDR as usize] = 0x01;
    bus.memory[IF_ADDR as usize] = 0x01;
    cpu.regs.a = 0;

    cpu.step(&mut bus);
    assert!(!cpu.is_halted());

    // INC A runs twice because the first fetch does not advance PC.
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0001);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0002);
    assert_eq!(cpu.regs.a, 2);
}

#[test]
fn stop_waits_for_a_joypad_line() {
    let (mut cpu, mut bus) = cpu_at(0x0000);
    bus.load(0x0000, &[0x10, 0x00, 0x3C]);
    bus.memory[0xFF00] = 0xCF;
    cpu.regs.a = 0;

    cpu.step(&mut bus);
    assert!(cpu.is_stopped());
    assert_eq!(cpu.regs.pc, 0x0002);

    assert_eq!(cpu.step(&mut bus), IDLE_CYCLES);
    assert!(cpu.is_stopped());

    bus.memory[0xFF00] = 0xCE;
    cpu.step(&mut bus);
    assert!(!cpu.is_stopped());
    assert_eq!(cpu.regs.a, 1);
}

#[test]
fn unknown_opcode_is_reported_and_skipped() {
    let (mut cpu, mut bus) = cpu_at(0x0300);
    bus.load(0x0300, &[0xD3, 0x3C]);
    cpu.regs.a = 0;

    assert_eq!(cpu.step(&mut bus), IDLE_CYCLES);
    assert_eq!(cpu.regs.pc, 0x0301);
    assert_eq!(
        bus.reported,
        vec![Diagnostic::UnknownOpcode {
            pc: 0x0300,
            opcode: 0xD3
        }]
    );

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 1);
}

#[test]
fn every_opcode_executes_without_panicking() {
    for opcode in 0..=0xFFu8 {
        let (mut cpu, mut bus) = cpu_at(0xC000);
        bus.load(0xC000, &[opcode, 0x00, 0x00]);
        cpu.regs.sp = 0xDFF0;
        let cycles = cpu.step(&mut bus);
        assert!(
            (4..=24).contains(&cycles) && cycles % 4 == 0,
            "{opcode:#04X} took {cycles}"
        );
    }
}

/// Base-page cost in T-cycles. Conditional control flow is listed at its
/// not-taken cost.
#[rustfmt::skip]
const BASE_CYCLES: [u32; 256] = [
    // x0 x1  x2  x3  x4  x5  x6  x7  x8  x9  xA  xB  xC  xD  xE  xF
     4, 12,  8,  8,  4,  4,  8,  4, 20,  8,  8,  8,  4,  4,  8,  4, // 0x00
     4, 12,  8,  8,  4,  4,  8,  4, 12,  8,  8,  8,  4,  4,  8,  4, // 0x10
     8, 12,  8,  8,  4,  4,  8,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 0x20
     8, 12,  8,  8, 12, 12, 12,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 0x30
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0x40
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0x50
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0x60
     8,  8,  8,  8,  8,  8,  4,  8,  4,  4,  4,  4,  4,  4,  8,  4, // 0x70
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0x80
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0x90
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0xA0
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0xB0
     8, 12, 12, 16, 12, 16,  8, 16,  8, 16, 12,  8, 12, 24,  8, 16, // 0xC0
     8, 12, 12,  4, 12, 16,  8, 16,  8, 16, 12,  4, 12,  4,  8, 16, // 0xD0
    12, 12,  8,  4,  4, 16,  8, 16, 16,  4, 16,  4,  4,  4,  8, 16, // 0xE0
    12, 12,  8,  4,  4, 16,  8, 16, 12,  8, 16,  4,  4,  4,  8, 16, // 0xF0
];

/// Conditional JR, JP, CALL and RET as (opcode, taken, not taken).
#[rustfmt::skip]
const CONDITIONAL_CYCLES: [(u8, u32, u32); 16] = [
    (0x20, 12, 8), (0x28, 12, 8), (0x30, 12, 8), (0x38, 12, 8),
    (0xC2, 16, 12), (0xCA, 16, 12), (0xD2, 16, 12), (0xDA, 16, 12),
    (0xC4, 24, 12), (0xCC, 24, 12), (0xD4, 24, 12), (0xDC, 24, 12),
    (0xC0, 20, 8), (0xC8, 20, 8), (0xD0, 20, 8), (0xD8, 20, 8),
];

/// Flag byte that makes condition `cc` (NZ, Z, NC, C) hold or fail.
fn flags_for(cc: u8, taken: bool) -> u8 {
    let (mask, set_when_taken) = match cc {
        0 => (0x80, false),
        1 => (0x80, true),
        2 => (0x10, false),
        _ => (0x10, true),
    };
    if set_when_taken == taken {
        mask
    } else {
        0
    }
}

fn cycles_for(opcode: u8, f: u8) -> u32 {
    let (mut cpu, mut bus) = cpu_at(0xC000);
    bus.load(0xC000, &[opcode, 0x00, 0x00]);
    cpu.regs.sp = 0xDFF0;
    cpu.regs.set_hl(0xC100);
    cpu.regs.f = f;
    cpu.step(&mut bus)
}

#[test]
fn base_opcode_costs_match_table() {
    for opcode in 0..=0xFFu8 {
        let cc = (opcode >> 3) & 0x03;
        let f = if CONDITIONAL_CYCLES.iter().any(|&(op, _, _)| op == opcode) {
            flags_for(cc, false)
        } else {
            0
        };
        assert_eq!(
            cycles_for(opcode, f),
            BASE_CYCLES[usize::from(opcode)],
            "opcode {opcode:#04X}"
        );
    }
}

#[test]
fn conditional_costs_depend_on_the_branch() {
    for (opcode, taken, not_taken) in CONDITIONAL_CYCLES {
        let cc = (opcode >> 3) & 0x03;
        assert_eq!(
            cycles_for(opcode, flags_for(cc, true)),
            taken,
            "{opcode:#04X} taken"
        );
        assert_eq!(
            cycles_for(opcode, flags_for(cc, false)),
            not_taken,
            "{opcode:#04X} not taken"
        );
    }
}

#[test]
fn cb_costs_split_on_hl_operand() {
    for cb in 0..=0xFFu8 {
        let (mut cpu, mut bus) = cpu_at(0xC000);
        bus.load(0xC000, &[0xCB, cb]);
        cpu.regs.set_hl(0xC100);
        let expected = match (cb & 0x07, cb >> 6) {
            (6, 1) => 12,
            (6, _) => 16,
            _ => 8,
        };
        assert_eq!(cpu.step(&mut bus), expected, "CB {cb:#04X}");
        assert_eq!(cpu.regs.pc, 0xC002, "CB {cb:#04X}");
    }
}
