use dotboy_common::key::Key;
use typed_builder::TypedBuilder;

use super::{Button, FrameBuffer, FrameSink, GameBoyBus, Ppu, Timer};
use crate::cpu::{cb_mnemonic, instruction, Cpu, StepEvent};
use crate::Diagnostic;

/// T-cycles in one full 154-line PPU frame.
pub const CYCLES_PER_FRAME: u32 = 70_224;

/// Per-session settings.
#[derive(Clone, Debug, TypedBuilder)]
pub struct SessionOptions {
    /// Boot image mapped over 0x0000-0x00FF until the program writes 0xFF50.
    #[builder(default)]
    pub boot_rom: Option<Vec<u8>>,
    /// Record a [`TraceEntry`] for every executed instruction.
    #[builder(default)]
    pub trace: bool,
    /// Budget used by [`GameBoy::step_frame`].
    #[builder(default = CYCLES_PER_FRAME)]
    pub cycles_per_frame: u32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// One executed instruction, as recorded in trace mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    pub pc: u16,
    pub opcode: u8,
    pub mnemonic: String,
    pub cycles: u32,
    /// Machine cycle count after this instruction.
    pub total_cycles: u64,
}

/// A DMG session: CPU, memory map, timer and PPU stepped in lockstep.
pub struct GameBoy {
    pub cpu: Cpu,
    pub(crate) bus: GameBoyBus,
    timer: Timer,
    ppu: Ppu,
    rom: Vec<u8>,
    options: SessionOptions,
    total_cycles: u64,
    trace: Vec<TraceEntry>,
}

impl GameBoy {
    pub fn new(rom: Vec<u8>, options: SessionOptions) -> Self {
        log::info!(
            "new session: {} byte ROM, boot image {}, trace {}",
            rom.len(),
            if options.boot_rom.is_some() { "present" } else { "absent" },
            options.trace
        );
        let bus = GameBoyBus::new(rom.clone(), options.boot_rom.clone());
        let cpu = if options.boot_rom.is_some() {
            Cpu::powered_on()
        } else {
            Cpu::new()
        };
        Self {
            cpu,
            bus,
            timer: Timer::new(),
            ppu: Ppu::new(),
            rom,
            options,
            total_cycles: 0,
            trace: Vec::new(),
        }
    }

    /// Replace the cartridge and power-cycle every component.
    pub fn reload(&mut self, rom: Vec<u8>) {
        let options = self.options.clone();
        *self = Self::new(rom, options);
    }

    /// Power-cycle with the current cartridge.
    pub fn reset(&mut self) {
        let rom = std::mem::take(&mut self.rom);
        self.reload(rom);
    }

    /// Run one CPU step, then feed its cycles to the timer and the PPU.
    /// Returns the cycles consumed.
    pub fn step(&mut self) -> u32 {
        let cycles = self.cpu.step(&mut self.bus);
        self.timer.advance(cycles, &mut self.bus);
        self.ppu.advance(cycles, &mut self.bus);
        self.total_cycles += u64::from(cycles);

        if self.options.trace {
            if let StepEvent::Instruction { pc, opcode, cb } = self.cpu.last_event() {
                let mnemonic = match cb {
                    Some(cb) => cb_mnemonic(cb),
                    None => instruction(opcode).mnemonic.to_string(),
                };
                self.trace.push(TraceEntry {
                    pc,
                    opcode,
                    mnemonic,
                    cycles,
                    total_cycles: self.total_cycles,
                });
            }
        }
        cycles
    }

    /// Run steps until at least one frame budget of cycles has elapsed.
    /// Returns the cycles actually consumed, which may overshoot by the
    /// length of the last instruction.
    pub fn step_frame(&mut self) -> u32 {
        self.step_until(0, self.options.cycles_per_frame)
    }

    /// Step from `elapsed` until `budget` is reached. The count saturates at
    /// `u32::MAX`.
    pub(super) fn step_until(&mut self, mut elapsed: u32, budget: u32) -> u32 {
        while elapsed < budget {
            elapsed = elapsed.saturating_add(self.step());
        }
        elapsed
    }

    /// Run one frame budget and present the frame to `sink` if the PPU
    /// reached VBlank during it. Returns whether a frame was presented.
    pub fn run_frame(&mut self, sink: &mut dyn FrameSink) -> bool {
        self.step_frame();
        if self.ppu.take_frame_ready() {
            sink.present(self.ppu.frame());
            true
        } else {
            false
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        self.ppu.frame()
    }

    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.bus.set_button(button, pressed);
    }

    /// Forward a host key using the default mapping.
    pub fn handle_key(&mut self, key: Key, pressed: bool) {
        self.set_button(Button::from_key(key), pressed);
    }

    /// Read any address as the CPU would, without side effects.
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    pub fn bus(&self) -> &GameBoyBus {
        &self.bus
    }

    pub fn serial_output(&self) -> &[u8] {
        self.bus.serial_output()
    }

    pub fn drain_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.bus.drain_diagnostics()
    }

    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Instructions recorded so far in trace mode.
    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    pub fn take_trace(&mut self) -> Vec<TraceEntry> {
        std::mem::take(&mut self.trace)
    }
}
