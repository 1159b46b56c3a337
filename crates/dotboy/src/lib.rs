use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dotboy_core::loader::{load_boot_image, load_rom};
use dotboy_core::{FrameBuffer, FrameSink, GameBoy, SessionOptions, TraceEntry};
use dotboy_core::{SCREEN_HEIGHT, SCREEN_WIDTH};
use typed_builder::TypedBuilder;

/// Run a Game Boy ROM headless for a fixed number of frames.
#[derive(Parser, Debug)]
#[command(name = "dotboy", version, about, long_about = None)]
pub struct Cli {
    /// Path to the cartridge image
    pub rom: PathBuf,

    /// DMG boot image mapped over 0x0000-0x00FF until disabled
    #[arg(long, env = "DOTBOY_BOOT_ROM")]
    pub boot: Option<PathBuf>,

    /// Number of frame budgets to run
    #[arg(short, long, default_value_t = 60)]
    pub frames: u32,

    /// Print every executed instruction
    #[arg(short, long)]
    pub trace: bool,

    /// Stop printing the trace after this many instructions
    #[arg(long, requires = "trace")]
    pub trace_limit: Option<usize>,

    /// Write the last presented frame as raw RGB24 to this path
    #[arg(long)]
    pub dump_frame: Option<PathBuf>,

    /// Print bytes transmitted over the serial port
    #[arg(short, long)]
    pub serial: bool,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct RunOptions {
    pub rom: PathBuf,
    #[builder(default)]
    pub boot: Option<PathBuf>,
    #[builder(default = 60)]
    pub frames: u32,
    #[builder(default)]
    pub trace: bool,
    #[builder(default)]
    pub trace_limit: Option<usize>,
    #[builder(default)]
    pub dump_frame: Option<PathBuf>,
    #[builder(default)]
    pub serial: bool,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        RunOptions::builder()
            .rom(cli.rom)
            .boot(cli.boot)
            .frames(cli.frames)
            .trace(cli.trace)
            .trace_limit(cli.trace_limit)
            .dump_frame(cli.dump_frame)
            .serial(cli.serial)
            .build()
    }
}

/// What a finished run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub frames_presented: usize,
    pub total_cycles: u64,
    pub serial: Vec<u8>,
    pub diagnostics: usize,
}

/// Keeps the most recent frame as packed RGB24.
pub struct FrameCapture {
    rgb: Vec<u8>,
    presented: usize,
}

impl FrameCapture {
    pub fn new() -> Self {
        Self {
            rgb: vec![0; SCREEN_WIDTH * SCREEN_HEIGHT * 3],
            presented: 0,
        }
    }

    pub fn rgb(&self) -> &[u8] {
        &self.rgb
    }

    pub fn presented(&self) -> usize {
        self.presented
    }
}

impl Default for FrameCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for FrameCapture {
    fn present(&mut self, frame: &FrameBuffer) {
        frame.write_rgb24(&mut self.rgb);
        self.presented += 1;
    }
}

pub fn run(options: RunOptions) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(&options, &mut out)?;
    Ok(())
}

/// Load the images named by `options`, run the session and write trace and
/// serial output to `out`.
pub fn run_with_output(options: &RunOptions, out: &mut dyn Write) -> Result<RunSummary> {
    let rom = load_rom(&options.rom)?;
    let boot_rom = options.boot.as_ref().and_then(load_boot_image);
    let session = SessionOptions::builder()
        .boot_rom(boot_rom)
        .trace(options.trace)
        .build();
    let mut gb = GameBoy::new(rom, session);

    let mut capture = FrameCapture::new();
    let mut trace_left = options.trace_limit.unwrap_or(usize::MAX);
    let mut diagnostics = 0;

    for _ in 0..options.frames {
        gb.run_frame(&mut capture);
        if options.trace {
            print_trace(out, &gb.take_trace(), &mut trace_left)?;
        }
        diagnostics += gb.drain_diagnostics().len();
    }

    if options.serial {
        out.write_all(gb.serial_output())?;
        writeln!(out)?;
    }

    if let Some(path) = &options.dump_frame {
        std::fs::write(path, capture.rgb())
            .with_context(|| format!("failed to write frame dump '{}'", path.display()))?;
        log::info!(
            "wrote {}x{} RGB24 frame to '{}'",
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
            path.display()
        );
    }

    log::info!(
        "ran {} frames ({} presented, {} cycles, {} diagnostics)",
        options.frames,
        capture.presented(),
        gb.total_cycles(),
        diagnostics
    );

    Ok(RunSummary {
        frames_presented: capture.presented(),
        total_cycles: gb.total_cycles(),
        serial: gb.serial_output().to_vec(),
        diagnostics,
    })
}

fn print_trace(out: &mut dyn Write, entries: &[TraceEntry], left: &mut usize) -> Result<()> {
    for entry in entries.iter().take(*left) {
        writeln!(
            out,
            "{:04X}  {:02X}  {:<14} {:>2}  {}",
            entry.pc, entry.opcode, entry.mnemonic, entry.cycles, entry.total_cycles
        )?;
    }
    *left = left.saturating_sub(entries.len());
    Ok(())
}
