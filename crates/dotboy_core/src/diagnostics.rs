use std::fmt;

/// Non-fatal conditions observed while running a cartridge.
///
/// These never stop emulation. The bus queues them and the host drains the
/// queue through [`GameBoy::drain_diagnostics`](crate::GameBoy::drain_diagnostics).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Diagnostic {
    /// An unassigned opcode was fetched and executed as a 4-cycle no-op.
    UnknownOpcode { pc: u16, opcode: u8 },
    /// The header's cartridge type byte names a controller this core does not
    /// emulate; the image is mapped as a plain 32 KiB ROM.
    UnknownCartridgeType { code: u8 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownOpcode { pc, opcode } => {
                write!(f, "unknown opcode {opcode:#04X} at {pc:#06X}")
            }
            Diagnostic::UnknownCartridgeType { code } => {
                write!(f, "unsupported cartridge type {code:#04X}, mapping as ROM only")
            }
        }
    }
}
