//! Opcode handlers.
//!
//! Every handler has the same shape, `(cpu, bus, opcode) -> cycles`, so the
//! dispatch table can hold plain function pointers. Handlers that cover a
//! whole opcode group decode their operands from the opcode bits.

mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;
