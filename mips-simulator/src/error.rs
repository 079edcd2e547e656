use std::io;
use thiserror::Error;

/// A fatal condition which stops the simulation
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("Invalid opcode (instruction = {instruction:x}, pc = {pc:x})")]
    InvalidOpcode { instruction: u32, pc: u32 },

    #[error("Invalid function code (instruction = {instruction:x}, pc = {pc:x})")]
    InvalidFunction { instruction: u32, pc: u32 },

    #[error("Invalid syscall (instruction = {instruction:x}, pc = {pc:x})")]
    InvalidSyscall { instruction: u32, pc: u32 },

    #[error("Invalid input for read integer (instruction = {instruction:x}, pc = {pc:x})")]
    InvalidReadIntInput { instruction: u32, pc: u32 },

    #[error(
        "Unmapped memory access at address {address:x} (instruction = {instruction:x}, pc = {pc:x})"
    )]
    UnmappedMemory {
        address: u32,
        instruction: u32,
        pc: u32,
    },

    #[error("{0}")]
    Io(#[from] io::Error),
}
