// Operation codes
pub const OP_R_TYPE: u8 = 0;
pub const OP_J: u8 = 0x02;
pub const OP_BEQ: u8 = 0x04;
pub const OP_BNE: u8 = 0x05;
pub const OP_ADDIU: u8 = 0x09;
pub const OP_ANDI: u8 = 0x0C;
pub const OP_ORI: u8 = 0x0D;
pub const OP_LUI: u8 = 0x0F;
pub const OP_LW: u8 = 0x23;
pub const OP_SW: u8 = 0x2B;

// R-type function codes
pub const FUNCTION_SYSCALL: u8 = 0x0C;
pub const FUNCTION_ADD: u8 = 0x20;
pub const FUNCTION_SUB: u8 = 0x22;
pub const FUNCTION_AND: u8 = 0x24;
pub const FUNCTION_OR: u8 = 0x25;
pub const FUNCTION_SLT: u8 = 0x2A;

// Register numbers
pub const REG_ZERO: u8 = 0;
pub const REG_V0: u8 = 2;
pub const REG_A0: u8 = 4;
/// The global pointer register
pub const REG_GP: u8 = 28;
/// The stack pointer register
pub const REG_SP: u8 = 29;

pub const REGISTER_COUNT: usize = 32;

pub static REGISTER_NAMES: [&str; REGISTER_COUNT] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3",
    "$t4", "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7",
    "$t8", "$t9", "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

// Syscall codes
pub const SYSCALL_PRINT_INT: i32 = 1;
pub const SYSCALL_PRINT_STR: i32 = 4;
pub const SYSCALL_READ_INT: i32 = 5;
pub const SYSCALL_EXIT: i32 = 10;

// Memory offsets
pub const TEXT_OFFSET: u32 = 0x0040_0000;
pub const DATA_OFFSET: u32 = 0x1001_0000;
/// Initial value of `$gp`, the middle of the first 64K of the data segment
pub const GLOBAL_POINTER_START: u32 = 0x1000_8000;
/// The top of the stack
pub const STACK_START: u32 = 0x7fff_effc;

/// The number of bytes in a word
pub const WORD_SIZE: u32 = 4;
