use crate::instruction::Instruction;
use crate::Processor;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Processor<R, W> {
    /// Add (wrapping)
    pub(crate) fn op_add(&mut self, instruction: Instruction) {
        let a = self.registers.get(instruction.s_register());
        let b = self.registers.get(instruction.t_register());
        self.registers
            .set(instruction.d_register(), a.wrapping_add(b));
        self.advance_program_counter();
    }

    /// Subtract (wrapping)
    pub(crate) fn op_sub(&mut self, instruction: Instruction) {
        let a = self.registers.get(instruction.s_register());
        let b = self.registers.get(instruction.t_register());
        self.registers
            .set(instruction.d_register(), a.wrapping_sub(b));
        self.advance_program_counter();
    }

    /// Bitwise And
    pub(crate) fn op_and(&mut self, instruction: Instruction) {
        let a = self.registers.get(instruction.s_register());
        let b = self.registers.get(instruction.t_register());
        self.registers.set(instruction.d_register(), a & b);
        self.advance_program_counter();
    }

    /// Bitwise Or
    pub(crate) fn op_or(&mut self, instruction: Instruction) {
        let a = self.registers.get(instruction.s_register());
        let b = self.registers.get(instruction.t_register());
        self.registers.set(instruction.d_register(), a | b);
        self.advance_program_counter();
    }

    /// Set on less than (signed)
    pub(crate) fn op_slt(&mut self, instruction: Instruction) {
        let a = self.registers.get(instruction.s_register());
        let b = self.registers.get(instruction.t_register());
        let value = if a < b { 1 } else { 0 };
        self.registers.set(instruction.d_register(), value);
        self.advance_program_counter();
    }
}
