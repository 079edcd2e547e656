use crate::error::SimulatorError;
use crate::instruction::Instruction;
use crate::math::{add_unsigned, effective_address};
use crate::Processor;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Processor<R, W> {
    /// Branch on equal
    pub(crate) fn op_beq(&mut self, instruction: Instruction) {
        let s_value = self.registers.get(instruction.s_register());
        let t_value = self.registers.get(instruction.t_register());
        self.branch_if(s_value == t_value, instruction);
    }

    /// Branch on not equal
    pub(crate) fn op_bne(&mut self, instruction: Instruction) {
        let s_value = self.registers.get(instruction.s_register());
        let t_value = self.registers.get(instruction.t_register());
        self.branch_if(s_value != t_value, instruction);
    }

    /// Branches are relative to the instruction after the branch
    fn branch_if(&mut self, condition: bool, instruction: Instruction) {
        self.advance_program_counter();

        if condition {
            let offset = (instruction.immediate() as i32) << 2;
            self.jump_to(add_unsigned(self.program_counter, offset));
        }
    }

    /// Add immediate unsigned (no overflow trap)
    pub(crate) fn op_addiu(&mut self, instruction: Instruction) {
        let value = self
            .registers
            .get(instruction.s_register())
            .wrapping_add(instruction.immediate() as i32);
        self.registers.set(instruction.t_register(), value);
        self.advance_program_counter()
    }

    /// Bitwise and immediate
    pub(crate) fn op_andi(&mut self, instruction: Instruction) {
        let a = self.registers.get(instruction.s_register());
        let immediate = instruction.unsigned_immediate() as i32;
        self.registers.set(instruction.t_register(), a & immediate);
        self.advance_program_counter();
    }

    /// Bitwise or immediate
    pub(crate) fn op_ori(&mut self, instruction: Instruction) {
        let a = self.registers.get(instruction.s_register());
        let immediate = instruction.unsigned_immediate() as i32;
        self.registers.set(instruction.t_register(), a | immediate);
        self.advance_program_counter();
    }

    /// Load upper immediate
    pub(crate) fn op_lui(&mut self, instruction: Instruction) {
        let value = ((instruction.unsigned_immediate() as u32) << 16) as i32;
        self.registers.set(instruction.t_register(), value);
        self.advance_program_counter();
    }

    /// Load word
    pub(crate) fn op_lw(&mut self, instruction: Instruction) -> Result<(), SimulatorError> {
        let address = effective_address(
            self.registers.get(instruction.s_register()),
            instruction.immediate(),
        );
        let value = self
            .memory
            .get_word(address)
            .map_err(|address| SimulatorError::UnmappedMemory {
                address,
                instruction: instruction.0,
                pc: self.program_counter,
            })?;
        self.registers.set(instruction.t_register(), value as i32);
        self.advance_program_counter();
        Ok(())
    }

    /// Store word
    pub(crate) fn op_sw(&mut self, instruction: Instruction) {
        let address = effective_address(
            self.registers.get(instruction.s_register()),
            instruction.immediate(),
        );
        let value = self.registers.get(instruction.t_register());
        debug!("Storing 0x{:08x} at 0x{:08x}", value, address);
        self.memory.set_word(address, value as u32);
        self.advance_program_counter();
    }
}
