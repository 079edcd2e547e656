use crate::error::SimulatorError;
use crate::instruction::Instruction;
use crate::Processor;
use mips_types::constants::*;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Processor<R, W> {
    /// Handle a syscall operation
    pub(crate) fn op_syscall(&mut self, instruction: Instruction) -> Result<(), SimulatorError> {
        match self.registers.get(REG_V0) {
            SYSCALL_PRINT_INT => self.syscall_print_int()?,
            SYSCALL_PRINT_STR => self.syscall_print_str(instruction)?,
            SYSCALL_READ_INT => self.syscall_read_int(instruction)?,
            SYSCALL_EXIT => {
                trace!("EXIT");
                // No further instructions run, so the program counter stays put
                return self.exit();
            }
            _ => {
                return Err(SimulatorError::InvalidSyscall {
                    instruction: instruction.0,
                    pc: self.program_counter,
                })
            }
        }

        self.advance_program_counter();
        Ok(())
    }

    /// Print an integer
    fn syscall_print_int(&mut self) -> Result<(), SimulatorError> {
        trace!("PRINT_INT");
        let value = self.registers.get(REG_A0);
        self.print(value.to_string().as_bytes())
    }

    /// Print a string
    fn syscall_print_str(&mut self, instruction: Instruction) -> Result<(), SimulatorError> {
        trace!("PRINT_STR");
        let str_address = self.registers.get(REG_A0) as u32;
        let bytes =
            self.memory
                .get_str(str_address)
                .map_err(|address| SimulatorError::UnmappedMemory {
                    address,
                    instruction: instruction.0,
                    pc: self.program_counter,
                })?;

        self.print(&bytes)
    }

    /// Read an integer from the input
    fn syscall_read_int(&mut self, instruction: Instruction) -> Result<(), SimulatorError> {
        trace!("READ_INT");
        let pc = self.program_counter;
        let invalid_input = || SimulatorError::InvalidReadIntInput {
            instruction: instruction.0,
            pc,
        };

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Err(invalid_input());
        }

        let line = buffer.trim_end_matches(&['\n', '\r'][..]);
        let value = line.parse::<i32>().map_err(|_| invalid_input())?;
        self.registers.set(REG_V0, value);
        Ok(())
    }

    /// Print a value to the output
    fn print(&mut self, value: &[u8]) -> Result<(), SimulatorError> {
        self.output.write_all(value)?;
        self.output.flush()?;
        Ok(())
    }
}
