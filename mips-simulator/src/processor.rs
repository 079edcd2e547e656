use crate::config::Config;
use crate::error::SimulatorError;
use crate::instruction::Instruction;
use crate::memory::Memory;
use crate::registers::Registers;
use mips_types::constants::{
    DATA_OFFSET, FUNCTION_ADD, FUNCTION_AND, FUNCTION_OR, FUNCTION_SLT, FUNCTION_SUB,
    FUNCTION_SYSCALL, OP_ADDIU, OP_ANDI, OP_BEQ, OP_BNE, OP_J, OP_LUI, OP_LW, OP_ORI, OP_R_TYPE,
    OP_SW, TEXT_OFFSET, WORD_SIZE,
};
use mips_types::image::ProgramImage;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::io::{BufRead, Write};

const DROPPED_OFF_BOTTOM_BANNER: &str = "\n-- program is finished running (dropped off bottom) --\n";
const EXIT_BANNER: &str = "\n-- program is finished running --\n";

/// Why the processor stopped
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HaltReason {
    /// There was no instruction at the program counter
    DroppedOffBottom,
    /// The program made the exit syscall
    Exit,
    /// The configured step limit was reached
    StepLimit,
}

/// Whether the processor is still executing
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Halted(HaltReason),
}

/// A single-cycle MIPS processor.
/// Syscalls read lines from `input` and print to `output`.
pub struct Processor<R, W> {
    config: Config,
    pub(crate) registers: Registers,
    pub(crate) program_counter: u32,
    pub(crate) memory: Memory,
    pub(crate) state: State,
    pub(crate) input: R,
    pub(crate) output: W,
    steps: u64,
}

impl<R: BufRead, W: Write> Processor<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Self {
        Processor {
            registers: Registers::new(config.hardwire_zero_register),
            memory: Memory::new(),
            program_counter: TEXT_OFFSET,
            state: State::Running,
            input,
            output,
            steps: 0,
            config,
        }
    }

    /// Lay out the image's text and data segments in memory
    pub fn load_image(&mut self, image: &ProgramImage) {
        self.memory.load_words(&image.text, TEXT_OFFSET);
        self.memory.load_words(&image.data, DATA_OFFSET);
        info!(
            "Loaded {} instructions at 0x{:x} and {} data words at 0x{:x}",
            image.text.len(),
            TEXT_OFFSET,
            image.data.len(),
            DATA_OFFSET
        );
    }

    /// Step until the processor halts
    pub fn run(&mut self) -> Result<HaltReason, SimulatorError> {
        loop {
            if let State::Halted(reason) = self.state {
                info!("Halted ({:?}) after {} instructions", reason, self.steps);
                return Ok(reason);
            }

            self.step()?;
        }
    }

    /// Fetch, decode and execute a single instruction
    pub fn step(&mut self) -> Result<(), SimulatorError> {
        if self.state != State::Running {
            return Ok(());
        }

        if let Some(max_steps) = self.config.max_steps {
            if self.steps >= max_steps {
                self.state = State::Halted(HaltReason::StepLimit);
                return Ok(());
            }
        }

        let instruction = match self.load_next_instruction() {
            Some(instruction) => instruction,
            None => {
                self.halt(HaltReason::DroppedOffBottom, DROPPED_OFF_BOTTOM_BANNER)?;
                return Ok(());
            }
        };

        trace!("0x{:08x}: {}", self.program_counter, instruction);
        self.execute(instruction)?;
        self.steps += 1;

        Ok(())
    }

    /// Get the instruction at the program counter, if there is one
    pub fn load_next_instruction(&self) -> Option<Instruction> {
        self.memory
            .get_word(self.program_counter)
            .ok()
            .map(Instruction)
    }

    pub(crate) fn execute(&mut self, instruction: Instruction) -> Result<(), SimulatorError> {
        match instruction.op_code() {
            OP_R_TYPE => match instruction.function() {
                FUNCTION_SYSCALL => self.op_syscall(instruction)?,
                FUNCTION_ADD => self.op_add(instruction),
                FUNCTION_SUB => self.op_sub(instruction),
                FUNCTION_AND => self.op_and(instruction),
                FUNCTION_OR => self.op_or(instruction),
                FUNCTION_SLT => self.op_slt(instruction),
                _ => {
                    return Err(SimulatorError::InvalidFunction {
                        instruction: instruction.0,
                        pc: self.program_counter,
                    })
                }
            },
            OP_J => self.op_j(instruction),
            OP_BEQ => self.op_beq(instruction),
            OP_BNE => self.op_bne(instruction),
            OP_ADDIU => self.op_addiu(instruction),
            OP_ANDI => self.op_andi(instruction),
            OP_ORI => self.op_ori(instruction),
            OP_LUI => self.op_lui(instruction),
            OP_LW => self.op_lw(instruction)?,
            OP_SW => self.op_sw(instruction),
            _ => {
                return Err(SimulatorError::InvalidOpcode {
                    instruction: instruction.0,
                    pc: self.program_counter,
                })
            }
        }

        Ok(())
    }

    pub(crate) fn advance_program_counter(&mut self) {
        self.program_counter = self.program_counter.wrapping_add(WORD_SIZE);
    }

    pub(crate) fn jump_to(&mut self, address: u32) {
        self.program_counter = address;
    }

    /// Print the banner and stop
    pub(crate) fn halt(&mut self, reason: HaltReason, banner: &str) -> Result<(), SimulatorError> {
        self.output.write_all(banner.as_bytes())?;
        self.output.flush()?;
        self.state = State::Halted(reason);
        Ok(())
    }

    pub(crate) fn exit(&mut self) -> Result<(), SimulatorError> {
        self.halt(HaltReason::Exit, EXIT_BANNER)
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn program_counter(&self) -> u32 {
        self.program_counter
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// The number of instructions executed so far
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl<R, W> Debug for Processor<R, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Processor")
            .field("config", &self.config)
            .field("registers", &self.registers)
            .field("program_counter", &self.program_counter)
            .field("memory", &self.memory)
            .field("state", &self.state)
            .field("steps", &self.steps)
            .finish()
    }
}
