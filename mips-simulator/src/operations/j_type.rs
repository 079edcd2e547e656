use crate::instruction::Instruction;
use crate::Processor;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Processor<R, W> {
    /// Jump
    pub(crate) fn op_j(&mut self, instruction: Instruction) {
        self.jump_to(instruction.jump_address());
    }
}
