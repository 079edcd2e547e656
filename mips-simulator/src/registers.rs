use mips_types::constants::{
    GLOBAL_POINTER_START, REGISTER_COUNT, REG_GP, REG_SP, REG_ZERO, STACK_START,
};

/// Holds the processor's registers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    registers: [i32; REGISTER_COUNT],
    /// Discard writes to `$zero` like real MIPS hardware
    hardwire_zero: bool,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Registers {
    /// Create the register file with `$gp` and `$sp` at their start values
    /// and every other register zeroed.
    pub fn new(hardwire_zero: bool) -> Self {
        let mut registers = [0; REGISTER_COUNT];
        registers[REG_GP as usize] = GLOBAL_POINTER_START as i32;
        registers[REG_SP as usize] = STACK_START as i32;

        Registers {
            registers,
            hardwire_zero,
        }
    }

    /// Get the value of a register
    pub fn get(&self, register: u8) -> i32 {
        self.registers[register as usize]
    }

    /// Set the value of a register
    pub fn set(&mut self, register: u8, value: i32) {
        if self.hardwire_zero && register == REG_ZERO {
            return;
        }

        self.registers[register as usize] = value
    }

    /// All register values, indexed by register number
    pub fn values(&self) -> &[i32; REGISTER_COUNT] {
        &self.registers
    }
}
