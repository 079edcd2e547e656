use mips_types::constants::*;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Extract the inclusive bit range `[left, right]` of a word, where bit 0 is
/// the least significant bit.
pub fn bits(word: u32, left: u8, right: u8) -> u32 {
    debug_assert!(left < 32 && right <= left);
    let width = u32::from(left - right) + 1;
    let mask = if width >= 32 {
        u32::MAX
    } else {
        (1 << width) - 1
    };

    (word >> right) & mask
}

/// A MIPS instruction
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Instruction(pub u32);

impl Instruction {
    /// Get the operation code
    pub fn op_code(&self) -> u8 {
        bits(self.0, 31, 26) as u8
    }

    /// Get the s register (for R and I type instructions)
    pub fn s_register(&self) -> u8 {
        bits(self.0, 25, 21) as u8
    }

    /// Get the t register (for R and I type instructions)
    pub fn t_register(&self) -> u8 {
        bits(self.0, 20, 16) as u8
    }

    /// Get the d register (For R type instructions)
    pub fn d_register(&self) -> u8 {
        bits(self.0, 15, 11) as u8
    }

    /// Get the shift amount (for R type instructions)
    pub fn shift_amount(&self) -> u8 {
        bits(self.0, 10, 6) as u8
    }

    /// Get the ALU function (for R type instructions)
    pub fn function(&self) -> u8 {
        bits(self.0, 5, 0) as u8
    }

    /// Get the immediate value, sign-extended by the caller through `i16`
    /// (for arithmetic, branch and memory I type instructions)
    pub fn immediate(&self) -> i16 {
        bits(self.0, 15, 0) as u16 as i16
    }

    /// Get the raw immediate value (for logical I type instructions)
    pub fn unsigned_immediate(&self) -> u16 {
        bits(self.0, 15, 0) as u16
    }

    /// Get the pseudo address (for J type instructions)
    pub fn pseudo_address(&self) -> u32 {
        bits(self.0, 25, 0)
    }

    /// The absolute jump target. Only the 26-bit field is used, the upper
    /// bits of the program counter are not carried over.
    pub fn jump_address(&self) -> u32 {
        self.pseudo_address() << 2
    }

    /// Decode and format the instruction
    pub fn stringify(&self) -> String {
        let dst = |name: &str| {
            format!(
                "{} {}, {}, {}",
                name,
                Register(self.d_register()),
                Register(self.s_register()),
                Register(self.t_register())
            )
        };
        let sti = |name: &str| {
            format!(
                "{} {}, {}, {}",
                name,
                Register(self.s_register()),
                Register(self.t_register()),
                self.immediate()
            )
        };
        let tis = |name: &str| {
            format!(
                "{} {}, {}({})",
                name,
                Register(self.t_register()),
                self.immediate(),
                Register(self.s_register())
            )
        };
        let tsi = |name: &str| {
            format!(
                "{} {}, {}, {}",
                name,
                Register(self.t_register()),
                Register(self.s_register()),
                self.immediate()
            )
        };
        let tsiu = |name: &str| {
            format!(
                "{} {}, {}, 0x{:x}",
                name,
                Register(self.t_register()),
                Register(self.s_register()),
                self.unsigned_immediate()
            )
        };
        let unknown = || format!("unknown 0x{:08x}", self.0);

        match self.op_code() {
            OP_R_TYPE => match self.function() {
                FUNCTION_SYSCALL => "syscall".to_string(),
                FUNCTION_ADD => dst("add"),
                FUNCTION_SUB => dst("sub"),
                FUNCTION_AND => dst("and"),
                FUNCTION_OR => dst("or"),
                FUNCTION_SLT => dst("slt"),
                _ => unknown(),
            },
            OP_J => format!("j 0x{:x}", self.jump_address()),
            OP_BEQ => sti("beq"),
            OP_BNE => sti("bne"),
            OP_ADDIU => tsi("addiu"),
            OP_ANDI => tsiu("andi"),
            OP_ORI => tsiu("ori"),
            OP_LUI => format!(
                "lui {}, 0x{:x}",
                Register(self.t_register()),
                self.unsigned_immediate()
            ),
            OP_LW => tis("lw"),
            OP_SW => tis("sw"),
            _ => unknown(),
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

/// Pretty-print the register using its name
pub struct Register(pub u8);

impl Display for Register {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match REGISTER_NAMES.get(self.0 as usize) {
            Some(name) => f.pad(name),
            None => write!(f, "${}", self.0),
        }
    }
}
