#![allow(dead_code)]

use mips_simulator::config::Config;
use mips_simulator::Processor;
use mips_types::constants::*;
use mips_types::image::ProgramImage;
use std::io::Cursor;

pub type TestProcessor = Processor<Cursor<Vec<u8>>, Vec<u8>>;

pub const T0: u8 = 8;
pub const T1: u8 = 9;
pub const T2: u8 = 10;
pub const SYSCALL: u32 = FUNCTION_SYSCALL as u32;

pub fn r_type(s: u8, t: u8, d: u8, function: u8) -> u32 {
    (u32::from(s) << 21) | (u32::from(t) << 16) | (u32::from(d) << 11) | u32::from(function)
}

pub fn i_type(op_code: u8, s: u8, t: u8, immediate: i16) -> u32 {
    (u32::from(op_code) << 26)
        | (u32::from(s) << 21)
        | (u32::from(t) << 16)
        | u32::from(immediate as u16)
}

pub fn j_type(op_code: u8, address: u32) -> u32 {
    (u32::from(op_code) << 26) | ((address >> 2) & 0x03ff_ffff)
}

/// `lui` + `ori` pair which puts any 32-bit value in a register
pub fn load_immediate(register: u8, value: i32) -> [u32; 2] {
    let value = value as u32;
    [
        i_type(OP_LUI, REG_ZERO, register, (value >> 16) as u16 as i16),
        i_type(OP_ORI, register, register, value as u16 as i16),
    ]
}

/// `addiu $v0, $zero, service`
pub fn set_service(service: i32) -> u32 {
    i_type(OP_ADDIU, REG_ZERO, REG_V0, service as i16)
}

pub fn processor_with_config(
    config: Config,
    text: &[u32],
    data: &[u32],
    input: &str,
) -> TestProcessor {
    let mut processor = Processor::new(config, Cursor::new(input.as_bytes().to_vec()), Vec::new());
    processor.load_image(&ProgramImage {
        text: text.to_vec(),
        data: data.to_vec(),
    });
    processor
}

pub fn processor(text: &[u32], data: &[u32], input: &str) -> TestProcessor {
    processor_with_config(Config::default(), text, data, input)
}

pub fn output(processor: &TestProcessor) -> String {
    String::from_utf8_lossy(processor.output()).into_owned()
}

pub fn step_n(processor: &mut TestProcessor, steps: usize) {
    for _ in 0..steps {
        processor.step().unwrap();
    }
}
