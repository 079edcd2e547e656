mod common;

use common::*;
use mips_simulator::config::Config;
use mips_simulator::{HaltReason, SimulatorError, State};
use mips_types::constants::*;

const DROPPED_OFF_BOTTOM: &str = "\n-- program is finished running (dropped off bottom) --\n";

#[test]
fn initial_state() {
    let processor = processor(&[], &[], "");

    assert_eq!(processor.state(), State::Running);
    assert_eq!(processor.program_counter(), TEXT_OFFSET);
    assert_eq!(processor.registers().get(REG_GP), 0x1000_8000);
    assert_eq!(processor.registers().get(REG_SP), 0x7fff_effc);
    assert_eq!(processor.registers().get(REG_V0), 0);
    assert!(processor.memory().is_empty());
}

#[test]
fn empty_program_drops_off_bottom() {
    let mut processor = processor(&[], &[], "");

    assert_eq!(processor.run().unwrap(), HaltReason::DroppedOffBottom);
    assert_eq!(processor.steps(), 0);
    assert_eq!(output(&processor), DROPPED_OFF_BOTTOM);
}

#[test]
fn step_after_halt_does_nothing() {
    let mut processor = processor(&[], &[], "");
    processor.run().unwrap();
    processor.step().unwrap();

    assert_eq!(
        processor.state(),
        State::Halted(HaltReason::DroppedOffBottom)
    );
    assert_eq!(output(&processor), DROPPED_OFF_BOTTOM);
}

#[test]
fn data_image_is_little_endian() {
    let mut processor = processor(
        &[
            i_type(OP_LUI, REG_ZERO, T1, 0x1001),
            i_type(OP_LW, T1, T0, 4),
        ],
        &[0, 0x1234_5678],
        "",
    );
    processor.run().unwrap();

    assert_eq!(processor.memory().get(DATA_OFFSET + 4), Some(0x78));
    assert_eq!(processor.memory().get(DATA_OFFSET + 7), Some(0x12));
    assert_eq!(processor.registers().get(T0), 0x1234_5678);
}

#[test]
fn store_then_load() {
    let mut processor = processor(
        &[
            i_type(OP_LUI, REG_ZERO, T1, 0x1001),
            i_type(OP_ADDIU, REG_ZERO, T0, -2),
            i_type(OP_SW, T1, T0, 8),
            i_type(OP_LW, T1, T2, 8),
        ],
        &[],
        "",
    );
    processor.run().unwrap();

    assert_eq!(processor.registers().get(T2), -2);
    assert_eq!(processor.memory().get_word(DATA_OFFSET + 8), Ok(0xffff_fffe));
    assert_eq!(processor.memory().get(DATA_OFFSET + 8), Some(0xfe));
}

#[test]
fn negative_memory_offset() {
    let mut processor = processor(
        &[
            i_type(OP_ADDIU, REG_ZERO, T0, 99),
            i_type(OP_SW, REG_SP, T0, -4),
            i_type(OP_LW, REG_SP, T1, -4),
        ],
        &[],
        "",
    );
    processor.run().unwrap();

    assert_eq!(processor.memory().get_word(0x7fff_eff8), Ok(99));
    assert_eq!(processor.registers().get(T1), 99);
}

#[test]
fn load_from_unmapped_memory_is_fatal() {
    let mut processor = processor(&[i_type(OP_LW, REG_ZERO, T0, 0x10)], &[], "");

    match processor.run() {
        Err(SimulatorError::UnmappedMemory {
            address,
            instruction,
            pc,
        }) => {
            assert_eq!(address, 0x10);
            assert_eq!(instruction, 0x8c08_0010);
            assert_eq!(pc, TEXT_OFFSET);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn arithmetic_and_logic() {
    let mut text = Vec::new();
    text.extend_from_slice(&load_immediate(T0, i32::MAX));
    text.push(i_type(OP_ADDIU, REG_ZERO, T1, 1));
    text.push(r_type(T0, T1, 11, FUNCTION_ADD)); // $t3 = MAX + 1
    text.push(r_type(REG_ZERO, T1, 12, FUNCTION_SUB)); // $t4 = -1
    text.push(r_type(12, T0, 13, FUNCTION_AND)); // $t5 = MAX
    text.push(r_type(11, T1, 14, FUNCTION_OR)); // $t6 = MIN | 1
    text.push(r_type(11, T1, 15, FUNCTION_SLT)); // $t7 = MIN < 1
    text.push(r_type(T1, 11, 16, FUNCTION_SLT)); // $s0 = 1 < MIN

    let mut processor = processor(&text, &[], "");
    processor.run().unwrap();
    let registers = processor.registers();

    assert_eq!(registers.get(11), i32::MIN);
    assert_eq!(registers.get(12), -1);
    assert_eq!(registers.get(13), i32::MAX);
    assert_eq!(registers.get(14), i32::MIN | 1);
    assert_eq!(registers.get(15), 1);
    assert_eq!(registers.get(16), 0);
}

#[test]
fn logical_immediates_are_zero_extended() {
    let mut processor = processor(
        &[
            i_type(OP_ADDIU, REG_ZERO, T0, -1),
            i_type(OP_ANDI, T0, T1, 0x8000_u16 as i16),
            i_type(OP_ORI, REG_ZERO, T2, -1),
            i_type(OP_LUI, REG_ZERO, 11, -1),
            i_type(OP_ADDIU, REG_ZERO, 12, 0x8000_u16 as i16),
        ],
        &[],
        "",
    );
    processor.run().unwrap();
    let registers = processor.registers();

    assert_eq!(registers.get(T0), -1);
    assert_eq!(registers.get(T1), 0x8000);
    assert_eq!(registers.get(T2), 0xffff);
    assert_eq!(registers.get(11), 0xffff_0000_u32 as i32);
    assert_eq!(registers.get(12), -0x8000);
}

#[test]
fn taken_branch_skips_forward() {
    let mut processor = processor(
        &[
            i_type(OP_BEQ, REG_ZERO, REG_ZERO, 1),
            i_type(OP_ADDIU, REG_ZERO, T0, 1),
            i_type(OP_ADDIU, REG_ZERO, T1, 1),
        ],
        &[],
        "",
    );
    processor.step().unwrap();
    assert_eq!(processor.program_counter(), TEXT_OFFSET + 8);

    processor.run().unwrap();
    assert_eq!(processor.registers().get(T0), 0);
    assert_eq!(processor.registers().get(T1), 1);
}

#[test]
fn untaken_branch_falls_through() {
    let mut processor = processor(
        &[
            i_type(OP_ADDIU, REG_ZERO, T0, 1),
            i_type(OP_BEQ, T0, REG_ZERO, 5),
            i_type(OP_BNE, REG_ZERO, REG_ZERO, 5),
        ],
        &[],
        "",
    );
    step_n(&mut processor, 2);
    assert_eq!(processor.program_counter(), TEXT_OFFSET + 8);
    step_n(&mut processor, 1);
    assert_eq!(processor.program_counter(), TEXT_OFFSET + 12);
}

#[test]
fn backwards_branch_loops() {
    let mut processor = processor(
        &[
            i_type(OP_ADDIU, REG_ZERO, T0, 3),
            i_type(OP_ADDIU, T1, T1, 2),
            i_type(OP_ADDIU, T0, T0, -1),
            i_type(OP_BNE, T0, REG_ZERO, -3),
        ],
        &[],
        "",
    );

    assert_eq!(processor.run().unwrap(), HaltReason::DroppedOffBottom);
    assert_eq!(processor.registers().get(T0), 0);
    assert_eq!(processor.registers().get(T1), 6);
    assert_eq!(processor.steps(), 10);
}

#[test]
fn jump_lands_on_target() {
    let mut processor = processor(
        &[
            j_type(OP_J, TEXT_OFFSET + 12),
            i_type(OP_ADDIU, REG_ZERO, T0, 1),
            i_type(OP_ADDIU, REG_ZERO, T0, 2),
            i_type(OP_ADDIU, REG_ZERO, T1, 3),
        ],
        &[],
        "",
    );
    processor.step().unwrap();
    assert_eq!(processor.program_counter(), TEXT_OFFSET + 12);

    processor.run().unwrap();
    assert_eq!(processor.registers().get(T0), 0);
    assert_eq!(processor.registers().get(T1), 3);
}

#[test]
fn step_limit_stops_infinite_loop() {
    let config = Config {
        max_steps: Some(10),
        ..Config::default()
    };
    let mut processor = processor_with_config(config, &[j_type(OP_J, TEXT_OFFSET)], &[], "");

    assert_eq!(processor.run().unwrap(), HaltReason::StepLimit);
    assert_eq!(processor.steps(), 10);
    assert_eq!(processor.program_counter(), TEXT_OFFSET);
    assert!(output(&processor).is_empty());
}

#[test]
fn zero_register_is_ordinary_by_default() {
    let mut processor = processor(&[i_type(OP_ADDIU, REG_ZERO, REG_ZERO, 5)], &[], "");
    processor.run().unwrap();

    assert_eq!(processor.registers().get(REG_ZERO), 5);
}

#[test]
fn zero_register_can_be_hardwired() {
    let config = Config {
        hardwire_zero_register: true,
        ..Config::default()
    };
    let mut processor = processor_with_config(
        config,
        &[i_type(OP_ADDIU, REG_ZERO, REG_ZERO, 5)],
        &[],
        "",
    );
    processor.run().unwrap();

    assert_eq!(processor.registers().get(REG_ZERO), 0);
}

#[test]
fn invalid_opcode_is_fatal() {
    let mut processor = processor(
        &[i_type(OP_ADDIU, REG_ZERO, T0, 1), 0xfc00_0000],
        &[],
        "",
    );
    let error = processor.run().unwrap_err();

    assert!(matches!(error, SimulatorError::InvalidOpcode { .. }));
    assert_eq!(
        error.to_string(),
        "Invalid opcode (instruction = fc000000, pc = 400004)"
    );
    assert!(output(&processor).is_empty());
}

#[test]
fn invalid_function_is_fatal() {
    let mut processor = processor(&[r_type(T0, T1, T2, 0x3f)], &[], "");
    let error = processor.run().unwrap_err();

    assert!(matches!(error, SimulatorError::InvalidFunction { .. }));
    assert_eq!(
        error.to_string(),
        "Invalid function code (instruction = 109503f, pc = 400000)"
    );
}
