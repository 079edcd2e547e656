#[macro_use]
extern crate log;

pub mod config;
mod error;
pub mod instruction;
mod math;
pub mod memory;
mod operations;
mod processor;
pub mod registers;

pub use error::SimulatorError;
pub use processor::{HaltReason, Processor, State};
