#[macro_use]
extern crate log;

pub mod constants;
pub mod image;
