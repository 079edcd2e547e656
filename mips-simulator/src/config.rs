/// The config for `Processor`
#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Discard writes to register 0 so it always reads as zero
    pub hardwire_zero_register: bool,

    /// Halt after this many instructions have been executed
    pub max_steps: Option<u64>,
}
