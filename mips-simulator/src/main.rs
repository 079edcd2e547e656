use mips_simulator::config::Config;
use mips_simulator::instruction::Register;
use mips_simulator::Processor;
use mips_types::image::ProgramImage;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

#[macro_use]
extern crate log;

#[derive(StructOpt)]
struct CliArgs {
    /// Hardwire register 0 to zero, as on real MIPS hardware
    #[structopt(long)]
    hardwire_zero: bool,

    /// Stop after executing this many instructions
    #[structopt(long)]
    max_steps: Option<u64>,

    /// Print the final program counter and registers to stderr
    #[structopt(long)]
    dump_registers: bool,

    /// Text segment: one hex instruction word per line
    #[structopt(parse(from_os_str))]
    text_file: PathBuf,

    /// Data segment: one hex data word per line
    #[structopt(parse(from_os_str))]
    data_file: PathBuf,
}

fn main() {
    // Setup logging and parse CLI args
    env_logger::init();
    let args = CliArgs::from_args();

    if let Err(error) = run(&args) {
        println!("Error: {}", error);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let image = ProgramImage::from_files(&args.text_file, &args.data_file)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut processor = Processor::new(
        Config {
            hardwire_zero_register: args.hardwire_zero,
            max_steps: args.max_steps,
        },
        stdin.lock(),
        stdout.lock(),
    );
    processor.load_image(&image);
    info!("Loaded processor with code");

    let reason = processor.run()?;
    debug!("Finished with {:?}", reason);

    if args.dump_registers {
        eprintln!("pc = 0x{:08x}", processor.program_counter());
        for (register, value) in processor.registers().values().iter().enumerate() {
            eprintln!("{:>5} = 0x{:08x} ({})", Register(register as u8), value, value);
        }
    }

    Ok(())
}
