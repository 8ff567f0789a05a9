//! Stimulus generator CLI for the spiking-hardware testbench.
//!
//! Examples:
//!   spikegen
//!   spikegen gen --steps 256 --seed 7
//!   spikegen rom --units 16
//!   spikegen rom --save
//!   spikegen all --out-dir tb
//!
//! `gen` samples the bit-matrices and writes the flat stimulus files plus
//! the ROM preload includes under the artifact directory (default `tb/`).
//! `rom` re-encodes the flat files as synthesizable lookup tables on stdout.
//! Bare `spikegen` runs the whole pipeline.

use std::path::PathBuf;
use std::process;

use tracing::{error, info};

use spikegen::config::VectorConfig;
use spikegen::error::StimulusError;
use spikegen::rom::{lookup_table_block, write_preload_file};
use spikegen::sampler::Sampler;

// Artifact names, fixed by the testbench include list.
const SPIKE_TXT: &str = "spike_input.txt";
const INHIB_TXT: &str = "inhibition_flags.txt";
const SPIKE_ROM_INIT: &str = "spike_rom_init.vh";
const INHIB_ROM_INIT: &str = "inhib_rom_init.vh";

// Verilog identifiers the RTL expects.
const SPIKE_ROM: &str = "spike_rom";
const INHIB_ROM: &str = "inhib_rom";
const SPIKE_PATTERN: &str = "spike_pattern";
const INHIB_PATTERN: &str = "inhib_pattern";

const DEFAULT_OUT_DIR: &str = "tb";

#[derive(Debug, Clone, Copy)]
enum Command {
    Gen,
    Rom,
    All,
}

struct CliOptions {
    cfg: VectorConfig,
    out_dir: PathBuf,
    save_rom: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() >= 2 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        print_help();
        return;
    }

    let (command, rest) = match args.get(1).map(String::as_str) {
        None => (Command::All, &args[1..]),
        Some("gen") => (Command::Gen, &args[2..]),
        Some("rom") => (Command::Rom, &args[2..]),
        Some("all") => (Command::All, &args[2..]),
        // Bare options select the default pipeline.
        Some(opt) if opt.starts_with("--") => (Command::All, &args[1..]),
        Some(other) => {
            eprintln!("Unknown command: {other}");
            print_help();
            process::exit(2);
        }
    };

    let opts = match parse_options(rest) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{msg}");
            print_help();
            process::exit(2);
        }
    };

    let outcome = match command {
        Command::Gen => run_gen(&opts),
        Command::Rom => run_rom(&opts),
        Command::All => run_gen(&opts).and_then(|_| run_rom(&opts)),
    };

    if let Err(e) = outcome {
        error!("{e}");
        process::exit(1);
    }
}

fn print_help() {
    println!("spikegen (stimulus vectors for the spiking-hardware testbench)");
    println!("usage: spikegen [gen|rom|all] [options]");
    println!("commands:");
    println!("  gen               sample and write flat files + ROM preload includes");
    println!("  rom               print synthesizable lookup tables for the flat files");
    println!("  all               gen then rom (the default)");
    println!("options:");
    println!("  --units N         population size (default 64)");
    println!("  --steps N         time steps to sample (default 1024)");
    println!("  --excitatory N    excitatory partition size (default 32)");
    println!("  --width N         declared Verilog width (default: units)");
    println!("  --seed N          RNG seed (default: drawn from the clock)");
    println!("  --out-dir PATH    artifact directory (default: tb)");
    println!("  --config FILE     JSON config; flags after it still override");
    println!("  --save            rom: also write each table to <name>_rom.v");
}

fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut cfg = VectorConfig::default();
    let mut out_dir = PathBuf::from(DEFAULT_OUT_DIR);
    let mut save_rom = false;

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--units" => cfg.unit_count = take_number(args, &mut i, flag)?,
            "--steps" => cfg.step_count = take_number(args, &mut i, flag)?,
            "--excitatory" => cfg.excitatory_count = take_number(args, &mut i, flag)?,
            "--width" => cfg.width = Some(take_number(args, &mut i, flag)?),
            "--seed" => cfg.seed = Some(take_number(args, &mut i, flag)?),
            "--out-dir" => out_dir = PathBuf::from(take_value(args, &mut i, flag)?),
            "--config" => cfg = load_config(take_value(args, &mut i, flag)?)?,
            "--save" => save_rom = true,
            other => return Err(format!("Unknown option: {other}")),
        }
        i += 1;
    }

    cfg.validate()
        .map_err(|msg| format!("Invalid configuration: {msg}"))?;

    Ok(CliOptions {
        cfg,
        out_dir,
        save_rom,
    })
}

fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    match args.get(*i) {
        Some(value) => Ok(value.as_str()),
        None => Err(format!("{flag} requires a value")),
    }
}

fn take_number<T: std::str::FromStr>(
    args: &[String],
    i: &mut usize,
    flag: &str,
) -> Result<T, String> {
    let value = take_value(args, i, flag)?;
    value
        .parse()
        .map_err(|_| format!("{flag} must be a number, got '{value}'"))
}

fn load_config(path: &str) -> Result<VectorConfig, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {path}: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse config {path}: {e}"))
}

fn run_gen(opts: &CliOptions) -> Result<(), StimulusError> {
    let spike_txt = opts.out_dir.join(SPIKE_TXT);
    let inhib_txt = opts.out_dir.join(INHIB_TXT);

    let mut sampler = Sampler::new(opts.cfg.clone());
    let rows = sampler.write_stimulus_files(&spike_txt, &inhib_txt)?;
    info!("wrote {rows} stimulus rows to {:?} and {:?}", spike_txt, inhib_txt);

    let width = opts.cfg.declared_width();
    for (input, output_name, identifier) in [
        (&spike_txt, SPIKE_ROM_INIT, SPIKE_ROM),
        (&inhib_txt, INHIB_ROM_INIT, INHIB_ROM),
    ] {
        let output = opts.out_dir.join(output_name);
        let rows = write_preload_file(input, &output, identifier, width)?;
        info!("wrote {rows} preload directives to {:?}", output);
    }
    Ok(())
}

fn run_rom(opts: &CliOptions) -> Result<(), StimulusError> {
    let width = opts.cfg.declared_width();

    for (input_name, identifier) in [(SPIKE_TXT, SPIKE_PATTERN), (INHIB_TXT, INHIB_PATTERN)] {
        let input = opts.out_dir.join(input_name);
        let block = lookup_table_block(&input, identifier, width)?;
        info!("{identifier}: {} case branches", block.row_count);

        println!("{}", "=".repeat(60));
        println!("Generating Verilog code for the {identifier} ROM");
        println!("{}", "=".repeat(60));
        println!("{}", block.text);
        println!();

        if opts.save_rom {
            let path = opts.out_dir.join(format!("{identifier}_rom.v"));
            std::fs::write(&path, format!("{}\n", block.text))?;
            info!("saved lookup table to {:?}", path);
        }
    }
    Ok(())
}
