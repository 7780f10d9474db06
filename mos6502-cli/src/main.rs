//! `mos6502-cli` - a line-oriented monitor/debugger for the `mos6502-core`
//! emulator. Owns exactly one `Cpu` for the life of the process, the same
//! single-owner contract the core's documentation assumes (a debugger and
//! a renderer sharing a core would have to serialize access themselves;
//! this binary has no renderer to share with).

mod command;
mod render;

use clap::Parser;
use colored::*;
use command::Command;
use mos6502_core::Cpu;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// A 6502 monitor. With no arguments it starts an empty machine at an
/// interactive prompt; pass a binary image to load and run it immediately.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raw binary image to load before the prompt starts.
    file: Option<String>,

    /// Address to load `file` at.
    #[arg(long, default_value = "0")]
    address: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let address = match command::parse_u16_hex(&args.address) {
        Ok(value) => value,
        Err(message) => {
            eprintln!("{}", render::error(&message));
            return ExitCode::FAILURE;
        }
    };

    let mut cpu = Cpu::new();

    if let Some(path) = &args.file {
        match command::read_file_bytes(path) {
            Ok(bytes) => {
                if let Err(err) = cpu.load(address, &bytes) {
                    eprintln!("{}", render::error(&err.to_string()));
                    return ExitCode::FAILURE;
                }
                println!("loaded {} bytes from {path} at ${address:04X}", bytes.len());
            }
            Err(message) => {
                eprintln!("{}", render::error(&message));
                return ExitCode::FAILURE;
            }
        }
    }

    run_repl(&mut cpu);
    ExitCode::SUCCESS
}

fn run_repl(cpu: &mut Cpu) {
    let stdin = io::stdin();
    loop {
        print!("{}", "mos6502> ".blue().bold());
        let _ = io::stdout().flush();

        let mut line = String::new();
        let bytes_read = match stdin.lock().read_line(&mut line) {
            Ok(n) => n,
            Err(err) => {
                eprintln!("{}", render::error(&format!("stdin read failed: {err}")));
                return;
            }
        };
        if bytes_read == 0 {
            // EOF (e.g. piped input ran out): quit cleanly, same as `quit`.
            return;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match command::parse_line(line) {
            Ok(Command::Quit) => return,
            Ok(parsed) => dispatch(cpu, parsed),
            Err(message) => eprintln!("{}", render::error(&message)),
        }
    }
}

fn dispatch(cpu: &mut Cpu, command: Command) {
    match command {
        Command::Reset => {
            cpu.reset();
            println!("reset");
        }

        Command::Load { address, bytes } => match cpu.load(address, &bytes) {
            Ok(()) => println!("loaded {} byte(s) at ${address:04X}", bytes.len()),
            Err(err) => eprintln!("{}", render::error(&err.to_string())),
        },

        Command::File { path, address } => match command::read_file_bytes(&path) {
            Ok(bytes) => match cpu.load(address, &bytes) {
                Ok(()) => println!("loaded {} byte(s) from {path} at ${address:04X}", bytes.len()),
                Err(err) => eprintln!("{}", render::error(&err.to_string())),
            },
            Err(message) => eprintln!("{}", render::error(&message)),
        },

        Command::Step { count } => {
            for _ in 0..count {
                if cpu.halted {
                    println!("halted");
                    break;
                }
                if let Err(err) = cpu.step() {
                    eprintln!("{}", render::error(&err.to_string()));
                    break;
                }
            }
            println!("{}", render::registers(cpu));
        }

        Command::Run => match cpu.run() {
            Ok(()) => println!("halted\n{}", render::registers(cpu)),
            Err(err) => eprintln!("{}", render::error(&err.to_string())),
        },

        Command::SetPc { value } => {
            cpu.registers.pc = value;
            println!("{}", render::registers(cpu));
        }

        Command::Regs => println!("{}", render::registers(cpu)),

        Command::Mem { start, length } => {
            let (start, length) = command::clamp_window(start, length);
            println!("{}", render::memory_dump(cpu, start, length));
        }

        Command::Disasm { address, count } => {
            let address = address.unwrap_or(cpu.registers.pc);
            println!("{}", render::disasm(cpu, address, count));
        }

        Command::Help => println!("{}", HELP_TEXT),

        Command::Quit => unreachable!("Quit is handled by the REPL loop"),
    }
}

const HELP_TEXT: &str = "\
reset                        zero registers, status, and memory
load <addr-hex> <byte-hex>...   write bytes into memory
file <path> [addr-hex]       read a binary image into memory (default $0000)
step [n]                     execute n instructions (default 1)
run                          execute until BRK halts the CPU
pc = <value-hex>             set the program counter
regs                         print registers and flags
mem <start-hex> [len]        hex dump of memory (default 16 bytes)
disasm [addr-hex] [count]    disassemble starting at addr (default PC, 16 lines)
quit                         exit the monitor";
