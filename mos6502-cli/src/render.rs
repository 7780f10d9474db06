//! Colorized rendering of CPU state for the REPL - registers, flags, a
//! hex memory dump, and disassembly windows. Purely presentational: reads
//! the core, never mutates it, mirroring the core's own disassembler.

use colored::*;
use mos6502_core::disassemble;
use mos6502_core::status::StatusFlag;
use mos6502_core::Cpu;

/// `A: $00  X: $00  Y: $00  SP: $FF  PC: $0000  SR: 00100000 [N V - B D I Z C]`
/// with each set flag bit highlighted, the way the reference project's
/// own `ppu-cli-tool` highlights nonzero nibbles rather than printing a
/// flat, uncolored dump.
pub fn registers(cpu: &Cpu) -> String {
    let r = &cpu.registers;
    let flags = [
        ("N", StatusFlag::Negative),
        ("V", StatusFlag::Overflow),
        ("B", StatusFlag::Break),
        ("D", StatusFlag::Decimal),
        ("I", StatusFlag::InterruptDisable),
        ("Z", StatusFlag::Zero),
        ("C", StatusFlag::Carry),
    ];
    let flag_text: Vec<String> = flags
        .iter()
        .map(|(letter, flag)| {
            if cpu.status.is_set(*flag) {
                letter.green().bold().to_string()
            } else {
                letter.dimmed().to_string()
            }
        })
        .collect();

    format!(
        "A: {}  X: {}  Y: {}  SP: {}  PC: {}  [{}]",
        format!("${:02X}", r.a).yellow(),
        format!("${:02X}", r.x).yellow(),
        format!("${:02X}", r.y).yellow(),
        format!("${:02X}", r.sp).cyan(),
        format!("${:04X}", r.pc).magenta(),
        flag_text.join(" "),
    )
}

/// A classic hex dump: 16 bytes per row, address gutter on the left.
pub fn memory_dump(cpu: &Cpu, start: u16, length: u16) -> String {
    let mut out = String::new();
    // Kept as `u32` for the whole loop: a window ending exactly at
    // `0x10000` (the top of the address space) must not wrap back to
    // `0x0000` the way a `u16` counter would.
    let mut address: u32 = start as u32;
    let end = start as u32 + length as u32;
    while address < end {
        out.push_str(&format!("{}", format!("${:04X} │ ", address).dimmed()));
        let row_end = end.min(address + 16);
        for a in address..row_end {
            let byte = cpu.memory.read_u8(a as u16);
            let text = format!("{:02X} ", byte);
            if byte == 0 {
                out.push_str(&text.dimmed().to_string());
            } else {
                out.push_str(&text);
            }
        }
        out.push('\n');
        address = row_end;
    }
    out.trim_end().to_string()
}

pub fn disasm(cpu: &Cpu, address: u16, count: usize) -> String {
    disassemble::disassemble(&cpu.memory, address, count)
        .iter()
        .map(|line| line.text.clone())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn error(message: &str) -> String {
    message.red().to_string()
}
