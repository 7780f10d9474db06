//! Formats instructions as human-readable assembly text. Read-only - never
//! mutates the memory or CPU it inspects. Mirrors the textual conventions
//! of a classic 6502 disassembler: `$1234` absolute, `#$42` immediate,
//! `$10,X` zero-page indexed, `($10,X)`/`($10),Y` indirect indexed,
//! `($1234)` JMP indirect, and the resolved target address for branches.

use crate::byte::to_signed;
use crate::memory::Memory;
use crate::opcodes::{self, Mode};

/// One decoded line of disassembly, and the address the next instruction
/// starts at so callers can chain calls across a contiguous window.
pub struct Line {
    pub address: u16,
    pub text: String,
    pub next_address: u16,
}

/// Disassembles the single instruction at `address`. If the byte there
/// isn't a legal opcode, renders it as a raw `.byte $xx` so a disassembly
/// window can keep scrolling through data sections instead of stopping.
pub fn disassemble_one(memory: &Memory, address: u16) -> Line {
    let opcode = memory.read_u8(address);
    let entry = match opcodes::decode(opcode) {
        Some(entry) => entry,
        None => {
            return Line {
                address,
                text: format!("${:04X} .byte ${:02X}", address, opcode),
                next_address: address.wrapping_add(1),
            }
        }
    };

    let mnemonic = entry.mnemonic.as_str();
    let operand_text = match entry.mode {
        Mode::Accumulator | Mode::Implied => String::new(),
        Mode::Immediate => format!(" #${:02X}", memory.read_u8(address.wrapping_add(1))),
        Mode::ZeroPage => format!(" ${:02X}", memory.read_u8(address.wrapping_add(1))),
        Mode::ZeroPageXIndexed => format!(" ${:02X},X", memory.read_u8(address.wrapping_add(1))),
        Mode::ZeroPageYIndexed => format!(" ${:02X},Y", memory.read_u8(address.wrapping_add(1))),
        Mode::IndexedXIndirect => format!(" (${:02X},X)", memory.read_u8(address.wrapping_add(1))),
        Mode::IndirectYIndexed => format!(" (${:02X}),Y", memory.read_u8(address.wrapping_add(1))),
        Mode::Absolute => format!(" ${:04X}", memory.read_u16(address.wrapping_add(1))),
        Mode::AbsoluteXIndexed => format!(" ${:04X},X", memory.read_u16(address.wrapping_add(1))),
        Mode::AbsoluteYIndexed => format!(" ${:04X},Y", memory.read_u16(address.wrapping_add(1))),
        Mode::Indirect => format!(" (${:04X})", memory.read_u16(address.wrapping_add(1))),
        Mode::Relative => {
            let offset = to_signed(memory.read_u8(address.wrapping_add(1)));
            let next = address.wrapping_add(2);
            let target = next.wrapping_add(offset as u16);
            format!(" ${:04X}", target)
        }
    };

    Line {
        address,
        text: format!("${:04X} {}{}", address, mnemonic, operand_text),
        next_address: address.wrapping_add(entry.length as u16),
    }
}

/// Disassembles `count` instructions starting at `address`.
pub fn disassemble(memory: &Memory, address: u16, count: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(count);
    let mut addr = address;
    for _ in 0..count {
        let line = disassemble_one(memory, addr);
        addr = line.next_address;
        lines.push(line);
    }
    lines
}
