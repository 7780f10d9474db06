//! The opcode table: for every legal opcode byte, the mnemonic, the
//! addressing mode, the instruction length in bytes, the base cycle count,
//! and whether a page-boundary crossing adds one more cycle.
//!
//! `decode` is a single `match` over all 256 byte values rather than a
//! hand-populated `[T; 256]` array (the shape the reference project uses
//! for its own dispatch tables) - a dense integer match compiles down to
//! the same jump table, without having to carry 256 explicit rows for the
//! ~105 illegal byte values this emulator does not support.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Accumulator,
    Absolute,
    AbsoluteXIndexed,
    AbsoluteYIndexed,
    Immediate,
    Implied,
    Indirect,
    IndexedXIndirect,
    IndirectYIndexed,
    Relative,
    ZeroPage,
    ZeroPageXIndexed,
    ZeroPageYIndexed,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    // Logical and arithmetic commands.
    Ora, And, Eor, Adc, Sbc, Cmp, Cpx, Cpy,
    Dec, Dex, Dey, Inc, Inx, Iny,
    Asl, Rol, Lsr, Ror,
    // Move commands.
    Lda, Sta, Ldx, Stx, Ldy, Sty,
    Tax, Txa, Tay, Tya, Tsx, Txs,
    Pla, Pha, Plp, Php,
    // Jump / flag commands.
    Bpl, Bmi, Bvc, Bvs, Bcc, Bcs, Bne, Beq,
    Brk, Rti, Jsr, Rts, Jmp, Bit,
    Clc, Sec, Cld, Sed, Cli, Sei, Clv,
    Nop,
}

impl Mnemonic {
    /// The uppercase three-letter form used by the disassembler, matching
    /// the reference project's own opcode-string table (`MNEMONIC = 'ADC'`,
    /// …) and §4.8's canonical forms (`LDA #$42`, `JMP ($1234)`).
    pub fn as_str(&self) -> &'static str {
        use Mnemonic::*;
        match self {
            Ora => "ORA", And => "AND", Eor => "EOR", Adc => "ADC", Sbc => "SBC",
            Cmp => "CMP", Cpx => "CPX", Cpy => "CPY",
            Dec => "DEC", Dex => "DEX", Dey => "DEY", Inc => "INC", Inx => "INX", Iny => "INY",
            Asl => "ASL", Rol => "ROL", Lsr => "LSR", Ror => "ROR",
            Lda => "LDA", Sta => "STA", Ldx => "LDX", Stx => "STX", Ldy => "LDY", Sty => "STY",
            Tax => "TAX", Txa => "TXA", Tay => "TAY", Tya => "TYA", Tsx => "TSX", Txs => "TXS",
            Pla => "PLA", Pha => "PHA", Plp => "PLP", Php => "PHP",
            Bpl => "BPL", Bmi => "BMI", Bvc => "BVC", Bvs => "BVS",
            Bcc => "BCC", Bcs => "BCS", Bne => "BNE", Beq => "BEQ",
            Brk => "BRK", Rti => "RTI", Jsr => "JSR", Rts => "RTS", Jmp => "JMP", Bit => "BIT",
            Clc => "CLC", Sec => "SEC", Cld => "CLD", Sed => "SED", Cli => "CLI", Sei => "SEI",
            Clv => "CLV", Nop => "NOP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub mnemonic: Mnemonic,
    pub mode: Mode,
    pub length: u8,
    pub cycles: u8,
    pub page_boundary_penalty: bool,
}

impl OpcodeEntry {
    const fn new(
        mnemonic: Mnemonic,
        mode: Mode,
        length: u8,
        cycles: u8,
        page_boundary_penalty: bool,
    ) -> OpcodeEntry {
        OpcodeEntry {
            mnemonic,
            mode,
            length,
            cycles,
            page_boundary_penalty,
        }
    }
}

/// Look up the table entry for an opcode byte. Returns `None` for the
/// ~105 byte values the 6502 reserves for undocumented/illegal opcodes,
/// which this emulator does not execute.
pub const fn decode(opcode: u8) -> Option<OpcodeEntry> {
    use Mnemonic::*;
    use Mode::*;
    Some(match opcode {
        0x00 => OpcodeEntry::new(Brk, Implied, 1, 7, false),
        0x01 => OpcodeEntry::new(Ora, IndexedXIndirect, 2, 6, false),
        0x05 => OpcodeEntry::new(Ora, ZeroPage, 2, 3, false),
        0x06 => OpcodeEntry::new(Asl, ZeroPage, 2, 5, false),
        0x08 => OpcodeEntry::new(Php, Implied, 1, 3, false),
        0x09 => OpcodeEntry::new(Ora, Immediate, 2, 2, false),
        0x0A => OpcodeEntry::new(Asl, Accumulator, 1, 2, false),
        0x0D => OpcodeEntry::new(Ora, Absolute, 3, 4, false),
        0x0E => OpcodeEntry::new(Asl, Absolute, 3, 6, false),

        0x10 => OpcodeEntry::new(Bpl, Relative, 2, 2, true),
        0x11 => OpcodeEntry::new(Ora, IndirectYIndexed, 2, 5, true),
        0x15 => OpcodeEntry::new(Ora, ZeroPageXIndexed, 2, 4, false),
        0x16 => OpcodeEntry::new(Asl, ZeroPageXIndexed, 2, 6, false),
        0x18 => OpcodeEntry::new(Clc, Implied, 1, 2, false),
        0x19 => OpcodeEntry::new(Ora, AbsoluteYIndexed, 3, 4, true),
        0x1D => OpcodeEntry::new(Ora, AbsoluteXIndexed, 3, 4, true),
        0x1E => OpcodeEntry::new(Asl, AbsoluteXIndexed, 3, 7, false),

        0x20 => OpcodeEntry::new(Jsr, Absolute, 3, 6, false),
        0x21 => OpcodeEntry::new(And, IndexedXIndirect, 2, 6, false),
        0x24 => OpcodeEntry::new(Bit, ZeroPage, 2, 3, false),
        0x25 => OpcodeEntry::new(And, ZeroPage, 2, 3, false),
        0x26 => OpcodeEntry::new(Rol, ZeroPage, 2, 5, false),
        0x28 => OpcodeEntry::new(Plp, Implied, 1, 4, false),
        0x29 => OpcodeEntry::new(And, Immediate, 2, 2, false),
        0x2A => OpcodeEntry::new(Rol, Accumulator, 1, 2, false),
        0x2C => OpcodeEntry::new(Bit, Absolute, 3, 4, false),
        0x2D => OpcodeEntry::new(And, Absolute, 3, 4, false),
        0x2E => OpcodeEntry::new(Rol, Absolute, 3, 6, false),

        0x30 => OpcodeEntry::new(Bmi, Relative, 2, 2, true),
        0x31 => OpcodeEntry::new(And, IndirectYIndexed, 2, 5, true),
        0x35 => OpcodeEntry::new(And, ZeroPageXIndexed, 2, 4, false),
        0x36 => OpcodeEntry::new(Rol, ZeroPageXIndexed, 2, 6, false),
        0x38 => OpcodeEntry::new(Sec, Implied, 1, 2, false),
        0x39 => OpcodeEntry::new(And, AbsoluteYIndexed, 3, 4, true),
        0x3D => OpcodeEntry::new(And, AbsoluteXIndexed, 3, 4, true),
        0x3E => OpcodeEntry::new(Rol, AbsoluteXIndexed, 3, 7, false),

        0x40 => OpcodeEntry::new(Rti, Implied, 1, 6, false),
        0x41 => OpcodeEntry::new(Eor, IndexedXIndirect, 2, 6, false),
        0x45 => OpcodeEntry::new(Eor, ZeroPage, 2, 3, false),
        0x46 => OpcodeEntry::new(Lsr, ZeroPage, 2, 5, false),
        0x48 => OpcodeEntry::new(Pha, Implied, 1, 3, false),
        0x49 => OpcodeEntry::new(Eor, Immediate, 2, 2, false),
        0x4A => OpcodeEntry::new(Lsr, Accumulator, 1, 2, false),
        0x4C => OpcodeEntry::new(Jmp, Absolute, 3, 3, false),
        0x4D => OpcodeEntry::new(Eor, Absolute, 3, 4, false),
        0x4E => OpcodeEntry::new(Lsr, Absolute, 3, 6, false),

        0x50 => OpcodeEntry::new(Bvc, Relative, 2, 2, true),
        0x51 => OpcodeEntry::new(Eor, IndirectYIndexed, 2, 5, true),
        0x55 => OpcodeEntry::new(Eor, ZeroPageXIndexed, 2, 4, false),
        0x56 => OpcodeEntry::new(Lsr, ZeroPageXIndexed, 2, 6, false),
        0x58 => OpcodeEntry::new(Cli, Implied, 1, 2, false),
        0x59 => OpcodeEntry::new(Eor, AbsoluteYIndexed, 3, 4, true),
        0x5D => OpcodeEntry::new(Eor, AbsoluteXIndexed, 3, 4, true),
        0x5E => OpcodeEntry::new(Lsr, AbsoluteXIndexed, 3, 7, false),

        0x60 => OpcodeEntry::new(Rts, Implied, 1, 6, false),
        0x61 => OpcodeEntry::new(Adc, IndexedXIndirect, 2, 6, false),
        0x65 => OpcodeEntry::new(Adc, ZeroPage, 2, 3, false),
        0x66 => OpcodeEntry::new(Ror, ZeroPage, 2, 5, false),
        0x68 => OpcodeEntry::new(Pla, Implied, 1, 4, false),
        0x69 => OpcodeEntry::new(Adc, Immediate, 2, 2, false),
        0x6A => OpcodeEntry::new(Ror, Accumulator, 1, 2, false),
        0x6C => OpcodeEntry::new(Jmp, Indirect, 3, 5, false),
        0x6D => OpcodeEntry::new(Adc, Absolute, 3, 4, false),
        0x6E => OpcodeEntry::new(Ror, Absolute, 3, 6, false),

        0x70 => OpcodeEntry::new(Bvs, Relative, 2, 2, true),
        0x71 => OpcodeEntry::new(Adc, IndirectYIndexed, 2, 5, true),
        0x75 => OpcodeEntry::new(Adc, ZeroPageXIndexed, 2, 4, false),
        0x76 => OpcodeEntry::new(Ror, ZeroPageXIndexed, 2, 6, false),
        0x78 => OpcodeEntry::new(Sei, Implied, 1, 2, false),
        0x79 => OpcodeEntry::new(Adc, AbsoluteYIndexed, 3, 4, true),
        0x7D => OpcodeEntry::new(Adc, AbsoluteXIndexed, 3, 4, true),
        0x7E => OpcodeEntry::new(Ror, AbsoluteXIndexed, 3, 7, false),

        0x81 => OpcodeEntry::new(Sta, IndexedXIndirect, 2, 6, false),
        0x84 => OpcodeEntry::new(Sty, ZeroPage, 2, 3, false),
        0x85 => OpcodeEntry::new(Sta, ZeroPage, 2, 3, false),
        0x86 => OpcodeEntry::new(Stx, ZeroPage, 2, 3, false),
        0x88 => OpcodeEntry::new(Dey, Implied, 1, 2, false),
        0x8A => OpcodeEntry::new(Txa, Implied, 1, 2, false),
        0x8C => OpcodeEntry::new(Sty, Absolute, 3, 4, false),
        0x8D => OpcodeEntry::new(Sta, Absolute, 3, 4, false),
        0x8E => OpcodeEntry::new(Stx, Absolute, 3, 4, false),

        0x90 => OpcodeEntry::new(Bcc, Relative, 2, 2, true),
        0x91 => OpcodeEntry::new(Sta, IndirectYIndexed, 2, 6, false),
        0x94 => OpcodeEntry::new(Sty, ZeroPageXIndexed, 2, 4, false),
        0x95 => OpcodeEntry::new(Sta, ZeroPageXIndexed, 2, 4, false),
        0x96 => OpcodeEntry::new(Stx, ZeroPageYIndexed, 2, 4, false),
        0x98 => OpcodeEntry::new(Tya, Implied, 1, 2, false),
        0x99 => OpcodeEntry::new(Sta, AbsoluteYIndexed, 3, 5, false),
        0x9A => OpcodeEntry::new(Txs, Implied, 1, 2, false),
        0x9D => OpcodeEntry::new(Sta, AbsoluteXIndexed, 3, 5, false),

        0xA0 => OpcodeEntry::new(Ldy, Immediate, 2, 2, false),
        0xA1 => OpcodeEntry::new(Lda, IndexedXIndirect, 2, 6, false),
        0xA2 => OpcodeEntry::new(Ldx, Immediate, 2, 2, false),
        0xA4 => OpcodeEntry::new(Ldy, ZeroPage, 2, 3, false),
        0xA5 => OpcodeEntry::new(Lda, ZeroPage, 2, 3, false),
        0xA6 => OpcodeEntry::new(Ldx, ZeroPage, 2, 3, false),
        0xA8 => OpcodeEntry::new(Tay, Implied, 1, 2, false),
        0xA9 => OpcodeEntry::new(Lda, Immediate, 2, 2, false),
        0xAA => OpcodeEntry::new(Tax, Implied, 1, 2, false),
        0xAC => OpcodeEntry::new(Ldy, Absolute, 3, 4, false),
        0xAD => OpcodeEntry::new(Lda, Absolute, 3, 4, false),
        0xAE => OpcodeEntry::new(Ldx, Absolute, 3, 4, false),

        0xB0 => OpcodeEntry::new(Bcs, Relative, 2, 2, true),
        0xB1 => OpcodeEntry::new(Lda, IndirectYIndexed, 2, 5, true),
        0xB4 => OpcodeEntry::new(Ldy, ZeroPageXIndexed, 2, 4, false),
        0xB5 => OpcodeEntry::new(Lda, ZeroPageXIndexed, 2, 4, false),
        0xB6 => OpcodeEntry::new(Ldx, ZeroPageYIndexed, 2, 4, false),
        0xB8 => OpcodeEntry::new(Clv, Implied, 1, 2, false),
        0xB9 => OpcodeEntry::new(Lda, AbsoluteYIndexed, 3, 4, true),
        0xBA => OpcodeEntry::new(Tsx, Implied, 1, 2, false),
        0xBC => OpcodeEntry::new(Ldy, AbsoluteXIndexed, 3, 4, true),
        0xBD => OpcodeEntry::new(Lda, AbsoluteXIndexed, 3, 4, true),
        0xBE => OpcodeEntry::new(Ldx, AbsoluteYIndexed, 3, 4, true),

        0xC0 => OpcodeEntry::new(Cpy, Immediate, 2, 2, false),
        0xC1 => OpcodeEntry::new(Cmp, IndexedXIndirect, 2, 6, false),
        0xC4 => OpcodeEntry::new(Cpy, ZeroPage, 2, 3, false),
        0xC5 => OpcodeEntry::new(Cmp, ZeroPage, 2, 3, false),
        0xC6 => OpcodeEntry::new(Dec, ZeroPage, 2, 5, false),
        0xC8 => OpcodeEntry::new(Iny, Implied, 1, 2, false),
        0xC9 => OpcodeEntry::new(Cmp, Immediate, 2, 2, false),
        0xCA => OpcodeEntry::new(Dex, Implied, 1, 2, false),
        0xCC => OpcodeEntry::new(Cpy, Absolute, 3, 4, false),
        0xCD => OpcodeEntry::new(Cmp, Absolute, 3, 4, false),
        0xCE => OpcodeEntry::new(Dec, Absolute, 3, 6, false),

        0xD0 => OpcodeEntry::new(Bne, Relative, 2, 2, true),
        0xD1 => OpcodeEntry::new(Cmp, IndirectYIndexed, 2, 5, true),
        0xD5 => OpcodeEntry::new(Cmp, ZeroPageXIndexed, 2, 4, false),
        0xD6 => OpcodeEntry::new(Dec, ZeroPageXIndexed, 2, 6, false),
        0xD8 => OpcodeEntry::new(Cld, Implied, 1, 2, false),
        0xD9 => OpcodeEntry::new(Cmp, AbsoluteYIndexed, 3, 4, true),
        0xDD => OpcodeEntry::new(Cmp, AbsoluteXIndexed, 3, 4, true),
        0xDE => OpcodeEntry::new(Dec, AbsoluteXIndexed, 3, 7, false),

        0xE0 => OpcodeEntry::new(Cpx, Immediate, 2, 2, false),
        0xE1 => OpcodeEntry::new(Sbc, IndexedXIndirect, 2, 6, false),
        0xE4 => OpcodeEntry::new(Cpx, ZeroPage, 2, 3, false),
        0xE5 => OpcodeEntry::new(Sbc, ZeroPage, 2, 3, false),
        0xE6 => OpcodeEntry::new(Inc, ZeroPage, 2, 5, false),
        0xE8 => OpcodeEntry::new(Inx, Implied, 1, 2, false),
        0xE9 => OpcodeEntry::new(Sbc, Immediate, 2, 2, false),
        0xEA => OpcodeEntry::new(Nop, Implied, 1, 2, false),
        0xEC => OpcodeEntry::new(Cpx, Absolute, 3, 4, false),
        0xED => OpcodeEntry::new(Sbc, Absolute, 3, 4, false),
        0xEE => OpcodeEntry::new(Inc, Absolute, 3, 6, false),

        0xF0 => OpcodeEntry::new(Beq, Relative, 2, 2, true),
        0xF1 => OpcodeEntry::new(Sbc, IndirectYIndexed, 2, 5, true),
        0xF5 => OpcodeEntry::new(Sbc, ZeroPageXIndexed, 2, 4, false),
        0xF6 => OpcodeEntry::new(Inc, ZeroPageXIndexed, 2, 6, false),
        0xF8 => OpcodeEntry::new(Sed, Implied, 1, 2, false),
        0xF9 => OpcodeEntry::new(Sbc, AbsoluteYIndexed, 3, 4, true),
        0xFD => OpcodeEntry::new(Sbc, AbsoluteXIndexed, 3, 4, true),
        0xFE => OpcodeEntry::new(Inc, AbsoluteXIndexed, 3, 7, false),

        _ => return None,
    })
}
