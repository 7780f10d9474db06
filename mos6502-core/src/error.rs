use std::fmt;

/// Fatal conditions the core can hit. These are surfaced to the caller as
/// `Result::Err` rather than unwound via panic, mirroring the hand-rolled
/// error enums used elsewhere in this codebase (no `thiserror`/`anyhow`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    IllegalOpcode { opcode: u8, at: u16 },
    AddressOutOfRange { address: u32 },
    DecodeLengthMismatch {
        opcode: u8,
        expected: usize,
        actual: usize,
    },
    ValueOutOfRange { value: i32 },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::IllegalOpcode { opcode, at } => write!(
                f,
                "illegal opcode 0x{:02X} at address 0x{:04X}",
                opcode, at
            ),
            CoreError::AddressOutOfRange { address } => {
                write!(f, "address 0x{:X} is out of range (max 0xFFFF)", address)
            }
            CoreError::DecodeLengthMismatch {
                opcode,
                expected,
                actual,
            } => write!(
                f,
                "opcode 0x{:02X} expected {} operand byte(s), got {}",
                opcode, expected, actual
            ),
            CoreError::ValueOutOfRange { value } => {
                write!(f, "value {} is out of range for a byte", value)
            }
        }
    }
}

impl std::error::Error for CoreError {}
