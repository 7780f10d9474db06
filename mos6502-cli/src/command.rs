//! Parses one line of REPL input into a `Command`. Kept separate from
//! `main` so the parser can be exercised directly in tests, the same way
//! the core's opcode table is tested without going through `step`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Reset,
    Load { address: u16, bytes: Vec<u8> },
    File { path: String, address: u16 },
    Step { count: u32 },
    Run,
    SetPc { value: u16 },
    Regs,
    Mem { start: u16, length: u16 },
    Disasm { address: Option<u16>, count: usize },
    Quit,
    Help,
}

/// Strips an optional `$` or `0x` prefix - both read naturally as "this is
/// hex" in a 6502 monitor - and parses the rest as a hex integer.
fn parse_hex(token: &str) -> Result<u64, String> {
    let trimmed = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .or_else(|| token.strip_prefix('$'))
        .unwrap_or(token);
    u64::from_str_radix(trimmed, 16).map_err(|_| format!("'{token}' is not a valid hex number"))
}

pub fn parse_u16_hex(token: &str) -> Result<u16, String> {
    let value = parse_hex(token)?;
    u16::try_from(value).map_err(|_| format!("'{token}' does not fit in 16 bits"))
}

fn parse_u8_hex(token: &str) -> Result<u8, String> {
    let value = parse_hex(token)?;
    u8::try_from(value).map_err(|_| format!("'{token}' does not fit in a byte"))
}

/// Parses one REPL line into a `Command`. Unknown verbs and malformed
/// arguments are reported as `Err(message)` rather than panicking - a
/// monitor prompt should survive a typo.
pub fn parse_line(line: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Err("empty command".to_string());
    }
    let verb = tokens[0];
    let args = &tokens[1..];

    match verb.to_ascii_lowercase().as_str() {
        "reset" => Ok(Command::Reset),

        "load" => {
            if args.is_empty() {
                return Err("usage: load <addr-hex> <byte-hex>...".to_string());
            }
            let address = parse_u16_hex(args[0])?;
            let bytes = args[1..]
                .iter()
                .map(|b| parse_u8_hex(b))
                .collect::<Result<Vec<u8>, String>>()?;
            if bytes.is_empty() {
                return Err("usage: load <addr-hex> <byte-hex>...".to_string());
            }
            Ok(Command::Load { address, bytes })
        }

        "file" => {
            if args.is_empty() {
                return Err("usage: file <path> [addr-hex]".to_string());
            }
            let address = match args.get(1) {
                Some(a) => parse_u16_hex(a)?,
                None => 0x0000,
            };
            Ok(Command::File {
                path: args[0].to_string(),
                address,
            })
        }

        "step" => {
            let count = match args.first() {
                Some(n) => n
                    .parse::<u32>()
                    .map_err(|_| format!("'{n}' is not a valid step count"))?,
                None => 1,
            };
            Ok(Command::Step { count })
        }

        "run" => Ok(Command::Run),

        // `pc = $0600` and `pc=$0600` both parse; the `=` is cosmetic.
        "pc" => {
            let value_token = match args {
                [] => return Err("usage: pc = <value-hex>".to_string()),
                [only] => only.strip_prefix('=').unwrap_or(only),
                [first, rest, ..] => {
                    if *first == "=" {
                        *rest
                    } else {
                        *first
                    }
                }
            };
            Ok(Command::SetPc {
                value: parse_u16_hex(value_token)?,
            })
        }

        "regs" | "registers" => Ok(Command::Regs),

        "mem" => {
            if args.is_empty() {
                return Err("usage: mem <start-hex> <len>".to_string());
            }
            let start = parse_u16_hex(args[0])?;
            let length = match args.get(1) {
                Some(n) => n
                    .parse::<u16>()
                    .map_err(|_| format!("'{n}' is not a valid length"))?,
                None => 16,
            };
            Ok(Command::Mem { start, length })
        }

        "disasm" | "list" => {
            let address = match args.first() {
                Some(a) => Some(parse_u16_hex(a)?),
                None => None,
            };
            let count = match args.get(1) {
                Some(n) => n
                    .parse::<usize>()
                    .map_err(|_| format!("'{n}' is not a valid count"))?,
                None => 16,
            };
            Ok(Command::Disasm { address, count })
        }

        "quit" | "exit" => Ok(Command::Quit),

        "help" | "?" => Ok(Command::Help),

        other => Err(format!(
            "unknown command '{other}' - type 'help' for the command list"
        )),
    }
}

/// `file` reads the whole file up front so the command layer only ever
/// hands the core raw bytes, the same contract `load` has.
pub fn read_file_bytes(path: &str) -> Result<Vec<u8>, String> {
    std::fs::read(path).map_err(|err| format!("failed to read '{path}': {err}"))
}

/// Clamps a requested memory-dump window to the address space so `mem`
/// can't be asked to read past `Memory`'s valid range.
pub fn clamp_window(start: u16, length: u16) -> (u16, u16) {
    let available = mos6502_core::memory::SIZE as u32 - start as u32;
    let clamped = (length as u32).min(available) as u16;
    (start, clamped)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_reset_and_run_and_quit() {
        assert_eq!(parse_line("reset"), Ok(Command::Reset));
        assert_eq!(parse_line("run"), Ok(Command::Run));
        assert_eq!(parse_line("quit"), Ok(Command::Quit));
        assert_eq!(parse_line("exit"), Ok(Command::Quit));
    }

    #[test]
    fn parses_load_with_address_and_bytes() {
        assert_eq!(
            parse_line("load 0600 a9 01 00"),
            Ok(Command::Load {
                address: 0x0600,
                bytes: vec![0xA9, 0x01, 0x00],
            })
        );
    }

    #[test]
    fn parses_load_with_dollar_and_0x_prefixes() {
        assert_eq!(
            parse_line("load $0600 0xa9"),
            Ok(Command::Load {
                address: 0x0600,
                bytes: vec![0xA9],
            })
        );
    }

    #[test]
    fn load_without_bytes_is_an_error() {
        assert!(parse_line("load 0600").is_err());
    }

    #[test]
    fn parses_file_with_default_and_explicit_address() {
        assert_eq!(
            parse_line("file program.bin"),
            Ok(Command::File {
                path: "program.bin".to_string(),
                address: 0x0000,
            })
        );
        assert_eq!(
            parse_line("file program.bin 0600"),
            Ok(Command::File {
                path: "program.bin".to_string(),
                address: 0x0600,
            })
        );
    }

    #[test]
    fn parses_step_with_and_without_a_count() {
        assert_eq!(parse_line("step"), Ok(Command::Step { count: 1 }));
        assert_eq!(parse_line("step 10"), Ok(Command::Step { count: 10 }));
    }

    #[test]
    fn parses_pc_assignment_in_both_spaced_and_joined_forms() {
        assert_eq!(
            parse_line("pc = 0600"),
            Ok(Command::SetPc { value: 0x0600 })
        );
        assert_eq!(
            parse_line("pc =0600"),
            Ok(Command::SetPc { value: 0x0600 })
        );
        assert_eq!(parse_line("pc $0600"), Ok(Command::SetPc { value: 0x0600 }));
    }

    #[test]
    fn parses_mem_with_default_length() {
        assert_eq!(
            parse_line("mem 0200"),
            Ok(Command::Mem {
                start: 0x0200,
                length: 16,
            })
        );
        assert_eq!(
            parse_line("mem 0200 32"),
            Ok(Command::Mem {
                start: 0x0200,
                length: 32,
            })
        );
    }

    #[test]
    fn parses_disasm_with_optional_address_and_count() {
        assert_eq!(
            parse_line("disasm"),
            Ok(Command::Disasm {
                address: None,
                count: 16,
            })
        );
        assert_eq!(
            parse_line("disasm 0600 4"),
            Ok(Command::Disasm {
                address: Some(0x0600),
                count: 4,
            })
        );
    }

    #[test]
    fn unknown_verb_is_a_reported_error() {
        assert!(parse_line("frobnicate").is_err());
    }

    #[test]
    fn empty_line_is_a_reported_error() {
        assert!(parse_line("").is_err());
        assert!(parse_line("   ").is_err());
    }

    #[test]
    fn clamp_window_never_exceeds_the_address_space() {
        assert_eq!(clamp_window(0xFFF0, 100), (0xFFF0, 16));
        assert_eq!(clamp_window(0x0000, 10), (0x0000, 10));
    }
}
