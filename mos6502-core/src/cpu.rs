use crate::error::CoreError;
use crate::memory::Memory;
use crate::opcodes::{self, Mnemonic};
use crate::registers::Registers;
use crate::resolver::{self, Resolved};
use crate::semantics::{opcodes_jump, opcodes_logical, opcodes_move};
use crate::status::Status;

/// The MOS 6502 core: registers, status flags, and the memory it executes
/// against. Owns its `Memory` outright, rather than sharing it through a
/// ref-counted bus - there is exactly one caller driving this emulator at
/// a time (see the ownership model this is built from).
pub struct Cpu {
    pub registers: Registers,
    pub status: Status,
    pub memory: Memory,
    /// Set by BRK. Once set, `run()` stops; `step()` becomes a no-op.
    /// There is no hardware IRQ/NMI vector to resume from, so this is a
    /// one-way halt rather than a real interrupt flag.
    pub halted: bool,
    /// Running total of instruction cycles, including the page-boundary
    /// penalty where the table carries one. Bookkeeping only - nothing
    /// paces execution against it.
    pub cycles: u64,
}

impl Cpu {
    pub fn new() -> Cpu {
        Cpu {
            registers: Registers::new(),
            status: Status::new(),
            memory: Memory::new(),
            halted: false,
            cycles: 0,
        }
    }

    /// Reinitializes registers, status, and the halt flag, and zeroes
    /// memory, per the documented reset policy.
    pub fn reset(&mut self) {
        self.registers = Registers::new();
        self.status = Status::new();
        self.memory.reset();
        self.halted = false;
        self.cycles = 0;
    }

    pub fn load(&mut self, address: u16, bytes: &[u8]) -> Result<(), CoreError> {
        self.memory.load(address, bytes)
    }

    /// Execute exactly one instruction. A no-op once halted.
    pub fn step(&mut self) -> Result<(), CoreError> {
        if self.halted {
            return Ok(());
        }

        let opcode_addr = self.registers.pc;
        let opcode = self.memory.read_u8(opcode_addr);
        let entry = opcodes::decode(opcode).ok_or(CoreError::IllegalOpcode {
            opcode,
            at: opcode_addr,
        })?;

        let length = entry.length as u16;
        let mut operand_bytes = [0u8; 2];
        for i in 0..(length - 1) as usize {
            operand_bytes[i] = self.memory.read_u8(opcode_addr.wrapping_add(1 + i as u16));
        }
        let operand_bytes = &operand_bytes[..(length - 1) as usize];

        // Advance PC past the whole instruction before executing it.
        // Branches, jumps, and subroutine calls overwrite this below.
        self.registers.pc = opcode_addr.wrapping_add(length);

        let (resolved, crossed_page) = resolver::resolve(
            entry.mode,
            operand_bytes,
            opcode_addr,
            length,
            &self.registers,
            &self.memory,
        );

        let pc_if_not_taken = self.registers.pc;
        self.execute(entry.mnemonic, entry.mode, resolved);

        let mut cycles = entry.cycles as u64;

        if entry.mode == crate::opcodes::Mode::Relative {
            // A conditional branch's table entry is the flat 2-cycle
            // not-taken cost. Taking the branch costs one more, and a
            // further one if the target lands on a different page - but
            // an untaken branch never reaches that target, so it can never
            // pay the crossing penalty even if the relative offset would
            // have crossed one.
            let taken = self.registers.pc != pc_if_not_taken;
            if taken {
                cycles += 1;
                if crossed_page {
                    cycles += 1;
                }
            }
        } else if crossed_page && entry.page_boundary_penalty {
            cycles += 1;
        }
        self.cycles += cycles;

        Ok(())
    }

    /// Steps until BRK halts the CPU or a step fails. Propagates the
    /// error rather than looping on a dead PC.
    pub fn run(&mut self) -> Result<(), CoreError> {
        while !self.halted {
            self.step()?;
        }
        Ok(())
    }

    fn execute(&mut self, mnemonic: Mnemonic, mode: crate::opcodes::Mode, resolved: Resolved) {
        use Mnemonic::*;
        match mnemonic {
            Lda => opcodes_move::lda(self, resolved),
            Sta => opcodes_move::sta(self, resolved),
            Ldx => opcodes_move::ldx(self, resolved),
            Stx => opcodes_move::stx(self, resolved),
            Ldy => opcodes_move::ldy(self, resolved),
            Sty => opcodes_move::sty(self, resolved),
            Tax => opcodes_move::tax(self),
            Txa => opcodes_move::txa(self),
            Tay => opcodes_move::tay(self),
            Tya => opcodes_move::tya(self),
            Tsx => opcodes_move::tsx(self),
            Txs => opcodes_move::txs(self),
            Pla => opcodes_move::pla(self),
            Pha => opcodes_move::pha(self),
            Plp => opcodes_move::plp(self),
            Php => opcodes_move::php(self),

            Bpl => opcodes_jump::branch(self, resolved, !self.status.is_set(crate::status::StatusFlag::Negative)),
            Bmi => opcodes_jump::branch(self, resolved, self.status.is_set(crate::status::StatusFlag::Negative)),
            Bvc => opcodes_jump::branch(self, resolved, !self.status.is_set(crate::status::StatusFlag::Overflow)),
            Bvs => opcodes_jump::branch(self, resolved, self.status.is_set(crate::status::StatusFlag::Overflow)),
            Bcc => opcodes_jump::branch(self, resolved, !self.status.is_set(crate::status::StatusFlag::Carry)),
            Bcs => opcodes_jump::branch(self, resolved, self.status.is_set(crate::status::StatusFlag::Carry)),
            Bne => opcodes_jump::branch(self, resolved, !self.status.is_set(crate::status::StatusFlag::Zero)),
            Beq => opcodes_jump::branch(self, resolved, self.status.is_set(crate::status::StatusFlag::Zero)),
            Brk => opcodes_jump::brk(self),
            Rti => opcodes_jump::rti(self),
            Jsr => opcodes_jump::jsr(self, resolved),
            Rts => opcodes_jump::rts(self),
            Jmp => opcodes_jump::jmp(self, resolved),
            Bit => opcodes_jump::bit(self, resolved),
            Clc => opcodes_jump::clc(self),
            Sec => opcodes_jump::sec(self),
            Cld => opcodes_jump::cld(self),
            Sed => opcodes_jump::sed(self),
            Cli => opcodes_jump::cli(self),
            Sei => opcodes_jump::sei(self),
            Clv => opcodes_jump::clv(self),
            Nop => {}

            Ora => opcodes_logical::ora(self, resolved),
            And => opcodes_logical::and(self, resolved),
            Eor => opcodes_logical::eor(self, resolved),
            Adc => opcodes_logical::adc(self, resolved),
            Sbc => opcodes_logical::sbc(self, resolved),
            Cmp => opcodes_logical::cmp(self, resolved),
            Cpx => opcodes_logical::cpx(self, resolved),
            Cpy => opcodes_logical::cpy(self, resolved),
            Dec => opcodes_logical::dec(self, resolved),
            Dex => opcodes_logical::dex(self),
            Dey => opcodes_logical::dey(self),
            Inc => opcodes_logical::inc(self, resolved),
            Inx => opcodes_logical::inx(self),
            Iny => opcodes_logical::iny(self),
            Asl => opcodes_logical::asl(self, mode, resolved),
            Rol => opcodes_logical::rol(self, mode, resolved),
            Lsr => opcodes_logical::lsr(self, mode, resolved),
            Ror => opcodes_logical::ror(self, mode, resolved),
        }
    }

    /// Pushes to the stack, which lives in page 1 at `0x0100 + sp`. Grows
    /// down: the pointer decrements only after the byte is written.
    pub fn push_u8(&mut self, value: u8) {
        let addr = 0x0100u16 + self.registers.sp as u16;
        self.memory.set_u8(addr, value);
        self.registers.sp = self.registers.sp.wrapping_sub(1);
    }

    pub fn pull_u8(&mut self) -> u8 {
        self.registers.sp = self.registers.sp.wrapping_add(1);
        let addr = 0x0100u16 + self.registers.sp as u16;
        self.memory.read_u8(addr)
    }

    pub fn push_u16(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push_u8(high);
        self.push_u8(low);
    }

    pub fn pull_u16(&mut self) -> u16 {
        let low = self.pull_u8();
        let high = self.pull_u8();
        u16::from_le_bytes([low, high])
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Cpu::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::status::StatusFlag;

    // S1: ADC immediate with carry in.
    #[test]
    fn adc_immediate_with_carry_in() {
        let mut cpu = Cpu::new();
        cpu.registers.a = 0x10;
        cpu.status.set(StatusFlag::Carry, true);
        cpu.load(0x0000, &[0x69, 0x0A]).unwrap();
        cpu.step().unwrap();
        assert_eq!(cpu.registers.a, 0x1B);
        assert_eq!(cpu.registers.pc, 0x0002);
        assert!(!cpu.status.is_set(StatusFlag::Negative));
        assert!(!cpu.status.is_set(StatusFlag::Zero));
        assert!(!cpu.status.is_set(StatusFlag::Carry));
        assert!(!cpu.status.is_set(StatusFlag::Overflow));
    }

    // S2: ADC overflow.
    #[test]
    fn adc_sets_overflow_on_sign_change() {
        let mut cpu = Cpu::new();
        cpu.registers.a = 0x7F;
        cpu.load(0x0000, &[0x69, 0x01]).unwrap();
        cpu.step().unwrap();
        assert_eq!(cpu.registers.a, 0x80);
        assert!(cpu.status.is_set(StatusFlag::Negative));
        assert!(!cpu.status.is_set(StatusFlag::Zero));
        assert!(!cpu.status.is_set(StatusFlag::Carry));
        assert!(cpu.status.is_set(StatusFlag::Overflow));
    }

    // S3: branch taken, relative offset measured from the byte after the
    // instruction.
    #[test]
    fn beq_taken_branches_relative_to_the_next_instruction() {
        let mut cpu = Cpu::new();
        cpu.registers.pc = 0x0100;
        cpu.status.set(StatusFlag::Zero, true);
        cpu.load(0x0100, &[0xF0, 0x05]).unwrap();
        cpu.step().unwrap();
        assert_eq!(cpu.registers.pc, 0x0107);
    }

    // S4: JSR pushes PC-1 of the return address; RTS restores PC+1 from
    // the popped value, round-tripping to the instruction after JSR.
    #[test]
    fn jsr_then_rts_round_trips_through_the_stack() {
        let mut cpu = Cpu::new();
        cpu.registers.pc = 0x0600;
        cpu.load(0x0600, &[0x20, 0x09, 0x06]).unwrap();
        cpu.load(0x0609, &[0x60]).unwrap();
        cpu.step().unwrap(); // JSR $0609
        assert_eq!(cpu.registers.pc, 0x0609);
        assert_eq!(cpu.registers.sp, 0xFD);
        assert_eq!(cpu.memory.read_u8(0x01FF), 0x06);
        assert_eq!(cpu.memory.read_u8(0x01FE), 0x02);
        cpu.step().unwrap(); // RTS
        assert_eq!(cpu.registers.pc, 0x0603);
        assert_eq!(cpu.registers.sp, 0xFF);
    }

    // S5: zero-page indexed addressing wraps within page zero.
    #[test]
    fn lda_zero_page_x_wraps_within_page_zero() {
        let mut cpu = Cpu::new();
        cpu.registers.x = 0x10;
        cpu.memory.set_u8(0x05, 0x42);
        cpu.load(0x0000, &[0xB5, 0xF5]).unwrap();
        cpu.step().unwrap();
        assert_eq!(cpu.registers.a, 0x42);
        assert!(!cpu.status.is_set(StatusFlag::Zero));
        assert!(!cpu.status.is_set(StatusFlag::Negative));
    }

    // S6: CMP equal sets Z and C, leaves A untouched.
    #[test]
    fn cmp_equal_sets_zero_and_carry() {
        let mut cpu = Cpu::new();
        cpu.registers.a = 0x42;
        cpu.load(0x0000, &[0xC9, 0x42]).unwrap();
        cpu.step().unwrap();
        assert_eq!(cpu.registers.a, 0x42);
        assert!(cpu.status.is_set(StatusFlag::Zero));
        assert!(cpu.status.is_set(StatusFlag::Carry));
        assert!(!cpu.status.is_set(StatusFlag::Negative));
    }

    #[test]
    fn brk_halts_the_run_loop() {
        let mut cpu = Cpu::new();
        cpu.load(0x0000, &[0x00]).unwrap();
        cpu.run().unwrap();
        assert!(cpu.halted);
        assert!(cpu.status.is_set(StatusFlag::Break));
    }

    #[test]
    fn untaken_branch_does_not_pay_the_page_boundary_penalty() {
        let mut cpu = Cpu::new();
        cpu.registers.pc = 0x01F0;
        cpu.status.set(StatusFlag::Zero, true); // BNE branches on Z == 0.
        cpu.load(0x01F0, &[0xD0, 0x7F]).unwrap(); // target $0271 would cross, but isn't taken.
        cpu.step().unwrap();
        assert_eq!(cpu.registers.pc, 0x01F2);
        assert_eq!(cpu.cycles, 2);
    }

    #[test]
    fn taken_branch_within_the_same_page_pays_one_extra_cycle() {
        let mut cpu = Cpu::new();
        cpu.registers.pc = 0x0100;
        cpu.status.set(StatusFlag::Zero, false);
        cpu.load(0x0100, &[0xD0, 0x05]).unwrap(); // BNE +5 -> $0102 + 5 = $0107, same page.
        cpu.step().unwrap();
        assert_eq!(cpu.registers.pc, 0x0107);
        assert_eq!(cpu.cycles, 3);
    }

    #[test]
    fn taken_branch_crossing_a_page_pays_two_extra_cycles() {
        let mut cpu = Cpu::new();
        cpu.registers.pc = 0x01F0;
        cpu.status.set(StatusFlag::Zero, false);
        cpu.load(0x01F0, &[0xD0, 0x7F]).unwrap(); // BNE +127 -> $01F2 + $7F = $0271.
        cpu.step().unwrap();
        assert_eq!(cpu.registers.pc, 0x0271);
        assert_eq!(cpu.cycles, 4);
    }

    #[test]
    fn illegal_opcode_is_a_reported_error_not_a_panic() {
        let mut cpu = Cpu::new();
        cpu.load(0x0000, &[0x02]).unwrap(); // KIL - not a legal opcode.
        let err = cpu.step().unwrap_err();
        assert_eq!(err, CoreError::IllegalOpcode { opcode: 0x02, at: 0x0000 });
    }

    #[test]
    fn reset_zeroes_memory_and_restores_default_registers() {
        let mut cpu = Cpu::new();
        cpu.load(0x0000, &[0xA9, 0x42]).unwrap();
        cpu.step().unwrap();
        cpu.reset();
        assert_eq!(cpu.registers.a, 0);
        assert_eq!(cpu.registers.pc, 0);
        assert_eq!(cpu.memory.read_u8(0x0001), 0);
        assert!(!cpu.halted);
    }
}
