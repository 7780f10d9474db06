//! Branches, jumps, subroutine linkage, BRK/RTI, BIT, and the flag-set/
//! flag-clear instructions.

use crate::cpu::Cpu;
use crate::resolver::Resolved;
use crate::status::StatusFlag;

/// Shared by all eight conditional branches: if `condition` holds, set PC
/// to the address the resolver already computed from the branch's
/// relative offset. No flags affected either way.
pub fn branch(cpu: &mut Cpu, resolved: Resolved, condition: bool) {
    if condition {
        if let Resolved::Memory { addr, .. } = resolved {
            cpu.registers.pc = addr;
        }
    }
}

/// Software break. This emulator reduces BRK to setting the Break flag and
/// halting the step engine - it does not push PC/SR onto the stack and does
/// not jump through the IRQ/BRK vector, since hardware interrupts are out
/// of scope here and §4.6 specifies this instruction as a halt sentinel,
/// not a real interrupt.
pub fn brk(cpu: &mut Cpu) {
    cpu.status.set(StatusFlag::Break, true);
    cpu.halted = true;
}

/// Return from interrupt: pulls the status register, then the program
/// counter, in that order. This does not clear the halt sentinel - BRK's
/// halt is a one-way stop, tracked separately from whatever Break bit
/// happens to come off the stack.
pub fn rti(cpu: &mut Cpu) {
    let status = cpu.pull_u8();
    cpu.status.set_value(status);
    cpu.registers.pc = cpu.pull_u16();
}

/// Jump to subroutine: pushes PC-1 (the address of the last byte of this
/// instruction's own operand, not the next instruction) so RTS can pop it
/// and add 1 back.
pub fn jsr(cpu: &mut Cpu, resolved: Resolved) {
    cpu.push_u16(cpu.registers.pc.wrapping_sub(1));
    if let Resolved::Memory { addr, .. } = resolved {
        cpu.registers.pc = addr;
    }
}

/// Return from subroutine: pops the address JSR pushed and adds 1 to land
/// on the instruction after the call.
pub fn rts(cpu: &mut Cpu) {
    cpu.registers.pc = cpu.pull_u16().wrapping_add(1);
}

pub fn jmp(cpu: &mut Cpu, resolved: Resolved) {
    if let Resolved::Memory { addr, .. } = resolved {
        cpu.registers.pc = addr;
    }
}

/// Test bits: Z from `A & M`, but N and V are taken directly from the
/// operand's bits 7 and 6, not from the AND result.
pub fn bit(cpu: &mut Cpu, resolved: Resolved) {
    let value = resolved.value();
    cpu.status.set(StatusFlag::Zero, cpu.registers.a & value == 0);
    cpu.status.set(StatusFlag::Negative, value & 0x80 != 0);
    cpu.status.set(StatusFlag::Overflow, value & 0x40 != 0);
}

pub fn clc(cpu: &mut Cpu) {
    cpu.status.set(StatusFlag::Carry, false);
}

pub fn sec(cpu: &mut Cpu) {
    cpu.status.set(StatusFlag::Carry, true);
}

pub fn cld(cpu: &mut Cpu) {
    cpu.status.set(StatusFlag::Decimal, false);
}

pub fn sed(cpu: &mut Cpu) {
    cpu.status.set(StatusFlag::Decimal, true);
}

pub fn cli(cpu: &mut Cpu) {
    cpu.status.set(StatusFlag::InterruptDisable, false);
}

pub fn sei(cpu: &mut Cpu) {
    cpu.status.set(StatusFlag::InterruptDisable, true);
}

pub fn clv(cpu: &mut Cpu) {
    cpu.status.set(StatusFlag::Overflow, false);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn branch_not_taken_leaves_pc_alone() {
        let mut cpu = Cpu::new();
        cpu.registers.pc = 0x0200;
        branch(&mut cpu, Resolved::Memory { addr: 0x0300, value: 0 }, false);
        assert_eq!(cpu.registers.pc, 0x0200);
    }

    #[test]
    fn jsr_pushes_pc_minus_one_and_rts_restores_pc_plus_one() {
        let mut cpu = Cpu::new();
        cpu.registers.pc = 0x0603; // already advanced past the 3-byte JSR
        jsr(&mut cpu, Resolved::Memory { addr: 0x0609, value: 0 });
        assert_eq!(cpu.registers.pc, 0x0609);
        rts(&mut cpu);
        assert_eq!(cpu.registers.pc, 0x0603);
    }

    #[test]
    fn brk_sets_break_and_halts_without_touching_the_stack() {
        let mut cpu = Cpu::new();
        let sp_before = cpu.registers.sp;
        brk(&mut cpu);
        assert!(cpu.status.is_set(StatusFlag::Break));
        assert!(cpu.halted);
        assert_eq!(cpu.registers.sp, sp_before);
    }

    #[test]
    fn bit_reads_n_and_v_from_the_operand_not_the_and_result() {
        let mut cpu = Cpu::new();
        cpu.registers.a = 0xFF;
        bit(&mut cpu, Resolved::Memory { addr: 0, value: 0b1100_0000 });
        assert!(cpu.status.is_set(StatusFlag::Negative));
        assert!(cpu.status.is_set(StatusFlag::Overflow));
        assert!(!cpu.status.is_set(StatusFlag::Zero));
    }

    #[test]
    fn rti_restores_status_and_pc_without_clearing_halt() {
        let mut cpu = Cpu::new();
        cpu.halted = true;
        cpu.push_u16(0x1234);
        cpu.push_u8(0x00);
        rti(&mut cpu);
        assert_eq!(cpu.registers.pc, 0x1234);
        assert!(cpu.halted);
    }
}
