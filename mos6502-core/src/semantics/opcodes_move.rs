//! Load/store, register transfers, and stack push/pull - the instructions
//! that move a byte somewhere without doing arithmetic on it.

use crate::cpu::Cpu;
use crate::resolver::Resolved;

/// Load the value into register A.
/// Flags: N Z
pub fn lda(cpu: &mut Cpu, resolved: Resolved) {
    cpu.registers.a = resolved.value();
    cpu.status.update_zero_and_negative(cpu.registers.a);
}

/// Store register A at the effective address.
pub fn sta(cpu: &mut Cpu, resolved: Resolved) {
    if let Resolved::Memory { addr, .. } = resolved {
        cpu.memory.set_u8(addr, cpu.registers.a);
    }
}

/// Load register X with the value.
/// Flags: N Z
pub fn ldx(cpu: &mut Cpu, resolved: Resolved) {
    cpu.registers.x = resolved.value();
    cpu.status.update_zero_and_negative(cpu.registers.x);
}

/// Store register X at the effective address.
pub fn stx(cpu: &mut Cpu, resolved: Resolved) {
    if let Resolved::Memory { addr, .. } = resolved {
        cpu.memory.set_u8(addr, cpu.registers.x);
    }
}

/// Load register Y with the value.
/// Flags: N Z
pub fn ldy(cpu: &mut Cpu, resolved: Resolved) {
    cpu.registers.y = resolved.value();
    cpu.status.update_zero_and_negative(cpu.registers.y);
}

/// Store register Y at the effective address.
pub fn sty(cpu: &mut Cpu, resolved: Resolved) {
    if let Resolved::Memory { addr, .. } = resolved {
        cpu.memory.set_u8(addr, cpu.registers.y);
    }
}

/// Transfer A to X. Flags: N Z
pub fn tax(cpu: &mut Cpu) {
    cpu.registers.x = cpu.registers.a;
    cpu.status.update_zero_and_negative(cpu.registers.x);
}

/// Transfer X to A. Flags: N Z
pub fn txa(cpu: &mut Cpu) {
    cpu.registers.a = cpu.registers.x;
    cpu.status.update_zero_and_negative(cpu.registers.a);
}

/// Transfer A to Y. Flags: N Z
pub fn tay(cpu: &mut Cpu) {
    cpu.registers.y = cpu.registers.a;
    cpu.status.update_zero_and_negative(cpu.registers.y);
}

/// Transfer Y to A. Flags: N Z
pub fn tya(cpu: &mut Cpu) {
    cpu.registers.a = cpu.registers.y;
    cpu.status.update_zero_and_negative(cpu.registers.a);
}

/// Transfer SP to X. Flags: N Z
pub fn tsx(cpu: &mut Cpu) {
    cpu.registers.x = cpu.registers.sp;
    cpu.status.update_zero_and_negative(cpu.registers.x);
}

/// Transfer X to SP. No flags - SP is not observed like a general register.
pub fn txs(cpu: &mut Cpu) {
    cpu.registers.sp = cpu.registers.x;
}

/// Pull A from the stack. Flags: N Z
pub fn pla(cpu: &mut Cpu) {
    cpu.registers.a = cpu.pull_u8();
    cpu.status.update_zero_and_negative(cpu.registers.a);
}

/// Push A onto the stack.
pub fn pha(cpu: &mut Cpu) {
    cpu.push_u8(cpu.registers.a);
}

/// Pull the status register from the stack.
pub fn plp(cpu: &mut Cpu) {
    let value = cpu.pull_u8();
    cpu.status.set_value(value);
}

/// Push the status register onto the stack.
pub fn php(cpu: &mut Cpu) {
    cpu.push_u8(cpu.status.value());
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::status::StatusFlag;

    #[test]
    fn lda_sets_negative_on_high_bit() {
        let mut cpu = Cpu::new();
        lda(&mut cpu, Resolved::Immediate(0x80));
        assert_eq!(cpu.registers.a, 0x80);
        assert!(cpu.status.is_set(StatusFlag::Negative));
    }

    #[test]
    fn pha_then_pla_round_trips() {
        let mut cpu = Cpu::new();
        cpu.registers.a = 0x77;
        pha(&mut cpu);
        cpu.registers.a = 0;
        pla(&mut cpu);
        assert_eq!(cpu.registers.a, 0x77);
        assert_eq!(cpu.registers.sp, 0xFF);
    }

    #[test]
    fn php_then_plp_preserves_bit_five() {
        let mut cpu = Cpu::new();
        php(&mut cpu);
        cpu.status.set_value(0x00);
        plp(&mut cpu);
        assert_eq!(cpu.status.value() & 0b0010_0000, 0b0010_0000);
    }

    #[test]
    fn sta_writes_a_to_the_effective_address() {
        let mut cpu = Cpu::new();
        cpu.registers.a = 0x9A;
        sta(&mut cpu, Resolved::Memory { addr: 0x0300, value: 0 });
        assert_eq!(cpu.memory.read_u8(0x0300), 0x9A);
    }
}
