use super::{Cpu, CpuMode, CpuResult, FLAG_C, FLAG_H, FLAG_N, FLAG_Z};
use crate::error::EmuError;
use crate::instruction::CB_INSTRUCTIONS;
use crate::memory_bus::MemoryBus;
use crate::memory_map::{IF_ADDR, INTERRUPT_ENABLE_REGISTER, INTERRUPT_MASK};

// --- Control flow, interrupt latches, and the flag-bit instructions ---
impl Cpu {
    pub fn op_nop(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        Ok(0)
    }

    // JP a16 / JP HL / JP cc, a16
    fn conditional_jp_a16(&mut self, condition: bool, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.read_d16(bus);
        if condition {
            self.pc = addr;
            Ok(4) // taken: 16 total
        } else {
            Ok(0) // not taken: 12 total
        }
    }
    pub fn op_jp_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.pc = self.read_d16(bus);
        Ok(0)
    }
    pub fn op_jp_hl(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.pc = self.get_hl();
        Ok(0)
    }
    pub fn op_jp_nz_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_jp_a16(!self.get_flag(FLAG_Z), bus)
    }
    pub fn op_jp_z_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_jp_a16(self.get_flag(FLAG_Z), bus)
    }
    pub fn op_jp_nc_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_jp_a16(!self.get_flag(FLAG_C), bus)
    }
    pub fn op_jp_c_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_jp_a16(self.get_flag(FLAG_C), bus)
    }

    // JR r8 / JR cc, r8
    fn conditional_jr(&mut self, condition: bool, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_r8(bus);
        if condition {
            self.pc = self.pc.wrapping_add(offset as i16 as u16);
            Ok(4) // taken: 12 total
        } else {
            Ok(0) // not taken: 8 total
        }
    }
    pub fn op_jr_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_r8(bus);
        self.pc = self.pc.wrapping_add(offset as i16 as u16);
        Ok(0)
    }
    pub fn op_jr_nz_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_jr(!self.get_flag(FLAG_Z), bus)
    }
    pub fn op_jr_z_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_jr(self.get_flag(FLAG_Z), bus)
    }
    pub fn op_jr_nc_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_jr(!self.get_flag(FLAG_C), bus)
    }
    pub fn op_jr_c_r8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_jr(self.get_flag(FLAG_C), bus)
    }

    // CALL a16 / CALL cc, a16
    fn conditional_call_a16(&mut self, condition: bool, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.read_d16(bus);
        if condition {
            self.push_word(self.pc, bus);
            self.pc = addr;
            Ok(12) // taken: 24 total
        } else {
            Ok(0) // not taken: 12 total
        }
    }
    pub fn op_call_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.read_d16(bus);
        self.push_word(self.pc, bus);
        self.pc = addr;
        Ok(0)
    }
    pub fn op_call_nz_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_call_a16(!self.get_flag(FLAG_Z), bus)
    }
    pub fn op_call_z_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_call_a16(self.get_flag(FLAG_Z), bus)
    }
    pub fn op_call_nc_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_call_a16(!self.get_flag(FLAG_C), bus)
    }
    pub fn op_call_c_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_call_a16(self.get_flag(FLAG_C), bus)
    }

    // RET / RET cc / RETI
    fn conditional_ret(&mut self, condition: bool, bus: &mut MemoryBus) -> CpuResult<u16> {
        if condition {
            self.pc = self.pop_word(bus);
            Ok(12) // taken: 20 total
        } else {
            Ok(0) // not taken: 8 total
        }
    }
    pub fn op_ret(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.pc = self.pop_word(bus);
        Ok(0)
    }
    pub fn op_ret_nz(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_ret(!self.get_flag(FLAG_Z), bus)
    }
    pub fn op_ret_z(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_ret(self.get_flag(FLAG_Z), bus)
    }
    pub fn op_ret_nc(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_ret(!self.get_flag(FLAG_C), bus)
    }
    pub fn op_ret_c(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.conditional_ret(self.get_flag(FLAG_C), bus)
    }
    pub fn op_reti(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        // Unlike EI, RETI enables interrupts with no delay.
        self.pc = self.pop_word(bus);
        self.ime = true;
        self.ei_scheduled = false;
        self.ei_last_instr = false;
        Ok(0)
    }

    // RST n
    fn rst(&mut self, vector: u16, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.push_word(self.pc, bus);
        self.pc = vector;
        Ok(0)
    }
    pub fn op_rst_00h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0000, bus)
    }
    pub fn op_rst_08h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0008, bus)
    }
    pub fn op_rst_10h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0010, bus)
    }
    pub fn op_rst_18h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0018, bus)
    }
    pub fn op_rst_20h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0020, bus)
    }
    pub fn op_rst_28h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0028, bus)
    }
    pub fn op_rst_30h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0030, bus)
    }
    pub fn op_rst_38h(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        self.rst(0x0038, bus)
    }

    // Interrupt latches
    pub fn op_di(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.ime = false;
        self.ei_scheduled = false;
        self.ei_last_instr = false;
        Ok(0)
    }
    pub fn op_ei(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        // IME goes high only after the *next* instruction completes.
        self.ei_scheduled = true;
        self.ei_last_instr = true;
        Ok(0)
    }

    pub fn op_halt(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let ie = bus.read_byte(INTERRUPT_ENABLE_REGISTER);
        let iflags = bus.read_byte(IF_ADDR);
        let pending = ie & iflags & INTERRUPT_MASK;
        if pending == 0 {
            // Nothing pending: suspend regardless of IME. IE&IF != 0 wakes.
            self.mode = CpuMode::Halted;
        } else if !self.ime {
            // Pending but masked: the CPU fails to halt and the next fetch
            // reads the byte after HALT twice.
            self.halt_bug = true;
            log::warn!(
                "HALT bug at PC={:#06X}: IME=0, IE&IF={:#04X}",
                self.instruction_pc,
                pending
            );
        }
        // IME set with a pending interrupt: fall through; the handler is
        // entered at the instruction boundary without ever halting.
        Ok(0)
    }

    pub fn op_stop(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        // Low-power stop (wake on joypad) is not implemented; treated as NOP.
        log::warn!("STOP executed at PC={:#06X}; treated as NOP", self.instruction_pc);
        Ok(0)
    }

    // Flag-bit instructions
    pub fn op_scf(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.set_flag(FLAG_N | FLAG_H, false);
        self.set_flag(FLAG_C, true);
        Ok(0)
    }
    pub fn op_ccf(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        let carry = self.get_flag(FLAG_C);
        self.set_flag(FLAG_N | FLAG_H, false);
        self.set_flag(FLAG_C, !carry);
        Ok(0)
    }
    pub fn op_cpl(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = !self.a;
        self.set_flag(FLAG_N | FLAG_H, true);
        Ok(0)
    }
    pub fn op_daa(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.daa();
        Ok(0)
    }

    // CB prefix: second fetch, dispatch through the parallel table. The
    // table's cycle field is the cost beyond the prefix's base 4.
    pub fn op_prefix_cb(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let cb_opcode = bus.read_byte(self.instruction_pc.wrapping_add(1));
        let cb_instr = &CB_INSTRUCTIONS[cb_opcode as usize];
        (cb_instr.execute)(self, bus)?;
        Ok(cb_instr.cycles as u16)
    }

    // The eleven holes in the opcode grid. A ROM reaching one of these is
    // corrupt (or the emulator mis-decoded); either way it is fatal.
    pub fn handle_invalid_opcode(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        Err(EmuError::UnknownOpcode {
            pc: self.instruction_pc,
            opcode: self.fetched_opcode,
        })
    }
}
