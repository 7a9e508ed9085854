use super::{Cpu, CpuResult, FLAG_Z};
use crate::memory_bus::MemoryBus;

// --- Arithmetic, logic and the accumulator rotates ---
impl Cpu {
    // 8-bit INC/DEC
    incdec_r!(op_inc_b, inc, b);
    incdec_r!(op_dec_b, dec, b);
    incdec_r!(op_inc_c, inc, c);
    incdec_r!(op_dec_c, dec, c);
    incdec_r!(op_inc_d, inc, d);
    incdec_r!(op_dec_d, dec, d);
    incdec_r!(op_inc_e, inc, e);
    incdec_r!(op_dec_e, dec, e);
    incdec_r!(op_inc_h, inc, h);
    incdec_r!(op_dec_h, dec, h);
    incdec_r!(op_inc_l, inc, l);
    incdec_r!(op_dec_l, dec, l);
    incdec_r!(op_inc_a, inc, a);
    incdec_r!(op_dec_a, dec, a);
    pub fn op_inc_hlp(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.get_hl();
        let value = bus.read_byte(addr);
        let result = self.inc_u8(value);
        bus.write_byte(addr, result);
        Ok(0)
    }
    pub fn op_dec_hlp(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let addr = self.get_hl();
        let value = bus.read_byte(addr);
        let result = self.dec_u8(value);
        bus.write_byte(addr, result);
        Ok(0)
    }

    // 16-bit INC/DEC (flags untouched)
    incdec_rr!(op_inc_bc, get_bc, set_bc, 1);
    incdec_rr!(op_dec_bc, get_bc, set_bc, -1);
    incdec_rr!(op_inc_de, get_de, set_de, 1);
    incdec_rr!(op_dec_de, get_de, set_de, -1);
    incdec_rr!(op_inc_hl, get_hl, set_hl, 1);
    incdec_rr!(op_dec_hl, get_hl, set_hl, -1);
    pub fn op_inc_sp(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.sp = self.sp.wrapping_add(1);
        Ok(0)
    }
    pub fn op_dec_sp(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.sp = self.sp.wrapping_sub(1);
        Ok(0)
    }

    // ADD HL, rr (half-carry at bit 11)
    pub fn op_add_hl_bc(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.add_hl(self.get_bc());
        Ok(0)
    }
    pub fn op_add_hl_de(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.add_hl(self.get_de());
        Ok(0)
    }
    pub fn op_add_hl_hl(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.add_hl(self.get_hl());
        Ok(0)
    }
    pub fn op_add_hl_sp(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.add_hl(self.sp);
        Ok(0)
    }
    pub fn op_add_sp_e8(&mut self, bus: &mut MemoryBus) -> CpuResult<u16> {
        let offset = self.read_r8(bus);
        self.sp = self.add_sp_e8(offset);
        Ok(0)
    }

    // The 0x80-0xBF ALU block
    alu_a_r!(op_add_a_b, add_a, b);
    alu_a_r!(op_add_a_c, add_a, c);
    alu_a_r!(op_add_a_d, add_a, d);
    alu_a_r!(op_add_a_e, add_a, e);
    alu_a_r!(op_add_a_h, add_a, h);
    alu_a_r!(op_add_a_l, add_a, l);
    alu_a_hlp!(op_add_a_hlp, add_a);
    alu_a_r!(op_add_a_a, add_a, a);
    alu_a_r!(op_adc_a_b, add_a, b, carry);
    alu_a_r!(op_adc_a_c, add_a, c, carry);
    alu_a_r!(op_adc_a_d, add_a, d, carry);
    alu_a_r!(op_adc_a_e, add_a, e, carry);
    alu_a_r!(op_adc_a_h, add_a, h, carry);
    alu_a_r!(op_adc_a_l, add_a, l, carry);
    alu_a_hlp!(op_adc_a_hlp, add_a, carry);
    alu_a_r!(op_adc_a_a, add_a, a, carry);
    alu_a_r!(op_sub_a_b, sub_a, b);
    alu_a_r!(op_sub_a_c, sub_a, c);
    alu_a_r!(op_sub_a_d, sub_a, d);
    alu_a_r!(op_sub_a_e, sub_a, e);
    alu_a_r!(op_sub_a_h, sub_a, h);
    alu_a_r!(op_sub_a_l, sub_a, l);
    alu_a_hlp!(op_sub_a_hlp, sub_a);
    alu_a_r!(op_sub_a_a, sub_a, a);
    alu_a_r!(op_sbc_a_b, sub_a, b, carry);
    alu_a_r!(op_sbc_a_c, sub_a, c, carry);
    alu_a_r!(op_sbc_a_d, sub_a, d, carry);
    alu_a_r!(op_sbc_a_e, sub_a, e, carry);
    alu_a_r!(op_sbc_a_h, sub_a, h, carry);
    alu_a_r!(op_sbc_a_l, sub_a, l, carry);
    alu_a_hlp!(op_sbc_a_hlp, sub_a, carry);
    alu_a_r!(op_sbc_a_a, sub_a, a, carry);
    alu_a_r!(op_and_a_b, and_a, b);
    alu_a_r!(op_and_a_c, and_a, c);
    alu_a_r!(op_and_a_d, and_a, d);
    alu_a_r!(op_and_a_e, and_a, e);
    alu_a_r!(op_and_a_h, and_a, h);
    alu_a_r!(op_and_a_l, and_a, l);
    alu_a_hlp!(op_and_a_hlp, and_a);
    alu_a_r!(op_and_a_a, and_a, a);
    alu_a_r!(op_xor_a_b, xor_a, b);
    alu_a_r!(op_xor_a_c, xor_a, c);
    alu_a_r!(op_xor_a_d, xor_a, d);
    alu_a_r!(op_xor_a_e, xor_a, e);
    alu_a_r!(op_xor_a_h, xor_a, h);
    alu_a_r!(op_xor_a_l, xor_a, l);
    alu_a_hlp!(op_xor_a_hlp, xor_a);
    alu_a_r!(op_xor_a_a, xor_a, a);
    alu_a_r!(op_or_a_b, or_a, b);
    alu_a_r!(op_or_a_c, or_a, c);
    alu_a_r!(op_or_a_d, or_a, d);
    alu_a_r!(op_or_a_e, or_a, e);
    alu_a_r!(op_or_a_h, or_a, h);
    alu_a_r!(op_or_a_l, or_a, l);
    alu_a_hlp!(op_or_a_hlp, or_a);
    alu_a_r!(op_or_a_a, or_a, a);
    alu_a_r!(op_cp_a_b, cp_a, b);
    alu_a_r!(op_cp_a_c, cp_a, c);
    alu_a_r!(op_cp_a_d, cp_a, d);
    alu_a_r!(op_cp_a_e, cp_a, e);
    alu_a_r!(op_cp_a_h, cp_a, h);
    alu_a_r!(op_cp_a_l, cp_a, l);
    alu_a_hlp!(op_cp_a_hlp, cp_a);
    alu_a_r!(op_cp_a_a, cp_a, a);

    // Immediate variants (0xC6/0xCE/0xD6/0xDE/0xE6/0xEE/0xF6/0xFE)
    alu_a_d8!(op_add_a_d8, add_a);
    alu_a_d8!(op_adc_a_d8, add_a, carry);
    alu_a_d8!(op_sub_a_d8, sub_a);
    alu_a_d8!(op_sbc_a_d8, sub_a, carry);
    alu_a_d8!(op_and_a_d8, and_a);
    alu_a_d8!(op_xor_a_d8, xor_a);
    alu_a_d8!(op_or_a_d8, or_a);
    alu_a_d8!(op_cp_a_d8, cp_a);

    // Accumulator rotates: same shifters as the CB forms, but Z is forced
    // clear regardless of the result.
    pub fn op_rlca(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rlc(self.a);
        self.set_flag(FLAG_Z, false);
        Ok(0)
    }
    pub fn op_rla(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rl(self.a);
        self.set_flag(FLAG_Z, false);
        Ok(0)
    }
    pub fn op_rrca(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rrc(self.a);
        self.set_flag(FLAG_Z, false);
        Ok(0)
    }
    pub fn op_rra(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rr(self.a);
        self.set_flag(FLAG_Z, false);
        Ok(0)
    }
}
